use log::{debug, info};

use crate::config::Config;
use crate::page::{ResultRenderer, SearchView};
use crate::preview::query_from_location;
use crate::site::DocumentStore;
use crate::tantivy_util::{SearchError, SearchIndex, SearchResult};

/// Everything one page load needs: the site documents, the index built from
/// them and the configuration in effect when the page was opened.
pub struct PageContext {
    documents: DocumentStore,
    index: SearchIndex,
    config: Config,
}

impl PageContext {
    pub fn new(documents: DocumentStore, config: Config) -> Result<PageContext, SearchError> {
        let index = SearchIndex::build(&documents, &config)?;
        info!("search page ready with {} documents", documents.len());
        Ok(PageContext {
            documents,
            index,
            config,
        })
    }

    pub fn from_json(json: &str, config: Config) -> Result<PageContext, SearchError> {
        PageContext::new(DocumentStore::from_json(json)?, config)
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn num_docs(&self) -> u64 {
        self.index.num_docs()
    }

    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.index.search(query)
    }

    /// The page-load pass: read `q` from the location's query part, echo it
    /// into the page, search, render.
    pub fn run<V: SearchView + ?Sized>(&self, location_search: &str, view: &mut V) -> Result<(), SearchError> {
        let query = query_from_location(location_search);
        debug!("searching for {:?}", query);

        view.set_query_input(&query);
        view.set_query_label(&query);
        view.show_query_container();

        let results = self.search(&query)?;
        ResultRenderer::new(&self.documents, &self.config.base_url, self.config.content_preview_len)
            .render(&results, &query, view)
    }
}

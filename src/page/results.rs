use log::debug;

use crate::page::{Element, SearchStatus, SearchView, Tag};
use crate::preview::{locate, render, trim_page_text};
use crate::site::{Document, DocumentStore};
use crate::tantivy_util::{SearchError, SearchResult};

pub struct ResultRenderer<'a> {
    documents: &'a DocumentStore,
    base_url: &'a str,
    content_window: usize,
}

impl<'a> ResultRenderer<'a> {
    pub fn new(documents: &'a DocumentStore, base_url: &'a str, content_window: usize) -> Self {
        ResultRenderer {
            documents,
            base_url,
            content_window,
        }
    }

    /// Fills the results list in the order given. Entries are built before the
    /// list is touched, so an unknown reference leaves the page as it was.
    pub fn render<V: SearchView + ?Sized>(
        &self,
        results: &[SearchResult],
        query: &str,
        view: &mut V,
    ) -> Result<(), SearchError> {
        if results.is_empty() {
            view.hide_results();
            view.set_status(SearchStatus::No);
            return Ok(());
        }

        let entries = results
            .iter()
            .map(|result| self.entry(result, query))
            .collect::<Result<Vec<_>, _>>()?;

        let container = view.results_container();
        container.clear();
        for entry in entries {
            container.append_child(entry);
        }
        view.set_status(SearchStatus::Showing);
        debug!("rendered {} results for {:?}", results.len(), query);
        Ok(())
    }

    fn resolve(&self, result: &SearchResult) -> Result<&'a Document, SearchError> {
        self.documents
            .get(&result.reference)
            .ok_or_else(|| SearchError(format!("Unknown document reference {}", result.reference)))
    }

    fn entry(&self, result: &SearchResult, query: &str) -> Result<Element, SearchError> {
        let doc = self.resolve(result)?;
        let content_preview = locate(query, &doc.content, Some(self.content_window));
        let title_preview = locate(query, &doc.title, None);

        let href = format!("{}{}", self.base_url, trim_page_text(&doc.url));
        let mut link = Element::new(Tag::A).with_attribute("href", &href);
        render(&mut link, &title_preview.text, &title_preview.highlights)?;

        let mut small = Element::new(Tag::Small);
        render(&mut small, &content_preview.text, &content_preview.highlights)?;

        let mut heading = Element::new(Tag::H4);
        heading.append_child(link);
        let mut paragraph = Element::new(Tag::P);
        paragraph.append_child(small);

        let mut item = Element::new(Tag::Li);
        item.append_child(heading);
        item.append_child(paragraph);
        Ok(item)
    }
}

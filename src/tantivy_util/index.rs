use log::debug;
use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::{IndexRecordOption, Schema};
use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy, Score, TantivyDocument};

use crate::config::Config;
use crate::site::DocumentStore;
use crate::tantivy_util::{
    add_text_field, extract_text_from_owned_value, register_simple_tokenizer, DocumentFields,
    SearchError, SearchIndex, SearchResult, DOCUMENT_BUDGET_BYTES, RAW_TOKENIZER, SITE_TOKENIZER,
};

fn build_schema() -> (Schema, DocumentFields) {
    let mut builder = Schema::builder();
    let positions = IndexRecordOption::WithFreqsAndPositions;

    let id = add_text_field(true, false, &mut builder, RAW_TOKENIZER, "id", IndexRecordOption::Basic);
    let title = add_text_field(false, true, &mut builder, SITE_TOKENIZER, "title", positions);
    let category = add_text_field(false, true, &mut builder, SITE_TOKENIZER, "category", positions);
    let url = add_text_field(false, true, &mut builder, SITE_TOKENIZER, "url", positions);
    let content = add_text_field(false, true, &mut builder, SITE_TOKENIZER, "content", positions);

    (builder.build(), DocumentFields { id, title, category, url, content })
}

impl SearchIndex {
    /// Indexes every document of the store once; the index is never written to again.
    pub fn build(store: &DocumentStore, config: &Config) -> Result<SearchIndex, SearchError> {
        let (schema, fields) = build_schema();
        let index = Index::create_in_ram(schema);
        register_simple_tokenizer(config.text_limit, &index, SITE_TOKENIZER, &config.language)?;

        let mut writer: IndexWriter = index.writer_with_num_threads(1, DOCUMENT_BUDGET_BYTES)?;
        for doc in store.iter() {
            let mut tantivy_doc = TantivyDocument::new();
            tantivy_doc.add_text(fields.id, &doc.id);
            tantivy_doc.add_text(fields.title, &doc.title);
            tantivy_doc.add_text(fields.category, &doc.category);
            tantivy_doc.add_text(fields.url, &doc.url);
            tantivy_doc.add_text(fields.content, &doc.content);
            writer.add_document(tantivy_doc)?;
        }
        writer.commit()?;

        let reader: IndexReader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;
        reader.reload()?;
        debug!("indexed {} documents", store.len());

        Ok(SearchIndex {
            index,
            fields,
            reader,
            title_boost: config.title_boost,
        })
    }

    pub fn num_docs(&self) -> u64 {
        self.reader.searcher().num_docs()
    }

    /// Runs `query` against every indexed field and returns all hits, best first.
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let searcher = self.reader.searcher();
        let num_docs = searcher.num_docs() as usize;
        if num_docs == 0 || query.trim().is_empty() {
            return Ok(vec![]);
        }

        let mut query_parser = QueryParser::for_index(&self.index, self.fields.all());
        query_parser.set_field_boost(self.fields.title, self.title_boost as Score);

        let (query, errors) = query_parser.parse_query_lenient(query);
        if !errors.is_empty() {
            debug!("lenient query parse dropped parts of {:?}: {:?}", query, errors);
        }

        let top_docs = searcher.search(&query, &TopDocs::with_limit(num_docs))?;

        let mut results = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher.doc(doc_address)?;
            let reference = doc
                .get_first(self.fields.id)
                .and_then(extract_text_from_owned_value)
                .ok_or_else(|| SearchError("Indexed document has no id".to_string()))?;
            results.push(SearchResult {
                reference: reference.into_owned(),
                score,
            });
        }
        Ok(results)
    }
}

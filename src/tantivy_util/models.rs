use serde::Serialize;
use tantivy::schema::Field;
use tantivy::{Index, IndexReader};

pub struct SearchIndex {
    pub index: Index,
    pub fields: DocumentFields,
    pub(crate) reader: IndexReader,
    pub(crate) title_boost: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct DocumentFields {
    pub id: Field,
    pub title: Field,
    pub category: Field,
    pub url: Field,
    pub content: Field,
}

impl DocumentFields {
    pub fn all(&self) -> Vec<Field> {
        vec![self.id, self.title, self.category, self.url, self.content]
    }
}

/// A ranked hit, pointing back into the document store.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult {
    #[serde(rename = "ref")]
    pub reference: String,
    pub score: f32,
}

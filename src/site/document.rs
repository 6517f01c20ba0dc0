use std::collections::BTreeMap;
use std::fmt;
use log::warn;
use serde::de::Visitor;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::tantivy_util::SearchError;

/// One page of the site as emitted by the static site generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Document {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "a string or integer document id")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_owned())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SiteData {
    Keyed(BTreeMap<String, Document>),
    Listed(Vec<Document>),
}

/// The read-only document collection a page searches over, keyed by id.
#[derive(Debug, Default, Clone)]
pub struct DocumentStore {
    documents: BTreeMap<String, Document>,
}

impl DocumentStore {
    pub fn new(documents: impl IntoIterator<Item = Document>) -> DocumentStore {
        let mut store = DocumentStore::default();
        for doc in documents {
            if store.documents.contains_key(&doc.id) {
                warn!("duplicate document id {}, keeping the last one", doc.id);
            }
            store.documents.insert(doc.id.clone(), doc);
        }
        store
    }

    /// Accepts either an object keyed by id or a plain array of documents.
    pub fn from_json(json: &str) -> Result<DocumentStore, SearchError> {
        let documents = match serde_json::from_str(json)? {
            SiteData::Keyed(keyed) => keyed
                .into_iter()
                .map(|(key, doc)| {
                    if key != doc.id {
                        warn!("site data key {} differs from document id {}", key, doc.id);
                    }
                    doc
                })
                .collect::<Vec<_>>(),
            SiteData::Listed(listed) => listed,
        };
        Ok(DocumentStore::new(documents))
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

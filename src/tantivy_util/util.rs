use std::borrow::Cow;
use std::fmt;
use tantivy::schema::OwnedValue;
use tantivy::TantivyError;

pub fn extract_text_from_owned_value<'a>(value: &'a OwnedValue) -> Option<Cow<'a, str>> {
    match value {
        OwnedValue::Str(text) => Some(Cow::Borrowed(text)),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchError(pub String);

impl SearchError {
    pub fn from_err(message: &str, err: &str) -> SearchError {
        SearchError(format!("{}: {}", message, err))
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SearchError {}

impl From<TantivyError> for SearchError {
    fn from(err: TantivyError) -> Self {
        SearchError::from_err("Index failure", &err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::from_err("Malformed site data", &err.to_string())
    }
}

impl From<regex::Error> for SearchError {
    fn from(err: regex::Error) -> Self {
        SearchError::from_err("Failed to build highlight pattern", &err.to_string())
    }
}

pub const DOCUMENT_BUDGET_BYTES: usize = 50_000_000;

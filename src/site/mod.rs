mod document;

pub use self::document::Document;
pub use self::document::DocumentStore;

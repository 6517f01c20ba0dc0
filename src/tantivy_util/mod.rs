mod index;
mod models;
mod scheme_builder;
mod stemmer;
mod tokenizer;
mod util;

pub use self::models::DocumentFields;
pub use self::models::SearchIndex;
pub use self::models::SearchResult;
pub use self::scheme_builder::add_text_field;
pub use self::stemmer::create_stemmer;
pub use self::stemmer::LANGUAGES;
pub use self::tokenizer::register_simple_tokenizer;
pub use self::tokenizer::RAW_TOKENIZER;
pub use self::tokenizer::SITE_TOKENIZER;
pub use self::util::extract_text_from_owned_value;
pub use self::util::SearchError;
pub use self::util::DOCUMENT_BUDGET_BYTES;

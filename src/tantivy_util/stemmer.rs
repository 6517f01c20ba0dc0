use crate::tantivy_util::SearchError;
use phf::phf_map;
use tantivy::tokenizer::{Language, Stemmer};

/// Primary language subtags the site analyzer can stem.
pub static LANGUAGES: phf::Map<&'static str, Language> = phf_map! {
    "ar" => Language::Arabic,
    "da" => Language::Danish,
    "de" => Language::German,
    "el" => Language::Greek,
    "en" => Language::English,
    "es" => Language::Spanish,
    "fi" => Language::Finnish,
    "fr" => Language::French,
    "hu" => Language::Hungarian,
    "it" => Language::Italian,
    "nb" => Language::Norwegian,
    "nl" => Language::Dutch,
    "nn" => Language::Norwegian,
    "no" => Language::Norwegian,
    "pt" => Language::Portuguese,
    "ro" => Language::Romanian,
    "ru" => Language::Russian,
    "sv" => Language::Swedish,
    "ta" => Language::Tamil,
    "tr" => Language::Turkish,
};

/// Reduces a page language tag such as `en-GB` or `pt_BR` to its primary
/// subtag, lowercased.
fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

pub fn create_stemmer(tag: &str) -> Result<Stemmer, SearchError> {
    let primary = primary_subtag(tag);
    match LANGUAGES.get(primary.as_str()) {
        Some(language) => Ok(Stemmer::new(language.to_owned())),
        None => Err(SearchError(format!("No stemmer for site language {tag:?}"))),
    }
}

use tantivy::Index;
use tantivy::tokenizer::{AsciiFoldingFilter, LowerCaser, RemoveLongFilter, SimpleTokenizer, TextAnalyzer};
use crate::tantivy_util::SearchError;
use crate::tantivy_util::stemmer::create_stemmer;

pub const SITE_TOKENIZER: &str = "site";
pub const RAW_TOKENIZER: &str = "raw";

fn register_tokenizer(index: &Index, tokenizer_name: &str, text_analyzer: TextAnalyzer) {
    index.tokenizers().register(tokenizer_name, text_analyzer)
}

pub fn register_simple_tokenizer(
    text_limit: usize,
    index: &Index,
    tokenizer_name: &str,
    lang: &str,
) -> Result<(), SearchError> {
    let text_analyzer = TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(RemoveLongFilter::limit(text_limit))
        .filter(LowerCaser)
        .filter(AsciiFoldingFilter)
        .filter(create_stemmer(lang)?)
        .build();

    register_tokenizer(index, tokenizer_name, text_analyzer);
    Ok(())
}

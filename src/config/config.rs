use lazy_static::lazy_static;
use std::sync::RwLock;

lazy_static! {
    pub static ref CONFIG: RwLock<Config> = RwLock::new(Config::default());
}

pub const DEFAULT_CONTENT_PREVIEW_LEN: usize = 170;
pub const DEFAULT_TITLE_BOOST: f32 = 10.0;
pub const DEFAULT_TEXT_LIMIT: usize = 40;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub utf8_lenient: bool,
    /// Prefix joined to every document url when building result links.
    pub base_url: String,
    /// Page language tag (`en`, `en-GB`), matched on its primary subtag.
    pub language: String,
    /// Tokens longer than this are dropped from the index.
    pub text_limit: usize,
    pub title_boost: f32,
    pub content_preview_len: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            utf8_lenient: false,
            base_url: String::new(),
            language: "en".to_string(),
            text_limit: DEFAULT_TEXT_LIMIT,
            title_boost: DEFAULT_TITLE_BOOST,
            content_preview_len: DEFAULT_CONTENT_PREVIEW_LEN,
        }
    }
}

impl Config {
    pub fn update_utf8_lenient(&mut self, utf8_lenient: bool) {
        self.utf8_lenient = utf8_lenient;
    }

    pub fn update_base_url(&mut self, base_url: String) {
        self.base_url = base_url;
    }

    pub fn update_language(&mut self, language: String) {
        self.language = language;
    }
}

/// Snapshot of the process-wide configuration. A poisoned lock still holds
/// the last written value, so it is read through.
pub fn current() -> Config {
    match CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::text::stopwords::StopwordLanguage;

/// Configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Everything is optional:
/// with nothing set, the tokenizer uses the bundled dictionary and the
/// default stopword list. CLI flags override these values.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Extra jieba-format dictionary merged into the default one (TEXTSIM_USER_DICT)
    pub user_dict: Option<PathBuf>,
    /// Extra stopwords, one per line (TEXTSIM_STOPWORDS_FILE)
    pub stopwords_file: Option<PathBuf>,
    /// Bundled stopword lists to merge (TEXTSIM_STOPWORD_LANGUAGES, comma separated)
    pub stopword_languages: Vec<StopwordLanguage>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let stopword_languages = match env::var("TEXTSIM_STOPWORD_LANGUAGES") {
            Ok(raw) => parse_languages(&raw)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            user_dict: non_empty_path("TEXTSIM_USER_DICT"),
            stopwords_file: non_empty_path("TEXTSIM_STOPWORDS_FILE"),
            stopword_languages,
        })
    }
}

fn non_empty_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Parse a comma-separated language list such as "english, chinese".
pub fn parse_languages(raw: &str) -> Result<Vec<StopwordLanguage>> {
    let mut languages = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match StopwordLanguage::from_name(name) {
            Some(lang) => {
                if !languages.contains(&lang) {
                    languages.push(lang);
                }
            }
            None => anyhow::bail!(
                "Unknown stopword language '{name}' in TEXTSIM_STOPWORD_LANGUAGES.\n\
                 Supported: english, chinese."
            ),
        }
    }
    Ok(languages)
}

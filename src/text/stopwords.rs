// Stopword set: high-frequency, low-information words dropped during tokenization.
//
// The default list is small and Chinese-focused. It can be widened with the
// bundled `stop-words` language lists or a user file, but only while the set
// is being built. Once handed to a tokenizer it is read-only.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};
use tracing::debug;

/// Words dropped by default.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "的", "了", "在", "是", "我", "有", "和", "就", "不", "人", "都", "一", "一个", "上", "也",
    "很", "到", "说", "要", "去", "你", "会", "着", "没有", "看", "好", "自己", "这", "但", "而",
    "于", "之", "以",
];

/// Bundled stopword lists that can be merged into the default set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StopwordLanguage {
    English,
    Chinese,
}

impl StopwordLanguage {
    /// Parse a language name as it appears in configuration ("english", "chinese").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Some(Self::English),
            "chinese" | "zh" => Some(Self::Chinese),
            _ => None,
        }
    }

    fn words(self) -> Vec<String> {
        match self {
            Self::English => get(LANGUAGE::English),
            Self::Chinese => get(LANGUAGE::Chinese),
        }
    }
}

/// Immutable set of stopwords.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The default list and nothing else.
    pub fn new() -> Self {
        Self {
            words: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add a bundled language list.
    pub fn with_language(mut self, language: StopwordLanguage) -> Self {
        let words = language.words();
        debug!(?language, count = words.len(), "Merging bundled stopwords");
        self.words.extend(words);
        self
    }

    /// Add arbitrary words.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add words from a file, one per line. Blank lines and `#` comments are skipped.
    pub fn with_file(self, path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword file {}", path.display()))?;
        let words: Vec<String> = parse_stopword_lines(&contents);
        debug!(path = %path.display(), count = words.len(), "Loaded stopword file");
        Ok(self.with_words(words))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_stopword_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let set = StopwordSet::new();
        assert!(set.contains("的"));
        assert!(set.contains("一个"));
        assert!(set.contains("自己"));
        assert!(!set.contains("电影"));
        assert_eq!(set.len(), DEFAULT_STOPWORDS.len());
    }

    #[test]
    fn test_english_list_merges() {
        let set = StopwordSet::new().with_language(StopwordLanguage::English);
        assert!(set.contains("the"));
        assert!(set.contains("的"));
    }

    #[test]
    fn test_parse_stopword_lines() {
        let words = parse_stopword_lines("# comment\n论文\n\n  摘要  \n");
        assert_eq!(words, vec!["论文".to_string(), "摘要".to_string()]);
    }

    #[test]
    fn test_language_from_name() {
        assert_eq!(StopwordLanguage::from_name("English"), Some(StopwordLanguage::English));
        assert_eq!(StopwordLanguage::from_name(" zh "), Some(StopwordLanguage::Chinese));
        assert_eq!(StopwordLanguage::from_name("klingon"), None);
    }
}

// Tokenizer: raw text in, filtered content words out.
//
// Steps, in order:
//   1. strip everything that is not a letter, a digit (any numeric category,
//      so "²" and "₂" stay), an underscore, whitespace, or a CJK ideograph in
//      U+4E00..=U+9FA5. Combining marks are stripped.
//   2. collapse whitespace runs to a single space and trim
//   3. segment with the configured Segmenter
//   4. drop single-character tokens and stopwords
//
// Single-character words are dropped even when meaningful on their own.
// Fewer tokens means fewer accidental matches between unrelated documents.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::segmenter::JiebaSegmenter;
use super::stopwords::StopwordSet;
use super::traits::Segmenter;

static SYMBOLS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}_\s\x{4E00}-\x{9FA5}]").expect("valid symbol pattern")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Remove punctuation, symbols and combining marks, keeping letters, digits,
/// underscores, whitespace and CJK ideographs.
pub fn strip_symbols(text: &str) -> Cow<'_, str> {
    SYMBOLS.replace_all(text, "")
}

/// Collapse whitespace runs into one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Turns raw text into a sequence of content words.
///
/// Holds the segmentation dictionary and stopword set for its whole lifetime.
/// Neither is mutable through the tokenizer, so one instance can be shared
/// across threads and every call is a pure function of its input.
pub struct Tokenizer {
    segmenter: Box<dyn Segmenter>,
    stopwords: StopwordSet,
}

impl Tokenizer {
    pub fn new(segmenter: Box<dyn Segmenter>, stopwords: StopwordSet) -> Self {
        Self {
            segmenter,
            stopwords,
        }
    }

    /// Tokenize `text`. Empty, whitespace-only and symbol-only input yield an empty Vec.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let stripped = strip_symbols(text);
        let cleaned = collapse_whitespace(&stripped);
        if cleaned.is_empty() {
            return Vec::new();
        }

        self.segmenter
            .segment(&cleaned)
            .into_iter()
            .filter(|word| word.chars().count() > 1 && !self.stopwords.contains(word))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    /// Jieba with the default dictionary and the default stopword list.
    fn default() -> Self {
        Self::new(Box::new(JiebaSegmenter::new()), StopwordSet::new())
    }
}

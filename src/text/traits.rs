// Segmenter trait, the swap-ready abstraction over word segmentation.
//
// The tokenizer only needs word boundaries. The default implementation is
// dictionary-driven jieba, but any deterministic segmenter can stand in
// (tests use a whitespace splitter to pin exact token sequences).

/// Splits cleaned text into word tokens.
///
/// Implementations must be deterministic: identical input yields identical
/// output across runs, otherwise scores are not reproducible. Every character
/// of the input belongs to exactly one returned token.
pub trait Segmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Splits on whitespace only. Useful when input is already segmented.
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }
}

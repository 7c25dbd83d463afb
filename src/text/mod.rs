// Text processing: normalization, segmentation, and stopword filtering.

pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;
pub mod traits;

// Dictionary-driven word segmentation via jieba.
//
// Uses precise mode with the HMM disabled: the best route through the
// dictionary DAG, no probabilistic guessing of unknown words. Runs of ASCII
// letters and digits come out as single tokens, so mixed Chinese/Latin text
// such as "基于Python的算法" segments cleanly.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use jieba_rs::Jieba;
use tracing::info;

use super::traits::Segmenter;

/// Segmenter backed by the bundled jieba dictionary.
///
/// Build once at startup and share by reference. Loading a user dictionary
/// takes `&mut self`, so the dictionary can't change after it is handed to a
/// [`Tokenizer`](super::tokenizer::Tokenizer).
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// Load the default dictionary.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }

    /// Merge a jieba-format user dictionary (`word [freq] [tag]` per line).
    pub fn load_user_dict(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open user dictionary {}", path.display()))?;
        let mut reader = BufReader::new(file);
        self.jieba
            .load_dict(&mut reader)
            .with_context(|| format!("Invalid user dictionary {}", path.display()))?;
        info!(path = %path.display(), "Loaded user dictionary");
        Ok(())
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.jieba.cut(text, false)
    }
}

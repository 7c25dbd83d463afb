// Comparison pipeline: read both documents, tokenize, index, score, write.
//
// Everything fallible lives here or above. The text and scoring modules
// never fail on any string input.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::output;
use crate::scoring::index::build_index;
use crate::scoring::similarity::SimilarityReport;
use crate::text::segmenter::JiebaSegmenter;
use crate::text::stopwords::StopwordSet;
use crate::text::tokenizer::Tokenizer;

/// Result of comparing one candidate against one original.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Content words in the original
    pub original_tokens: u64,
    /// Distinct content words in the original
    pub original_vocabulary: usize,
    #[serde(flatten)]
    pub report: SimilarityReport,
}

/// The three paths a run operates on.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub original: PathBuf,
    pub candidate: PathBuf,
    pub output: PathBuf,
}

/// Build the tokenizer described by `config`.
pub fn build_tokenizer(config: &Config) -> Result<Tokenizer> {
    let mut segmenter = JiebaSegmenter::new();
    if let Some(path) = &config.user_dict {
        segmenter.load_user_dict(path)?;
    }

    let mut stopwords = StopwordSet::new();
    for &language in &config.stopword_languages {
        stopwords = stopwords.with_language(language);
    }
    if let Some(path) = &config.stopwords_file {
        stopwords = stopwords.with_file(path)?;
    }
    debug!(stopwords = stopwords.len(), "Tokenizer ready");

    Ok(Tokenizer::new(Box::new(segmenter), stopwords))
}

/// Tokenize both texts and score the candidate against the original.
pub fn compare_texts(tokenizer: &Tokenizer, original: &str, candidate: &str) -> Comparison {
    let original_words = tokenizer.tokenize(original);
    let index = build_index(&original_words);
    let candidate_words = tokenizer.tokenize(candidate);

    debug!(
        original_tokens = index.total,
        vocabulary = index.words.len(),
        candidate_tokens = candidate_words.len(),
        "Tokenized documents"
    );

    let report = index.score(&candidate_words);
    Comparison {
        original_tokens: index.total,
        original_vocabulary: index.words.len(),
        report,
    }
}

/// Read a file as UTF-8, dropping any malformed byte sequences.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(path = %path.display(), "Dropping invalid UTF-8 sequences");
            String::from_utf8_lossy(e.as_bytes()).replace(char::REPLACEMENT_CHARACTER, "")
        }
    };
    Ok(text)
}

/// Run one comparison end to end and write the formatted score.
///
/// Both inputs are read before anything is written, so a missing input never
/// leaves an output file behind.
pub fn run(tokenizer: &Tokenizer, paths: &RunPaths) -> Result<Comparison> {
    let original = read_text_lossy(&paths.original)?;
    let candidate = read_text_lossy(&paths.candidate)?;

    let comparison = compare_texts(tokenizer, &original, &candidate);
    output::write_score(&paths.output, comparison.report.score)?;

    info!(
        score = comparison.report.score,
        output = %paths.output.display(),
        "Wrote similarity score"
    );
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_lossy_drops_invalid_bytes() {
        let path = std::env::temp_dir().join(format!("textsim-lossy-{}.txt", std::process::id()));
        let mut bytes = "今天".as_bytes().to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFE]);
        bytes.extend_from_slice("电影".as_bytes());
        fs::write(&path, &bytes).unwrap();

        let text = read_text_lossy(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(text, "今天电影");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let result = read_text_lossy(Path::new("/nonexistent/textsim/original.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_run_writes_score_from_config_tokenizer() {
        let dir = std::env::temp_dir();
        let id = std::process::id();
        let paths = RunPaths {
            original: dir.join(format!("textsim-run-orig-{id}.txt")),
            candidate: dir.join(format!("textsim-run-cand-{id}.txt")),
            output: dir.join(format!("textsim-run-out-{id}.txt")),
        };
        fs::write(&paths.original, "今天天气晴朗，晚上去看电影").unwrap();
        fs::write(&paths.candidate, "晚上去看电影，今天天气晴朗").unwrap();

        let tokenizer = build_tokenizer(&Config::default()).unwrap();
        let comparison = run(&tokenizer, &paths).unwrap();
        let written = fs::read_to_string(&paths.output).unwrap();
        for path in [&paths.original, &paths.candidate, &paths.output] {
            let _ = fs::remove_file(path);
        }

        assert!(comparison.original_tokens > 0);
        assert_eq!(written, output::format_score(comparison.report.score));
    }

    #[test]
    fn test_compare_texts_empty_candidate() {
        let tokenizer = Tokenizer::default();
        let comparison = compare_texts(&tokenizer, "今天天气晴朗", "");
        assert_eq!(comparison.report.score, 0.0);
        assert_eq!(comparison.report.candidate_len, 0);
    }
}

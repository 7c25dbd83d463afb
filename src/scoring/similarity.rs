// Candidate-vs-original similarity: a blend of match ratio and cosine.
//
//   match_ratio = matched / candidate_len
//   cosine      = dot / (sqrt(orig_sq) * sqrt(cand_sq))
//   score       = cosine * 0.7 + match_ratio * 0.3
//
// Accumulation is per occurrence, not per distinct word. The candidate count
// is read right after incrementing it, so a word matched k times adds
// orig*1 + orig*2 + ... + orig*k to the dot product and 1² + 2² + ... + k²
// to the candidate sum of squares, and orig² k times to the original sum.
// This is not the textbook cosine over final frequencies. Scores depend on it,
// so it must stay this way.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::index::FrequencyIndex;

/// Weight of the cosine term in the final score.
pub const COSINE_WEIGHT: f64 = 0.7;
/// Weight of the match-ratio term in the final score.
pub const MATCH_RATIO_WEIGHT: f64 = 0.3;

/// Breakdown of a similarity computation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SimilarityReport {
    /// Candidate words found in the original's vocabulary (with repeats)
    pub matched: u64,
    /// Total candidate words
    pub candidate_len: u64,
    pub match_ratio: f64,
    pub cosine: f64,
    /// `cosine * 0.7 + match_ratio * 0.3`
    pub score: f64,
}

/// Score `candidate` against the original's vocabulary and frequencies.
pub fn score<S: AsRef<str>>(
    original_words: &HashSet<String>,
    original_freq: &HashMap<String, u64>,
    candidate: &[S],
) -> f64 {
    score_detailed(original_words, original_freq, candidate).score
}

/// Same as [`score`] but keeps the intermediate values.
pub fn score_detailed<S: AsRef<str>>(
    original_words: &HashSet<String>,
    original_freq: &HashMap<String, u64>,
    candidate: &[S],
) -> SimilarityReport {
    let candidate_len = candidate.len() as u64;
    if original_words.is_empty() || candidate.is_empty() {
        return SimilarityReport {
            candidate_len,
            ..Default::default()
        };
    }

    let mut matched: u64 = 0;
    // cand_sq grows like k³/3 for a word repeated k times, past u64 at a few million
    let mut dot: u128 = 0;
    let mut orig_sq: u128 = 0;
    let mut cand_sq: u128 = 0;
    let mut cand_freq: HashMap<&str, u64> = HashMap::new();

    for word in candidate {
        let word = word.as_ref();
        let count = cand_freq.entry(word).or_insert(0);
        *count += 1;
        let cand_count = u128::from(*count);

        if original_words.contains(word) {
            matched += 1;
            let orig_count = u128::from(original_freq.get(word).copied().unwrap_or(0));
            dot += orig_count * cand_count;
            orig_sq += orig_count * orig_count;
            cand_sq += cand_count * cand_count;
        }
    }

    if matched == 0 {
        return SimilarityReport {
            candidate_len,
            ..Default::default()
        };
    }

    let match_ratio = matched as f64 / candidate_len as f64;
    let cosine = if orig_sq == 0 || cand_sq == 0 {
        0.0
    } else {
        dot as f64 / ((orig_sq as f64).sqrt() * (cand_sq as f64).sqrt())
    };

    SimilarityReport {
        matched,
        candidate_len,
        match_ratio,
        cosine,
        score: cosine * COSINE_WEIGHT + match_ratio * MATCH_RATIO_WEIGHT,
    }
}

impl FrequencyIndex {
    /// Score a candidate word sequence against this index.
    pub fn score<S: AsRef<str>>(&self, candidate: &[S]) -> SimilarityReport {
        score_detailed(&self.words, &self.frequencies, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::index::build_index;

    #[test]
    fn test_identical_sequences_score_one() {
        let words = ["今天", "天气", "晚上", "电影"];
        let index = build_index(&words);
        let report = index.score(&words);
        assert_eq!(report.matched, 4);
        assert!((report.score - 1.0).abs() < 1e-9, "got {}", report.score);
    }

    #[test]
    fn test_disjoint_scores_zero() {
        let index = build_index(&["苹果", "香蕉", "橙子"]);
        let s = score(&index.words, &index.frequencies, &["汽车", "火车", "飞机"]);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let index = build_index(&["苹果"]);
        assert_eq!(index.score::<&str>(&[]).score, 0.0);

        let empty = build_index::<&str>(&[]);
        assert_eq!(empty.score(&["苹果"]).score, 0.0);
    }

    #[test]
    fn test_repeated_match_accumulates_per_occurrence() {
        // original: x once. candidate: x twice.
        // dot = 1*1 + 1*2 = 3, orig_sq = 1 + 1 = 2, cand_sq = 1 + 4 = 5
        let index = build_index(&["xx"]);
        let report = index.score(&["xx", "xx"]);
        let expected_cosine = 3.0 / (2f64.sqrt() * 5f64.sqrt());
        assert!((report.cosine - expected_cosine).abs() < 1e-12);
        assert_eq!(report.match_ratio, 1.0);
        assert!((report.score - (expected_cosine * 0.7 + 0.3)).abs() < 1e-12);
        // A final-frequency cosine would give exactly 1.0 here
        assert!(report.cosine < 0.99);
    }

    #[test]
    fn test_unmatched_words_only_affect_ratio() {
        let index = build_index(&["aa", "bb"]);
        let report = index.score(&["aa", "zz", "bb", "zz"]);
        assert_eq!(report.matched, 2);
        assert_eq!(report.candidate_len, 4);
        assert_eq!(report.match_ratio, 0.5);
        assert!((report.cosine - 1.0).abs() < 1e-12);
        assert!((report.score - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_long_repeated_run_does_not_overflow() {
        // 1² + 2² + ... + k² exceeds u64::MAX for k around 3.8 million
        let k: u128 = 4_000_000;
        let index = build_index(&["aa"]);
        let candidate = vec!["aa"; k as usize];
        let report = index.score(&candidate);

        let dot = k * (k + 1) / 2;
        let cand_sq = k * (k + 1) * (2 * k + 1) / 6;
        let expected_cosine = dot as f64 / ((k as f64).sqrt() * (cand_sq as f64).sqrt());
        assert_eq!(report.matched, 4_000_000);
        assert!((report.cosine - expected_cosine).abs() < 1e-9);
        // tends to sqrt(3)/2 as the run grows
        assert!(report.cosine > 0.86 && report.cosine < 0.87, "got {}", report.cosine);
    }

    #[test]
    fn test_missing_frequency_gives_zero_cosine() {
        let words: HashSet<String> = ["aa".to_string()].into();
        let freq: HashMap<String, u64> = HashMap::new();
        let report = score_detailed(&words, &freq, &["aa"]);
        assert_eq!(report.cosine, 0.0);
        assert!((report.score - 0.3).abs() < 1e-12);
    }
}

// Frequency index over a word sequence.
//
// Built once for the original document and held while candidates are scored.
// Only membership and count lookups are needed, so no ordering is kept.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// Distinct words, their occurrence counts, and the total word count.
///
/// Invariants: `frequencies` has exactly the keys in `words`, and its values
/// sum to `total`, which equals the length of the source sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyIndex {
    pub words: HashSet<String>,
    pub frequencies: HashMap<String, u64>,
    pub total: u64,
}

impl FrequencyIndex {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Occurrences of `word`, 0 if absent.
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }
}

/// Index a word sequence in a single pass.
pub fn build_index<S: AsRef<str>>(words: &[S]) -> FrequencyIndex {
    let mut index = FrequencyIndex::default();
    for word in words {
        let word = word.as_ref();
        if !index.words.contains(word) {
            index.words.insert(word.to_string());
        }
        *index.frequencies.entry(word.to_string()).or_insert(0) += 1;
        index.total += 1;
    }
    index
}

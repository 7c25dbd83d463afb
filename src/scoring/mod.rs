// Scoring: frequency index for the original, similarity for the candidate.

pub mod index;
pub mod similarity;

// Output formatting: the score file, JSON reports, and terminal display.

pub mod terminal;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::Comparison;

/// Format a score with exactly two decimal places, e.g. `0.83`.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

/// Write the formatted score to `path` (UTF-8, no trailing newline).
pub fn write_score(path: &Path, score: f64) -> Result<()> {
    fs::write(path, format_score(score))
        .with_context(|| format!("Failed to write score to {}", path.display()))
}

/// Render a comparison as pretty-printed JSON.
pub fn render_json(comparison: &Comparison) -> Result<String> {
    serde_json::to_string_pretty(comparison).context("Failed to serialize comparison")
}

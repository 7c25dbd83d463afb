// Colored terminal breakdown of a comparison.

use colored::Colorize;

use super::format_score;
use crate::pipeline::Comparison;

/// Display the score and the numbers behind it.
pub fn display_comparison(comparison: &Comparison) {
    let report = &comparison.report;

    println!("\n{}", "=== Similarity Report ===".bold());
    println!(
        "  Original:  {} words ({} distinct)",
        comparison.original_tokens, comparison.original_vocabulary
    );
    println!("  Candidate: {} words", report.candidate_len);
    println!(
        "  Matched:   {} ({:.1}%)",
        report.matched,
        report.match_ratio * 100.0
    );
    println!("  Cosine:    {:.4}", report.cosine);
    println!(
        "  Score:     {}  {}",
        colorize_score(report.score),
        band_label(report.score).dimmed()
    );
    println!();
}

/// Human-readable band for a score.
pub fn band_label(score: f64) -> &'static str {
    if score >= 0.8 {
        "very similar"
    } else if score >= 0.5 {
        "partially similar"
    } else if score > 0.0 {
        "mostly different"
    } else {
        "no overlap"
    }
}

fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format_score(score);
    if score >= 0.8 {
        text.red().bold()
    } else if score >= 0.5 {
        text.yellow()
    } else {
        text.green()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_label() {
        assert_eq!(band_label(0.95), "very similar");
        assert_eq!(band_label(0.6), "partially similar");
        assert_eq!(band_label(0.1), "mostly different");
        assert_eq!(band_label(0.0), "no overlap");
    }
}

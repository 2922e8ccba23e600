//! Shared formatting helpers for terminal output

use crate::models::Money;

/// Color a money amount red when negative, green when positive.
/// Only for standalone values; the escape codes break column alignment.
pub fn colored_amount(amount: Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount)
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", amount)
    } else {
        amount.to_string()
    }
}

/// Percentages render as whole numbers; the underlying values stay exact
pub fn percent(pct: f64) -> String {
    format!("{:.0}%", pct)
}

/// Bar chart cell for a 0.0..=1.0 ratio. Ratios outside the range clamp.
pub fn bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate with an ellipsis, padding shorter strings to the same width
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

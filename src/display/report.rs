//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers for the summary and the text bar chart.

use crate::models::Money;
use crate::reports::ChartBar;

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money, currency: &str) -> String {
    let text = amount.format_with_code(currency);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Create a simple bar representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the Revenue vs Expenses vs Profit chart as text
///
/// Bars are scaled to the largest positive value; a negative profit draws an
/// empty bar and keeps its signed label.
pub fn format_chart(bars: &[ChartBar], width: usize) -> String {
    let max_value = bars
        .iter()
        .map(|bar| bar.value.as_f64())
        .fold(0.0_f64, f64::max);

    let label_width = bars.iter().map(|bar| bar.label.len()).max().unwrap_or(0);

    let mut output = String::new();
    for bar in bars {
        output.push_str(&format!(
            "{:<label_width$}  {}  {}\n",
            bar.label,
            format_bar(bar.value.as_f64(), max_value, width),
            bar.text,
            label_width = label_width,
        ));
    }
    output
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = if title.len() >= width {
        0
    } else {
        (width - title.len()) / 2
    };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

//! Markdown response layouts.
//!
//! Every formatter is a pure function of the records it is given and writes
//! through [`std::fmt::Write`], so a rendering failure surfaces as
//! `Error::Format` at the handler boundary.

pub mod counselor;
pub mod realist;

use careerwise_catalog::RiskLevel;

/// Longest degree string shown in a comparison cell.
pub const DEGREE_CELL_WIDTH: usize = 20;

/// `₹` followed by the amount with comma thousands separators.
pub fn rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('₹');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Join at most `n` items with `", "`.
pub fn join_first<S: AsRef<str>>(items: &[S], n: usize) -> String {
    items
        .iter()
        .take(n)
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Clip to `width` characters, marking the cut with `...`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let clipped: String = text.chars().take(width).collect();
        format!("{}...", clipped)
    } else {
        text.to_string()
    }
}

/// Text up to the first period.
pub fn first_sentence(text: &str) -> &str {
    text.split('.').next().unwrap_or(text).trim()
}

/// Severity glyph for a risk level.
pub fn risk_glyph(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::VeryHigh => "🚨",
        RiskLevel::High => "⚠️",
        RiskLevel::Medium => "🟡",
        RiskLevel::Low => "🟢",
    }
}

/// Trailer appended when a fuzzy lookup had more than one candidate.
pub fn ambiguity_note(picked: &str, others: &[&str]) -> String {
    format!(
        "\n\n_Note: your question also matched {}. I answered for {}; name one of the others if you meant it._",
        others.join(", "),
        picked
    )
}

//! String formatting utilities for UI rendering.

use chrono::NaiveDate;
use uuid::Uuid;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format a short ID from a UUID (first 8 characters).
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// Format a money amount with the configured currency prefix.
pub fn format_money(amount: f64, currency: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency, -amount)
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

/// Format an optional money amount; `None` renders as "-".
pub fn format_optional_money(amount: Option<f64>, currency: &str) -> String {
    amount
        .map(|value| format_money(value, currency))
        .unwrap_or_else(|| "-".to_string())
}

/// Format a last-worn date.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "never".to_string())
}

/// Format a wear count with its noun.
pub fn format_wears(count: u32) -> String {
    if count == 1 {
        "1 wear".to_string()
    } else {
        format!("{} wears", count)
    }
}

/// Join a list of displayable labels with commas, or "-" when empty.
pub fn join_labels<T: AsRef<str>>(labels: &[T]) -> String {
    if labels.is_empty() {
        return "-".to_string();
    }
    labels
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

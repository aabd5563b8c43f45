// src/reporting/mod.rs
//! Output formatting for impact records, key files, and graph summaries.

pub mod console;
pub mod markdown;

/// Maximum items shown per rendered list.
pub const RENDER_LIMIT: usize = 10;

/// Splits `items` into the visible head and the count of omitted items.
#[must_use]
pub fn truncate<T>(items: &[T], limit: usize) -> (&[T], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

/// The marker appended after a truncated list.
#[must_use]
pub fn more_marker(omitted: usize) -> String {
    format!("... and {omitted} more")
}

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

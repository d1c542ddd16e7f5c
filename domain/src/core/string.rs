//! String utilities for the domain layer.

/// First `max_chars` characters of `s`, trailing whitespace removed, with a
/// literal ellipsis appended.
///
/// Counts characters rather than bytes, so multibyte input is never split.
/// The ellipsis is appended unconditionally, even when nothing was cut.
pub fn excerpt(s: &str, max_chars: usize) -> String {
    let head: String = s.chars().take(max_chars).collect();
    format!("{}...", head.trim_end())
}

//! Text helpers shared by the filter and sort pipeline

use std::cmp::Ordering;

/// Lexical comparison ignoring case, with case deciding exact ties
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Case-insensitive substring test
///
/// `lowered_needle` must already be lowercase.
pub fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

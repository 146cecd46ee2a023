//! Free-text search helpers for list endpoints

use regex::Regex;
use once_cell::sync::Lazy;

static TERM_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s,]+").unwrap()
});

/// Split a search query into lowercase terms.
///
/// Terms are separated by whitespace or commas; empty terms are dropped.
pub fn search_terms(query: &str) -> Vec<String> {
    TERM_SEPARATOR
        .split(&query.replace('\0', ""))
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Case-insensitive containment check used by in-memory filters
pub fn contains_ignore_case(haystack: &str, needle_lowercase: &str) -> bool {
    haystack.to_lowercase().contains(needle_lowercase)
}

// Text normalization — case folding, character filtering, word-set building.
//
// Normalization runs in a fixed order: lowercase the whole string first, then
// drop every character that is not an ASCII letter, ASCII digit, or ASCII
// whitespace. Lowercasing first matters for a handful of non-ASCII code points
// whose lowercase form is ASCII (the Kelvin sign U+212A becomes 'k').

use std::collections::HashSet;

/// Whitespace that separates fields and words: ASCII space, tab, LF, FF, CR.
///
/// Non-ASCII spaces (U+00A0, U+2003, ...) are not separators; normalization
/// removes them, gluing their neighbours together.
pub fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Lowercase `content` and strip everything outside `[a-z0-9]` and ASCII whitespace.
pub fn normalize(content: &str) -> String {
    content
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || is_separator(c))
        .collect()
}

/// Build the deduplicated word set for a piece of raw content.
///
/// Tokens are separated by runs of ASCII whitespace. Repeated words collapse
/// to one entry; the result never contains an empty string.
pub fn word_set(content: &str) -> HashSet<String> {
    normalize(content)
        .split(is_separator)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

//! Utilities for scanning lines.

use crate::consts::ESCAPE_MARKER;

/// Whether a character may be part of a name: a letter, digit or underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether a non-empty string consists only of word characters.
pub fn is_word(content: &str) -> bool {
    !content.is_empty() && content.chars().all(is_word_char)
}

/// Number of bytes in the run of word characters at the start of a string.
pub fn word_length(content: &str) -> usize {
    content
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(content.len())
}

/// Whether the character at a byte index is preceded by an escape marker.
pub fn is_escaped(content: &str, index: usize) -> bool {
    content[..index].ends_with(ESCAPE_MARKER)
}

/// Find the byte index of the first match of a pattern which is not escaped.
pub fn find_unescaped(content: &str, pattern: char) -> Option<usize> {
    content
        .match_indices(pattern)
        .map(|(i, _)| i)
        .find(|&i| !is_escaped(content, i))
}

/// Split leading whitespace from a line and measure its width.
///
/// Tabs count as `tab_width` columns and every other whitespace character as one.
pub fn split_indentation(content: &str, tab_width: usize) -> (usize, &str) {
    let rest = content.trim_start();
    let indentation = &content[..content.len() - rest.len()];

    let width = indentation
        .chars()
        .map(|c| if c == '\t' { tab_width } else { 1 })
        .sum();

    (width, rest)
}

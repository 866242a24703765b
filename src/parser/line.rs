//! Line classification for INI input

use super::entry::split_pair;
use super::section::section_name;

/// One classified input line
///
/// Borrowed slices point into the raw line the classifier was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty after trimming
    Blank,
    /// First character is `;` or `#`
    Comment,
    /// `[name]` header; carries the raw name between the brackets
    Section(&'a str),
    /// `key = value` pair, both sides trimmed
    Pair { key: &'a str, value: &'a str },
    /// Header without a closing `]`, or a pair line without `=`
    Malformed,
}

/// Classify one raw input line
///
/// Surrounding whitespace is insignificant and trimmed before the first
/// character decides the line kind. `;` and `#` only start comments at
/// the beginning of a line; elsewhere they are ordinary value text.
pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with(';') || line.starts_with('#') {
        return Line::Comment;
    }
    if line.starts_with('[') {
        return match section_name(line) {
            Some(name) => Line::Section(name),
            None => Line::Malformed,
        };
    }
    match split_pair(line) {
        Some((key, value)) => Line::Pair { key, value },
        None => Line::Malformed,
    }
}

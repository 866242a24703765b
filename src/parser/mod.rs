//! Line-oriented parser for INI text
//!
//! All input modes funnel into the same single-pass algorithm: the source
//! becomes a sequence of lines, each line is classified, and key-value
//! pairs accumulate under the active section. State lives entirely inside
//! one parse call, so independent parses never interfere.
//!
//! Malformed lines (a header missing its `]`, a pair missing its `=`) are
//! skipped without touching parser state; partial results beat total
//! failure for configuration input. Source-level failures are the only
//! errors: see [`IniError`].

mod entry;
mod line;
mod section;

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::IniError;
use crate::flatten::flatten;
use crate::types::{Config, DEFAULT_SECTION, DELIMITER, FlatConfig, Section};

use line::{Line, classify};

/// Parse INI text from a string
pub fn parse(text: &str) -> Result<Config, IniError> {
    let mut parser = LineParser::new();
    for raw in text.lines() {
        parser.feed(raw);
    }
    Ok(parser.finish())
}

/// Parse INI text from a reader
///
/// The reader is buffered internally. A read failure aborts the parse
/// and discards everything accumulated so far.
pub fn parse_reader<R: Read>(reader: R) -> Result<Config, IniError> {
    let mut parser = LineParser::new();
    for raw in BufReader::new(reader).lines() {
        parser.feed(&raw?);
    }
    Ok(parser.finish())
}

/// Parse the INI file at `path`
///
/// A file that cannot be opened is a real error (`IniError::Open`),
/// never a successful empty configuration. The handle is released before
/// this returns, on success and on failure alike.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Config, IniError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IniError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(file)
}

/// Like [`parse`], but flattened into `section.key` keys
pub fn parse_flat(text: &str) -> Result<FlatConfig, IniError> {
    Ok(flatten(&parse(text)?, DELIMITER))
}

/// Like [`parse_reader`], but flattened into `section.key` keys
pub fn parse_reader_flat<R: Read>(reader: R) -> Result<FlatConfig, IniError> {
    Ok(flatten(&parse_reader(reader)?, DELIMITER))
}

/// Like [`parse_file`], but flattened into `section.key` keys
pub fn parse_file_flat<P: AsRef<Path>>(path: P) -> Result<FlatConfig, IniError> {
    Ok(flatten(&parse_file(path)?, DELIMITER))
}

/// Per-call parse state: the sections accumulated so far and the name of
/// the active section
struct LineParser {
    config: Config,
    current: String,
}

impl LineParser {
    fn new() -> Self {
        Self {
            config: Config::new(),
            current: DEFAULT_SECTION.to_string(),
        }
    }

    /// Consume one raw line
    ///
    /// Blank, comment and malformed lines leave all state untouched. A
    /// header always binds a fresh empty section under its name, even
    /// when that name was seen before.
    fn feed(&mut self, raw: &str) {
        match classify(raw) {
            Line::Blank | Line::Comment | Line::Malformed => {}
            Line::Section(name) => {
                self.current = name.to_string();
                self.config
                    .sections
                    .insert(name.to_string(), Section::new());
            }
            Line::Pair { key, value } => {
                self.config
                    .sections
                    .entry(self.current.clone())
                    .or_default()
                    .insert(key.to_string(), value.to_string());
            }
        }
    }

    fn finish(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "foo=1\n\n; this is a comment\n[test]\nfoo=1\nbar=2\n[section1]\nfoo=bar\n";

    fn section(pairs: &[(&str, &str)]) -> Section {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_sample() {
        let conf = parse(SAMPLE).unwrap();
        assert_eq!(conf.sections.len(), 3);
        assert_eq!(conf.section("default"), Some(&section(&[("foo", "1")])));
        assert_eq!(
            conf.section("test"),
            Some(&section(&[("foo", "1"), ("bar", "2")]))
        );
        assert_eq!(conf.section("section1"), Some(&section(&[("foo", "bar")])));
    }

    #[test]
    fn test_empty_input_keeps_default_section() {
        let conf = parse("").unwrap();
        assert_eq!(conf, Config::new());
    }

    #[test]
    fn test_keys_before_any_header_land_in_default() {
        let conf = parse("a=1\nb=2\n").unwrap();
        assert_eq!(
            conf.section(DEFAULT_SECTION),
            Some(&section(&[("a", "1"), ("b", "2")]))
        );
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let conf = parse("[a]\nk=1\nk=2\n").unwrap();
        assert_eq!(conf.section("a"), Some(&section(&[("k", "2")])));
    }

    #[test]
    fn test_repeated_header_binds_fresh_section() {
        let conf = parse("[a]\nk=1\n[b]\nx=9\n[a]\nj=2\n").unwrap();
        assert_eq!(conf.section("a"), Some(&section(&[("j", "2")])));
        assert_eq!(conf.section("b"), Some(&section(&[("x", "9")])));
    }

    #[test]
    fn test_header_creates_section_even_without_keys() {
        let conf = parse("[empty]\n").unwrap();
        assert_eq!(conf.section("empty"), Some(&Section::new()));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let conf = parse("[good]\nk=1\nnot a pair\n[bad\nj=2\n").unwrap();
        assert_eq!(
            conf.section("good"),
            Some(&section(&[("k", "1"), ("j", "2")]))
        );
        assert!(!conf.sections.contains_key("bad"));
    }

    #[test]
    fn test_reader_matches_string() {
        let from_str = parse(SAMPLE).unwrap();
        let from_reader = parse_reader(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(from_str, from_reader);
    }

    #[test]
    fn test_parse_flat_sample() {
        let flat = parse_flat(SAMPLE).unwrap();
        assert_eq!(flat.len(), 4);
        assert_eq!(flat.get("test.bar").map(String::as_str), Some("2"));
        assert_eq!(flat.get("section1.foo").map(String::as_str), Some("bar"));
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let err = parse_file("/definitely/not/here.ini").unwrap_err();
        match err {
            IniError::Open { path, source } => {
                assert_eq!(path.to_str(), Some("/definitely/not/here.ini"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            IniError::Read(_) => panic!("expected Open"),
        }
    }
}

//! Parsed configuration types

use std::collections::HashMap;

use super::flat::{DELIMITER, FlatConfig};
use crate::flatten::flatten;

/// Name of the implicit section holding keys that appear before any
/// `[section]` header
pub const DEFAULT_SECTION: &str = "default";

/// A single section: key -> value, both trimmed
///
/// Keys are unique within a section; the last occurrence of a duplicate
/// key wins.
pub type Section = HashMap<String, String>;

/// Parsed INI configuration - section name -> key/value pairs
///
/// Every parse produces at least the `"default"` section, even when the
/// input is empty. Section insertion order is not preserved; compare
/// configurations by equality.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Config {
    pub sections: HashMap<String, Section>,
}

impl Config {
    /// Create a configuration holding only the empty default section
    pub fn new() -> Self {
        let mut sections = HashMap::new();
        sections.insert(DEFAULT_SECTION.to_string(), Section::new());
        Self { sections }
    }

    /// Get a section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Get a value by section name and key
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }

    /// Get a value by dotted path (e.g. `"db.user"`)
    ///
    /// The path is split on the first `.`; returns `None` when the path
    /// has no `.` or nothing is stored under it.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        let (section, key) = path.split_once(DELIMITER)?;
        self.get(section, key)
    }

    /// Flatten into a single-level mapping with `section.key` keys
    pub fn flatten(&self) -> FlatConfig {
        flatten(self, DELIMITER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

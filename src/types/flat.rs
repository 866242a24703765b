//! Flat projection constants and type

use std::collections::HashMap;

/// Delimiter joining section name and key in flattened keys
pub const DELIMITER: &str = ".";

/// Single-level projection of a configuration: `section.key` -> value
///
/// Produced fresh on every flatten call; it has no lifecycle of its own
/// and never feeds back into parsing.
pub type FlatConfig = HashMap<String, String>;

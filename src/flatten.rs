//! Flattening of parsed configurations

use crate::types::{Config, FlatConfig};

/// Flatten a configuration into a single-level mapping
///
/// Every (section, key) pair becomes exactly one entry keyed by
/// `section + delimiter + key`. Pure projection: the input is left
/// untouched and repeated calls yield equal maps. Sections without keys
/// contribute nothing.
pub fn flatten(config: &Config, delimiter: &str) -> FlatConfig {
    let mut flat = FlatConfig::new();
    for (name, section) in &config.sections {
        for (key, value) in section {
            flat.insert(format!("{name}{delimiter}{key}"), value.clone());
        }
    }
    flat
}

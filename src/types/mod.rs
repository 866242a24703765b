//! Core types for parsed INI data

mod config;
mod flat;

pub use config::{Config, DEFAULT_SECTION, Section};
pub use flat::{DELIMITER, FlatConfig};

//! inifig - INI configuration parsing with section flattening
//!
//! A minimal, read-only loader for INI-style configuration text. Input can
//! be a file path, any `io::Read` stream, or an in-memory string; the result
//! is a two-level section -> key -> value mapping, optionally flattened into
//! single `section.key` keys.
//!
//! # Features
//!
//! - One shared single-pass algorithm behind all three input modes
//! - Best-effort parsing: malformed lines are skipped, not fatal
//! - Implicit `default` section for keys before the first header
//! - Flattening into a single-level `section.key` mapping
//! - Optional `serde` feature for (de)serializing parsed configurations
//!
//! # Example
//!
//! File:
//!
//! ```text
//! foo=bar
//! [db]
//! user = myuser
//! password = mypassword
//! ```
//!
//! Code:
//!
//! ```rust
//! let conf = inifig::parse("foo=bar\n[db]\nuser = myuser\n").unwrap();
//! assert_eq!(conf.get("default", "foo"), Some("bar"));
//! assert_eq!(conf.get("db", "user"), Some("myuser"));
//!
//! let flat = conf.flatten();
//! assert_eq!(flat["db.user"], "myuser");
//! ```

pub mod error;
pub mod flatten;
pub mod parser;
pub mod types;

// Re-export common operations and types at crate root
pub use error::IniError;
pub use flatten::flatten;
pub use parser::{parse, parse_file, parse_file_flat, parse_flat, parse_reader, parse_reader_flat};
pub use types::{Config, DEFAULT_SECTION, DELIMITER, FlatConfig, Section};

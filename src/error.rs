//! Error types for inifig

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Inifig-specific error type
///
/// Malformed input lines are not errors: the parser skips them and keeps
/// going. Only source-level failures surface here, so an `Err` is always
/// distinct from a successfully parsed (possibly empty) configuration.
#[derive(Debug)]
pub enum IniError {
    /// The named file could not be opened
    Open { path: PathBuf, source: io::Error },
    /// The underlying stream failed while reading a line
    Read(io::Error),
}

impl fmt::Display for IniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniError::Open { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            IniError::Read(e) => write!(f, "read error: {}", e),
        }
    }
}

impl Error for IniError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IniError::Open { source, .. } => Some(source),
            IniError::Read(e) => Some(e),
        }
    }
}

impl From<io::Error> for IniError {
    fn from(e: io::Error) -> Self {
        IniError::Read(e)
    }
}

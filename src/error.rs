//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbview crate.
///
/// The navigation core itself never fails: abnormal runtime
/// conditions degrade to "hold the current camera state this tick."
/// Errors only arise on the configuration load/save surface.
#[derive(Debug)]
pub enum OrbviewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for OrbviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for OrbviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for OrbviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

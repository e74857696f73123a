//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbit-glide crate.
///
/// The camera state machine itself never fails; these cover the I/O and
/// windowing around it.
#[derive(Debug)]
pub enum GlideError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Bad command-line argument.
    InvalidArgument(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for GlideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidArgument(msg) => {
                write!(f, "invalid argument: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for GlideError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlideError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

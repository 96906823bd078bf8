//! Error types for world construction and tuning overrides.
//!
//! The per-frame physics never fails; only the edges that take outside data
//! (tuning files and JSON, body dimensions) return these.

use std::fmt;

/// Errors raised while building a world or loading tuning.
#[derive(Debug)]
pub enum ConfigError {
    /// Tuning file could not be read.
    Io(std::io::Error),
    /// Tuning JSON could not be parsed.
    Parse(serde_json::Error),
    /// A tuning constant is out of its allowed range.
    InvalidTuning { field: &'static str, value: f64 },
    /// The run band must satisfy `min < max`.
    InvalidRunBand { min: f64, max: f64 },
    /// Body width and height must be positive and finite.
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "tuning file unreadable: {}", e),
            ConfigError::Parse(e) => write!(f, "tuning JSON is malformed: {}", e),
            ConfigError::InvalidTuning { field, value } => {
                write!(f, "tuning value `{}` out of range: {}", field, value)
            }
            ConfigError::InvalidRunBand { min, max } => {
                write!(f, "run band must have min < max (got {} .. {})", min, max)
            }
            ConfigError::InvalidSize { width, height } => {
                write!(f, "body size must be positive (got {}x{})", width, height)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

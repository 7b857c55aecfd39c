//! Error types for storm configuration.
//!
//! The per-frame simulation path cannot fail. Everything that can go wrong
//! happens while a [`StormConfig`](crate::config::StormConfig) is parsed or
//! validated, before any state is built.

use std::fmt;

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
    /// A `[min, max]` range has `min > max`.
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    /// A value that must be strictly positive is zero, negative or NaN.
    NonPositive { field: &'static str, value: f32 },
    /// A value is infinite or NaN, directly or once scaled by the rain area.
    NonFinite { field: &'static str, value: f32 },
    /// A range reaches outside the values the field can hold.
    OutOfBounds {
        field: &'static str,
        min: f32,
        max: f32,
        lo: f32,
        hi: f32,
    },
    /// A count that must be at least one is zero.
    Empty { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Failed to parse storm config: {}", e),
            ConfigError::InvalidRange { field, min, max } => {
                write!(f, "Invalid range for `{}`: min {} is greater than max {}", field, min, max)
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "`{}` must be greater than zero (got {})", field, value)
            }
            ConfigError::NonFinite { field, value } => {
                write!(f, "`{}` must be a finite number (got {})", field, value)
            }
            ConfigError::OutOfBounds { field, min, max, lo, hi } => {
                write!(f, "Range for `{}` ({}..{}) must lie within {}..{}", field, min, max, lo, hi)
            }
            ConfigError::Empty { field } => write!(f, "`{}` must be at least 1", field),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

//! Error Types
//!
//! Frame operations are total and never fail. Only construction and
//! configuration loading return errors.

use thiserror::Error;

/// Errors raised when building a physics entity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// Width or height is zero, negative, or not finite.
    #[error("invalid entity dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: f32,
        /// Requested height
        height: f32,
    },

    /// Starting position is not finite.
    #[error("invalid entity position: ({x}, {y})")]
    InvalidPosition {
        /// Requested X
        x: f32,
        /// Requested Y
        y: f32,
    },

    /// Configuration rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while parsing or validating configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A value that must be strictly positive is not.
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive {
        /// Name of the offending field
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// A value that must be non-negative is not.
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative {
        /// Name of the offending field
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// JSON could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

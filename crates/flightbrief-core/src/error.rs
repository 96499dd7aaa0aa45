//! Error types for the flight brief library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all brief generation operations.
#[derive(Error, Debug)]
pub enum BriefError {
    /// A required field could not be interpreted
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// No template exists for the requested carrier code
    #[error("Unknown carrier '{code}' (supported: {supported})")]
    UnknownCarrier { code: String, supported: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BriefError {
        BriefError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BriefError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns the offending field path for input errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Extension trait attaching a field path to parse failures.
pub trait FieldResultExt<T> {
    /// Map any parse error to `BriefError::InvalidInput` for `field`.
    fn field_context(self, field: &str) -> Result<T>;

    /// Like [`FieldResultExt::field_context`] with a lazily built field path.
    fn field_context_lazy<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> FieldResultExt<T> for std::result::Result<T, E>
where
    E: fmt::Display,
{
    fn field_context(self, field: &str) -> Result<T> {
        self.map_err(|e| BriefError::invalid_input(field).with_reason(e.to_string()))
    }

    fn field_context_lazy<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BriefError::invalid_input(f()).with_reason(e.to_string()))
    }
}

/// Result type alias for brief operations
pub type Result<T> = std::result::Result<T, BriefError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = BriefError::invalid_input("fuel.taxi").with_reason("not a number");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'fuel.taxi': not a number"
        );
        assert_eq!(err.field(), Some("fuel.taxi"));
    }

    #[test]
    fn test_field_context_maps_parse_errors() {
        let parsed: std::result::Result<f64, _> = "abc".parse::<f64>();
        let err = parsed.field_context("times.taxi_out").unwrap_err();
        assert!(matches!(err, BriefError::InvalidInput { ref field, .. } if field == "times.taxi_out"));
    }

    #[test]
    fn test_field_context_lazy_builds_path() {
        let parsed: std::result::Result<i64, _> = "x".parse::<i64>();
        let err = parsed
            .field_context_lazy(|| format!("navlog.fix[{}].time_leg", 3))
            .unwrap_err();
        assert_eq!(err.field(), Some("navlog.fix[3].time_leg"));
    }

    #[test]
    fn test_unknown_carrier_display() {
        let err = BriefError::UnknownCarrier {
            code: "VOZ".to_string(),
            supported: "JST".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("VOZ"));
        assert!(msg.contains("JST"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: BriefError = json_err.into();
        assert!(matches!(err, BriefError::Serialization { .. }));
    }
}

//! Error types
//!
//! Rendering has no transient failures to retry: every error aborts the
//! page being rendered and the host decides what to do with the build.
//! Missing docstrings, annotations or defaults are not errors, they just
//! render nothing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for qdoc-render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Main error type for qdoc-render
#[derive(Debug, Error)]
pub enum RenderError {
    /// An object kind that no renderer handles
    #[error("Cannot document object of type {type_name}")]
    UnsupportedType { type_name: String },

    /// An operation called on the wrong kind of object
    #[error("Invalid usage: {0}")]
    InvalidUsage(String),

    /// Unrecognized display-name format
    #[error("Unknown format {0:?} for an object name")]
    UnknownNameFormat(String),

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Object not found by name
    #[error("Object not found: {0}")]
    ObjectNotFound(String),
}

impl RenderError {
    /// Create an unsupported-type error
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        RenderError::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create an invalid-usage error
    pub fn invalid_usage(message: impl Into<String>) -> Self {
        RenderError::InvalidUsage(message.into())
    }

    /// Create an unknown-name-format error
    pub fn unknown_name_format(value: impl Into<String>) -> Self {
        RenderError::UnknownNameFormat(value.into())
    }

    /// Whether the error comes from a bug in the host or library rather
    /// than from the documented data
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            RenderError::InvalidUsage(_) | RenderError::UnknownNameFormat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_culprit() {
        assert_eq!(
            RenderError::unsupported("alias").to_string(),
            "Cannot document object of type alias"
        );
        assert_eq!(
            RenderError::unknown_name_format("long").to_string(),
            "Unknown format \"long\" for an object name"
        );
    }

    #[test]
    fn test_usage_errors() {
        assert!(RenderError::invalid_usage("x").is_usage_error());
        assert!(!RenderError::unsupported("alias").is_usage_error());
    }
}

//! Error types for the medassist pipeline
//!
//! Splits failures along the lines the runtime cares about: startup
//! (bundle) errors are fatal before any request is served, input errors
//! are warnings, pipeline errors fail a single request.

use thiserror::Error;

/// Main error type for the assistant
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Bundle artifact could not be read from disk
    #[error("Bundle file error: {0}")]
    BundleIo(#[from] std::io::Error),

    /// Bundle artifact is not valid JSON or misses required fields
    #[error("Bundle parse error: {0}")]
    BundleParse(#[from] serde_json::Error),

    /// Bundle fields disagree with each other
    #[error("Inconsistent bundle: {0}")]
    BundleInconsistent(String),

    /// Caller submitted an empty symptom selection
    #[error("No symptoms selected")]
    EmptySelection,

    /// Feature vector length disagrees with the fitted transform
    #[error("Shape mismatch: expected {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    /// Classifier produced a label the encoder does not know
    #[error("Unknown class label {label}: encoder holds {classes} classes")]
    UnknownLabel { label: usize, classes: usize },

    /// Classifier produced a non-finite decision score
    #[error("Non-finite decision score for class {label}")]
    NonFiniteScore { label: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;

impl AssistantError {
    /// True for errors that are user-input problems rather than defects:
    /// the REPL surfaces these as warnings and keeps the session going.
    pub fn is_input_error(&self) -> bool {
        matches!(self, AssistantError::EmptySelection)
    }
}

/// Convert anyhow errors to AssistantError
impl From<anyhow::Error> for AssistantError {
    fn from(err: anyhow::Error) -> Self {
        AssistantError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AssistantError::ShapeMismatch {
            expected: 132,
            got: 17,
        };
        assert!(err.to_string().contains("132"));
        assert!(err.to_string().contains("17"));
    }

    #[test]
    fn test_unknown_label_error() {
        let err = AssistantError::UnknownLabel {
            label: 41,
            classes: 41,
        };
        assert!(err.to_string().contains("41"));
    }

    #[test]
    fn test_input_error_classification() {
        assert!(AssistantError::EmptySelection.is_input_error());
        assert!(!AssistantError::BundleInconsistent("x".into()).is_input_error());
        assert!(!AssistantError::ShapeMismatch { expected: 1, got: 2 }.is_input_error());
    }
}

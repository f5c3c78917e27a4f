//! errors.rs - Custom error types for the ttsfilter-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `ttsfilter-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FilterError {
    /// A nested-span delimiter pair that can never track depth correctly.
    #[error("Degenerate delimiter pair: open {open:?}, close {close:?}")]
    DegenerateDelimiters { open: char, close: char },

    /// The error a stage function returns to the pipeline. The pipeline
    /// records it as a failed stage and carries on with the previous text.
    #[error("Stage '{stage}' failed: {message}")]
    Stage { stage: &'static str, message: String },

    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("Invalid filter configuration: {0}")]
    Config(String),
}

impl FilterError {
    /// True for errors that indicate a programming or integration mistake
    /// rather than a problem with the text being filtered.
    pub fn is_precondition(&self) -> bool {
        matches!(self, FilterError::DegenerateDelimiters { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_delimiter_errors_are_preconditions() {
        assert!(FilterError::DegenerateDelimiters { open: '|', close: '|' }.is_precondition());
        let stage = FilterError::Stage {
            stage: "brackets",
            message: "boom".to_string(),
        };
        assert!(!stage.is_precondition());
        assert_eq!(stage.to_string(), "Stage 'brackets' failed: boom");
    }
}

//! # Error Types
//!
//! Structured error types for qho_core. Each variant carries enough context
//! for the GUI to show a useful status message without string-parsing.
//!
//! ## Example
//!
//! ```rust
//! use qho_core::errors::{QhoError, QhoResult};
//!
//! fn validate_points(points: usize) -> QhoResult<()> {
//!     if points < 2 {
//!         return Err(QhoError::invalid_input(
//!             "points",
//!             points.to_string(),
//!             "Grid needs at least two samples",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for qho_core operations
pub type QhoResult<T> = Result<T, QhoError>;

/// Structured error type for evaluation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QhoError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The normalization constant degenerated for a quantum number.
    ///
    /// The factor `1/sqrt(2^n n! sqrt(pi))` shrinks toward zero as n grows;
    /// past the supported range it underflows and the field would silently
    /// flatten. The evaluator refuses instead of returning garbage.
    #[error("Cannot normalize eigenfunction for n = {n}: {reason}")]
    Unnormalizable { n: u32, reason: String },

    /// The bundled report could not be materialized or launched
    #[error("Report error at '{path}': {reason}")]
    ReportError { path: String, reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl QhoError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QhoError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an Unnormalizable error
    pub fn unnormalizable(n: u32, reason: impl Into<String>) -> Self {
        QhoError::Unnormalizable {
            n,
            reason: reason.into(),
        }
    }

    /// Create a ReportError
    pub fn report_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        QhoError::ReportError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QhoError::InvalidInput { .. } => "INVALID_INPUT",
            QhoError::Unnormalizable { .. } => "UNNORMALIZABLE",
            QhoError::ReportError { .. } => "REPORT_ERROR",
            QhoError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = QhoError::invalid_input("n", "-3", "Quantum numbers are non-negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: QhoError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            QhoError::unnormalizable(200, "overflow").error_code(),
            "UNNORMALIZABLE"
        );
        assert_eq!(
            QhoError::report_error("report.md", "missing").error_code(),
            "REPORT_ERROR"
        );
    }
}

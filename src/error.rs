//! Error types for the resonance calculator.
//!
//! This module provides a unified error type [`ResonanceError`] that covers
//! input validation, sweep range checks and the numerical invariant checks
//! performed by the formulas themselves.

use thiserror::Error;

/// Result type alias using [`ResonanceError`].
pub type Result<T> = std::result::Result<T, ResonanceError>;

/// Unified error type for all resonance operations.
#[derive(Error, Debug)]
pub enum ResonanceError {
    // ============ Input Errors ============
    /// A named input field is missing, not a number, or not strictly positive
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Invalid sweep bounds or point count
    #[error("Invalid sweep range: {message}")]
    Range { message: String },

    // ============ Numerical Errors ============
    /// A result left its physical domain (overflow, underflow, degenerate input)
    #[error("Computation failed: {message}")]
    Computation { message: String },

    // ============ Output Errors ============
    /// Error writing the report
    #[cfg(feature = "cli")]
    #[error("Failed to write output: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Error encoding the report as JSON
    #[cfg(feature = "cli")]
    #[error("Failed to encode JSON: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl ResonanceError {
    /// Create a validation error for the named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a sweep range error
    pub fn range(message: impl Into<String>) -> Self {
        Self::Range {
            message: message.into(),
        }
    }

    /// Create a computation error
    pub fn computation(message: impl Into<String>) -> Self {
        Self::Computation {
            message: message.into(),
        }
    }

    /// Name of the offending input field, for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    pub fn is_computation(&self) -> bool {
        matches!(self, Self::Computation { .. })
    }
}

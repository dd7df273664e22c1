//! Error handling for the survey pipeline.
//!
//! Only call-level contract violations live here. Per-record data problems
//! (malformed titers, unknown category labels, missing fields) are not errors:
//! they become [`crate::models::collections::RejectionReason`] entries in the
//! normalization report and never abort a pipeline run.

use thiserror::Error;

/// Specialized error type for survey pipeline operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required column is absent from the input record batch
    #[error("Column not found: {column}")]
    ColumnNotFound {
        /// Name of the missing column
        column: String,
    },

    /// A column could not be read or adapted to the expected Arrow type
    #[error("Column '{column}' has an incompatible type, expected {expected}")]
    ColumnType {
        /// Name of the offending column
        column: String,
        /// Human-readable name of the expected type
        expected: &'static str,
    },

    /// An interaction tuple was built with an unsupported number of factors
    #[error("Invalid interaction arity {arity}: must be between 1 and 3")]
    InvalidArity {
        /// The offending factor count
        arity: usize,
    },

    /// An interaction state and its designated-positive tuple disagree on arity
    #[error(
        "Interaction arity mismatch: state carries {actual} factors, designated positive carries {expected}"
    )]
    InteractionArity {
        /// Arity of the designated-positive tuple
        expected: usize,
        /// Arity of the state being encoded
        actual: usize,
    },

    /// A diagnostic threshold outside the valid domain was supplied
    #[error("Invalid diagnostic threshold {threshold}: must be a finite, non-negative titer magnitude")]
    InvalidThreshold {
        /// The offending threshold value
        threshold: f64,
    },

    /// A continuous color ramp was requested without any observable input
    #[error("Prevalence ramp requires at least one color stop and one assessable cohort")]
    EmptyRamp,

    /// Error raised by the underlying Arrow kernels
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

/// Result type for survey pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

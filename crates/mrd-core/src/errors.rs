//! Cross-cutting error types for Meridian.
//!
//! This module defines errors that can originate from any crate in the system.
//! Domain-specific errors (e.g., `SchemaError`, `ConfigError`) are defined in
//! their respective crates.

use thiserror::Error;

/// Errors that can be raised by any Meridian crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Model lookup returned no result.
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A JSON-null sentinel was used in a position where it is not allowed.
    #[error("Invalid null sentinel '{sentinel}': {reason}")]
    InvalidNullSentinel { sentinel: String, reason: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

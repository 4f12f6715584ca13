//! Core error types for chronolane-core.
//!
//! Date errors are deliberately typed rather than coerced: a record with a
//! missing or malformed start date must be rejected at the parse boundary,
//! never silently defaulted into the layout.

use thiserror::Error;

/// Errors produced while parsing record dates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The record has no start date at all
    #[error("missing start date")]
    MissingStart,

    /// The date string could not be parsed
    #[error("unparsable date '{value}'")]
    Unparsable { value: String },

    /// Month component outside 1..=12
    #[error("month {month} out of range (expected 1-12)")]
    MonthOutOfRange { month: u32 },
}

/// Errors produced by the layout engine.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Date-related errors
    #[error("date error: {0}")]
    Date(#[from] DateError),

    /// Invalid layout configuration
    #[error("invalid configuration value for '{field}': {message}")]
    InvalidConfig { field: &'static str, message: String },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for LayoutError
pub type Result<T, E = LayoutError> = std::result::Result<T, E>;

//! Error types shared between the models and the CLI.
//!
//! Pricing itself never fails; `QuoteError` covers the edges around it:
//! turning caller text into a `QuoteRequest` and writing quotes out.
use std::io;

use thiserror::Error;

/// Unified error type shared by every crate in the workspace.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A date field could not be parsed as an ISO `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}' for {field}: {reason}")]
    InvalidDate {
        /// Request field the value was supplied for.
        field: &'static str,
        /// Raw value as received.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding a quote or health payload as JSON.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

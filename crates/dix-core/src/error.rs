//! Error types for dix-core.

use thiserror::Error;

/// Result type alias using dix-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for dix operations
#[derive(Error, Debug)]
pub enum Error {
    /// The service answered with a non-success status. `message` carries the
    /// body's `detail` field when one was present, a fallback otherwise.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connection refused, timeout, TLS, ...).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),

    /// A workflow is already in flight; triggers are rejected, not queued.
    #[error("A decision workflow is already running")]
    WorkflowBusy,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

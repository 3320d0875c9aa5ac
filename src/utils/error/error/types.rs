//! Error types for batch operations

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, SyncError>;

/// Main error type for batch operations
///
/// Only call-level failures live here. Per-key failures reported by the remote
/// store are recorded in the result array and never surface as a `SyncError`.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No endpoint configured for the operation
    #[error("No endpoints configured")]
    NoEndpoints,

    /// Transport-level failure of a single remote call
    #[error("Transport error on {endpoint}: {message}")]
    Transport {
        /// Endpoint the call was sent to
        endpoint: String,
        /// Transport error message
        message: String,
    },

    /// Remote call answered with a different number of items than it was sent
    #[error("Outcome count mismatch on {endpoint}: expected {expected}, got {actual}")]
    OutcomeMismatch {
        /// Endpoint the call was sent to
        endpoint: String,
        /// Number of keys in the batch
        expected: usize,
        /// Number of outcomes returned
        actual: usize,
    },

    /// A batch call kept failing after every allowed attempt
    #[error("Batch starting at offset {offset} failed after {attempts} attempts: {source}")]
    ActionFailed {
        /// Round-local offset of the batch
        offset: usize,
        /// Number of attempts made
        attempts: u32,
        /// Last call-level error
        #[source]
        source: Box<SyncError>,
    },

    /// The operation was cancelled
    #[error("Operation cancelled")]
    Cancelled,

    /// A worker task panicked
    #[error("Worker task panicked: {0}")]
    TaskPanicked(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

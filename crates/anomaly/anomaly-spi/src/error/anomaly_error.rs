//! Anomaly detection error types.

use thiserror::Error;

/// Anomaly detection errors.
///
/// Only construction and configuration can fail. Scoring itself degrades
/// instead of erroring.
#[derive(Debug, Error)]
pub enum AnomalyError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;

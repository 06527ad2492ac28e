//! Anomaly Detection Service Provider Interface
//!
//! Defines the streaming detector contract, error types and the models
//! produced while scoring a series.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::StreamingDetector;
pub use error::{AnomalyError, Result};
pub use model::{DetectorSnapshot, ScoreTrace, ScoredPoint};

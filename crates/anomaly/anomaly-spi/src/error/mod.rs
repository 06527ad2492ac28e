//! Errors raised while constructing or configuring detectors.

mod anomaly_error;

pub use anomaly_error::{AnomalyError, Result};

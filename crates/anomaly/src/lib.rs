//! # anomaly
//!
//! Online anomaly scoring for scalar time series.
//!
//! Each observation is scored by the negative log-likelihood of its
//! one-step-ahead forecast error under an autoregressive model that is
//! refitted incrementally on every step. What counts as anomalous is left to
//! the caller.
//!
//! ```rust,ignore
//! use anomaly::{ArAnomalyDetector, StreamingDetector};
//!
//! let mut detector = ArAnomalyDetector::with_seed(28, 0.05, 1)?;
//! let scores = detector.update_all(&closing_prices);
//! ```

pub use anomaly_facade::*;

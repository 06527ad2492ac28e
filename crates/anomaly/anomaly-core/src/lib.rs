//! Anomaly Detection Core
//!
//! Online autoregressive detector and the stages it is built from:
//!
//! 1. [`StreamState`] folds each observation into decayed mean and
//!    autocovariance estimates and keeps the history window.
//! 2. [`ToeplitzSolver`] builds the covariance matrix and inverts it.
//! 3. [`Forecaster`] turns the inverse into AR weights and a one-step forecast.
//! 4. [`ScoreEngine`] converts the forecast error into a likelihood score.
//!
//! [`ArAnomalyDetector`] runs the stages in that order for every value and
//! [`ScoreStream`] wraps any detector for push-based use.

mod detector;
mod forecaster;
mod monitoring;
mod score;
mod stream_state;
mod toeplitz;

pub use detector::ArAnomalyDetector;
pub use forecaster::Forecaster;
pub use monitoring::ScoreStream;
pub use score::ScoreEngine;
pub use stream_state::StreamState;
pub use toeplitz::ToeplitzSolver;

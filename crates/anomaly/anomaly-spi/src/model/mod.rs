//! Data models for anomaly detection.
//!
//! This module contains data structures produced while scoring a series.

mod score_trace;
mod scored_point;
mod snapshot;

pub use score_trace::ScoreTrace;
pub use scored_point::ScoredPoint;
pub use snapshot::DetectorSnapshot;

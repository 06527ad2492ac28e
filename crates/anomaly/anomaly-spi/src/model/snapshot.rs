//! Read-only view of a detector's internal estimates.

use serde::Serialize;

/// Point-in-time copy of a detector's running estimates, for diagnostics.
///
/// There is intentionally no way to rebuild a detector from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectorSnapshot {
    pub term: usize,
    pub decay: f64,
    pub mean: f64,
    pub variance: f64,
    /// Lag-0 through lag-(term-1) autocovariance estimates.
    pub autocorrelation: Vec<f64>,
    /// Valid history entries, oldest first.
    pub window: Vec<f64>,
    /// AR weights derived during the most recent update.
    pub weights: Vec<f64>,
    pub last_value: f64,
    pub last_score: f64,
    pub last_density: f64,
}

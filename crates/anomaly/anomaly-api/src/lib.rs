//! Anomaly Detection API
//!
//! Configuration types for anomaly detection.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{AnomalyError, DetectorSnapshot, Result, ScoreTrace, ScoredPoint};

// ============================================================================
// Detector Configuration
// ============================================================================

/// Autoregressive detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// AR model order and history window capacity (default: 28).
    pub term: usize,
    /// Exponential smoothing rate for mean, variance and autocorrelation (default: 0.05).
    ///
    /// Conventionally in (0, 1] but not checked.
    pub decay: f64,
    /// Seed for the initial autocorrelation coefficients. `None` seeds from
    /// the wall clock.
    pub seed: Option<u64>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            term: 28,
            decay: 0.05,
            seed: None,
        }
    }
}

impl DetectorConfig {
    pub fn new(term: usize, decay: f64) -> Self {
        Self {
            term,
            decay,
            seed: None,
        }
    }

    /// Fix the seed so the detector's output is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a configuration from a JSON document. Absent fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AnomalyError::Config(e.to_string()))
    }
}

// ============================================================================
// Stream Configuration
// ============================================================================

/// Score stream configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Maximum number of scored points retained. `None` keeps everything.
    pub capacity: Option<usize>,
}

impl StreamConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
        }
    }

    pub fn unbounded() -> Self {
        Self { capacity: None }
    }
}

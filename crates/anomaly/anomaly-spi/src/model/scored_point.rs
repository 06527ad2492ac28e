//! Single scored observation.

use serde::{Deserialize, Serialize};

/// An observation together with the score the detector assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredPoint {
    /// Position of the observation in the fed sequence, starting at 0.
    pub index: usize,
    pub value: f64,
    pub score: f64,
}

impl ScoredPoint {
    pub fn new(index: usize, value: f64, score: f64) -> Self {
        Self {
            index,
            value,
            score,
        }
    }
}

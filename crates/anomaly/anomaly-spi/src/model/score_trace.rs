//! Ordered collection of scored observations.

use serde::{Deserialize, Serialize};

use super::ScoredPoint;

/// Scores for a run of observations, in feed order.
///
/// Ranking helpers are descriptive. Deciding what counts as an anomaly is
/// left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTrace {
    pub points: Vec<ScoredPoint>,
}

impl ScoreTrace {
    /// Create a trace from already scored points.
    pub fn new(points: Vec<ScoredPoint>) -> Self {
        Self { points }
    }

    /// Scores in feed order.
    pub fn scores(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.score).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point with the largest score. The earliest one wins ties.
    pub fn peak(&self) -> Option<&ScoredPoint> {
        self.points.iter().reduce(|best, p| {
            if p.score.total_cmp(&best.score).is_gt() {
                p
            } else {
                best
            }
        })
    }

    /// The `n` highest scoring points, highest first.
    pub fn top_n(&self, n: usize) -> Vec<ScoredPoint> {
        let mut ranked = self.points.clone();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
        ranked.truncate(n);
        ranked
    }
}

impl FromIterator<ScoredPoint> for ScoreTrace {
    fn from_iter<I: IntoIterator<Item = ScoredPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

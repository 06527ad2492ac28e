//! Push-based scoring over a live series.

use std::collections::VecDeque;

use anomaly_api::StreamConfig;
use anomaly_spi::{ScoreTrace, ScoredPoint, StreamingDetector};

/// Feeds values to a detector and keeps the scored points.
///
/// Retention is optionally bounded; the oldest points are dropped first.
/// Indices keep counting across evictions and [`clear`](Self::clear).
pub struct ScoreStream<D: StreamingDetector> {
    detector: D,
    points: VecDeque<ScoredPoint>,
    capacity: Option<usize>,
    next_index: usize,
}

impl<D: StreamingDetector> ScoreStream<D> {
    /// Create a stream that keeps every scored point.
    pub fn new(detector: D) -> Self {
        Self {
            detector,
            points: VecDeque::new(),
            capacity: None,
            next_index: 0,
        }
    }

    /// Create a stream that keeps at most `capacity` points.
    pub fn with_capacity(detector: D, capacity: usize) -> Self {
        Self {
            detector,
            points: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
            next_index: 0,
        }
    }

    /// Create from configuration.
    pub fn from_config(detector: D, config: &StreamConfig) -> Self {
        match config.capacity {
            Some(capacity) => Self::with_capacity(detector, capacity),
            None => Self::new(detector),
        }
    }

    /// Score `value` and retain the result.
    pub fn push(&mut self, value: f64) -> ScoredPoint {
        let score = self.detector.update(value);
        let point = ScoredPoint::new(self.next_index, value, score);
        self.next_index += 1;

        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return point;
            }
            if self.points.len() == capacity {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
        point
    }

    /// Score every value in order.
    pub fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) -> Vec<ScoredPoint> {
        values.into_iter().map(|value| self.push(value)).collect()
    }

    /// Retained points, oldest first.
    pub fn points(&self) -> impl Iterator<Item = &ScoredPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of values pushed since creation.
    pub fn observed(&self) -> usize {
        self.next_index
    }

    /// Retained points as a trace.
    pub fn trace(&self) -> ScoreTrace {
        self.points.iter().copied().collect()
    }

    /// Get the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get mutable reference to the detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    pub fn into_inner(self) -> D {
        self.detector
    }

    /// Drop retained points. Detector state is kept.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

//! Streaming detector trait definition.

/// Online anomaly detector over a scalar series.
///
/// Implementations consume one observation at a time and return a score for
/// it. Larger scores mean the observation was less expected. Scoring never
/// fails: numerically undefined results degrade to the last valid score.
///
/// # Example
///
/// ```rust,ignore
/// use anomaly_spi::StreamingDetector;
///
/// fn loudest<D: StreamingDetector>(detector: &mut D, values: &[f64]) -> f64 {
///     detector
///         .update_all(values)
///         .into_iter()
///         .fold(f64::MIN, f64::max)
/// }
/// ```
pub trait StreamingDetector: Send {
    /// Feed one observation and return its anomaly score.
    fn update(&mut self, value: f64) -> f64;

    /// Model order, which is also the capacity of the history window.
    fn term(&self) -> usize;

    /// Exponential smoothing rate applied to the running estimates.
    fn decay(&self) -> f64;

    /// Score returned by the most recent successful computation.
    fn last_score(&self) -> f64;

    /// Feed every value in order and collect the scores.
    fn update_all(&mut self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&value| self.update(value)).collect()
    }
}

//! AR weights and one-step-ahead forecasts.

/// Derives per-lag AR weights from an inverted covariance matrix and uses
/// them to forecast the next observation.
#[derive(Debug, Clone)]
pub struct Forecaster {
    weights: Vec<f64>,
}

impl Forecaster {
    pub fn new(term: usize) -> Self {
        Self {
            weights: vec![0.0; term],
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// `weights = inverse * autocorrelation`, with `inverse` row-major.
    pub fn derive_weights(&mut self, inverse: &[f64], autocorrelation: &[f64]) {
        let n = self.weights.len();
        debug_assert_eq!(inverse.len(), n * n);
        debug_assert_eq!(autocorrelation.len(), n);

        for (k, weight) in self.weights.iter_mut().enumerate() {
            let row = &inverse[k * n..(k + 1) * n];
            *weight = 0.0;
            for (a, c) in row.iter().zip(autocorrelation) {
                *weight += a * c;
            }
        }
    }

    /// Forecast the next value from the valid window entries, oldest first.
    ///
    /// Only `window.len()` weights participate, so a window that is still
    /// filling contributes fewer terms.
    pub fn forecast(&self, mean: f64, window: &[f64]) -> f64 {
        let mut forecast = mean;
        for (w, x) in self.weights.iter().zip(window) {
            forecast += w * (x - mean);
        }
        forecast
    }
}

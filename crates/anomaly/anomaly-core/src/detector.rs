//! Online autoregressive anomaly detector.

use std::time::{SystemTime, UNIX_EPOCH};

use anomaly_api::DetectorConfig;
use anomaly_spi::{AnomalyError, DetectorSnapshot, Result, StreamingDetector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::forecaster::Forecaster;
use crate::score::ScoreEngine;
use crate::stream_state::StreamState;
use crate::toeplitz::ToeplitzSolver;

/// Scores each observation of a scalar series by how unlikely it is under an
/// AR model refitted on every step.
///
/// Each update folds the value into decayed mean and autocovariance
/// estimates, solves for AR weights through the inverse Toeplitz covariance
/// matrix, forecasts the value from the previous `term` observations and
/// returns the negative log-likelihood of the forecast error.
///
/// All buffers are allocated once at construction. An instance is meant for
/// a single caller; share it across threads only behind a lock.
///
/// # Example
///
/// ```rust,ignore
/// use anomaly_core::ArAnomalyDetector;
/// use anomaly_spi::StreamingDetector;
///
/// let mut detector = ArAnomalyDetector::with_seed(8, 0.05, 42)?;
/// for value in [10.0, 10.2, 9.9, 10.1, 35.0] {
///     let score = detector.update(value);
///     println!("{value}: {score:.3}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ArAnomalyDetector {
    state: StreamState,
    solver: ToeplitzSolver,
    forecaster: Forecaster,
    engine: ScoreEngine,
    last_value: f64,
}

impl ArAnomalyDetector {
    /// Create a detector whose initial coefficients are seeded from the wall clock.
    pub fn new(term: usize, decay: f64) -> Result<Self> {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::with_seed(term, decay, nanos)
    }

    /// Create a detector with reproducible initial coefficients.
    pub fn with_seed(term: usize, decay: f64, seed: u64) -> Result<Self> {
        Self::with_rng(term, decay, &mut StdRng::seed_from_u64(seed))
    }

    /// Create a detector drawing its initial autocorrelation coefficients
    /// uniformly from `[0, 1)` with `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`AnomalyError::InvalidParameter`] if `term` is zero. `decay`
    /// is taken as given.
    pub fn with_rng<R: Rng + ?Sized>(term: usize, decay: f64, rng: &mut R) -> Result<Self> {
        if term == 0 {
            return Err(AnomalyError::InvalidParameter {
                name: "term".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let seed: Vec<f64> = (0..term).map(|_| rng.gen::<f64>()).collect();
        debug!(term, decay, "created autoregressive detector");

        Ok(Self {
            state: StreamState::new(seed, decay),
            solver: ToeplitzSolver::new(term),
            forecaster: Forecaster::new(term),
            engine: ScoreEngine::new(),
            last_value: 0.0,
        })
    }

    /// Create from configuration.
    pub fn from_config(config: &DetectorConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::with_seed(config.term, config.decay, seed),
            None => Self::new(config.term, config.decay),
        }
    }

    pub fn mean(&self) -> f64 {
        self.state.mean()
    }

    pub fn variance(&self) -> f64 {
        self.state.variance()
    }

    pub fn autocorrelation(&self) -> &[f64] {
        self.state.autocorrelation()
    }

    /// Most recent observations, oldest first.
    pub fn window(&self) -> &[f64] {
        self.state.window()
    }

    pub fn window_len(&self) -> usize {
        self.state.window_len()
    }

    /// AR weights from the most recent update.
    pub fn weights(&self) -> &[f64] {
        self.forecaster.weights()
    }

    pub fn last_value(&self) -> f64 {
        self.last_value
    }

    pub fn last_density(&self) -> f64 {
        self.engine.last_density()
    }

    pub fn snapshot(&self) -> DetectorSnapshot {
        DetectorSnapshot {
            term: self.state.term(),
            decay: self.state.decay(),
            mean: self.state.mean(),
            variance: self.state.variance(),
            autocorrelation: self.state.autocorrelation().to_vec(),
            window: self.state.window().to_vec(),
            weights: self.forecaster.weights().to_vec(),
            last_value: self.last_value,
            last_score: self.engine.last_score(),
            last_density: self.engine.last_density(),
        }
    }
}

impl StreamingDetector for ArAnomalyDetector {
    fn update(&mut self, value: f64) -> f64 {
        if value == self.last_value {
            return self.engine.last_score();
        }

        self.state.observe(value);

        let inverse = self.solver.solve(self.state.autocorrelation());
        self.forecaster.derive_weights(inverse, self.state.autocorrelation());
        let forecast = self.forecaster.forecast(self.state.mean(), self.state.window());

        self.state.observe_error(value - forecast);
        self.state.push(value);
        self.last_value = value;

        self.engine.evaluate(value, forecast, self.state.variance())
    }

    fn term(&self) -> usize {
        self.state.term()
    }

    fn decay(&self) -> f64 {
        self.state.decay()
    }

    fn last_score(&self) -> f64 {
        self.engine.last_score()
    }
}

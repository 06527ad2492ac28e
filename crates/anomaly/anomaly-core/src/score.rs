//! Gaussian likelihood scoring with sticky fallbacks.

use std::f64::consts::PI;

use tracing::warn;

/// Turns a forecast error into a negative log-likelihood score.
///
/// Keeps the last valid density and score so that a numerically undefined
/// step repeats the previous answer instead of surfacing NaN.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    last_density: f64,
    last_score: f64,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_density(&self) -> f64 {
        self.last_density
    }

    pub fn last_score(&self) -> f64 {
        self.last_score
    }

    /// Density of `value` under `N(forecast, variance)`.
    ///
    /// Zero variance yields a density of 0. A NaN result is replaced by the
    /// last valid density.
    pub fn density(&mut self, value: f64, forecast: f64, variance: f64) -> f64 {
        if variance == 0.0 {
            return 0.0;
        }

        let error = value - forecast;
        let density = (-0.5 * error * error / variance).exp() / ((2.0 * PI).sqrt() * variance.sqrt());
        if density.is_nan() {
            warn!(
                value,
                forecast,
                variance,
                fallback = self.last_density,
                "density computation produced NaN, reusing last density"
            );
            return self.last_density;
        }

        self.last_density = density;
        density
    }

    /// Negative log of `density`, or 0 when the density is not positive.
    pub fn score(density: f64) -> f64 {
        if density <= 0.0 {
            0.0
        } else {
            -density.ln()
        }
    }

    /// Record `score` and return it, or return the last valid score if it is NaN.
    pub fn settle(&mut self, score: f64) -> f64 {
        if score.is_nan() {
            return self.last_score;
        }
        self.last_score = score;
        score
    }

    /// Density, score and fallback for one observation.
    pub fn evaluate(&mut self, value: f64, forecast: f64, variance: f64) -> f64 {
        let density = self.density(value, forecast, variance);
        self.settle(Self::score(density))
    }
}

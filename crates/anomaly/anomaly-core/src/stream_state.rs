//! Decayed running statistics and the bounded history window.

/// Running estimates for one series: decayed mean and variance, the
/// autocovariance vector and the most recent raw observations.
#[derive(Debug, Clone)]
pub struct StreamState {
    decay: f64,
    mean: f64,
    variance: f64,
    autocorrelation: Vec<f64>,
    /// Fixed capacity `term`. Entries past `window_len` are zero.
    window: Vec<f64>,
    window_len: usize,
}

impl StreamState {
    /// Create an empty state whose autocorrelation starts at `seed`.
    ///
    /// The length of `seed` fixes the model order.
    pub fn new(seed: Vec<f64>, decay: f64) -> Self {
        let term = seed.len();
        Self {
            decay,
            mean: 0.0,
            variance: 0.0,
            autocorrelation: seed,
            window: vec![0.0; term],
            window_len: 0,
        }
    }

    pub fn term(&self) -> usize {
        self.window.len()
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn autocorrelation(&self) -> &[f64] {
        &self.autocorrelation
    }

    /// Valid history entries, oldest first.
    pub fn window(&self) -> &[f64] {
        &self.window[..self.window_len]
    }

    pub fn window_len(&self) -> usize {
        self.window_len
    }

    pub fn is_full(&self) -> bool {
        self.window_len == self.term()
    }

    /// Fold `x` into the mean, then into every autocovariance lag that has a
    /// partner in the window.
    ///
    /// Lag `j` pairs `x` with the entry `j` steps before the newest one.
    /// While the window is filling, a negative position wraps around once;
    /// lags that still have no partner keep their previous value.
    pub fn observe(&mut self, x: f64) {
        let r = self.decay;
        self.mean = (1.0 - r) * self.mean + r * x;

        let len = self.window_len as isize;
        if len == 0 {
            return;
        }
        for (lag, coefficient) in self.autocorrelation.iter_mut().enumerate() {
            let mut t = (len - 1) - lag as isize;
            if t < 0 {
                t += len;
            }
            if t < 0 {
                continue;
            }
            let partner = self.window[t as usize];
            *coefficient = (1.0 - r) * *coefficient + r * (x - self.mean) * (partner - self.mean);
        }
    }

    /// Fold a squared forecast error into the variance.
    pub fn observe_error(&mut self, error: f64) {
        let r = self.decay;
        self.variance = (1.0 - r) * self.variance + r * error * error;
    }

    /// Append `x`, evicting the oldest entry when the window is at capacity.
    pub fn push(&mut self, x: f64) {
        if self.is_full() {
            let last = self.term() - 1;
            self.window.copy_within(1.., 0);
            self.window[last] = 0.0;
            self.window_len -= 1;
        }
        self.window[self.window_len] = x;
        self.window_len += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(term: usize, decay: f64) -> StreamState {
        StreamState::new(vec![0.5; term], decay)
    }

    #[test]
    fn test_new_state_is_empty() {
        let s = state(4, 0.1);
        assert_eq!(s.term(), 4);
        assert_eq!(s.window_len(), 0);
        assert!(s.window().is_empty());
        assert_eq!(s.mean(), 0.0);
        assert_eq!(s.variance(), 0.0);
    }

    #[test]
    fn test_mean_update() {
        let mut s = state(3, 0.25);
        s.observe(8.0);
        assert_eq!(s.mean(), 2.0);
        s.observe(4.0);
        assert_eq!(s.mean(), 0.75 * 2.0 + 0.25 * 4.0);
    }

    #[test]
    fn test_first_observation_skips_every_lag() {
        let mut s = StreamState::new(vec![0.1, 0.2, 0.3], 0.5);
        s.observe(10.0);
        assert_eq!(s.autocorrelation(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_partial_window_wraps_once() {
        let mut s = StreamState::new(vec![1.0, 1.0, 1.0, 1.0], 0.5);
        s.push(2.0);
        s.push(4.0);
        s.observe(6.0);

        let mean = 3.0;
        // lag 0 -> index 1, lag 1 -> index 0, lag 2 -> wraps to 1, lag 3 -> wraps to 0
        let expected = |partner: f64| 0.5 * 1.0 + 0.5 * (6.0 - mean) * (partner - mean);
        assert_eq!(s.autocorrelation()[0], expected(4.0));
        assert_eq!(s.autocorrelation()[1], expected(2.0));
        assert_eq!(s.autocorrelation()[2], expected(4.0));
        assert_eq!(s.autocorrelation()[3], expected(2.0));
    }

    #[test]
    fn test_lag_without_partner_is_skipped() {
        let mut s = StreamState::new(vec![1.0, 1.0, 1.0, 1.0], 0.5);
        s.push(2.0);
        s.observe(3.0);
        // lag 0 and lag 1 (wrapped) pair with index 0; lags 2 and 3 stay put
        assert_ne!(s.autocorrelation()[0], 1.0);
        assert_ne!(s.autocorrelation()[1], 1.0);
        assert_eq!(s.autocorrelation()[2], 1.0);
        assert_eq!(s.autocorrelation()[3], 1.0);
    }

    #[test]
    fn test_observe_does_not_touch_window() {
        let mut s = state(3, 0.5);
        s.push(1.0);
        s.observe(9.0);
        assert_eq!(s.window(), &[1.0]);
    }

    #[test]
    fn test_variance_update() {
        let mut s = state(2, 0.5);
        s.observe_error(4.0);
        assert_eq!(s.variance(), 8.0);
        s.observe_error(-2.0);
        assert_eq!(s.variance(), 6.0);
    }

    #[test]
    fn test_push_fills_then_slides() {
        let mut s = state(3, 0.5);
        for x in [1.0, 2.0, 3.0] {
            s.push(x);
        }
        assert!(s.is_full());
        assert_eq!(s.window(), &[1.0, 2.0, 3.0]);

        s.push(4.0);
        assert_eq!(s.window_len(), 3);
        assert_eq!(s.window(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_window_never_exceeds_term() {
        let mut s = state(2, 0.5);
        for i in 0..50 {
            s.push(i as f64);
            assert!(s.window_len() <= 2);
        }
        assert_eq!(s.window(), &[48.0, 49.0]);
    }

    #[test]
    fn test_term_one_window() {
        let mut s = state(1, 0.5);
        s.push(1.0);
        s.push(2.0);
        assert_eq!(s.window(), &[2.0]);
    }
}

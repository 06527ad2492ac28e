//! Symmetric Toeplitz covariance matrix and its in-place inverse.
//!
//! Both matrices are row-major `size * size` buffers owned by the solver and
//! rebuilt from scratch on every call.

/// Builds the autocovariance matrix of an AR model and inverts it by
/// Gauss-Jordan elimination.
///
/// Elimination runs without pivoting. A zero on the diagonal is not
/// detected: the division produces infinities or NaN which flow through the
/// inverse and are absorbed later by the score fallback.
#[derive(Debug, Clone)]
pub struct ToeplitzSolver {
    size: usize,
    matrix: Vec<f64>,
    inverse: Vec<f64>,
}

impl ToeplitzSolver {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            matrix: vec![0.0; size * size],
            inverse: vec![0.0; size * size],
        }
    }

    /// Working matrix. Holds the covariance matrix after [`build`](Self::build)
    /// and its reduced form after [`invert`](Self::invert).
    pub fn matrix(&self) -> &[f64] {
        &self.matrix
    }

    /// Inverse produced by the last [`invert`](Self::invert).
    pub fn inverse(&self) -> &[f64] {
        &self.inverse
    }

    /// Fill the working matrix with `autocorrelation[|i - j|]` at (i, j).
    pub fn build(&mut self, autocorrelation: &[f64]) {
        let n = self.size;
        debug_assert_eq!(autocorrelation.len(), n);

        self.matrix.fill(0.0);
        for j in 0..n {
            for i in j..n {
                let v = autocorrelation[i - j];
                self.matrix[j * n + i] = v;
                self.matrix[i * n + j] = v;
            }
        }
    }

    /// Reduce the working matrix to the identity, applying the same row
    /// operations to an identity matrix which then holds the inverse.
    pub fn invert(&mut self) {
        let n = self.size;
        let a = &mut self.matrix;
        let inv = &mut self.inverse;

        inv.fill(0.0);
        for i in 0..n {
            inv[i * n + i] = 1.0;
        }

        for i in 0..n {
            let scale = 1.0 / a[i * n + i];
            for k in 0..n {
                a[i * n + k] *= scale;
                inv[i * n + k] *= scale;
            }

            for j in 0..n {
                if j == i {
                    continue;
                }
                let factor = a[j * n + i];
                for k in 0..n {
                    a[j * n + k] -= a[i * n + k] * factor;
                    inv[j * n + k] -= inv[i * n + k] * factor;
                }
            }
        }
    }

    /// Build from `autocorrelation` and invert in one step.
    pub fn solve(&mut self, autocorrelation: &[f64]) -> &[f64] {
        self.build(autocorrelation);
        self.invert();
        &self.inverse
    }
}

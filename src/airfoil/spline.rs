//! Natural cubic spline interpolation.
//!
//! Used to resample airfoil loops: the loop is parameterized by arc length
//! and each coordinate is fitted with a natural cubic spline, so resampled
//! points stay on a smooth curve through the input coordinates.

use faer::{Mat, linalg::solvers::Solve};
use thiserror::Error;

/// Error type for spline construction and evaluation.
#[derive(Debug, Error)]
pub enum SplineError {
    /// Fewer than 3 knots.
    #[error("Spline needs at least 3 knots, got {0}")]
    TooFewKnots(usize),

    /// Knot parameters must be strictly increasing.
    #[error("Knot parameters must be strictly increasing (knots {0} and {1})")]
    NonMonotonicKnots(usize, usize),

    /// Knot and value slices have different lengths.
    #[error("Knot/value length mismatch: {knots} knots, {values} values")]
    LengthMismatch { knots: usize, values: usize },
}

/// A natural cubic spline y(t) through a set of knots.
///
/// Second derivatives vanish at both end knots. The second-derivative
/// system is solved with a dense LU factorization.
#[derive(Clone, Debug)]
pub struct CubicSpline {
    t: Vec<f64>,
    y: Vec<f64>,
    /// Second derivatives at the knots.
    y2: Vec<f64>,
}

impl CubicSpline {
    /// Fit a natural cubic spline through `(t[i], y[i])`.
    pub fn fit(t: &[f64], y: &[f64]) -> Result<Self, SplineError> {
        if t.len() != y.len() {
            return Err(SplineError::LengthMismatch {
                knots: t.len(),
                values: y.len(),
            });
        }
        if t.len() < 3 {
            return Err(SplineError::TooFewKnots(t.len()));
        }
        for i in 1..t.len() {
            if t[i] <= t[i - 1] {
                return Err(SplineError::NonMonotonicKnots(i - 1, i));
            }
        }

        let n = t.len();

        // Tridiagonal system for the interior second derivatives, with
        // natural end conditions y''(t0) = y''(tn) = 0.
        let mut a = Mat::zeros(n, n);
        let mut rhs = Mat::zeros(n, 1);

        a[(0, 0)] = 1.0;
        a[(n - 1, n - 1)] = 1.0;
        for i in 1..n - 1 {
            let h_lo = t[i] - t[i - 1];
            let h_hi = t[i + 1] - t[i];
            a[(i, i - 1)] = h_lo / 6.0;
            a[(i, i)] = (h_lo + h_hi) / 3.0;
            a[(i, i + 1)] = h_hi / 6.0;
            rhs[(i, 0)] = (y[i + 1] - y[i]) / h_hi - (y[i] - y[i - 1]) / h_lo;
        }

        let lu = a.as_ref().full_piv_lu();
        let sol = lu.solve(&rhs);
        let y2 = (0..n).map(|i| sol[(i, 0)]).collect();

        Ok(Self {
            t: t.to_vec(),
            y: y.to_vec(),
            y2,
        })
    }

    /// Index of the interval containing `t` (clamped to the knot range).
    fn interval(&self, t: f64) -> usize {
        let n = self.t.len();
        if t <= self.t[0] {
            return 0;
        }
        if t >= self.t[n - 1] {
            return n - 2;
        }
        // Binary search for the left knot
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.t[mid] <= t {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Evaluate the spline at `t`.
    pub fn eval(&self, t: f64) -> f64 {
        let i = self.interval(t);
        let h = self.t[i + 1] - self.t[i];
        let a = (self.t[i + 1] - t) / h;
        let b = (t - self.t[i]) / h;
        a * self.y[i]
            + b * self.y[i + 1]
            + ((a * a * a - a) * self.y2[i] + (b * b * b - b) * self.y2[i + 1]) * h * h / 6.0
    }

    /// Evaluate the first derivative dy/dt at `t`.
    pub fn derivative(&self, t: f64) -> f64 {
        let i = self.interval(t);
        let h = self.t[i + 1] - self.t[i];
        let a = (self.t[i + 1] - t) / h;
        let b = (t - self.t[i]) / h;
        (self.y[i + 1] - self.y[i]) / h
            + ((3.0 * b * b - 1.0) * self.y2[i + 1] - (3.0 * a * a - 1.0) * self.y2[i]) * h / 6.0
    }
}

//! Point spacing distributions on [0, 1].

use std::f64::consts::PI;

/// Point spacing law for sampling a parametric curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spacing {
    /// Evenly spaced points.
    Linear,
    /// Clustered toward both ends (full cosine).
    Cosine,
    /// Clustered toward 0 only (half cosine).
    HalfCosine,
}

impl Spacing {
    /// Sample `n` parameter values in [0, 1] under this spacing law.
    pub fn sample(&self, n: usize) -> Vec<f64> {
        match self {
            Spacing::Linear => linear_spacing(n),
            Spacing::Cosine => cosine_spacing(n),
            Spacing::HalfCosine => half_cosine_spacing(n),
        }
    }
}

/// `n` evenly spaced values from 0 to 1 inclusive.
pub fn linear_spacing(n: usize) -> Vec<f64> {
    assert!(n >= 2, "spacing needs at least 2 points");
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

/// `n` values from 0 to 1, clustered toward both ends.
///
/// s_i = (1 - cos(pi * i / (n-1))) / 2
pub fn cosine_spacing(n: usize) -> Vec<f64> {
    assert!(n >= 2, "spacing needs at least 2 points");
    (0..n)
        .map(|i| 0.5 * (1.0 - (PI * i as f64 / (n - 1) as f64).cos()))
        .collect()
}

/// `n` values from 0 to 1, clustered toward 0.
///
/// s_i = 1 - cos(pi/2 * i / (n-1))
pub fn half_cosine_spacing(n: usize) -> Vec<f64> {
    assert!(n >= 2, "spacing needs at least 2 points");
    (0..n)
        .map(|i| 1.0 - (0.5 * PI * i as f64 / (n - 1) as f64).cos())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints() {
        for spacing in [Spacing::Linear, Spacing::Cosine, Spacing::HalfCosine] {
            let s = spacing.sample(11);
            assert_eq!(s.len(), 11);
            assert_relative_eq!(s[0], 0.0, epsilon = 1e-15);
            assert_relative_eq!(s[10], 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_monotone_increasing() {
        for spacing in [Spacing::Linear, Spacing::Cosine, Spacing::HalfCosine] {
            let s = spacing.sample(33);
            for w in s.windows(2) {
                assert!(w[1] > w[0]);
            }
        }
    }

    #[test]
    fn test_cosine_clusters_both_ends() {
        let s = cosine_spacing(21);
        let first = s[1] - s[0];
        let last = s[20] - s[19];
        let mid = s[10] - s[9];
        assert!(first < mid);
        assert!(last < mid);
        assert_relative_eq!(first, last, epsilon = 1e-12);
    }

    #[test]
    fn test_half_cosine_clusters_start() {
        let s = half_cosine_spacing(21);
        assert!(s[1] - s[0] < s[20] - s[19]);
    }
}

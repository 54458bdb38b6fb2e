//! NACA 4-digit airfoil generator.
//!
//! The benchmark wing uses the RAE 2822 profile read from a coordinate
//! file, but a built-in analytic profile is needed for tests and demos.
//! The standard 4-digit camber-line and thickness polynomials are used.

use thiserror::Error;

use super::section::Airfoil;
use super::spacing::half_cosine_spacing;

/// Error type for the NACA generator.
#[derive(Debug, Error)]
pub enum NacaError {
    /// Designation is not four digits.
    #[error("Invalid NACA 4-digit designation: '{0}'")]
    InvalidDesignation(String),
}

/// Generate a NACA 4-digit section with `n_per_surface` points per surface.
///
/// Points are clustered at the leading edge with half-cosine spacing and
/// returned in Selig loop order. The trailing edge uses the standard
/// open-TE thickness polynomial, so `te_gap` is small but nonzero.
///
/// # Example
///
/// ```
/// use stw_gen::airfoil::naca4;
///
/// let foil = naca4("2412", 65).unwrap();
/// assert_eq!(foil.coords.len(), 2 * 65 - 1);
/// ```
pub fn naca4(digits: &str, n_per_surface: usize) -> Result<Airfoil, NacaError> {
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(NacaError::InvalidDesignation(digits.to_string()));
    }
    let m = digits[0..1].parse::<f64>().unwrap() / 100.0;
    let p = digits[1..2].parse::<f64>().unwrap() / 10.0;
    let t = digits[2..4].parse::<f64>().unwrap() / 100.0;

    let xs = half_cosine_spacing(n_per_surface);

    let mut upper = Vec::with_capacity(n_per_surface);
    let mut lower = Vec::with_capacity(n_per_surface);
    for &x in &xs {
        let yt = 5.0
            * t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x * x + 0.2843 * x.powi(3)
                - 0.1015 * x.powi(4));

        let (yc, dyc) = if m == 0.0 || p == 0.0 {
            (0.0, 0.0)
        } else if x < p {
            (
                m / (p * p) * (2.0 * p * x - x * x),
                2.0 * m / (p * p) * (p - x),
            )
        } else {
            (
                m / ((1.0 - p) * (1.0 - p)) * (1.0 - 2.0 * p + 2.0 * p * x - x * x),
                2.0 * m / ((1.0 - p) * (1.0 - p)) * (p - x),
            )
        };

        let theta = dyc.atan();
        upper.push((x - yt * theta.sin(), yc + yt * theta.cos()));
        lower.push((x + yt * theta.sin(), yc - yt * theta.cos()));
    }

    // Selig loop: upper TE -> LE -> lower TE, sharing the LE point
    let mut coords = Vec::with_capacity(2 * n_per_surface - 1);
    coords.extend(upper.into_iter().rev());
    coords.extend(lower.into_iter().skip(1));

    // Construction guarantees a valid point count and nonzero chord
    Ok(Airfoil::new(format!("naca{}", digits), coords)
        .expect("generated section is always valid"))
}

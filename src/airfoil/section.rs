//! Airfoil section type and geometric operations.

use thiserror::Error;

use super::spline::{CubicSpline, SplineError};
use super::Spacing;

/// Error type for airfoil operations.
#[derive(Debug, Error)]
pub enum AirfoilError {
    /// Too few coordinates to describe a section.
    #[error("Airfoil '{name}' has only {count} points, need at least 4")]
    TooFewPoints { name: String, count: usize },

    /// Degenerate chord (all points at the same chordwise station).
    #[error("Airfoil '{0}' has zero chord")]
    ZeroChord(String),

    /// Spline fitting failed during resampling.
    #[error("Resampling failed: {0}")]
    Spline(#[from] SplineError),
}

/// An airfoil section as a loop of (x, z) coordinates.
///
/// Coordinates are stored in Selig loop order: from the upper-surface
/// trailing edge, forward over the upper surface to the leading edge,
/// then aft over the lower surface to the lower-surface trailing edge.
///
/// Operations assume nothing about normalization; call [`normalize`] to
/// shift the leading edge to the origin and scale the chord to 1.
///
/// [`normalize`]: Airfoil::normalize
#[derive(Clone, Debug)]
pub struct Airfoil {
    /// Section name, usually the source file stem.
    pub name: String,
    /// (x, z) coordinate loop in Selig order.
    pub coords: Vec<(f64, f64)>,
}

impl Airfoil {
    /// Create an airfoil, validating the coordinate count and chord.
    pub fn new(name: impl Into<String>, coords: Vec<(f64, f64)>) -> Result<Self, AirfoilError> {
        let name = name.into();
        if coords.len() < 4 {
            return Err(AirfoilError::TooFewPoints {
                name,
                count: coords.len(),
            });
        }
        let foil = Self { name, coords };
        if foil.chord() <= 0.0 {
            return Err(AirfoilError::ZeroChord(foil.name));
        }
        Ok(foil)
    }

    /// Index of the leading-edge point (minimum x).
    pub fn le_index(&self) -> usize {
        let mut best = 0;
        for (i, (x, _)) in self.coords.iter().enumerate() {
            if *x < self.coords[best].0 {
                best = i;
            }
        }
        best
    }

    /// Chord length: extent of the section in x.
    pub fn chord(&self) -> f64 {
        let x_min = self.coords.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
        let x_max = self
            .coords
            .iter()
            .map(|(x, _)| *x)
            .fold(f64::NEG_INFINITY, f64::max);
        x_max - x_min
    }

    /// Shift the leading edge to the origin and scale the chord to 1.
    pub fn normalize(&mut self) {
        let le = self.coords[self.le_index()];
        let chord = self.chord();
        for (x, z) in &mut self.coords {
            *x = (*x - le.0) / chord;
            *z = (*z - le.1) / chord;
        }
    }

    /// Upper-surface coordinates from leading edge to trailing edge.
    pub fn upper_surface(&self) -> Vec<(f64, f64)> {
        let le = self.le_index();
        let mut upper: Vec<(f64, f64)> = self.coords[..=le].to_vec();
        upper.reverse();
        upper
    }

    /// Lower-surface coordinates from leading edge to trailing edge.
    pub fn lower_surface(&self) -> Vec<(f64, f64)> {
        self.coords[self.le_index()..].to_vec()
    }

    /// Linear interpolation of z on a surface polyline at chordwise station x.
    fn surface_z_at(surface: &[(f64, f64)], x: f64) -> f64 {
        if x <= surface[0].0 {
            return surface[0].1;
        }
        for w in surface.windows(2) {
            let (x0, z0) = w[0];
            let (x1, z1) = w[1];
            if x <= x1 && x1 > x0 {
                let t = (x - x0) / (x1 - x0);
                return z0 + t * (z1 - z0);
            }
        }
        surface[surface.len() - 1].1
    }

    /// Thickness (upper z minus lower z) at chordwise station x.
    pub fn thickness_at(&self, x: f64) -> f64 {
        let upper = self.upper_surface();
        let lower = self.lower_surface();
        Self::surface_z_at(&upper, x) - Self::surface_z_at(&lower, x)
    }

    /// Camber line height at chordwise station x.
    pub fn camber_at(&self, x: f64) -> f64 {
        let upper = self.upper_surface();
        let lower = self.lower_surface();
        0.5 * (Self::surface_z_at(&upper, x) + Self::surface_z_at(&lower, x))
    }

    /// Maximum thickness-to-chord ratio, from a dense chordwise scan.
    pub fn max_thickness(&self) -> f64 {
        let chord = self.chord();
        let x_min = self.coords.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
        let n = 200;
        let mut t_max: f64 = 0.0;
        for i in 0..=n {
            let x = x_min + chord * i as f64 / n as f64;
            t_max = t_max.max(self.thickness_at(x));
        }
        t_max / chord
    }

    /// Trailing-edge gap: vertical distance between the loop's end points.
    pub fn te_gap(&self) -> f64 {
        let first = self.coords[0];
        let last = self.coords[self.coords.len() - 1];
        first.1 - last.1
    }

    /// Thicken the trailing edge to the given gap with a linear ramp.
    ///
    /// Each surface is shifted vertically by half the gap increase, scaled
    /// by the normalized chordwise station, so the leading edge is
    /// unchanged and the trailing-edge gap becomes exactly `te_height`
    /// (in the airfoil's own chord units).
    pub fn blunt_trailing_edge(&mut self, te_height: f64) {
        let delta = te_height - self.te_gap();
        let chord = self.chord();
        let x_min = self.coords.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
        let le = self.le_index();
        for (i, (x, z)) in self.coords.iter_mut().enumerate() {
            let frac = (*x - x_min) / chord;
            if i <= le {
                *z += 0.5 * delta * frac;
            } else {
                *z -= 0.5 * delta * frac;
            }
        }
    }

    /// Resample the loop through an arc-length parameterized cubic spline.
    ///
    /// The loop is parameterized by normalized arc length, both coordinates
    /// are fitted with natural cubic splines, and `n_points` samples are
    /// taken under the given spacing law. Cosine spacing clusters points at
    /// both trailing edges; the leading edge sits near mid-parameter.
    pub fn resample(&self, n_points: usize, spacing: Spacing) -> Result<Airfoil, AirfoilError> {
        // Arc-length parameterization of the loop
        let mut s = Vec::with_capacity(self.coords.len());
        s.push(0.0);
        for w in self.coords.windows(2) {
            let (x0, z0) = w[0];
            let (x1, z1) = w[1];
            let ds = ((x1 - x0).powi(2) + (z1 - z0).powi(2)).sqrt();
            s.push(s[s.len() - 1] + ds);
        }
        let total = s[s.len() - 1];
        for si in &mut s {
            *si /= total;
        }

        let xs: Vec<f64> = self.coords.iter().map(|(x, _)| *x).collect();
        let zs: Vec<f64> = self.coords.iter().map(|(_, z)| *z).collect();
        let x_spline = CubicSpline::fit(&s, &xs)?;
        let z_spline = CubicSpline::fit(&s, &zs)?;

        let coords = spacing
            .sample(n_points)
            .into_iter()
            .map(|si| (x_spline.eval(si), z_spline.eval(si)))
            .collect();

        Ok(Airfoil {
            name: self.name.clone(),
            coords,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::naca4;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_degenerate_input() {
        assert!(matches!(
            Airfoil::new("bad", vec![(0.0, 0.0), (1.0, 0.0)]),
            Err(AirfoilError::TooFewPoints { count: 2, .. })
        ));
    }

    #[test]
    fn test_normalize_non_normalized_input() {
        let mut foil = naca4("2412", 41).unwrap();
        // Scale and shift the section away from unit chord
        for (x, z) in &mut foil.coords {
            *x = 3.0 * *x + 2.0;
            *z *= 3.0;
        }
        foil.normalize();
        assert_relative_eq!(foil.chord(), 1.0, epsilon = 1e-12);
        let le = foil.coords[foil.le_index()];
        assert_relative_eq!(le.0, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_blunt_te_sets_gap_and_keeps_le() {
        let mut foil = naca4("0012", 65).unwrap();
        let le_before = foil.coords[foil.le_index()];
        foil.blunt_trailing_edge(0.005);
        assert_relative_eq!(foil.te_gap(), 0.005, epsilon = 1e-12);
        let le_after = foil.coords[foil.le_index()];
        assert_relative_eq!(le_before.1, le_after.1, epsilon = 1e-12);
    }

    #[test]
    fn test_resample_preserves_shape() {
        let foil = naca4("0012", 101).unwrap();
        let resampled = foil.resample(201, Spacing::Cosine).unwrap();
        assert_eq!(resampled.coords.len(), 201);
        assert_relative_eq!(resampled.max_thickness(), foil.max_thickness(), epsilon = 1e-3);
        assert_relative_eq!(resampled.chord(), foil.chord(), epsilon = 1e-3);
    }

    #[test]
    fn test_symmetric_section_has_zero_camber() {
        let foil = naca4("0012", 81).unwrap();
        for x in [0.2, 0.5, 0.8] {
            assert_relative_eq!(foil.camber_at(x), 0.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_cambered_section_thickness() {
        let foil = naca4("2412", 81).unwrap();
        assert_relative_eq!(foil.max_thickness(), 0.12, epsilon = 2e-3);
        assert!(foil.camber_at(0.4) > 0.015);
    }
}

//! Ruled loft of transformed airfoil sections.

use thiserror::Error;

use crate::airfoil::{Airfoil, AirfoilError, Spacing, cosine_spacing};
use crate::geometry::WingPlanform;
use crate::types::{ChordFraction, Eta, Point3};

use super::surface_mesh::{SpanSpacing, SurfaceMesh};

/// Loop resolution of the internal section curves. Surface meshes and
/// skin-height queries interpolate within this loop.
const LOOP_POINTS: usize = 601;

/// Error type for loft construction and sampling.
#[derive(Debug, Error)]
pub enum OmlError {
    /// One airfoil per planform section is required.
    #[error("Planform has {sections} sections but {airfoils} airfoils were given")]
    SectionCountMismatch { sections: usize, airfoils: usize },

    /// Airfoil preparation failed.
    #[error("Airfoil preparation failed: {0}")]
    Airfoil(#[from] AirfoilError),

    /// Surface mesh cannot be coarsened.
    #[error("Cannot coarsen a {ni}x{nj} surface mesh; point counts must be odd")]
    CoarsenParity { ni: usize, nj: usize },

    /// Degenerate surface mesh request.
    #[error("Surface mesh needs at least 2 cells per direction, got {n_chord}x{n_span}")]
    TooFewCells { n_chord: usize, n_span: usize },
}

/// The lofted outer mold line of the wing.
///
/// Sections share a common loop parameterization (cosine-clustered arc
/// length, trailing edge to trailing edge over the upper then lower
/// surface), so spanwise interpolation is a plain ruled surface.
pub struct WingLoft {
    planform: WingPlanform,
    /// Normalized spanwise stations of the definition sections.
    etas: Vec<f64>,
    /// Transformed section loops, one per definition section.
    sections: Vec<Vec<Point3>>,
    /// Loop parameter values shared by all section loops.
    loop_params: Vec<f64>,
}

impl WingLoft {
    /// Loft the planform through the given per-section airfoils.
    ///
    /// Each airfoil is resampled onto the common loop, normalized,
    /// blunt-TE'd to the planform's `te_height` expressed in local chord
    /// units, scaled by the section chord, rotated by the section twist
    /// about the spanwise axis through the leading edge, and placed at
    /// the section leading edge.
    pub fn new(planform: &WingPlanform, airfoils: &[Airfoil]) -> Result<Self, OmlError> {
        if airfoils.len() != planform.sections.len() {
            return Err(OmlError::SectionCountMismatch {
                sections: planform.sections.len(),
                airfoils: airfoils.len(),
            });
        }

        let frame = planform.frame;
        let le_coords = planform.le_coords();
        let loop_params = cosine_spacing(LOOP_POINTS);

        let mut sections = Vec::with_capacity(airfoils.len());
        for ((section, foil), le) in planform.sections.iter().zip(airfoils).zip(&le_coords) {
            let mut prepared = foil.resample(LOOP_POINTS, Spacing::Cosine)?;
            prepared.normalize();
            prepared.blunt_trailing_edge(planform.te_height / section.chord);

            let twist = section.twist_deg.to_radians();
            let (sin_t, cos_t) = twist.sin_cos();

            let loop_points = prepared
                .coords
                .iter()
                .map(|&(x, z)| {
                    // Scale to chord, rotate about the LE, translate to the LE
                    let xs = x * section.chord;
                    let zs = z * section.chord;
                    let xr = xs * cos_t + zs * sin_t;
                    let zr = -xs * sin_t + zs * cos_t;
                    frame.point(
                        frame.chord(le) + xr,
                        frame.span(le),
                        frame.vertical(le) + zr,
                    )
                })
                .collect();
            sections.push(loop_points);
        }

        Ok(Self {
            planform: planform.clone(),
            etas: planform.sections.iter().map(|s| s.eta.value()).collect(),
            sections,
            loop_params,
        })
    }

    /// The planform this loft was built from.
    pub fn planform(&self) -> &WingPlanform {
        &self.planform
    }

    /// Number of points in the common section loop.
    pub fn loop_len(&self) -> usize {
        LOOP_POINTS
    }

    /// Index of the bracketing section pair and the local blend factor.
    fn span_bracket(&self, eta: f64) -> (usize, f64) {
        let idx = self
            .etas
            .windows(2)
            .position(|w| eta <= w[1])
            .unwrap_or(self.etas.len() - 2);
        let t = (eta - self.etas[idx]) / (self.etas[idx + 1] - self.etas[idx]);
        (idx, t.clamp(0.0, 1.0))
    }

    /// The section curve at a spanwise station: the full transformed loop,
    /// linearly interpolated between the bracketing definition sections.
    pub fn section_curve(&self, eta: Eta) -> Vec<Point3> {
        let (idx, t) = self.span_bracket(eta.value());
        self.sections[idx]
            .iter()
            .zip(&self.sections[idx + 1])
            .map(|(a, b)| a.lerp(b, t))
            .collect()
    }

    /// A single surface point at (spanwise station, loop index).
    pub fn surface_point(&self, eta: Eta, loop_index: usize) -> Point3 {
        let (idx, t) = self.span_bracket(eta.value());
        self.sections[idx][loop_index].lerp(&self.sections[idx + 1][loop_index], t)
    }

    /// Interpolate the loop at an arbitrary loop parameter in [0, 1].
    fn loop_point_at(&self, curve: &[Point3], s: f64) -> Point3 {
        let params = &self.loop_params;
        if s <= params[0] {
            return curve[0];
        }
        if s >= params[params.len() - 1] {
            return curve[curve.len() - 1];
        }
        let mut lo = 0;
        let mut hi = params.len() - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if params[mid] <= s {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        let t = (s - params[lo]) / (params[lo + 1] - params[lo]);
        curve[lo].lerp(&curve[lo + 1], t)
    }

    /// Lower and upper skin heights at a (spanwise, chordwise) station.
    ///
    /// Returns the vertical coordinates where the section curve crosses
    /// the given chordwise station, `(lower, upper)` with `upper >= lower`.
    pub fn skin_heights(&self, eta: Eta, chord_fraction: ChordFraction) -> (f64, f64) {
        let frame = self.planform.frame;
        let curve = self.section_curve(eta);

        // Chordwise target from the local LE/TE
        let section = self.planform.section_at(eta);
        let twist = section.twist_deg.to_radians();
        let le_x = section.chordwise_offset;
        let te_x = section.chordwise_offset + section.chord * twist.cos();
        let x_target = le_x + chord_fraction.value() * (te_x - le_x);

        // Split the loop at the LE (minimum chordwise coordinate)
        let le_idx = curve
            .iter()
            .enumerate()
            .min_by(|a, b| {
                frame
                    .chord(a.1)
                    .partial_cmp(&frame.chord(b.1))
                    .expect("loft coordinates are finite")
            })
            .map(|(i, _)| i)
            .unwrap_or(curve.len() / 2);

        let z_upper = Self::crossing_height(frame, &curve[..=le_idx], x_target);
        let z_lower = Self::crossing_height(frame, &curve[le_idx..], x_target);
        (z_lower.min(z_upper), z_lower.max(z_upper))
    }

    /// Vertical coordinate where a surface polyline crosses a chordwise station.
    fn crossing_height(
        frame: crate::types::AxisFrame,
        surface: &[Point3],
        x_target: f64,
    ) -> f64 {
        for w in surface.windows(2) {
            let (x0, x1) = (frame.chord(&w[0]), frame.chord(&w[1]));
            if (x0 - x_target) * (x1 - x_target) <= 0.0 && x0 != x1 {
                let t = (x_target - x0) / (x1 - x0);
                return frame.vertical(&w[0]) + t * (frame.vertical(&w[1]) - frame.vertical(&w[0]));
            }
        }
        // Station outside the surface extent: clamp to the nearest end
        let first = &surface[0];
        let last = &surface[surface.len() - 1];
        if (frame.chord(first) - x_target).abs() < (frame.chord(last) - x_target).abs() {
            frame.vertical(first)
        } else {
            frame.vertical(last)
        }
    }

    /// Sample a structured surface mesh from the loft.
    ///
    /// `i` runs around the chordwise loop with cosine clustering (points
    /// concentrate at the leading and trailing edges), `j` runs from the
    /// symmetry plane to the tip under the given spanwise spacing law.
    pub fn surface_mesh(
        &self,
        n_chord_cells: usize,
        n_span_cells: usize,
        spacing: SpanSpacing,
    ) -> Result<SurfaceMesh, OmlError> {
        if n_chord_cells < 2 || n_span_cells < 2 {
            return Err(OmlError::TooFewCells {
                n_chord: n_chord_cells,
                n_span: n_span_cells,
            });
        }
        let ni = n_chord_cells + 1;
        let nj = n_span_cells + 1;

        let loop_samples = cosine_spacing(ni);
        let span_samples = spacing.sample(nj);

        let mut points = Vec::with_capacity(ni * nj);
        for &eta in &span_samples {
            let curve = self.section_curve(Eta::new(eta));
            for &s in &loop_samples {
                points.push(self.loop_point_at(&curve, s));
            }
        }

        Ok(SurfaceMesh { ni, nj, points })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::naca4;
    use crate::geometry::simple_transonic_wing;
    use approx::assert_relative_eq;

    fn baseline_loft() -> WingLoft {
        let geometry = simple_transonic_wing();
        let foil = naca4("0012", 151).unwrap();
        WingLoft::new(&geometry.wing, &[foil.clone(), foil]).unwrap()
    }

    #[test]
    fn test_section_count_mismatch() {
        let geometry = simple_transonic_wing();
        let foil = naca4("0012", 151).unwrap();
        assert!(matches!(
            WingLoft::new(&geometry.wing, &[foil]),
            Err(OmlError::SectionCountMismatch { sections: 2, airfoils: 1 })
        ));
    }

    #[test]
    fn test_root_section_in_symmetry_plane() {
        let loft = baseline_loft();
        for p in loft.section_curve(Eta::new(0.0)) {
            assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_te_gap_matches_planform() {
        let loft = baseline_loft();
        let geometry = simple_transonic_wing();
        for eta in [0.0, 0.5, 1.0] {
            let curve = loft.section_curve(Eta::new(eta));
            let gap = curve[0].z - curve[curve.len() - 1].z;
            assert_relative_eq!(gap, geometry.wing.te_height, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_ruled_interpolation_of_chord() {
        let loft = baseline_loft();
        // Chordwise extent at mid-span should be the mean of root and tip
        let curve = loft.section_curve(Eta::new(0.5));
        let x_min = curve.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let x_max = curve.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(x_min, 3.75, epsilon = 1e-3);
        assert_relative_eq!(x_max, 3.75 + 3.25, epsilon = 1e-3);
    }

    #[test]
    fn test_skin_heights_ordered_and_symmetric() {
        let loft = baseline_loft();
        let (lower, upper) = loft.skin_heights(Eta::new(0.3), ChordFraction::new(0.4));
        assert!(upper > lower);
        // Symmetric section: skins mirror about z = 0 (blunt TE preserves this)
        assert_relative_eq!(upper, -lower, epsilon = 1e-6);
    }

    #[test]
    fn test_skin_thickness_close_to_section() {
        let loft = baseline_loft();
        // Near max-thickness station of the 12% section on the 5 m root chord
        let (lower, upper) = loft.skin_heights(Eta::new(0.0), ChordFraction::new(0.3));
        let thickness = upper - lower;
        assert!(thickness > 0.55 && thickness < 0.62, "thickness = {}", thickness);
    }

    #[test]
    fn test_surface_mesh_symmetry_row() {
        let loft = baseline_loft();
        let mesh = loft.surface_mesh(32, 8, SpanSpacing::Linear).unwrap();
        for i in 0..mesh.ni {
            assert_relative_eq!(mesh.point(i, 0).y, 0.0, epsilon = 1e-12);
        }
        for i in 0..mesh.ni {
            assert_relative_eq!(mesh.point(i, mesh.nj - 1).y, 14.0, epsilon = 1e-12);
        }
    }
}

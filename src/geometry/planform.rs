//! Wing planform definition and derived quantities.

use crate::types::{AxisFrame, Eta, Point3};

/// One spanwise definition section of the wing.
#[derive(Clone, Debug, PartialEq)]
pub struct WingSection {
    /// Normalized spanwise station of the section.
    pub eta: Eta,
    /// Chord length in metres.
    pub chord: f64,
    /// Offset of the section leading edge in the chordwise direction, metres.
    pub chordwise_offset: f64,
    /// Offset of the section leading edge in the vertical direction, metres.
    pub vertical_offset: f64,
    /// Twist about the spanwise axis through the leading edge, degrees.
    pub twist_deg: f64,
    /// Airfoil profile file name for this section.
    pub profile: String,
}

/// The wing planform: semi-span, definition sections, and trailing-edge height.
///
/// Sections must be ordered root to tip with strictly increasing eta,
/// starting at 0 and ending at 1.
#[derive(Clone, Debug)]
pub struct WingPlanform {
    /// Axis convention used by all derived coordinates.
    pub frame: AxisFrame,
    /// Semi-span in metres.
    pub semi_span: f64,
    /// Definition sections, root to tip.
    pub sections: Vec<WingSection>,
    /// Blunt trailing-edge thickness in metres.
    pub te_height: f64,
}

impl WingPlanform {
    /// Create a planform, asserting the section ordering invariants.
    pub fn new(frame: AxisFrame, semi_span: f64, sections: Vec<WingSection>, te_height: f64) -> Self {
        assert!(sections.len() >= 2, "planform needs at least two sections");
        assert_eq!(sections[0].eta.value(), 0.0, "first section must sit at eta=0");
        assert_eq!(
            sections[sections.len() - 1].eta.value(),
            1.0,
            "last section must sit at eta=1"
        );
        for w in sections.windows(2) {
            assert!(
                w[1].eta.value() > w[0].eta.value(),
                "section etas must be strictly increasing"
            );
        }
        Self {
            frame,
            semi_span,
            sections,
            te_height,
        }
    }

    /// Leading-edge coordinates of each definition section.
    pub fn le_coords(&self) -> Vec<Point3> {
        self.sections
            .iter()
            .map(|s| {
                self.frame.point(
                    s.chordwise_offset,
                    self.semi_span * s.eta.value(),
                    s.vertical_offset,
                )
            })
            .collect()
    }

    /// Trailing-edge coordinates of each definition section.
    ///
    /// Twist rotates the trailing edge about the spanwise axis through
    /// the leading edge.
    pub fn te_coords(&self) -> Vec<Point3> {
        self.sections
            .iter()
            .map(|s| {
                let twist = s.twist_deg.to_radians();
                self.frame.point(
                    s.chordwise_offset + s.chord * twist.cos(),
                    self.semi_span * s.eta.value(),
                    s.vertical_offset - s.chord * twist.sin(),
                )
            })
            .collect()
    }

    /// Section properties at an arbitrary spanwise station, linearly
    /// interpolated between the bracketing definition sections.
    pub fn section_at(&self, eta: Eta) -> WingSection {
        let e = eta.value();
        let idx = self
            .sections
            .windows(2)
            .position(|w| e <= w[1].eta.value())
            .unwrap_or(self.sections.len() - 2);
        let lo = &self.sections[idx];
        let hi = &self.sections[idx + 1];
        let t = (e - lo.eta.value()) / (hi.eta.value() - lo.eta.value());
        WingSection {
            eta,
            chord: lo.chord + t * (hi.chord - lo.chord),
            chordwise_offset: lo.chordwise_offset + t * (hi.chordwise_offset - lo.chordwise_offset),
            vertical_offset: lo.vertical_offset + t * (hi.vertical_offset - lo.vertical_offset),
            twist_deg: lo.twist_deg + t * (hi.twist_deg - lo.twist_deg),
            profile: lo.profile.clone(),
        }
    }

    /// Half-wing planform area in square metres: integral of the chord
    /// over the semi-span, piecewise trapezoidal between sections.
    pub fn planform_area(&self) -> f64 {
        let mut area = 0.0;
        for w in self.sections.windows(2) {
            let dy = self.semi_span * (w[1].eta.value() - w[0].eta.value());
            area += 0.5 * (w[0].chord + w[1].chord) * dy;
        }
        area
    }

    /// Mean aerodynamic chord in metres.
    ///
    /// Standard definition: integral of c^2 dy over integral of c dy,
    /// evaluated piecewise for the linear chord distribution between
    /// sections. For the baseline trapezoid this reduces to the familiar
    /// (2/3)(cr + ct - cr*ct/(cr + ct)) expression.
    pub fn mean_aerodynamic_chord(&self) -> f64 {
        let mut c2_integral = 0.0;
        for w in self.sections.windows(2) {
            let dy = self.semi_span * (w[1].eta.value() - w[0].eta.value());
            let (c0, c1) = (w[0].chord, w[1].chord);
            c2_integral += dy / 3.0 * (c0 * c0 + c0 * c1 + c1 * c1);
        }
        c2_integral / self.planform_area()
    }

    /// Full-aircraft aspect ratio from the half-wing area: 2 b^2 / S.
    pub fn aspect_ratio(&self) -> f64 {
        2.0 * self.semi_span * self.semi_span / self.planform_area()
    }

    /// Tip chord over root chord.
    pub fn taper_ratio(&self) -> f64 {
        self.sections[self.sections.len() - 1].chord / self.sections[0].chord
    }

    /// Root chord in metres.
    pub fn root_chord(&self) -> f64 {
        self.sections[0].chord
    }

    /// Tip chord in metres.
    pub fn tip_chord(&self) -> f64 {
        self.sections[self.sections.len() - 1].chord
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::simple_transonic_wing;
    use approx::assert_relative_eq;

    #[test]
    fn test_baseline_planform_area() {
        let wing = simple_transonic_wing().wing;
        assert_relative_eq!(wing.planform_area(), 45.5, epsilon = 1e-12);
    }

    #[test]
    fn test_baseline_mac_matches_trapezoid_formula() {
        let wing = simple_transonic_wing().wing;
        let (cr, ct) = (5.0, 1.5);
        let expected = (2.0 / 3.0) * (cr + ct - cr * ct / (cr + ct));
        assert_relative_eq!(wing.mean_aerodynamic_chord(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_baseline_aspect_and_taper() {
        let wing = simple_transonic_wing().wing;
        assert_relative_eq!(wing.aspect_ratio(), 2.0 * 14.0 * 14.0 / 45.5, epsilon = 1e-12);
        assert_relative_eq!(wing.taper_ratio(), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_te_coords_with_twist() {
        let frame = AxisFrame::benchmark();
        let sections = vec![
            WingSection {
                eta: Eta::new(0.0),
                chord: 2.0,
                chordwise_offset: 0.0,
                vertical_offset: 0.0,
                twist_deg: 30.0,
                profile: "naca0012".into(),
            },
            WingSection {
                eta: Eta::new(1.0),
                chord: 1.0,
                chordwise_offset: 0.0,
                vertical_offset: 0.0,
                twist_deg: 0.0,
                profile: "naca0012".into(),
            },
        ];
        let wing = WingPlanform::new(frame, 10.0, sections, 0.0);
        let te = wing.te_coords();
        // Positive twist rotates the TE down and forward
        assert_relative_eq!(te[0].x, 2.0 * (30f64).to_radians().cos(), epsilon = 1e-12);
        assert_relative_eq!(te[0].z, -2.0 * (30f64).to_radians().sin(), epsilon = 1e-12);
        assert_relative_eq!(te[1].x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_section_at_interpolates() {
        let wing = simple_transonic_wing().wing;
        let mid = wing.section_at(Eta::new(0.5));
        assert_relative_eq!(mid.chord, 3.25, epsilon = 1e-12);
        assert_relative_eq!(mid.chordwise_offset, 3.75, epsilon = 1e-12);
    }

    #[test]
    #[should_panic]
    fn test_rejects_single_section() {
        let frame = AxisFrame::benchmark();
        WingPlanform::new(
            frame,
            10.0,
            vec![WingSection {
                eta: Eta::new(0.0),
                chord: 2.0,
                chordwise_offset: 0.0,
                vertical_offset: 0.0,
                twist_deg: 0.0,
                profile: "naca0012".into(),
            }],
            0.0,
        );
    }
}

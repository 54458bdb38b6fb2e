//! The aggregate aircraft geometry and the baseline constructor.

use crate::types::{AxisFrame, Eta};

use super::bodies::{Fuselage, Nacelle};
use super::planform::{WingPlanform, WingSection};
use super::tail::TailSurface;
use super::wingbox::WingboxLayout;

/// Everything the generator needs to know about the aircraft.
#[derive(Clone, Debug)]
pub struct AircraftGeometry {
    /// Axis convention shared by all components.
    pub frame: AxisFrame,
    /// Wing planform.
    pub wing: WingPlanform,
    /// Horizontal tail.
    pub h_tail: TailSurface,
    /// Vertical tail.
    pub v_tail: TailSurface,
    /// Engine nacelle (one of two).
    pub nacelle: Nacelle,
    /// Fuselage.
    pub fuselage: Fuselage,
    /// Wingbox layout.
    pub wingbox: WingboxLayout,
}

/// Build the baseline Simple Transonic Wing geometry.
///
/// A straight-tapered two-section wing: 14 m semi-span, chords 5.0 m to
/// 1.5 m, 7.5 m of leading-edge sweep offset, no twist, RAE 2822 sections,
/// and a quarter-inch blunt trailing edge. Tails, nacelle, and fuselage
/// carry the Boeing-717-derived dimensions the specification tables use.
pub fn simple_transonic_wing() -> AircraftGeometry {
    let frame = AxisFrame::benchmark();

    let sections = vec![
        WingSection {
            eta: Eta::new(0.0),
            chord: 5.0,
            chordwise_offset: 0.0,
            vertical_offset: 0.0,
            twist_deg: 0.0,
            profile: "rae2822.dat".into(),
        },
        WingSection {
            eta: Eta::new(1.0),
            chord: 1.5,
            chordwise_offset: 7.5,
            vertical_offset: 0.0,
            twist_deg: 0.0,
            profile: "rae2822.dat".into(),
        },
    ];

    // Quarter-inch trailing edge
    let te_height = 0.25 * 0.0254;

    AircraftGeometry {
        frame,
        wing: WingPlanform::new(frame, 14.0, sections, te_height),
        h_tail: TailSurface::horizontal(),
        v_tail: TailSurface::vertical(),
        nacelle: Nacelle::baseline(),
        fuselage: Fuselage::baseline(),
        wingbox: WingboxLayout::baseline(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_baseline_values() {
        let geometry = simple_transonic_wing();
        assert_relative_eq!(geometry.wing.semi_span, 14.0);
        assert_relative_eq!(geometry.wing.te_height, 0.25 * 0.0254);
        assert_relative_eq!(geometry.wingbox.sob, 1.5);
        assert_eq!(geometry.wing.sections.len(), 2);
        assert_eq!(geometry.wing.sections[0].profile, "rae2822.dat");
    }
}

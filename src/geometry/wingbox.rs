//! Wingbox layout: spar positions, rib counts, and spar station coordinates.

use crate::types::Point3;

use super::planform::WingPlanform;

/// Wingbox layout parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WingboxLayout {
    /// Spanwise coordinate of the side-of-body junction in metres.
    pub sob: f64,
    /// Normalized chordwise location of the leading-edge spar.
    pub le_spar_frac: f64,
    /// Normalized chordwise location of the trailing-edge spar.
    pub te_spar_frac: f64,
    /// Number of ribs in the centre wingbox (root to side-of-body).
    pub num_ribs_centrebody: usize,
    /// Number of ribs outboard of the side-of-body.
    pub num_ribs_outer: usize,
    /// Number of spars (front and rear only).
    pub num_spars: usize,
}

/// Spar station coordinates: root, side-of-body, and tip for each spar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparCoords {
    /// Leading-edge spar stations, root to tip.
    pub le: [Point3; 3],
    /// Trailing-edge spar stations, root to tip.
    pub te: [Point3; 3],
}

impl WingboxLayout {
    /// The benchmark's wingbox layout.
    pub fn baseline() -> Self {
        Self {
            sob: 1.5,
            le_spar_frac: 0.15,
            te_spar_frac: 0.65,
            num_ribs_centrebody: 4,
            num_ribs_outer: 19,
            num_spars: 2,
        }
    }

    /// Total number of ribs.
    pub fn num_ribs(&self) -> usize {
        self.num_ribs_centrebody + self.num_ribs_outer
    }

    /// Validate the layout against a planform.
    fn validate(&self, planform: &WingPlanform) {
        assert!(
            self.le_spar_frac > 0.0 && self.le_spar_frac < self.te_spar_frac && self.te_spar_frac < 1.0,
            "spar fractions must satisfy 0 < le < te < 1"
        );
        assert!(
            self.sob > 0.0 && self.sob < planform.semi_span,
            "side-of-body must lie inside the semi-span"
        );
    }

    /// Spar station coordinates on a planform.
    ///
    /// The tip stations are pulled 1 mm inboard of the wing tip and the
    /// root stations are placed at y = 1 mm so that downstream surface
    /// projections never leave the lofted surface. The root stations keep
    /// the side-of-body chordwise positions (the centre box is unswept)
    /// with their vertical position corrected onto the root chord line.
    pub fn spar_coords(&self, planform: &WingPlanform) -> SparCoords {
        self.validate(planform);
        let frame = planform.frame;
        let le = planform.le_coords();
        let te = planform.te_coords();
        let n = le.len();
        let (root_le, root_te) = (le[0], te[0]);
        let (tip_le, tip_te) = (le[n - 1], te[n - 1]);

        // Tip: straight interpolation on the tip chord, then 1 mm inboard
        let mut le_tip = tip_le.lerp(&tip_te, self.le_spar_frac);
        let mut te_tip = tip_le.lerp(&tip_te, self.te_spar_frac);
        let le_tip_span = frame.span(&le_tip) - 1e-3;
        frame.set_span(&mut le_tip, le_tip_span);
        let te_tip_span = frame.span(&te_tip) - 1e-3;
        frame.set_span(&mut te_tip, te_tip_span);

        // Side-of-body: interpolate the LE/TE lines, then the spar fractions
        let sob_t = self.sob / planform.semi_span;
        let sob_le = root_le.lerp(&tip_le, sob_t);
        let sob_te = root_te.lerp(&tip_te, sob_t);
        let le_sob = sob_le.lerp(&sob_te, self.le_spar_frac);
        let te_sob = sob_le.lerp(&sob_te, self.te_spar_frac);

        // Root: shift the SOB stations to y = 1 mm, then correct the
        // vertical position onto the root chord line
        let mut le_root = le_sob;
        let mut te_root = te_sob;
        frame.set_span(&mut le_root, 1e-3);
        frame.set_span(&mut te_root, 1e-3);

        let root_chord_extent = frame.chord(&root_te) - frame.chord(&root_le);
        for station in [&mut le_root, &mut te_root] {
            let frac = (frame.chord(station) - frame.chord(&root_le)) / root_chord_extent;
            let vertical = frame.vertical(&root_le)
                + frac * (frame.vertical(&root_te) - frame.vertical(&root_le));
            frame.set_vertical(station, vertical);
        }

        SparCoords {
            le: [le_root, le_sob, le_tip],
            te: [te_root, te_sob, te_tip],
        }
    }
}

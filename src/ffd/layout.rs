//! FFD span layouts and resolution tiers.

use crate::geometry::{WingPlanform, WingboxLayout};
use crate::types::Point3;

/// Leading/trailing edge station lists and per-segment span cell counts
/// handed to the fitted-lattice builder.
#[derive(Clone, Debug)]
pub struct FfdStations {
    /// Leading-edge anchor stations, root to tip.
    pub le: Vec<Point3>,
    /// Trailing-edge anchor stations, root to tip.
    pub te: Vec<Point3>,
    /// Spanwise cell count per segment between consecutive anchors; the
    /// lattice gets `sum + 1` spanwise control sections.
    pub segments: Vec<usize>,
}

/// Spanwise layout family of the fitted FFD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FfdLayout {
    /// One span segment from root to tip.
    Basic,
    /// Tight root and side-of-body station groups so those rows can be
    /// frozen by downstream design variables, plus the tip.
    Advanced,
}

impl FfdLayout {
    /// Anchor stations for this layout.
    ///
    /// The wing LE/TE stations are first pulled 1% toward each other (the
    /// fitted lattice must start strictly inside the surface) and the root
    /// pair is shifted 1 mm up-span off the symmetry plane.
    pub fn stations(
        &self,
        planform: &WingPlanform,
        wingbox: &WingboxLayout,
        n_span: usize,
    ) -> FfdStations {
        let frame = planform.frame;
        let wing_le = planform.le_coords();
        let wing_te = planform.te_coords();
        let n = wing_le.len();

        // Pull LE and TE toward each other; the TE inset uses the already
        // inset LE, matching the archived lattices
        let mut le: Vec<Point3> = wing_le
            .iter()
            .zip(&wing_te)
            .map(|(l, t)| *l + (*t - *l) * 0.01)
            .collect();
        let mut te: Vec<Point3> = wing_te
            .iter()
            .zip(&le)
            .map(|(t, l)| *t + (*l - *t) * 0.01)
            .collect();
        let le_span = frame.span(&le[0]) + 1e-3;
        frame.set_span(&mut le[0], le_span);
        let te_span = frame.span(&te[0]) + 1e-3;
        frame.set_span(&mut te[0], te_span);

        match self {
            FfdLayout::Basic => FfdStations {
                le: vec![le[0], le[n - 1]],
                te: vec![te[0], te[n - 1]],
                segments: vec![n_span - 1],
            },
            FfdLayout::Advanced => {
                let sob_t = wingbox.sob / planform.semi_span;

                let mut le_stations = Vec::with_capacity(6);
                let mut te_stations = Vec::with_capacity(6);

                // Root pair: the inset root and a copy at y = 1 cm
                le_stations.push(le[0]);
                te_stations.push(te[0]);
                let mut le1 = le[0];
                let mut te1 = te[0];
                frame.set_span(&mut le1, 1e-2);
                frame.set_span(&mut te1, 1e-2);
                le_stations.push(le1);
                te_stations.push(te1);

                // Side-of-body triplet: the SOB plus two stations offset by
                // tiny fractions of the root-to-SOB step
                let sob_le = le[0].lerp(&le[n - 1], sob_t);
                let sob_te = te[0].lerp(&te[n - 1], sob_t);
                le_stations.push(sob_le);
                te_stations.push(sob_te);
                for offset in [2.5e-4, 5e-4] {
                    le_stations.push(sob_le + (sob_le - le1) * offset);
                    te_stations.push(sob_te + (sob_te - te1) * offset);
                }

                // Tip
                le_stations.push(le[n - 1]);
                te_stations.push(te[n - 1]);

                FfdStations {
                    le: le_stations,
                    te: te_stations,
                    segments: vec![2, 1, 1, 1, n_span],
                }
            }
        }
    }

    /// Archived file name for this layout at a given resolution.
    pub fn file_name(&self, resolution: FfdResolution) -> String {
        match self {
            FfdLayout::Basic => format!("wing-ffd-{}.xyz", resolution.label()),
            FfdLayout::Advanced => format!("wing-ffd-advanced-{}.xyz", resolution.label()),
        }
    }

    /// All layouts.
    pub fn all() -> [FfdLayout; 2] {
        [FfdLayout::Basic, FfdLayout::Advanced]
    }
}

/// Resolution tier of an FFD lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FfdResolution {
    Coarse,
    Medium,
    Fine,
}

impl FfdResolution {
    /// Spanwise control section count (basic layout; the advanced layout
    /// adds its root and side-of-body groups on top).
    pub fn n_span(&self) -> usize {
        match self {
            FfdResolution::Coarse => 6,
            FfdResolution::Medium => 9,
            FfdResolution::Fine => 12,
        }
    }

    /// Chordwise control section count.
    pub fn n_chord(&self) -> usize {
        match self {
            FfdResolution::Coarse => 8,
            FfdResolution::Medium => 12,
            FfdResolution::Fine => 16,
        }
    }

    /// File name label.
    pub fn label(&self) -> &'static str {
        match self {
            FfdResolution::Coarse => "coarse",
            FfdResolution::Medium => "med",
            FfdResolution::Fine => "fine",
        }
    }

    /// All resolutions, coarse to fine.
    pub fn all() -> [FfdResolution; 3] {
        [
            FfdResolution::Coarse,
            FfdResolution::Medium,
            FfdResolution::Fine,
        ]
    }
}

//! Wingbox station grid and boundary conditions.

use crate::geometry::{WingPlanform, WingboxLayout};
use crate::types::{Point3, linear_edge};

/// Extent of a rib boundary condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BcExtent {
    /// Every node of the rib panel.
    All,
    /// The rib panel's perimeter nodes.
    Edge,
}

/// A boundary condition attached to one rib.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RibBoundaryCondition {
    /// Rib station index.
    pub rib: usize,
    /// Which nodes of the rib the constraint covers.
    pub extent: BcExtent,
    /// Constrained DOF digits in Nastran convention (1-6).
    pub dofs: String,
}

/// The (ribs x spars) coordinate matrix of the wingbox.
///
/// Rib stations run root to side-of-body then side-of-body to tip along
/// the spar lines; chordwise rows are linear edges between the spars.
/// All ribs are kept and only the first and last spar rows carry webs
/// (the benchmark has exactly two spars, so nothing is blanked).
#[derive(Clone, Debug)]
pub struct WingboxGrid {
    /// Number of rib stations (columns).
    pub n_ribs: usize,
    /// Number of spar rows.
    pub n_spars: usize,
    /// Rib column index count of the centre body; the side-of-body rib
    /// is column `n_break - 1`.
    pub n_break: usize,
    /// Semi-span of the planform the grid was built on.
    pub semi_span: f64,
    /// Station coordinates, spar row fastest.
    stations: Vec<Point3>,
    /// DOF digits of the symmetry constraint at the root rib.
    sym_dofs: String,
    /// DOF digits of the side-of-body support constraint.
    sob_dofs: String,
}

impl WingboxGrid {
    /// Build the station matrix from a planform and wingbox layout.
    pub fn new(planform: &WingPlanform, wingbox: &WingboxLayout) -> Self {
        let spars = wingbox.spar_coords(planform);
        let n_ribs = wingbox.num_ribs();
        let n_spars = wingbox.num_spars;
        let n_break = wingbox.num_ribs_centrebody;

        // Rib stations along each spar line: root -> SOB, then SOB -> tip
        // sharing the SOB station
        let mut le_stations = linear_edge(spars.le[0], spars.le[1], n_break);
        le_stations.extend(
            linear_edge(spars.le[1], spars.le[2], n_ribs - n_break + 1)
                .into_iter()
                .skip(1),
        );
        let mut te_stations = linear_edge(spars.te[0], spars.te[1], n_break);
        te_stations.extend(
            linear_edge(spars.te[1], spars.te[2], n_ribs - n_break + 1)
                .into_iter()
                .skip(1),
        );

        // Chordwise rows between the spar lines
        let mut stations = Vec::with_capacity(n_ribs * n_spars);
        for i in 0..n_ribs {
            stations.extend(linear_edge(le_stations[i], te_stations[i], n_spars));
        }

        // DOF digit strings from the axis convention: the root rib is
        // pinned in the symmetry set (span translation plus chordwise and
        // vertical rotations), the SOB rib edge in the in-plane
        // translations
        let frame = planform.frame;
        let mut sym: Vec<usize> = vec![
            frame.span.index() + 1,
            frame.chord.index() + 4,
            frame.vertical.index() + 4,
        ];
        sym.sort_unstable();
        let mut sob: Vec<usize> = vec![frame.chord.index() + 1, frame.vertical.index() + 1];
        sob.sort_unstable();

        Self {
            n_ribs,
            n_spars,
            n_break,
            semi_span: planform.semi_span,
            stations,
            sym_dofs: sym.iter().map(usize::to_string).collect(),
            sob_dofs: sob.iter().map(usize::to_string).collect(),
        }
    }

    /// Station coordinate at (rib column, spar row).
    pub fn station(&self, rib: usize, spar: usize) -> Point3 {
        debug_assert!(rib < self.n_ribs && spar < self.n_spars);
        self.stations[rib * self.n_spars + spar]
    }

    /// Whether the rib at the given column is kept (all ribs are).
    pub fn rib_kept(&self, rib: usize) -> bool {
        debug_assert!(rib < self.n_ribs);
        true
    }

    /// Whether the spar row carries a web: only the first and last rows.
    pub fn spar_kept(&self, spar: usize) -> bool {
        debug_assert!(spar < self.n_spars);
        spar == 0 || spar == self.n_spars - 1
    }

    /// The rib boundary conditions: root rib fully pinned in the symmetry
    /// DOF set, side-of-body rib edge held in the in-plane translations.
    pub fn boundary_conditions(&self) -> Vec<RibBoundaryCondition> {
        vec![
            RibBoundaryCondition {
                rib: 0,
                extent: BcExtent::All,
                dofs: self.sym_dofs.clone(),
            },
            RibBoundaryCondition {
                rib: self.n_break - 1,
                extent: BcExtent::Edge,
                dofs: self.sob_dofs.clone(),
            },
        ]
    }
}

//! Wingbox shell mesher.

use std::collections::HashMap;

use thiserror::Error;

use crate::io::bdf::{NastranComponent, NastranModel, SpcSet};
use crate::io::tecplot::FeQuadZone;
use crate::oml::WingLoft;
use crate::types::{ChordFraction, Eta, Point3};

use super::grid::{BcExtent, WingboxGrid};
use super::level::WingboxLevel;
use super::order::ElementOrder;

/// Error type for wingbox meshing.
#[derive(Debug, Error)]
pub enum WingboxMeshError {
    /// Element counts must all be at least one.
    #[error("Mesher needs at least 1 element per direction, got {n_chord}x{n_span}x{n_vertical}")]
    TooFewElements {
        n_chord: usize,
        n_span: usize,
        n_vertical: usize,
    },

    /// The grid must span at least one rib bay.
    #[error("Wingbox grid needs at least 2 rib stations, got {0}")]
    TooFewRibs(usize),
}

/// Structural component family of a shell element group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentGroup {
    Rib,
    Spar,
    UpperSkin,
    LowerSkin,
}

impl ComponentGroup {
    /// Group label, the name load cases select failure groups by.
    pub fn label(&self) -> &'static str {
        match self {
            ComponentGroup::Rib => "rib",
            ComponentGroup::Spar => "spar",
            ComponentGroup::UpperSkin => "u_skin",
            ComponentGroup::LowerSkin => "l_skin",
        }
    }

    /// All groups.
    pub fn all() -> [ComponentGroup; 4] {
        [
            ComponentGroup::Rib,
            ComponentGroup::Spar,
            ComponentGroup::UpperSkin,
            ComponentGroup::LowerSkin,
        ]
    }
}

/// A named group of shell elements belonging to one component.
#[derive(Clone, Debug)]
pub struct MeshComponent {
    pub group: ComponentGroup,
    /// Component name, e.g. `rib.03` or `u_skin.12`.
    pub name: String,
    /// Elements as node index lists in Nastran card order.
    pub elements: Vec<Vec<usize>>,
}

/// The welded wingbox shell mesh.
#[derive(Clone, Debug)]
pub struct WingboxMesh {
    /// Element order the mesh was built with.
    pub order: ElementOrder,
    /// Welded node coordinates.
    pub nodes: Vec<Point3>,
    /// Components in property-ID order.
    pub components: Vec<MeshComponent>,
    /// Single-point constraint sets from the rib boundary conditions.
    pub constraints: Vec<SpcSet>,
}

impl WingboxMesh {
    /// Total node count.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Total element count over all components.
    pub fn n_elements(&self) -> usize {
        self.components.iter().map(|c| c.elements.len()).sum()
    }

    /// Element count of one component group.
    pub fn group_element_count(&self, group: ComponentGroup) -> usize {
        self.components
            .iter()
            .filter(|c| c.group == group)
            .map(|c| c.elements.len())
            .sum()
    }

    /// Corner coordinates of one element (the first four card-order nodes).
    pub fn element_corners(&self, component: usize, element: usize) -> [Point3; 4] {
        let e = &self.components[component].elements[element];
        [
            self.nodes[e[0]],
            self.nodes[e[1]],
            self.nodes[e[2]],
            self.nodes[e[3]],
        ]
    }

    /// Convert to a Nastran bulk data model.
    pub fn to_nastran(&self) -> NastranModel {
        NastranModel {
            nodes: self.nodes.clone(),
            components: self
                .components
                .iter()
                .map(|c| NastranComponent {
                    name: c.name.clone(),
                    elements: c.elements.clone(),
                })
                .collect(),
            spcs: self.constraints.clone(),
        }
    }

    /// Convert to Tecplot FE zones, one per component.
    ///
    /// Higher-order elements are written as their corner quads; each zone
    /// carries its own compacted node list.
    pub fn to_fe_zones(&self) -> Vec<FeQuadZone> {
        self.components
            .iter()
            .map(|component| {
                let mut local: HashMap<usize, usize> = HashMap::new();
                let mut nodes = Vec::new();
                let mut quads = Vec::with_capacity(component.elements.len());
                for element in &component.elements {
                    let mut quad = [0usize; 4];
                    for (slot, &global) in quad.iter_mut().zip(&element[..4]) {
                        *slot = *local.entry(global).or_insert_with(|| {
                            nodes.push(self.nodes[global]);
                            nodes.len() - 1
                        });
                    }
                    quads.push(quad);
                }
                FeQuadZone {
                    name: component.name.clone(),
                    nodes,
                    quads,
                }
            })
            .collect()
    }
}

/// Welds coincident nodes across panels.
struct NodePool {
    nodes: Vec<Point3>,
    index: HashMap<(i64, i64, i64), usize>,
}

/// Welding tolerance in metres.
const WELD_TOL: f64 = 1e-6;

impl NodePool {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn insert(&mut self, p: Point3) -> usize {
        let key = (
            (p.x / WELD_TOL).round() as i64,
            (p.y / WELD_TOL).round() as i64,
            (p.z / WELD_TOL).round() as i64,
        );
        *self.index.entry(key).or_insert_with(|| {
            self.nodes.push(p);
            self.nodes.len() - 1
        })
    }
}

/// Build one structured panel: sample `f(u, v)` on a node grid of
/// `nu x nv` elements at the given order, weld the nodes, and emit
/// card-ordered elements. Returns the elements and the full node index
/// grid (`[v][u]`) for boundary-condition extraction.
fn build_panel<F>(
    pool: &mut NodePool,
    order: ElementOrder,
    nu: usize,
    nv: usize,
    f: F,
) -> (Vec<Vec<usize>>, Vec<Vec<usize>>)
where
    F: Fn(f64, f64) -> Point3,
{
    let step = order.nodes_per_edge() - 1;
    let cols = nu * step + 1;
    let rows = nv * step + 1;

    let mut node_grid = vec![vec![0usize; cols]; rows];
    for (jv, row) in node_grid.iter_mut().enumerate() {
        let v = jv as f64 / (rows - 1) as f64;
        for (iu, slot) in row.iter_mut().enumerate() {
            let u = iu as f64 / (cols - 1) as f64;
            *slot = pool.insert(f(u, v));
        }
    }

    let mut elements = Vec::with_capacity(nu * nv);
    for ev in 0..nv {
        for eu in 0..nu {
            let local: Vec<Vec<usize>> = (0..=step)
                .map(|b| {
                    (0..=step)
                        .map(|a| node_grid[ev * step + b][eu * step + a])
                        .collect()
                })
                .collect();
            elements.push(order.card_order(&local));
        }
    }
    (elements, node_grid)
}

/// Perimeter node indices of a panel node grid, deduplicated.
fn perimeter_nodes(node_grid: &[Vec<usize>]) -> Vec<usize> {
    let rows = node_grid.len();
    let mut nodes = Vec::new();
    for (jv, row) in node_grid.iter().enumerate() {
        if jv == 0 || jv == rows - 1 {
            nodes.extend_from_slice(row);
        } else {
            nodes.push(row[0]);
            nodes.push(row[row.len() - 1]);
        }
    }
    nodes.sort_unstable();
    nodes.dedup();
    nodes
}

/// Wingbox shell mesher.
///
/// Element counts are chordwise across the box, spanwise per rib bay,
/// and vertically through the rib and spar depth; the defaults are the
/// baseline (L2) mesh. Ribs and spar webs run between the lower and
/// upper skin surfaces sampled from the loft, so the box is watertight
/// after welding.
#[derive(Clone, Copy, Debug)]
pub struct WingboxMesher {
    /// Chordwise elements between the spars.
    pub n_chord: usize,
    /// Spanwise elements per rib bay.
    pub n_span: usize,
    /// Vertical elements through ribs and spar webs.
    pub n_vertical: usize,
    /// Shell element order.
    pub order: ElementOrder,
}

impl Default for WingboxMesher {
    fn default() -> Self {
        Self {
            n_chord: 25,
            n_span: 10,
            n_vertical: 10,
            order: ElementOrder::Order2,
        }
    }
}

impl WingboxMesher {
    /// Set the element counts (chordwise, spanwise per bay, vertical).
    pub fn with_counts(mut self, n_chord: usize, n_span: usize, n_vertical: usize) -> Self {
        self.n_chord = n_chord;
        self.n_span = n_span;
        self.n_vertical = n_vertical;
        self
    }

    /// Set the shell element order.
    pub fn with_order(mut self, order: ElementOrder) -> Self {
        self.order = order;
        self
    }

    /// Scale the element counts to a refinement level.
    pub fn with_level(mut self, level: WingboxLevel) -> Self {
        self.n_chord = level.scale(self.n_chord);
        self.n_span = level.scale(self.n_span);
        self.n_vertical = level.scale(self.n_vertical);
        self
    }

    /// Mesh the wingbox.
    pub fn mesh(&self, grid: &WingboxGrid, loft: &WingLoft) -> Result<WingboxMesh, WingboxMeshError> {
        if self.n_chord < 1 || self.n_span < 1 || self.n_vertical < 1 {
            return Err(WingboxMeshError::TooFewElements {
                n_chord: self.n_chord,
                n_span: self.n_span,
                n_vertical: self.n_vertical,
            });
        }
        if grid.n_ribs < 2 {
            return Err(WingboxMeshError::TooFewRibs(grid.n_ribs));
        }

        let planform = loft.planform();
        let frame = planform.frame;
        let semi_span = grid.semi_span;

        // Chordwise fraction of an in-plane point, for the loft query
        let chord_fraction = |eta: f64, x: f64| -> f64 {
            let section = planform.section_at(Eta::new(eta));
            let le_x = section.chordwise_offset;
            let chord_x = section.chord * section.twist_deg.to_radians().cos();
            ((x - le_x) / chord_x).clamp(0.0, 1.0)
        };

        // Project an in-plane point onto the lower or upper skin
        let on_skin = |p: Point3, upper: bool| -> Point3 {
            let eta = (frame.span(&p) / semi_span).clamp(0.0, 1.0);
            let cf = chord_fraction(eta, frame.chord(&p));
            let (lo, up) = loft.skin_heights(Eta::new(eta), ChordFraction::new(cf));
            let mut q = p;
            frame.set_vertical(&mut q, if upper { up } else { lo });
            q
        };

        let mut pool = NodePool::new();
        let mut components = Vec::new();
        let mut rib_grids = Vec::with_capacity(grid.n_ribs);
        let last_spar = grid.n_spars - 1;

        // Rib panels: u vertical, v chordwise (outward normal up-span)
        for i in 0..grid.n_ribs {
            if !grid.rib_kept(i) {
                continue;
            }
            let le = grid.station(i, 0);
            let te = grid.station(i, last_spar);
            let (elements, node_grid) =
                build_panel(&mut pool, self.order, self.n_vertical, self.n_chord, |u, v| {
                    let p = le.lerp(&te, v);
                    on_skin(p, false).lerp(&on_skin(p, true), u)
                });
            rib_grids.push(node_grid);
            components.push(MeshComponent {
                group: ComponentGroup::Rib,
                name: format!("rib.{:02}", i),
                elements,
            });
        }

        // Spar webs per bay, only the rows that carry webs
        for s in 0..grid.n_spars {
            if !grid.spar_kept(s) {
                continue;
            }
            let stem = if s == 0 { "le_spar" } else { "te_spar" };
            for bay in 0..grid.n_ribs - 1 {
                let a0 = grid.station(bay, s);
                let a1 = grid.station(bay + 1, s);
                let (elements, _) = if s == 0 {
                    // LE spar: u vertical, v spanwise (normal toward the nose)
                    build_panel(&mut pool, self.order, self.n_vertical, self.n_span, |u, v| {
                        let p = a0.lerp(&a1, v);
                        on_skin(p, false).lerp(&on_skin(p, true), u)
                    })
                } else {
                    // TE spar: u spanwise, v vertical (normal toward the tail)
                    build_panel(&mut pool, self.order, self.n_span, self.n_vertical, |u, v| {
                        let p = a0.lerp(&a1, u);
                        on_skin(p, false).lerp(&on_skin(p, true), v)
                    })
                };
                components.push(MeshComponent {
                    group: ComponentGroup::Spar,
                    name: format!("{}.{:02}", stem, bay),
                    elements,
                });
            }
        }

        // Skins per bay: upper u chordwise / v spanwise, lower transposed,
        // so both outward normals point away from the box
        for bay in 0..grid.n_ribs - 1 {
            let le0 = grid.station(bay, 0);
            let te0 = grid.station(bay, last_spar);
            let le1 = grid.station(bay + 1, 0);
            let te1 = grid.station(bay + 1, last_spar);

            let (elements, _) =
                build_panel(&mut pool, self.order, self.n_chord, self.n_span, |u, v| {
                    let le = le0.lerp(&le1, v);
                    let te = te0.lerp(&te1, v);
                    on_skin(le.lerp(&te, u), true)
                });
            components.push(MeshComponent {
                group: ComponentGroup::UpperSkin,
                name: format!("u_skin.{:02}", bay),
                elements,
            });

            let (elements, _) =
                build_panel(&mut pool, self.order, self.n_span, self.n_chord, |u, v| {
                    let le = le0.lerp(&le1, u);
                    let te = te0.lerp(&te1, u);
                    on_skin(le.lerp(&te, v), false)
                });
            components.push(MeshComponent {
                group: ComponentGroup::LowerSkin,
                name: format!("l_skin.{:02}", bay),
                elements,
            });
        }

        // Rib boundary conditions become SPC sets
        let constraints = grid
            .boundary_conditions()
            .into_iter()
            .map(|bc| {
                let node_grid = &rib_grids[bc.rib];
                let nodes = match bc.extent {
                    BcExtent::All => {
                        let mut nodes: Vec<usize> =
                            node_grid.iter().flatten().copied().collect();
                        nodes.sort_unstable();
                        nodes.dedup();
                        nodes
                    }
                    BcExtent::Edge => perimeter_nodes(node_grid),
                };
                SpcSet {
                    dofs: bc.dofs,
                    nodes,
                }
            })
            .collect();

        Ok(WingboxMesh {
            order: self.order,
            nodes: pool.nodes,
            components,
            constraints,
        })
    }
}

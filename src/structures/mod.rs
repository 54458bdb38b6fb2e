//! Wingbox structural model: rib/spar grid, shell mesh, and quality metrics.
//!
//! The wingbox is described by a (ribs x spars) matrix of station
//! coordinates on the spar lines. The shell mesher builds one rib panel
//! per station clipped to the spar box and the local skin heights, spar
//! webs per bay, and upper/lower skins per bay, welds coincident nodes,
//! and tags every element with its component group (the names the flight
//! points' failure groups reference).
//!
//! # Example
//!
//! ```
//! use stw_gen::airfoil::naca4;
//! use stw_gen::geometry::simple_transonic_wing;
//! use stw_gen::oml::WingLoft;
//! use stw_gen::structures::{WingboxGrid, WingboxMesher};
//!
//! let geometry = simple_transonic_wing();
//! let foil = naca4("0012", 101).unwrap();
//! let loft = WingLoft::new(&geometry.wing, &[foil.clone(), foil]).unwrap();
//!
//! let grid = WingboxGrid::new(&geometry.wing, &geometry.wingbox);
//! let mesher = WingboxMesher::default().with_counts(5, 2, 2);
//! let mesh = mesher.mesh(&grid, &loft).unwrap();
//! assert!(mesh.n_elements() > 0);
//! ```

mod grid;
mod level;
mod mesher;
mod order;
mod quality;

pub use grid::{BcExtent, RibBoundaryCondition, WingboxGrid};
pub use level::WingboxLevel;
pub use mesher::{
    ComponentGroup, MeshComponent, WingboxMesh, WingboxMeshError, WingboxMesher,
};
pub use order::ElementOrder;
pub use quality::{GroupQuality, MeshQualityReport};

//! # stw-gen
//!
//! Generator for the Simple Transonic Wing aeroelastic benchmark archive.
//!
//! This crate builds every repository-owned artifact of the benchmark
//! from first principles:
//! - Baseline aircraft geometry (wing planform, tails, nacelle, fuselage,
//!   wingbox layout)
//! - Airfoil handling (NACA 4-digit generation, Selig files, resampling,
//!   blunt trailing edges)
//! - The ruled OML loft and structured surface meshes
//! - Fitted FFD control lattices (basic and advanced layouts, three
//!   resolutions)
//! - The CFD mesh level schedule with per-level surfaces and extrusion
//!   option sets
//! - Wingbox shell meshes as Nastran bulk data, at three refinement
//!   levels and three element orders
//! - Aircraft specification and flight point tables, plus the Breguet
//!   mission performance analysis they feed
//!
//! The [`pipeline`] module ties the steps together and writes the whole
//! archive in one call.

pub mod airfoil;
pub mod ffd;
pub mod geometry;
pub mod io;
pub mod meshing;
pub mod oml;
pub mod performance;
pub mod pipeline;
pub mod specs;
pub mod structures;
pub mod types;

// Re-export the types most users touch
pub use airfoil::{Airfoil, naca4};
pub use io::{read_airfoil_dat, read_plot3d, write_plot3d};
pub use ffd::{FfdLattice, FfdLayout, FfdResolution, Margins, fit_lattice};
pub use geometry::{AircraftGeometry, WingPlanform, simple_transonic_wing};
pub use meshing::{ExtrusionOptions, MeshLevel};
pub use oml::{SpanSpacing, SurfaceMesh, WingLoft};
pub use performance::{MissionAnalysis, MissionPerformance, PointLoads};
pub use pipeline::{Pipeline, PipelineConfig, PipelineReport};
pub use specs::{AircraftSpecs, FlightPoint, FlightPointSet, isa_atmosphere};
pub use structures::{
    ElementOrder, WingboxGrid, WingboxLevel, WingboxMesh, WingboxMesher,
};
pub use types::{Axis, AxisFrame, ChordFraction, Eta, Point3};

//! File format writers and readers for the archived artifacts.
//!
//! - Plot3D multi-block ASCII `.xyz` (writer + reader) for surface meshes
//!   and FFD lattices
//! - Tecplot ASCII `.dat` for visualization of surfaces, lattices, and
//!   wingbox shells
//! - ASCII STL for the lofted outer mold line
//! - Nastran small-field bulk data (`.bdf`) for the wingbox shell mesh
//! - Selig-format airfoil `.dat` reader/writer
//!
//! Specification tables and extrusion options serialize to JSON through
//! serde in their own modules; nothing here is format-aware beyond the
//! geometry containers.

pub mod airfoil_dat;
pub mod bdf;
pub mod plot3d;
pub mod stl;
pub mod tecplot;

pub use airfoil_dat::{AirfoilFileError, read_airfoil_dat, write_airfoil_dat};
pub use bdf::{BdfError, NastranComponent, NastranModel, SpcSet, write_bdf};
pub use plot3d::{Plot3dBlock, Plot3dError, read_plot3d, write_plot3d};
pub use stl::{StlError, write_stl};
pub use tecplot::{FeQuadZone, StructuredZone, TecplotError, write_fe_zones, write_structured_zones};

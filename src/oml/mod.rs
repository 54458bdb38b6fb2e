//! Outer mold line: the ruled wing loft and structured surface meshes.
//!
//! The benchmark wing is a two-section ruled surface: each definition
//! section's airfoil is resampled onto a common parametric loop, blunted
//! at the trailing edge, transformed into place, and interpolated
//! linearly in span. Structured surface meshes for CFD extrusion are
//! sampled directly from the loft.
//!
//! # Example
//!
//! ```
//! use stw_gen::airfoil::naca4;
//! use stw_gen::geometry::simple_transonic_wing;
//! use stw_gen::oml::{SpanSpacing, WingLoft};
//!
//! let geometry = simple_transonic_wing();
//! let foil = naca4("0012", 101).unwrap();
//! let loft = WingLoft::new(&geometry.wing, &[foil.clone(), foil]).unwrap();
//!
//! let mesh = loft.surface_mesh(64, 16, SpanSpacing::Linear).unwrap();
//! assert_eq!((mesh.ni, mesh.nj), (65, 17));
//! ```

mod loft;
mod surface_mesh;

pub use loft::{OmlError, WingLoft};
pub use surface_mesh::{SpanSpacing, SurfaceMesh};

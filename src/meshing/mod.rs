//! CFD mesh level schedule and extrusion option sets.
//!
//! The benchmark archives five volume-mesh levels, L3 (coarsest) to
//! L0.7 (finest). Each level owns a spacing factor, an off-wall point
//! count, a march distance, and a surface family; the crate emits the
//! per-level structured surface mesh and the JSON option set handed to
//! the hyperbolic extruder, not the volume mesh itself.

mod extrusion;
mod level;

pub use extrusion::ExtrusionOptions;
pub use level::{MeshLevel, SurfaceFamily};

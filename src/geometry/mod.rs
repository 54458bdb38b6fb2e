//! Baseline aircraft geometry definition.
//!
//! All data required to define the benchmark's outer mold line and wingbox
//! lives here; any code that works with the wing geometry should build an
//! [`AircraftGeometry`] (usually via [`simple_transonic_wing`]) and read
//! from it rather than re-declaring dimensions.
//!
//! # Example
//!
//! ```
//! use stw_gen::geometry::simple_transonic_wing;
//!
//! let geometry = simple_transonic_wing();
//! assert_eq!(geometry.wing.planform_area(), 45.5);
//! assert_eq!(geometry.wingbox.num_ribs(), 23);
//! ```

mod aircraft;
mod bodies;
mod planform;
mod tail;
mod wingbox;

pub use aircraft::{AircraftGeometry, simple_transonic_wing};
pub use bodies::{Fuselage, Nacelle};
pub use planform::{WingPlanform, WingSection};
pub use tail::TailSurface;
pub use wingbox::{SparCoords, WingboxLayout};

//! Aircraft and mission specification tables.
//!
//! The atmosphere model, the canonical flight points, and the
//! Boeing-717-derived aircraft table the mission analysis consumes. All
//! tables serialize to JSON for downstream optimization tooling.

mod aircraft;
mod atmosphere;
mod drag;
mod flight_point;

pub use aircraft::AircraftSpecs;
pub use atmosphere::{Atmosphere, isa_atmosphere, sutherland_viscosity};
pub use drag::{DragComponent, ParasiteDragBuildup};
pub use flight_point::{
    FlightPoint, FlightPointSet, sea_level_pullup, sea_level_pushdown, standard_cruise,
};

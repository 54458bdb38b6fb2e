//! Strongly-typed geometric primitives shared by every module.
//!
//! This module provides newtypes and small structured types to make APIs
//! self-documenting and prevent parameter mix-ups.
//!
//! # Design Philosophy
//!
//! - **Newtypes prevent mix-ups**: `Eta(0.5)` vs `ChordFraction(0.5)` are distinct types
//! - **Named roles over raw indices**: `AxisFrame { chord, span, vertical }`
//! - **Zero-cost abstractions**: All newtypes are `#[repr(transparent)]`
//!
//! # Example
//!
//! ```
//! use stw_gen::types::{AxisFrame, Point3, Eta};
//!
//! let frame = AxisFrame::benchmark();
//! let p = Point3::new(2.0, 7.0, 0.1);
//!
//! // Component access by aerodynamic role, not by raw axis index
//! assert_eq!(frame.span(&p), 7.0);
//! assert_eq!(frame.chord(&p), 2.0);
//!
//! let eta = Eta::new(0.5);
//! assert_eq!(eta.value(), 0.5);
//! ```

mod frame;
mod fractions;
mod point;

pub use fractions::{ChordFraction, Eta};
pub use frame::{Axis, AxisFrame};
pub use point::{Point3, linear_edge};

//! Airfoil sections and the geometry operations performed on them.
//!
//! An [`Airfoil`] is a closed-ish loop of 2D coordinates in Selig order
//! (upper trailing edge, around the leading edge, to the lower trailing
//! edge). Before lofting, every section is resampled onto a common
//! parametric loop, its trailing edge is thickened to the planform's
//! blunt-TE height, and it is scaled/rotated/translated into place.
//!
//! # Example
//!
//! ```
//! use stw_gen::airfoil::{naca4, Spacing};
//!
//! let foil = naca4("0012", 65).unwrap();
//! assert!((foil.max_thickness() - 0.12).abs() < 1e-3);
//!
//! let resampled = foil.resample(129, Spacing::Cosine).unwrap();
//! assert_eq!(resampled.coords.len(), 129);
//! ```

mod naca;
mod section;
mod spacing;
mod spline;

pub use naca::{NacaError, naca4};
pub use section::{Airfoil, AirfoilError};
pub use spacing::{Spacing, cosine_spacing, half_cosine_spacing, linear_spacing};
pub use spline::{CubicSpline, SplineError};

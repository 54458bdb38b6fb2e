//! Free-form deformation lattices fitted to the wing loft.
//!
//! The generator produces the FFD control lattices the benchmark archives;
//! embedding points in them and deforming them is downstream tooling's
//! job. A lattice is fitted by sampling the loft's vertical envelope at
//! each (chord, span) control station and padding every direction with
//! absolute and relative margins so that the whole surface is strictly
//! inside the control volume.
//!
//! # Example
//!
//! ```
//! use stw_gen::airfoil::naca4;
//! use stw_gen::ffd::{FfdLayout, FfdResolution, fit_lattice, Margins};
//! use stw_gen::geometry::simple_transonic_wing;
//! use stw_gen::oml::WingLoft;
//!
//! let geometry = simple_transonic_wing();
//! let foil = naca4("0012", 101).unwrap();
//! let loft = WingLoft::new(&geometry.wing, &[foil.clone(), foil]).unwrap();
//!
//! let res = FfdResolution::Coarse;
//! let stations = FfdLayout::Basic.stations(&geometry.wing, &geometry.wingbox, res.n_span());
//! let lattice = fit_lattice(&loft, &stations, res.n_chord(), Margins::default()).unwrap();
//! assert_eq!(lattice.n_span, 6);
//! ```

mod fitted;
mod lattice;
mod layout;

pub use fitted::{FfdError, Margins, fit_lattice};
pub use lattice::FfdLattice;
pub use layout::{FfdLayout, FfdResolution, FfdStations};

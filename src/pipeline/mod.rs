//! The archive generation pipeline.
//!
//! Lofts the wing once, then writes every artifact of the benchmark
//! archive: the OML surface (Tecplot and STL), the fitted FFD lattices,
//! the per-level CFD surface meshes with their extrusion option sets,
//! the wingbox shell meshes (Nastran and Tecplot), and the aircraft
//! specification and flight point tables.
//!
//! # Example
//!
//! ```no_run
//! use stw_gen::airfoil::naca4;
//! use stw_gen::geometry::simple_transonic_wing;
//! use stw_gen::pipeline::{Pipeline, PipelineConfig};
//!
//! let config = PipelineConfig::default().with_output_dir("output");
//! let geometry = simple_transonic_wing();
//! let foil = naca4("0012", 151).unwrap();
//! let report = Pipeline::new(config).run(&geometry, &foil).unwrap();
//! println!("{}", report.summary());
//! ```

mod config;
mod report;
mod runner;

pub use config::PipelineConfig;
pub use report::{Artifact, ArtifactKind, PipelineReport};
pub use runner::{Pipeline, PipelineError};

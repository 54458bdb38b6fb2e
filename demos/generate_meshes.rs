//! Full archive generation.
//!
//! Runs the whole pipeline with the default configuration: OML surface,
//! both FFD layouts at three resolutions, all five CFD mesh levels with
//! extrusion options, nine wingbox meshes, and the specification tables.
//!
//! Run with: `cargo run --release --example generate_meshes`

use stw_gen::airfoil::naca4;
use stw_gen::geometry::simple_transonic_wing;
use stw_gen::pipeline::{Pipeline, PipelineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Simple Transonic Wing archive generation");
    println!("========================================");
    println!();

    let geometry = simple_transonic_wing();
    let airfoil = naca4("0012", 301)?;

    let config = PipelineConfig::default()
        .with_output_dir("output")
        .with_verbose(true);
    let report = Pipeline::new(config).run(&geometry, &airfoil)?;

    println!();
    println!("Archive written to ./output ({} files)", report.artifacts.len());
    Ok(())
}

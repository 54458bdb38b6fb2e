//! Baseline geometry walkthrough.
//!
//! Builds the benchmark aircraft, prints the planform numbers, lofts the
//! wing, and writes the OML surface for visualization.
//!
//! Run with: `cargo run --example generate_geometry`

use std::fs;

use stw_gen::airfoil::naca4;
use stw_gen::geometry::simple_transonic_wing;
use stw_gen::io::{StructuredZone, write_stl, write_structured_zones};
use stw_gen::oml::{SpanSpacing, WingLoft};

fn main() {
    println!("Simple Transonic Wing baseline geometry");
    println!("=======================================");

    let geometry = simple_transonic_wing();
    let wing = &geometry.wing;
    println!("Planform area:     {:.2} m^2 (half-wing)", wing.planform_area());
    println!("Semi-span:         {:.2} m", wing.semi_span);
    println!("Aspect ratio:      {:.3}", wing.aspect_ratio());
    println!("Taper ratio:       {:.3}", wing.taper_ratio());
    println!("Mean aero chord:   {:.4} m", wing.mean_aerodynamic_chord());
    println!();

    let foil = naca4("0012", 151).expect("valid NACA code");
    println!(
        "Airfoil: NACA 0012, {} points, blunt trailing edge",
        foil.coords.len()
    );

    let airfoils = vec![foil.clone(), foil];
    let loft = WingLoft::new(wing, &airfoils).expect("loft the planform");
    let mesh = loft
        .surface_mesh(96, 48, SpanSpacing::Cosine)
        .expect("sample the loft");
    println!("Lofted surface: {} x {} points", mesh.ni, mesh.nj);

    let output_dir = "output";
    fs::create_dir_all(output_dir).expect("create output directory");

    let tecplot_path = format!("{}/wing.dat", output_dir);
    write_structured_zones(
        &tecplot_path,
        "wing OML",
        &[StructuredZone {
            name: "wing".into(),
            ni: mesh.ni,
            nj: mesh.nj,
            nk: 1,
            points: mesh.points.clone(),
        }],
    )
    .expect("write Tecplot surface");
    println!("Wrote {}", tecplot_path);

    let stl_path = format!("{}/wing.stl", output_dir);
    write_stl(&stl_path, "wing", &mesh.triangulate()).expect("write STL surface");
    println!("Wrote {}", stl_path);
}

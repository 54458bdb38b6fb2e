//! Mission performance walkthrough.
//!
//! Builds the aircraft specification table, prints the three-point
//! flight point set, and evaluates the Breguet mission for a
//! representative wingbox design.
//!
//! Run with: `cargo run --example mission_performance`

use stw_gen::performance::{G, MissionAnalysis, PointLoads};
use stw_gen::specs::{AircraftSpecs, FlightPointSet};
use stw_gen::geometry::simple_transonic_wing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Simple Transonic Wing mission performance");
    println!("=========================================");
    println!();

    let geometry = simple_transonic_wing();
    let specs = AircraftSpecs::boeing_717(&geometry);
    println!("Reference area:    {:.1} m^2", specs.ref_area);
    println!("Reference MTOW:    {:.0} kg", specs.ref_mtow);
    println!("Design range:      {:.0} km", specs.range / 1e3);
    println!("Airframe drag CD0: {:.5}", specs.extra_drag_coeff);
    println!();

    let points = FlightPointSet::ThreePoint.points();
    println!("Flight points:");
    for point in &points {
        println!(
            "  {:<28} M {:.3}  h {:>7.0} m  n {:+.1}",
            point.name, point.mach, point.altitude, point.load_factor
        );
    }
    println!();

    // Representative design: 3 t wingbox, 18 m^3 box volume, cruise
    // trimmed near 47 t at L/D 17
    let wingbox_mass = 3000.0;
    let wingbox_volume = 18.0;
    let cruise_lift = 47e3 * G / 2.0;
    let loads = [
        PointLoads {
            lift: cruise_lift,
            drag: cruise_lift / 17.0,
        },
        PointLoads {
            lift: 45e3 * G * 2.5 / 2.0,
            drag: 4e4,
        },
        PointLoads {
            lift: -45e3 * G / 2.0,
            drag: 2e4,
        },
    ];

    let analysis = MissionAnalysis::new(&specs, &points);
    let result = analysis.evaluate(wingbox_mass, wingbox_volume, &loads)?;

    println!("Wing mass:         {:>9.1} kg", result.wing_mass);
    println!("Landing mass:      {:>9.1} kg", result.landing_mass);
    if let Some(cruise) = &result.cruise {
        println!("Takeoff mass:      {:>9.1} kg", cruise.takeoff_mass);
        println!("Fuel burn:         {:>9.1} kg", cruise.fuel_burn);
        println!("Mid-cruise mass:   {:>9.1} kg", cruise.mid_cruise_mass);
        println!("Tank usage:        {:>9.3}", cruise.fuel_tank_usage);
        println!("Wing loading:      {:>9.1} kg/m^2", cruise.wing_loading);
    }
    println!();
    println!("Lift residuals (2L - n m g):");
    for residual in &result.lift_residuals {
        println!("  {:<28} {:>12.1} N", residual.name, residual.imbalance);
    }
    Ok(())
}

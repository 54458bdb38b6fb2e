//! Parasite drag buildup for the non-wing airframe.

use crate::geometry::AircraftGeometry;

use super::flight_point::FlightPoint;

/// One component's entry in the drag buildup.
#[derive(Clone, Debug)]
pub struct DragComponent {
    pub name: &'static str,
    /// Flat-plate skin friction coefficient.
    pub cf: f64,
    /// Form factor.
    pub form_factor: f64,
    /// Interference factor.
    pub interference: f64,
    /// Wetted area in square metres (all instances combined).
    pub wetted_area: f64,
}

impl DragComponent {
    /// Equivalent flat-plate drag area Cf * FF * Q * S_wet in m^2.
    pub fn drag_area(&self) -> f64 {
        self.cf * self.form_factor * self.interference * self.wetted_area
    }
}

/// Raymer component parasite drag buildup, wing excluded.
///
/// Skin friction blends laminar and turbulent flat-plate coefficients by
/// the component's laminar run fraction; form factors follow Raymer's
/// body and surface formulas. The wing itself is excluded because its
/// drag comes from the CFD analysis this table accompanies.
#[derive(Clone, Debug)]
pub struct ParasiteDragBuildup {
    pub components: Vec<DragComponent>,
    /// Full-wing reference area in square metres.
    pub ref_area: f64,
}

/// Laminar run fractions (Raymer table 12.4).
const FUSELAGE_LAMINAR_FRAC: f64 = 0.05;
const TAIL_LAMINAR_FRAC: f64 = 0.1;

/// Interference factor for a clean tail.
const Q_TAIL: f64 = 1.03;

/// Assumed tail thickness ratio and max-thickness location.
const TAIL_THICKNESS: f64 = 0.1;
const TAIL_MAX_THICK_LOC: f64 = 0.5;

const NUM_ENGINES: f64 = 2.0;

/// Turbulent flat-plate skin friction with compressibility correction.
fn cf_turbulent(reynolds: f64, mach: f64) -> f64 {
    0.455 / (reynolds.log10().powf(2.58) * (1.0 + 0.144 * mach * mach).powf(0.65))
}

/// Laminar flat-plate skin friction.
fn cf_laminar(reynolds: f64) -> f64 {
    1.328 / reynolds.sqrt()
}

/// Skin friction blended by the laminar run fraction.
fn cf_blended(reynolds: f64, mach: f64, laminar_frac: f64) -> f64 {
    laminar_frac * cf_laminar(reynolds) + (1.0 - laminar_frac) * cf_turbulent(reynolds, mach)
}

/// Lifting-surface form factor (Raymer eq 12.30) with the compressible
/// sweep correction.
fn surface_form_factor(mach: f64, sweep_deg: f64) -> f64 {
    let tc = TAIL_THICKNESS;
    let shape = 1.0 + 0.6 / TAIL_MAX_THICK_LOC * tc + 100.0 * tc.powi(4);
    shape * 1.34 * mach.powf(0.18) * sweep_deg.to_radians().cos().powf(0.28)
}

impl ParasiteDragBuildup {
    /// Build the table at a flight condition, normally standard cruise.
    pub fn compute(geometry: &AircraftGeometry, condition: &FlightPoint) -> Self {
        let mach = condition.mach;
        let re_per_m = condition.reynolds_per_meter();

        // Fuselage: body form factor on the slenderness ratio
        let fuselage = &geometry.fuselage;
        let f_fus = fuselage.fineness_ratio();
        let fuselage_component = DragComponent {
            name: "fuselage",
            cf: cf_blended(re_per_m * fuselage.length, mach, FUSELAGE_LAMINAR_FRAC),
            form_factor: 1.0 + 60.0 / f_fus.powi(3) + f_fus / 400.0,
            interference: 1.0,
            wetted_area: fuselage.wetted_area(),
        };

        // Tails: both sides of the exposed planform, thickness allowance
        let tail_component = |name: &'static str, area: f64, mac: f64, sweep_deg: f64| {
            DragComponent {
                name,
                cf: cf_blended(re_per_m * mac, mach, TAIL_LAMINAR_FRAC),
                form_factor: surface_form_factor(mach, sweep_deg),
                interference: Q_TAIL,
                wetted_area: 2.0 * area * (1.0 + 0.25 * TAIL_THICKNESS),
            }
        };
        let h_tail = tail_component(
            "h_tail",
            2.0 * geometry.h_tail.planform_area(),
            geometry.h_tail.mean_aerodynamic_chord(),
            geometry.h_tail.sweep_deg,
        );
        let v_tail = tail_component(
            "v_tail",
            geometry.v_tail.planform_area(),
            geometry.v_tail.mean_aerodynamic_chord(),
            geometry.v_tail.sweep_deg,
        );

        // Nacelles: the 1.3 accounts for pylon mounting within one
        // diameter of the fuselage (Raymer sec 12.5.5)
        let nacelle = &geometry.nacelle;
        let nacelle_component = DragComponent {
            name: "nacelles",
            cf: cf_turbulent(re_per_m * nacelle.length, mach),
            form_factor: (1.0 + 0.35 / nacelle.fineness_ratio()) * 1.3,
            interference: 1.0,
            wetted_area: NUM_ENGINES * nacelle.wetted_area(),
        };

        Self {
            components: vec![fuselage_component, h_tail, v_tail, nacelle_component],
            ref_area: 2.0 * geometry.wing.planform_area(),
        }
    }

    /// Total parasite drag coefficient over the wing reference area.
    pub fn cd0(&self) -> f64 {
        self.components.iter().map(DragComponent::drag_area).sum::<f64>() / self.ref_area
    }
}

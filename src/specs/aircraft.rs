//! The aircraft specification table.

use serde::{Deserialize, Serialize};

use crate::geometry::AircraftGeometry;

use super::drag::ParasiteDragBuildup;
use super::flight_point::standard_cruise;

/// The Boeing-717-derived aircraft and mission table.
///
/// Keys serialize in the archive's camelCase spelling so the JSON table
/// matches what downstream optimization tooling reads. Masses in kg,
/// lengths in metres, areas in square metres, angles in radians.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftSpecs {
    /// Half-wing reference area.
    pub ref_area: f64,
    /// Wing mean aerodynamic chord.
    pub ref_chord: f64,
    /// Maximum takeoff mass.
    #[serde(rename = "refMTOW")]
    pub ref_mtow: f64,
    /// Design range in metres.
    pub range: f64,
    pub payload_mass: f64,
    pub airframe_mass: f64,
    pub reserve_fuel_mass: f64,
    /// Fraction of the wingbox volume usable for fuel.
    pub wingbox_fuel_volume_fraction: f64,
    /// Auxiliary (non-wingbox) tank volume in m^3.
    pub aux_fuel_volume: f64,
    /// Non-wing parasite drag coefficient over the full-wing area.
    pub extra_drag_coeff: f64,
    /// Thrust-specific fuel consumption in 1/s (kg per N-s times g).
    pub tsfc: f64,
    /// Fuel density in kg/m^3.
    pub fuel_density: f64,
    /// Maximum allowable wing loading in kg/m^2.
    pub max_wing_loading: f64,
    /// Climb angle in radians.
    pub climb_angle: f64,
    /// Climb speed in m/s.
    pub climb_speed: f64,
    /// Climb ground range in metres.
    pub climb_range: f64,
}

impl AircraftSpecs {
    /// The benchmark table, derived from the high gross weight Boeing 717.
    ///
    /// Reference area and chord come from the wing geometry; the extra
    /// drag coefficient comes from the parasite buildup at standard
    /// cruise; the climb angle is what reaching cruise altitude over the
    /// climb ground range implies.
    pub fn boeing_717(geometry: &AircraftGeometry) -> Self {
        const MILE: f64 = 1609.34;

        let cruise = standard_cruise();
        let climb_range = 180.0 * MILE;

        Self {
            ref_area: geometry.wing.planform_area(),
            ref_chord: geometry.wing.mean_aerodynamic_chord(),
            ref_mtow: 55e3,
            range: 3815e3,
            payload_mass: 14.5e3,
            airframe_mass: 25e3,
            reserve_fuel_mass: 2e3,
            wingbox_fuel_volume_fraction: 0.85,
            aux_fuel_volume: 2.763,
            extra_drag_coeff: ParasiteDragBuildup::compute(geometry, &cruise).cd0(),
            tsfc: 18.1e-6 * 9.81,
            fuel_density: 804.0,
            max_wing_loading: 600.0,
            climb_angle: (cruise.altitude / climb_range).atan(),
            climb_speed: 350.0 / 2.25,
            climb_range,
        }
    }
}

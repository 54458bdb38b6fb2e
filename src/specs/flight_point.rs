//! Flight point definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::atmosphere::{Atmosphere, isa_atmosphere, sutherland_viscosity};

/// One flight condition with its structural sizing attributes.
///
/// The aerodynamic state (Mach, altitude, angle of attack) is what an
/// analysis solver needs; the load factor, fuel fraction, and failure
/// groups are what the structural sizing problem built on top of it
/// needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightPoint {
    /// Unique name; mission analysis treats any name containing
    /// "cruise" as a cruise segment.
    pub name: String,
    pub mach: f64,
    /// Altitude in metres.
    pub altitude: f64,
    /// Angle of attack in degrees.
    #[serde(rename = "alpha")]
    pub alpha_deg: f64,
    /// Load factor in g.
    #[serde(rename = "loadFactor")]
    pub load_factor: f64,
    /// Fraction of the total fuel mass carried at this point.
    #[serde(rename = "fuelFraction")]
    pub fuel_fraction: f64,
    /// Wingbox component groups with failure constraints at this point.
    #[serde(rename = "failureGroups")]
    pub failure_groups: Vec<String>,
    /// Aerodynamic functions evaluated at this point.
    #[serde(rename = "evalFuncs")]
    pub eval_funcs: Vec<String>,
}

impl FlightPoint {
    /// ISA state at the point's altitude.
    pub fn atmosphere(&self) -> Atmosphere {
        isa_atmosphere(self.altitude)
    }

    /// True airspeed in m/s.
    pub fn true_airspeed(&self) -> f64 {
        self.mach * self.atmosphere().speed_of_sound
    }

    /// Dynamic pressure in pascals.
    pub fn dynamic_pressure(&self) -> f64 {
        let atm = self.atmosphere();
        let v = self.mach * atm.speed_of_sound;
        0.5 * atm.density * v * v
    }

    /// Unit Reynolds number in 1/m.
    pub fn reynolds_per_meter(&self) -> f64 {
        let atm = self.atmosphere();
        atm.density * self.true_airspeed() / sutherland_viscosity(atm.temperature)
    }
}

/// The functions every canonical point evaluates.
fn standard_eval_funcs() -> Vec<String> {
    ["lift", "drag", "cl", "cd"].map(String::from).to_vec()
}

/// Sea-level maneuver Mach: the VA calibrated airspeed boosted 15% to
/// stay clear of CL max.
const MANEUVER_MACH: f64 = 0.398 * 1.15;

/// Standard cruise: M 0.77 at 10.4 km.
pub fn standard_cruise() -> FlightPoint {
    FlightPoint {
        name: "cruise".into(),
        mach: 0.77,
        altitude: 10.4e3,
        alpha_deg: 3.874,
        load_factor: 1.0,
        fuel_fraction: 1.0,
        failure_groups: Vec::new(),
        eval_funcs: standard_eval_funcs(),
    }
}

/// Sea-level low-speed 2.5 g pull-up, flown with zero fuel so the fuel's
/// inertial relief is not counted on. All four component groups carry
/// failure constraints.
pub fn sea_level_pullup() -> FlightPoint {
    FlightPoint {
        name: "mnver_sealevel_va_pullup".into(),
        mach: MANEUVER_MACH,
        altitude: 0.0,
        alpha_deg: 10.3,
        load_factor: 2.5,
        fuel_fraction: 0.0,
        failure_groups: ["l_skin", "u_skin", "spar", "rib"].map(String::from).to_vec(),
        eval_funcs: standard_eval_funcs(),
    }
}

/// Sea-level -1 g push-down; only the lower skin (in compression here)
/// carries a failure constraint.
pub fn sea_level_pushdown() -> FlightPoint {
    FlightPoint {
        name: "mnver_sealevel_va_pushdown".into(),
        mach: MANEUVER_MACH,
        altitude: 0.0,
        alpha_deg: -6.4,
        load_factor: -1.0,
        fuel_fraction: 0.0,
        failure_groups: vec!["l_skin".into()],
        eval_funcs: standard_eval_funcs(),
    }
}

/// Named combinations of the canonical flight points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlightPointSet {
    Cruise,
    Pullup,
    Pushdown,
    ThreePoint,
    TwoPoint,
    ManeuverOnly,
}

impl FlightPointSet {
    /// The set's key in the archived tables.
    pub fn key(&self) -> &'static str {
        match self {
            FlightPointSet::Cruise => "cruise",
            FlightPointSet::Pullup => "mnver_sealevel_va_pullup",
            FlightPointSet::Pushdown => "mnver_sealevel_va_pushdown",
            FlightPointSet::ThreePoint => "3pt",
            FlightPointSet::TwoPoint => "2pt",
            FlightPointSet::ManeuverOnly => "maneuverOnly",
        }
    }

    /// The flight points in the set, cruise first where present.
    pub fn points(&self) -> Vec<FlightPoint> {
        match self {
            FlightPointSet::Cruise => vec![standard_cruise()],
            FlightPointSet::Pullup => vec![sea_level_pullup()],
            FlightPointSet::Pushdown => vec![sea_level_pushdown()],
            FlightPointSet::ThreePoint => {
                vec![standard_cruise(), sea_level_pullup(), sea_level_pushdown()]
            }
            FlightPointSet::TwoPoint => vec![standard_cruise(), sea_level_pullup()],
            FlightPointSet::ManeuverOnly => vec![sea_level_pullup(), sea_level_pushdown()],
        }
    }

    /// All sets.
    pub fn all() -> [FlightPointSet; 6] {
        [
            FlightPointSet::Cruise,
            FlightPointSet::Pullup,
            FlightPointSet::Pushdown,
            FlightPointSet::ThreePoint,
            FlightPointSet::TwoPoint,
            FlightPointSet::ManeuverOnly,
        ]
    }
}

impl fmt::Display for FlightPointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FlightPointSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlightPointSet::all()
            .into_iter()
            .find(|set| set.key() == s)
            .ok_or_else(|| format!("unknown flight point set '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cruise_conditions() {
        let cruise = standard_cruise();
        assert_relative_eq!(cruise.mach, 0.77);
        assert_relative_eq!(cruise.atmosphere().temperature, 220.55, epsilon = 1e-6);
        // M 0.77 at 10.4 km is about 229 m/s
        assert_relative_eq!(cruise.true_airspeed(), 229.0, epsilon = 1.0);
        assert!(cruise.failure_groups.is_empty());
    }

    #[test]
    fn test_maneuver_points() {
        let pullup = sea_level_pullup();
        assert_relative_eq!(pullup.mach, 0.4577, epsilon = 1e-4);
        assert_relative_eq!(pullup.load_factor, 2.5);
        assert_relative_eq!(pullup.fuel_fraction, 0.0);
        assert_eq!(pullup.failure_groups.len(), 4);

        let pushdown = sea_level_pushdown();
        assert_relative_eq!(pushdown.load_factor, -1.0);
        assert_eq!(pushdown.failure_groups, vec!["l_skin".to_string()]);
    }

    #[test]
    fn test_dynamic_pressure_and_reynolds() {
        let pullup = sea_level_pullup();
        let v = pullup.true_airspeed();
        assert_relative_eq!(
            pullup.dynamic_pressure(),
            0.5 * 1.225 * v * v,
            max_relative = 1e-3
        );
        // Sea level unit Reynolds is around 1e7 per metre at this speed
        let re = pullup.reynolds_per_meter();
        assert!(re > 0.9e7 && re < 1.2e7, "Re/m = {:.3e}", re);
    }

    #[test]
    fn test_set_keys_round_trip() {
        for set in FlightPointSet::all() {
            assert_eq!(set.key().parse::<FlightPointSet>().unwrap(), set);
        }
        assert!("4pt".parse::<FlightPointSet>().is_err());
    }

    #[test]
    fn test_set_contents() {
        assert_eq!(FlightPointSet::ThreePoint.points().len(), 3);
        assert_eq!(FlightPointSet::TwoPoint.points()[0].name, "cruise");
        assert!(
            FlightPointSet::ManeuverOnly
                .points()
                .iter()
                .all(|p| !p.name.contains("cruise"))
        );
    }

    #[test]
    fn test_serialization_keys() {
        let json = serde_json::to_string(&standard_cruise()).unwrap();
        for key in ["\"loadFactor\"", "\"fuelFraction\"", "\"failureGroups\"", "\"alpha\""] {
            assert!(json.contains(key), "missing {}", key);
        }
    }
}

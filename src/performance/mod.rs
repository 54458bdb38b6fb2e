//! Mission performance: Breguet fuel burn, mass buildup, and the lift
//! and volume constraint values.
//!
//! The analysis back-propagates masses through the mission: the landing
//! mass follows from the wingbox mass via the wing-mass regression, the
//! cruise segment gives the cruise-start mass, and the climb segment
//! gives the takeoff mass. Fuel burn, tank usage, and wing loading only
//! exist when the flight point list contains a cruise point.

use thiserror::Error;

use crate::specs::{AircraftSpecs, FlightPoint};

/// Gravitational acceleration used by the lift constraints, in m/s^2.
pub const G: f64 = 9.81;

/// Error type for the mission analysis.
#[derive(Debug, Error)]
pub enum PerformanceError {
    /// Breguet needs a finite L/D.
    #[error("Flight point '{0}' has zero drag")]
    ZeroDrag(String),

    /// Every flight point needs a matching load entry.
    #[error("No lift/drag loads given for flight point '{0}'")]
    MissingLoads(String),
}

/// Mass at the start of a segment from the Breguet range equation,
/// extended with a climb angle term:
/// m0 = m1 * exp(R * tsfc / v * (cos(gamma) / (L/D) + sin(gamma))).
pub fn segment_initial_mass(
    lift: f64,
    drag: f64,
    final_mass: f64,
    range: f64,
    tsfc: f64,
    climb_angle: f64,
    v: f64,
) -> f64 {
    let l_over_d = (lift / drag).abs();
    final_mass * (range * tsfc / v * (climb_angle.cos() / l_over_d + climb_angle.sin())).exp()
}

/// Mid-segment mass: the geometric mean of the segment endpoint masses,
/// since the fuel-burn rate is not constant over the segment.
pub fn mid_segment_mass(initial_mass: f64, final_mass: f64) -> f64 {
    (initial_mass * final_mass).sqrt()
}

/// Total mass of one wing from the mass of one wingbox, using Elham's
/// EMWET regression.
pub fn wing_mass_from_wingbox(wingbox_mass: f64) -> f64 {
    10.147 * wingbox_mass.powf(0.8162)
}

/// Aircraft landing gross mass: both wings plus payload, airframe, and
/// the reserve fuel.
pub fn landing_gross_mass(
    wing_mass: f64,
    payload_mass: f64,
    airframe_mass: f64,
    reserve_fuel_mass: f64,
) -> f64 {
    2.0 * wing_mass + payload_mass + airframe_mass + reserve_fuel_mass
}

/// Wing drag corrected for the rest of the airframe.
pub fn corrected_drag(drag: f64, extra_drag_coeff: f64, wing_area: f64, dyn_pressure: f64) -> f64 {
    drag + 0.5 * extra_drag_coeff * wing_area * dyn_pressure
}

/// Lift constraint residual: 2 L - n m g, with half-wing lift.
pub fn lift_imbalance(lift: f64, mass: f64, load_factor: f64) -> f64 {
    2.0 * lift - mass * load_factor * G
}

/// Fraction of the available fuel tank volume a mission uses.
/// 1.0 is completely full, values above 1.0 mean the fuel does not fit.
pub fn fuel_tank_usage(
    fuel_burn: f64,
    wingbox_volume: f64,
    reserve_fuel_mass: f64,
    fuel_density: f64,
    wingbox_volume_fraction: f64,
    aux_tank_volume: f64,
) -> f64 {
    let box_volume = 2.0 * wingbox_volume_fraction * wingbox_volume;
    let fuel_volume = (fuel_burn + reserve_fuel_mass) / fuel_density - aux_tank_volume;
    fuel_volume / box_volume
}

/// Wing loading from the takeoff mass and one wing's planform area.
pub fn wing_loading(wing_area: f64, mtom: f64) -> f64 {
    mtom / (2.0 * wing_area)
}

/// Half-wing lift and drag at one flight point, in newtons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLoads {
    pub lift: f64,
    pub drag: f64,
}

/// The cruise-dependent outputs of the mission analysis.
#[derive(Clone, Copy, Debug)]
pub struct CruiseBlock {
    /// Cruise drag plus the airframe correction, in newtons.
    pub corrected_drag: f64,
    /// Mass at the start of cruise in kg.
    pub cruise_start_mass: f64,
    /// Takeoff mass in kg.
    pub takeoff_mass: f64,
    /// Mission fuel burn in kg.
    pub fuel_burn: f64,
    /// Geometric-mean mid-cruise mass in kg.
    pub mid_cruise_mass: f64,
    /// Fraction of the available tank volume used.
    pub fuel_tank_usage: f64,
    /// Takeoff wing loading in kg/m^2.
    pub wing_loading: f64,
}

/// One flight point's lift constraint residual.
#[derive(Clone, Debug)]
pub struct LiftResidual {
    pub name: String,
    /// 2 L - n m g in newtons; zero when the point is trimmed.
    pub imbalance: f64,
}

/// The assembled mission performance outputs.
#[derive(Clone, Debug)]
pub struct MissionPerformance {
    /// One wing's mass from the regression, in kg.
    pub wing_mass: f64,
    /// Landing gross mass in kg.
    pub landing_mass: f64,
    /// Present only when the flight point list has a cruise point.
    pub cruise: Option<CruiseBlock>,
    /// One residual per flight point, in input order.
    pub lift_residuals: Vec<LiftResidual>,
}

/// The mission analysis wiring.
pub struct MissionAnalysis<'a> {
    specs: &'a AircraftSpecs,
    flight_points: &'a [FlightPoint],
}

impl<'a> MissionAnalysis<'a> {
    pub fn new(specs: &'a AircraftSpecs, flight_points: &'a [FlightPoint]) -> Self {
        Self {
            specs,
            flight_points,
        }
    }

    /// Evaluate the mission for one design: a wingbox mass and volume
    /// plus the half-wing loads at every flight point (same order as the
    /// flight point list).
    ///
    /// The cruise lift constraint targets the mid-cruise mass; maneuver
    /// points target the landing mass plus their fuel fraction of the
    /// mission fuel burn.
    pub fn evaluate(
        &self,
        wingbox_mass: f64,
        wingbox_volume: f64,
        loads: &[PointLoads],
    ) -> Result<MissionPerformance, PerformanceError> {
        let specs = self.specs;

        let wing_mass = wing_mass_from_wingbox(wingbox_mass);
        let landing_mass = landing_gross_mass(
            wing_mass,
            specs.payload_mass,
            specs.airframe_mass,
            specs.reserve_fuel_mass,
        );

        let point_loads = |i: usize| -> Result<PointLoads, PerformanceError> {
            loads
                .get(i)
                .copied()
                .ok_or_else(|| PerformanceError::MissingLoads(self.flight_points[i].name.clone()))
        };

        let cruise_index = self
            .flight_points
            .iter()
            .position(|p| p.name.to_lowercase().contains("cruise"));

        let cruise = match cruise_index {
            Some(i) => {
                let point = &self.flight_points[i];
                let loads = point_loads(i)?;
                if loads.drag == 0.0 {
                    return Err(PerformanceError::ZeroDrag(point.name.clone()));
                }

                let drag = corrected_drag(
                    loads.drag,
                    specs.extra_drag_coeff,
                    specs.ref_area,
                    point.dynamic_pressure(),
                );

                // Cruise back-propagates from the landing mass, the climb
                // segment from the cruise-start mass at the climb speed
                let cruise_start_mass = segment_initial_mass(
                    loads.lift,
                    drag,
                    landing_mass,
                    specs.range,
                    specs.tsfc,
                    0.0,
                    point.true_airspeed(),
                );
                let takeoff_mass = segment_initial_mass(
                    loads.lift,
                    drag,
                    cruise_start_mass,
                    specs.climb_range,
                    specs.tsfc,
                    specs.climb_angle,
                    specs.climb_speed,
                );
                let fuel_burn = takeoff_mass - landing_mass;

                Some(CruiseBlock {
                    corrected_drag: drag,
                    cruise_start_mass,
                    takeoff_mass,
                    fuel_burn,
                    mid_cruise_mass: mid_segment_mass(cruise_start_mass, landing_mass),
                    fuel_tank_usage: fuel_tank_usage(
                        fuel_burn,
                        wingbox_volume,
                        specs.reserve_fuel_mass,
                        specs.fuel_density,
                        specs.wingbox_fuel_volume_fraction,
                        specs.aux_fuel_volume,
                    ),
                    wing_loading: wing_loading(specs.ref_area, takeoff_mass),
                })
            }
            None => None,
        };

        let mut lift_residuals = Vec::with_capacity(self.flight_points.len());
        for (i, point) in self.flight_points.iter().enumerate() {
            let loads = point_loads(i)?;
            let target_mass = if point.name.to_lowercase().contains("cruise") {
                match &cruise {
                    Some(block) => block.mid_cruise_mass,
                    None => landing_mass,
                }
            } else {
                let fuel_mass = match (&cruise, point.fuel_fraction) {
                    (Some(block), f) if f != 0.0 => f * block.fuel_burn,
                    _ => 0.0,
                };
                landing_mass + fuel_mass
            };
            lift_residuals.push(LiftResidual {
                name: point.name.clone(),
                imbalance: lift_imbalance(loads.lift, target_mass, point.load_factor),
            });
        }

        Ok(MissionPerformance {
            wing_mass,
            landing_mass,
            cruise,
            lift_residuals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::simple_transonic_wing;
    use crate::specs::FlightPointSet;
    use approx::assert_relative_eq;

    fn baseline_specs() -> AircraftSpecs {
        AircraftSpecs::boeing_717(&simple_transonic_wing())
    }

    #[test]
    fn test_breguet_level_segment() {
        // L/D 18, 1000 km at 230 m/s
        let m0 = segment_initial_mass(18.0, 1.0, 40e3, 1000e3, 18.1e-6 * 9.81, 0.0, 230.0);
        let expected = 40e3 * (1000e3_f64 * 18.1e-6 * 9.81 / 230.0 / 18.0).exp();
        assert_relative_eq!(m0, expected, max_relative = 1e-12);
        assert!(m0 > 40e3);
    }

    #[test]
    fn test_breguet_climb_term() {
        // A climbing segment burns more than a level one
        let level = segment_initial_mass(18.0, 1.0, 40e3, 300e3, 1.8e-4, 0.0, 155.0);
        let climb = segment_initial_mass(18.0, 1.0, 40e3, 300e3, 1.8e-4, 0.05, 155.0);
        assert!(climb > level);
    }

    #[test]
    fn test_wing_mass_regression() {
        // Elham regression at a representative wingbox mass
        assert_relative_eq!(
            wing_mass_from_wingbox(3000.0),
            10.147 * 3000f64.powf(0.8162),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_mid_segment_mass_between_endpoints() {
        let mid = mid_segment_mass(50e3, 45e3);
        assert!(mid > 45e3 && mid < 50e3);
        assert_relative_eq!(mid, (50e3f64 * 45e3).sqrt(), max_relative = 1e-12);
    }

    fn cruise_loads() -> PointLoads {
        // Half-wing lift for roughly 48 t at 1 g, L/D about 18
        PointLoads {
            lift: 48e3 * G / 2.0,
            drag: 48e3 * G / 2.0 / 18.0,
        }
    }

    #[test]
    fn test_three_point_mission() {
        let specs = baseline_specs();
        let points = FlightPointSet::ThreePoint.points();
        let analysis = MissionAnalysis::new(&specs, &points);

        let maneuver = PointLoads {
            lift: 44e3 * G * 2.5 / 2.0,
            drag: 30e3,
        };
        let result = analysis
            .evaluate(3000.0, 18.0, &[cruise_loads(), maneuver, maneuver])
            .unwrap();

        let cruise = result.cruise.expect("cruise point present");
        assert!(cruise.takeoff_mass > cruise.cruise_start_mass);
        assert!(cruise.cruise_start_mass > result.landing_mass);
        assert_relative_eq!(
            cruise.fuel_burn,
            cruise.takeoff_mass - result.landing_mass,
            max_relative = 1e-12
        );
        assert!(cruise.mid_cruise_mass > result.landing_mass);
        assert!(cruise.mid_cruise_mass < cruise.cruise_start_mass);
        assert!(cruise.fuel_tank_usage > 0.0);
        assert!(cruise.wing_loading > 0.0);
        assert_eq!(result.lift_residuals.len(), 3);
    }

    #[test]
    fn test_maneuver_only_has_no_cruise_block() {
        let specs = baseline_specs();
        let points = FlightPointSet::ManeuverOnly.points();
        let analysis = MissionAnalysis::new(&specs, &points);
        let loads = PointLoads {
            lift: 5e5,
            drag: 5e4,
        };
        let result = analysis.evaluate(3000.0, 18.0, &[loads, loads]).unwrap();
        assert!(result.cruise.is_none());
        assert_eq!(result.lift_residuals.len(), 2);
    }

    #[test]
    fn test_trimmed_maneuver_residual_is_zero() {
        let specs = baseline_specs();
        let points = FlightPointSet::Pushdown.points();
        let analysis = MissionAnalysis::new(&specs, &points);

        let wing_mass = wing_mass_from_wingbox(3000.0);
        let landing = landing_gross_mass(
            wing_mass,
            specs.payload_mass,
            specs.airframe_mass,
            specs.reserve_fuel_mass,
        );
        // Push-down at -1 g with exactly the trim lift
        let loads = PointLoads {
            lift: landing * -1.0 * G / 2.0,
            drag: 1e4,
        };
        let result = analysis.evaluate(3000.0, 18.0, &[loads]).unwrap();
        assert_relative_eq!(result.lift_residuals[0].imbalance, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_drag_rejected() {
        let specs = baseline_specs();
        let points = FlightPointSet::Cruise.points();
        let analysis = MissionAnalysis::new(&specs, &points);
        let loads = PointLoads {
            lift: 2e5,
            drag: 0.0,
        };
        assert!(matches!(
            analysis.evaluate(3000.0, 18.0, &[loads]),
            Err(PerformanceError::ZeroDrag(_))
        ));
    }

    #[test]
    fn test_missing_loads_rejected() {
        let specs = baseline_specs();
        let points = FlightPointSet::TwoPoint.points();
        let analysis = MissionAnalysis::new(&specs, &points);
        assert!(matches!(
            analysis.evaluate(3000.0, 18.0, &[cruise_loads()]),
            Err(PerformanceError::MissingLoads(_))
        ));
    }
}

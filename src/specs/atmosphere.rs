//! International Standard Atmosphere.

/// Sea-level standard temperature in kelvin.
const T0: f64 = 288.15;
/// Sea-level standard pressure in pascals.
const P0: f64 = 101_325.0;
/// Tropospheric lapse rate in K/m.
const LAPSE: f64 = 0.0065;
/// Tropopause altitude in metres.
const TROPOPAUSE: f64 = 11_000.0;
/// Model ceiling in metres.
const CEILING: f64 = 20_000.0;
/// Standard gravity in m/s^2.
const G0: f64 = 9.80665;
/// Specific gas constant of air in J/(kg K).
const R_AIR: f64 = 287.058;
/// Ratio of specific heats.
const GAMMA: f64 = 1.4;

/// Static atmospheric state at one altitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atmosphere {
    /// Temperature in kelvin.
    pub temperature: f64,
    /// Static pressure in pascals.
    pub pressure: f64,
    /// Density in kg/m^3.
    pub density: f64,
    /// Speed of sound in m/s.
    pub speed_of_sound: f64,
}

/// ISA two-layer model: linear troposphere plus the isothermal lower
/// stratosphere, valid to 20 km.
///
/// # Example
///
/// ```
/// use stw_gen::specs::isa_atmosphere;
///
/// let cruise = isa_atmosphere(10.4e3);
/// assert!((cruise.temperature - 220.55).abs() < 1e-6);
/// ```
pub fn isa_atmosphere(altitude: f64) -> Atmosphere {
    assert!(
        (0.0..=CEILING).contains(&altitude),
        "altitude {} m outside the 0-20 km model range",
        altitude
    );

    let (temperature, pressure) = if altitude <= TROPOPAUSE {
        let t = T0 - LAPSE * altitude;
        let p = P0 * (t / T0).powf(G0 / (LAPSE * R_AIR));
        (t, p)
    } else {
        let t11 = T0 - LAPSE * TROPOPAUSE;
        let p11 = P0 * (t11 / T0).powf(G0 / (LAPSE * R_AIR));
        let p = p11 * (-G0 * (altitude - TROPOPAUSE) / (R_AIR * t11)).exp();
        (t11, p)
    };

    Atmosphere {
        temperature,
        pressure,
        density: pressure / (R_AIR * temperature),
        speed_of_sound: (GAMMA * R_AIR * temperature).sqrt(),
    }
}

/// Sutherland's law for the dynamic viscosity of air, in Pa s.
pub fn sutherland_viscosity(temperature: f64) -> f64 {
    const MU_REF: f64 = 1.716e-5;
    const T_REF: f64 = 273.15;
    const S: f64 = 110.4;
    MU_REF * (temperature / T_REF).powf(1.5) * (T_REF + S) / (temperature + S)
}

//! Nacelle and fuselage definitions.

use std::f64::consts::PI;

/// Engine nacelle, modelled as a cylinder for wetted-area purposes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nacelle {
    /// Length in metres.
    pub length: f64,
    /// Diameter in metres.
    pub diameter: f64,
}

impl Nacelle {
    /// The benchmark's nacelle.
    pub fn baseline() -> Self {
        Self {
            length: 5.865,
            diameter: 1.8,
        }
    }

    /// Cylindrical wetted area: pi * d * l.
    pub fn wetted_area(&self) -> f64 {
        PI * self.diameter * self.length
    }

    /// Fineness ratio l/d.
    pub fn fineness_ratio(&self) -> f64 {
        self.length / self.diameter
    }
}

/// Fuselage, with a deliberately rough wetted-area estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fuselage {
    /// Length in metres.
    pub length: f64,
    /// Width in metres.
    pub width: f64,
}

impl Fuselage {
    /// The benchmark's fuselage (length given as 112 ft in the source data).
    pub fn baseline() -> Self {
        Self {
            length: 112.0 * 0.3048,
            width: 3.4,
        }
    }

    /// Approximate wetted area: l * pi * w.
    pub fn wetted_area(&self) -> f64 {
        self.length * PI * self.width
    }

    /// Fineness ratio l/w.
    pub fn fineness_ratio(&self) -> f64 {
        self.length / self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nacelle_wetted_area() {
        let nacelle = Nacelle::baseline();
        assert_relative_eq!(nacelle.wetted_area(), PI * 1.8 * 5.865, epsilon = 1e-12);
    }

    #[test]
    fn test_fuselage_wetted_area() {
        let fuselage = Fuselage::baseline();
        assert_relative_eq!(
            fuselage.wetted_area(),
            112.0 * 0.3048 * PI * 3.4,
            epsilon = 1e-12
        );
    }
}

//! Tail surface definitions.

/// A trapezoidal tail surface (horizontal or vertical stabilizer).
///
/// Only the quantities the drag buildup and specification table need are
/// derived; the tails are not lofted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TailSurface {
    /// Root chord in metres.
    pub root_chord: f64,
    /// Tip chord in metres.
    pub tip_chord: f64,
    /// Semi-span (horizontal tail) or height (vertical tail) in metres.
    pub semi_span: f64,
    /// Quarter-chord sweep in degrees.
    pub sweep_deg: f64,
}

impl TailSurface {
    /// The benchmark's horizontal tail.
    pub fn horizontal() -> Self {
        Self {
            root_chord: 3.25,
            tip_chord: 1.22,
            semi_span: 6.5,
            sweep_deg: 30.0,
        }
    }

    /// The benchmark's vertical tail (defined in feet in the source data).
    pub fn vertical() -> Self {
        const FT: f64 = 0.3048;
        Self {
            root_chord: 15.3 * FT,
            tip_chord: 12.12 * FT,
            semi_span: 15.72 * FT,
            sweep_deg: 37.0,
        }
    }

    /// Trapezoidal planform area of one panel in square metres.
    pub fn planform_area(&self) -> f64 {
        self.semi_span * (self.root_chord + self.tip_chord) * 0.5
    }

    /// Standard trapezoid mean aerodynamic chord in metres.
    pub fn mean_aerodynamic_chord(&self) -> f64 {
        let (cr, ct) = (self.root_chord, self.tip_chord);
        (2.0 / 3.0) * (cr + ct - cr * ct / (cr + ct))
    }

    /// Full-surface aspect ratio from the one-panel area: 2 b^2 / S.
    pub fn aspect_ratio(&self) -> f64 {
        2.0 * self.semi_span * self.semi_span / self.planform_area()
    }

    /// Tip chord over root chord.
    pub fn taper_ratio(&self) -> f64 {
        self.tip_chord / self.root_chord
    }
}

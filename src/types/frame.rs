//! Coordinate axes and the aerodynamic axis frame.

use std::fmt;

use super::Point3;

/// A Cartesian coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Zero-based index of the axis (X=0, Y=1, Z=2).
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Assignment of aerodynamic roles to coordinate axes.
///
/// All geometry code accesses coordinates through this frame rather than
/// hard-coding x/y/z, so the axis convention lives in exactly one place.
///
/// # Example
///
/// ```
/// use stw_gen::types::{AxisFrame, Point3};
///
/// let frame = AxisFrame::benchmark();
/// let mut p = Point3::zero();
/// frame.set_span(&mut p, 14.0);
/// assert_eq!(p.y, 14.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisFrame {
    /// Axis of the chordwise direction.
    pub chord: Axis,
    /// Axis of the spanwise direction.
    pub span: Axis,
    /// Axis of the vertical (lift) direction.
    pub vertical: Axis,
}

impl AxisFrame {
    /// The benchmark convention: chord along X, span along Y, vertical along Z.
    pub const fn benchmark() -> Self {
        Self {
            chord: Axis::X,
            span: Axis::Y,
            vertical: Axis::Z,
        }
    }

    /// Chordwise component of a point.
    pub fn chord(&self, p: &Point3) -> f64 {
        p.component(self.chord)
    }

    /// Spanwise component of a point.
    pub fn span(&self, p: &Point3) -> f64 {
        p.component(self.span)
    }

    /// Vertical component of a point.
    pub fn vertical(&self, p: &Point3) -> f64 {
        p.component(self.vertical)
    }

    /// Set the chordwise component of a point.
    pub fn set_chord(&self, p: &mut Point3, value: f64) {
        *p.component_mut(self.chord) = value;
    }

    /// Set the spanwise component of a point.
    pub fn set_span(&self, p: &mut Point3, value: f64) {
        *p.component_mut(self.span) = value;
    }

    /// Set the vertical component of a point.
    pub fn set_vertical(&self, p: &mut Point3, value: f64) {
        *p.component_mut(self.vertical) = value;
    }

    /// Build a point from role components.
    pub fn point(&self, chord: f64, span: f64, vertical: f64) -> Point3 {
        let mut p = Point3::zero();
        self.set_chord(&mut p, chord);
        self.set_span(&mut p, span);
        self.set_vertical(&mut p, vertical);
        p
    }
}

impl Default for AxisFrame {
    fn default() -> Self {
        Self::benchmark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_index() {
        assert_eq!(Axis::X.index(), 0);
        assert_eq!(Axis::Y.index(), 1);
        assert_eq!(Axis::Z.index(), 2);
    }

    #[test]
    fn test_benchmark_frame_roles() {
        let frame = AxisFrame::benchmark();
        let p = frame.point(1.0, 2.0, 3.0);
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(frame.chord(&p), 1.0);
        assert_eq!(frame.span(&p), 2.0);
        assert_eq!(frame.vertical(&p), 3.0);
    }
}

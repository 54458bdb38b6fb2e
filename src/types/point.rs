//! 3D point type and linear edge sampling.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use super::Axis;

/// A point (or vector) in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Create a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Component along the given axis.
    pub fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Mutable component along the given axis.
    pub fn component_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Linear interpolation: `self + t * (other - self)`.
    pub fn lerp(&self, other: &Point3, t: f64) -> Point3 {
        *self + (*other - *self) * t
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point3) -> f64 {
        (*other - *self).norm()
    }

    /// Euclidean norm when interpreted as a vector.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Cross product when interpreted as vectors.
    pub fn cross(&self, other: &Point3) -> Point3 {
        Point3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Dot product when interpreted as vectors.
    pub fn dot(&self, other: &Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Add for Point3 {
    type Output = Point3;
    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Point3) {
        *self = *self + rhs;
    }
}

impl Sub for Point3 {
    type Output = Point3;
    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Point3 {
    fn sub_assign(&mut self, rhs: Point3) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;
    fn mul(self, rhs: f64) -> Point3 {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Point3 {
    type Output = Point3;
    fn neg(self) -> Point3 {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Sample `n` points evenly spaced from `a` to `b`, endpoints included.
///
/// The endpoints are returned exactly, not via interpolation, so chained
/// edges share identical corner coordinates.
///
/// # Panics
///
/// Panics if `n < 2`.
pub fn linear_edge(a: Point3, b: Point3, n: usize) -> Vec<Point3> {
    assert!(n >= 2, "linear_edge needs at least 2 points");
    let mut points = Vec::with_capacity(n);
    points.push(a);
    for i in 1..n - 1 {
        let t = i as f64 / (n - 1) as f64;
        points.push(a.lerp(&b, t));
    }
    points.push(b);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_midpoint() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 4.0, 6.0);
        let m = a.lerp(&b, 0.5);
        assert_relative_eq!(m.x, 1.0);
        assert_relative_eq!(m.y, 2.0);
        assert_relative_eq!(m.z, 3.0);
    }

    #[test]
    fn test_linear_edge_endpoints_exact() {
        let a = Point3::new(0.1, 0.2, 0.3);
        let b = Point3::new(1.0 / 3.0, 2.0 / 7.0, 0.9);
        let edge = linear_edge(a, b, 7);
        assert_eq!(edge.len(), 7);
        assert_eq!(edge[0], a);
        assert_eq!(edge[6], b);
    }

    #[test]
    fn test_linear_edge_spacing() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 0.0, 0.0);
        let edge = linear_edge(a, b, 4);
        for (i, p) in edge.iter().enumerate() {
            assert_relative_eq!(p.x, i as f64, epsilon = 1e-14);
        }
    }

    #[test]
    #[should_panic]
    fn test_linear_edge_too_few_points() {
        linear_edge(Point3::zero(), Point3::new(1.0, 0.0, 0.0), 1);
    }

    #[test]
    fn test_cross_product() {
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Point3::new(0.0, 0.0, 1.0));
    }
}

//! FFD control lattice container.

use crate::io::plot3d::Plot3dBlock;
use crate::types::Point3;

/// A structured FFD control lattice.
///
/// Points are stored with the chordwise index fastest, then spanwise,
/// then vertical, matching the Plot3D block the lattice is archived as.
/// The benchmark lattices always use two vertical planes.
#[derive(Clone, Debug)]
pub struct FfdLattice {
    /// Number of chordwise control sections.
    pub n_chord: usize,
    /// Number of spanwise control sections.
    pub n_span: usize,
    /// Number of vertical control planes (2 for all benchmark lattices).
    pub n_vertical: usize,
    /// Control points, chordwise index fastest.
    pub points: Vec<Point3>,
}

impl FfdLattice {
    /// Flat storage index of control point (i, j, k).
    pub fn local_index(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.n_chord && j < self.n_span && k < self.n_vertical);
        i + self.n_chord * (j + self.n_span * k)
    }

    /// Control point (i, j, k).
    pub fn point(&self, i: usize, j: usize, k: usize) -> Point3 {
        self.points[self.local_index(i, j, k)]
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the lattice is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned extent of one spanwise station: (min, max) over all
    /// chordwise and vertical control points at station `j`.
    pub fn station_extent(&self, j: usize) -> (Point3, Point3) {
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for k in 0..self.n_vertical {
            for i in 0..self.n_chord {
                let p = self.point(i, j, k);
                min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
                max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
            }
        }
        (min, max)
    }

    /// Axis-aligned extent of the whole lattice.
    pub fn extent(&self) -> (Point3, Point3) {
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &self.points {
            min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        (min, max)
    }

    /// View the lattice as a Plot3D block.
    pub fn to_plot3d(&self) -> Plot3dBlock {
        Plot3dBlock::from_points(self.n_chord, self.n_span, self.n_vertical, &self.points)
    }
}

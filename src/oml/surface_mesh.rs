//! Structured wing surface mesh.

use crate::io::plot3d::Plot3dBlock;
use crate::types::Point3;

use super::loft::OmlError;

/// Spanwise point spacing law for surface meshes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanSpacing {
    /// Evenly spaced spanwise stations.
    Linear,
    /// Stations clustered at the root and tip.
    Cosine,
}

impl SpanSpacing {
    pub(crate) fn sample(&self, n: usize) -> Vec<f64> {
        match self {
            SpanSpacing::Linear => crate::airfoil::linear_spacing(n),
            SpanSpacing::Cosine => crate::airfoil::cosine_spacing(n),
        }
    }
}

/// A structured surface mesh on the wing skin.
///
/// `i` indexes the chordwise loop (upper trailing edge around the leading
/// edge to the lower trailing edge), `j` the spanwise direction from the
/// symmetry plane to the tip. Points are stored row-major with `i` fastest.
#[derive(Clone, Debug)]
pub struct SurfaceMesh {
    /// Number of points around the chordwise loop.
    pub ni: usize,
    /// Number of spanwise points.
    pub nj: usize,
    /// Grid points, `i` fastest.
    pub points: Vec<Point3>,
}

impl SurfaceMesh {
    /// The grid point at (i, j).
    pub fn point(&self, i: usize, j: usize) -> Point3 {
        debug_assert!(i < self.ni && j < self.nj);
        self.points[j * self.ni + i]
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Keep every other point in both directions.
    ///
    /// Both point counts must be odd so the boundary points survive; the
    /// result has dimensions `(ni+1)/2 x (nj+1)/2`.
    pub fn coarsen(&self) -> Result<SurfaceMesh, OmlError> {
        if self.ni % 2 == 0 || self.nj % 2 == 0 {
            return Err(OmlError::CoarsenParity {
                ni: self.ni,
                nj: self.nj,
            });
        }
        let ni = self.ni / 2 + 1;
        let nj = self.nj / 2 + 1;
        let mut points = Vec::with_capacity(ni * nj);
        for j in 0..nj {
            for i in 0..ni {
                points.push(self.point(2 * i, 2 * j));
            }
        }
        Ok(SurfaceMesh { ni, nj, points })
    }

    /// Split every quad cell into two triangles.
    pub fn triangulate(&self) -> Vec<[Point3; 3]> {
        let mut triangles = Vec::with_capacity(2 * (self.ni - 1) * (self.nj - 1));
        for j in 0..self.nj - 1 {
            for i in 0..self.ni - 1 {
                let p00 = self.point(i, j);
                let p10 = self.point(i + 1, j);
                let p01 = self.point(i, j + 1);
                let p11 = self.point(i + 1, j + 1);
                triangles.push([p00, p10, p11]);
                triangles.push([p00, p11, p01]);
            }
        }
        triangles
    }

    /// View the mesh as a single-layer Plot3D block.
    pub fn to_plot3d(&self) -> Plot3dBlock {
        Plot3dBlock::from_points(self.ni, self.nj, 1, &self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::naca4;
    use crate::geometry::simple_transonic_wing;
    use crate::oml::WingLoft;

    fn small_mesh() -> SurfaceMesh {
        let geometry = simple_transonic_wing();
        let foil = naca4("0012", 101).unwrap();
        let loft = WingLoft::new(&geometry.wing, &[foil.clone(), foil]).unwrap();
        loft.surface_mesh(16, 8, SpanSpacing::Linear).unwrap()
    }

    #[test]
    fn test_coarsen_keeps_boundaries() {
        let mesh = small_mesh();
        let coarse = mesh.coarsen().unwrap();
        assert_eq!((coarse.ni, coarse.nj), (9, 5));
        assert_eq!(coarse.point(0, 0), mesh.point(0, 0));
        assert_eq!(
            coarse.point(coarse.ni - 1, coarse.nj - 1),
            mesh.point(mesh.ni - 1, mesh.nj - 1)
        );
    }

    #[test]
    fn test_coarsen_rejects_even_counts() {
        let geometry = simple_transonic_wing();
        let foil = naca4("0012", 101).unwrap();
        let loft = WingLoft::new(&geometry.wing, &[foil.clone(), foil]).unwrap();
        let mesh = loft.surface_mesh(15, 8, SpanSpacing::Linear).unwrap();
        assert!(matches!(mesh.coarsen(), Err(OmlError::CoarsenParity { .. })));
    }

    #[test]
    fn test_triangulate_count() {
        let mesh = small_mesh();
        assert_eq!(mesh.triangulate().len(), 2 * 16 * 8);
    }

    #[test]
    fn test_plot3d_view_dims() {
        let mesh = small_mesh();
        let block = mesh.to_plot3d();
        assert_eq!((block.ni, block.nj, block.nk), (17, 9, 1));
        assert_eq!(block.x.len(), 17 * 9);
    }
}

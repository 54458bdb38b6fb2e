//! ASCII STL output for the lofted outer mold line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::types::Point3;

/// Error type for STL output.
#[derive(Debug, Error)]
pub enum StlError {
    /// File I/O error.
    #[error("STL I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write triangles to an ASCII STL file.
///
/// Facet normals are computed from the vertex winding and normalized;
/// zero-area facets are skipped rather than written with a bogus normal.
pub fn write_stl(
    path: impl AsRef<Path>,
    solid_name: &str,
    triangles: &[[Point3; 3]],
) -> Result<(), StlError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "solid {}", solid_name)?;
    for tri in triangles {
        let edge1 = tri[1] - tri[0];
        let edge2 = tri[2] - tri[0];
        let normal = edge1.cross(&edge2);
        let norm = normal.norm();
        if norm < 1e-14 {
            continue;
        }
        let n = normal * (1.0 / norm);
        writeln!(w, "  facet normal {:e} {:e} {:e}", n.x, n.y, n.z)?;
        writeln!(w, "    outer loop")?;
        for v in tri {
            writeln!(w, "      vertex {:e} {:e} {:e}", v.x, v.y, v.z)?;
        }
        writeln!(w, "    endloop")?;
        writeln!(w, "  endfacet")?;
    }
    writeln!(w, "endsolid {}", solid_name)?;
    w.flush()?;
    Ok(())
}

//! Tecplot ASCII output.
//!
//! Two zone flavours are used by the archive:
//! - ordered (I, J[, K]) POINT zones for lofted surfaces and FFD lattices
//! - FEPOINT quadrilateral zones, one per wingbox component

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::types::Point3;

/// Error type for Tecplot output.
#[derive(Debug, Error)]
pub enum TecplotError {
    /// File I/O error.
    #[error("Tecplot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Zone point count does not match its dimensions.
    #[error("Zone '{zone}' has {points} points but dimensions give {expected}")]
    DimensionMismatch {
        zone: String,
        points: usize,
        expected: usize,
    },
}

/// An ordered structured zone.
#[derive(Clone, Debug)]
pub struct StructuredZone {
    /// Zone title.
    pub name: String,
    pub ni: usize,
    pub nj: usize,
    pub nk: usize,
    /// Points, `i` fastest.
    pub points: Vec<Point3>,
}

/// A finite-element quadrilateral zone.
#[derive(Clone, Debug)]
pub struct FeQuadZone {
    /// Zone title (the component name).
    pub name: String,
    /// Node coordinates.
    pub nodes: Vec<Point3>,
    /// Quad connectivity as zero-based node indices.
    pub quads: Vec<[usize; 4]>,
}

/// Write ordered POINT zones to a Tecplot ASCII file.
pub fn write_structured_zones(
    path: impl AsRef<Path>,
    title: &str,
    zones: &[StructuredZone],
) -> Result<(), TecplotError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "TITLE = \"{}\"", title)?;
    writeln!(w, "VARIABLES = \"X\", \"Y\", \"Z\"")?;
    for zone in zones {
        let expected = zone.ni * zone.nj * zone.nk;
        if zone.points.len() != expected {
            return Err(TecplotError::DimensionMismatch {
                zone: zone.name.clone(),
                points: zone.points.len(),
                expected,
            });
        }
        writeln!(
            w,
            "ZONE T=\"{}\" I={} J={} K={} DATAPACKING=POINT",
            zone.name, zone.ni, zone.nj, zone.nk
        )?;
        for p in &zone.points {
            writeln!(w, "{:.12e} {:.12e} {:.12e}", p.x, p.y, p.z)?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Write FEPOINT quadrilateral zones to a Tecplot ASCII file.
pub fn write_fe_zones(
    path: impl AsRef<Path>,
    title: &str,
    zones: &[FeQuadZone],
) -> Result<(), TecplotError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "TITLE = \"{}\"", title)?;
    writeln!(w, "VARIABLES = \"X\", \"Y\", \"Z\"")?;
    for zone in zones {
        writeln!(
            w,
            "ZONE T=\"{}\" N={} E={} F=FEPOINT ET=QUADRILATERAL",
            zone.name,
            zone.nodes.len(),
            zone.quads.len()
        )?;
        for p in &zone.nodes {
            writeln!(w, "{:.12e} {:.12e} {:.12e}", p.x, p.y, p.z)?;
        }
        for quad in &zone.quads {
            // Tecplot connectivity is one-based
            writeln!(
                w,
                "{} {} {} {}",
                quad[0] + 1,
                quad[1] + 1,
                quad[2] + 1,
                quad[3] + 1
            )?;
        }
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_structured_zone_header() {
        let file = NamedTempFile::new().unwrap();
        let zone = StructuredZone {
            name: "wing".into(),
            ni: 2,
            nj: 2,
            nk: 1,
            points: vec![
                Point3::zero(),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ],
        };
        write_structured_zones(file.path(), "wing OML", &[zone]).unwrap();
        let contents = fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("TITLE = \"wing OML\""));
        assert!(contents.contains("ZONE T=\"wing\" I=2 J=2 K=1 DATAPACKING=POINT"));
    }

    #[test]
    fn test_dimension_mismatch() {
        let file = NamedTempFile::new().unwrap();
        let zone = StructuredZone {
            name: "bad".into(),
            ni: 3,
            nj: 3,
            nk: 1,
            points: vec![Point3::zero()],
        };
        assert!(matches!(
            write_structured_zones(file.path(), "t", &[zone]),
            Err(TecplotError::DimensionMismatch { points: 1, expected: 9, .. })
        ));
    }

    #[test]
    fn test_fe_zone_one_based_connectivity() {
        let file = NamedTempFile::new().unwrap();
        let zone = FeQuadZone {
            name: "rib".into(),
            nodes: vec![
                Point3::zero(),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            quads: vec![[0, 1, 2, 3]],
        };
        write_fe_zones(file.path(), "wingbox", &[zone]).unwrap();
        let contents = fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("ET=QUADRILATERAL"));
        assert!(contents.lines().last().unwrap().trim() == "1 2 3 4");
    }
}

//! Selig-format airfoil coordinate files.
//!
//! # File Format
//!
//! ```text
//! RAE 2822
//! # optional comments anywhere
//! 1.000000  0.002600
//! 0.999398  0.002769
//! ...
//! ```
//!
//! An optional name header line is followed by (x, z) coordinate pairs in
//! Selig loop order. Lines starting with `#` are comments.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::airfoil::{Airfoil, AirfoilError};

/// Error type for airfoil file I/O.
#[derive(Debug, Error)]
pub enum AirfoilFileError {
    /// File I/O error.
    #[error("Airfoil file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error with line number.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The parsed coordinates do not form a valid section.
    #[error("Invalid airfoil data: {0}")]
    Invalid(#[from] AirfoilError),
}

/// Read a Selig-format airfoil file.
///
/// The airfoil name is taken from the header line if present, otherwise
/// from the file stem.
pub fn read_airfoil_dat(path: impl AsRef<Path>) -> Result<Airfoil, AirfoilFileError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut name: Option<String> = None;
    let mut coords = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_no + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let parsed: Option<(f64, f64)> = match tokens.as_slice() {
            [a, b] => match (a.parse(), b.parse()) {
                (Ok(x), Ok(z)) => Some((x, z)),
                _ => None,
            },
            _ => None,
        };

        match parsed {
            Some(pair) => coords.push(pair),
            None => {
                // A non-numeric line is the name header, but only before
                // any coordinates have been seen
                if coords.is_empty() && name.is_none() {
                    name = Some(trimmed.to_string());
                } else {
                    return Err(AirfoilFileError::Parse {
                        line: line_no,
                        message: format!("expected coordinate pair, got '{}'", trimmed),
                    });
                }
            }
        }
    }

    let name = name.unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "airfoil".to_string())
    });

    Ok(Airfoil::new(name, coords)?)
}

/// Write an airfoil to a Selig-format file with a name header.
pub fn write_airfoil_dat(path: impl AsRef<Path>, foil: &Airfoil) -> Result<(), AirfoilFileError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    writeln!(w, "{}", foil.name)?;
    for (x, z) in &foil.coords {
        writeln!(w, "{:.8} {:.8}", x, z)?;
    }
    w.flush()?;
    Ok(())
}

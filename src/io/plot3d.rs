//! Plot3D multi-block ASCII grid files.
//!
//! # File Format
//!
//! ```text
//! 2                 <- number of blocks
//! 5 3 1             <- dimensions of block 1
//! 4 4 2             <- dimensions of block 2
//! x x x ... (block 1: all x, i fastest, then j, then k)
//! y y y ...
//! z z z ...
//! x x x ... (block 2)
//! ...
//! ```
//!
//! Values are whitespace-separated; the writer wraps lines at a fixed
//! number of values. The reader is whitespace-tolerant and reports parse
//! failures with line numbers.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::types::Point3;

/// Error type for Plot3D I/O.
#[derive(Debug, Error)]
pub enum Plot3dError {
    /// File I/O error.
    #[error("Plot3D I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error with line number.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// File ended before all announced values were read.
    #[error("Unexpected end of file: expected {expected} more values")]
    UnexpectedEof { expected: usize },
}

/// One structured block of a Plot3D file.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot3dBlock {
    pub ni: usize,
    pub nj: usize,
    pub nk: usize,
    /// x coordinates, `i` fastest, then `j`, then `k`.
    pub x: Vec<f64>,
    /// y coordinates, same ordering.
    pub y: Vec<f64>,
    /// z coordinates, same ordering.
    pub z: Vec<f64>,
}

impl Plot3dBlock {
    /// Build a block from points already ordered `i` fastest.
    pub fn from_points(ni: usize, nj: usize, nk: usize, points: &[Point3]) -> Self {
        debug_assert_eq!(points.len(), ni * nj * nk);
        Self {
            ni,
            nj,
            nk,
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
            z: points.iter().map(|p| p.z).collect(),
        }
    }

    /// Number of grid points in the block.
    pub fn len(&self) -> usize {
        self.ni * self.nj * self.nk
    }

    /// Whether the block is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The point at flat index `idx` (`i` fastest ordering).
    pub fn point(&self, idx: usize) -> Point3 {
        Point3::new(self.x[idx], self.y[idx], self.z[idx])
    }
}

/// Values written per line.
const VALUES_PER_LINE: usize = 6;

/// Write a multi-block Plot3D ASCII file.
pub fn write_plot3d(path: impl AsRef<Path>, blocks: &[Plot3dBlock]) -> Result<(), Plot3dError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "{}", blocks.len())?;
    for block in blocks {
        writeln!(w, "{} {} {}", block.ni, block.nj, block.nk)?;
    }
    for block in blocks {
        for coords in [&block.x, &block.y, &block.z] {
            for chunk in coords.chunks(VALUES_PER_LINE) {
                let line: Vec<String> = chunk.iter().map(|v| format!("{:.16e}", v)).collect();
                writeln!(w, "{}", line.join(" "))?;
            }
        }
    }
    w.flush()?;
    Ok(())
}

/// Streaming whitespace-separated token reader that tracks line numbers.
struct TokenReader<R: BufRead> {
    reader: R,
    tokens: Vec<String>,
    cursor: usize,
    line: usize,
}

impl<R: BufRead> TokenReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            tokens: Vec::new(),
            cursor: 0,
            line: 0,
        }
    }

    fn next_token(&mut self) -> Result<Option<(String, usize)>, Plot3dError> {
        while self.cursor >= self.tokens.len() {
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.tokens = buf.split_whitespace().map(str::to_string).collect();
            self.cursor = 0;
        }
        let token = self.tokens[self.cursor].clone();
        self.cursor += 1;
        Ok(Some((token, self.line)))
    }

    fn next_usize(&mut self, what: &str) -> Result<usize, Plot3dError> {
        let (token, line) = self
            .next_token()?
            .ok_or(Plot3dError::UnexpectedEof { expected: 1 })?;
        token.parse().map_err(|_| Plot3dError::Parse {
            line,
            message: format!("expected {} (integer), got '{}'", what, token),
        })
    }

    fn next_f64(&mut self, remaining: usize) -> Result<f64, Plot3dError> {
        let (token, line) = self
            .next_token()?
            .ok_or(Plot3dError::UnexpectedEof { expected: remaining })?;
        token.parse().map_err(|_| Plot3dError::Parse {
            line,
            message: format!("expected coordinate value, got '{}'", token),
        })
    }
}

/// Read a multi-block Plot3D ASCII file.
pub fn read_plot3d(path: impl AsRef<Path>) -> Result<Vec<Plot3dBlock>, Plot3dError> {
    let file = File::open(path)?;
    let mut reader = TokenReader::new(BufReader::new(file));

    let n_blocks = reader.next_usize("block count")?;
    let mut dims = Vec::with_capacity(n_blocks);
    for _ in 0..n_blocks {
        let ni = reader.next_usize("ni")?;
        let nj = reader.next_usize("nj")?;
        let nk = reader.next_usize("nk")?;
        dims.push((ni, nj, nk));
    }

    let mut blocks = Vec::with_capacity(n_blocks);
    for (ni, nj, nk) in dims {
        let n = ni * nj * nk;
        let mut coords = [Vec::with_capacity(n), Vec::with_capacity(n), Vec::with_capacity(n)];
        for (c, coord) in coords.iter_mut().enumerate() {
            for k in 0..n {
                coord.push(reader.next_f64((3 - c) * n - k)?);
            }
        }
        let [x, y, z] = coords;
        blocks.push(Plot3dBlock { ni, nj, nk, x, y, z });
    }
    Ok(blocks)
}

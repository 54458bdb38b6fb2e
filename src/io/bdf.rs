//! Nastran small-field bulk data output for the wingbox shell mesh.
//!
//! Writes GRID, CQUAD4/CQUAD9/CQUAD16, and SPC1 cards in the 8-character
//! small-field format, with a comment delimiter per structural component.
//! Element and node IDs are one-based and assigned in storage order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::types::Point3;

/// Error type for BDF output.
#[derive(Debug, Error)]
pub enum BdfError {
    /// File I/O error.
    #[error("BDF I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Element has a node count with no matching CQUAD card.
    #[error("Component '{component}' element {element} has {nodes} nodes; only 4, 9, or 16 supported")]
    UnsupportedElement {
        component: String,
        element: usize,
        nodes: usize,
    },

    /// Element references a node outside the model.
    #[error("Component '{component}' references node {node} but model has {n_nodes} nodes")]
    NodeOutOfRange {
        component: String,
        node: usize,
        n_nodes: usize,
    },
}

/// One structural component: a named group of shell elements.
#[derive(Clone, Debug)]
pub struct NastranComponent {
    /// Component name (e.g. "rib.03", "u_skin.05").
    pub name: String,
    /// Elements as zero-based node index lists (4, 9, or 16 nodes each).
    pub elements: Vec<Vec<usize>>,
}

/// A single-point constraint set.
#[derive(Clone, Debug)]
pub struct SpcSet {
    /// Constrained DOF digits, e.g. "246".
    pub dofs: String,
    /// Zero-based node indices.
    pub nodes: Vec<usize>,
}

/// The full shell model handed to the writer.
#[derive(Clone, Debug, Default)]
pub struct NastranModel {
    /// Node coordinates; node IDs are index + 1.
    pub nodes: Vec<Point3>,
    /// Components in property-ID order; component `c` gets PID `c + 1`.
    pub components: Vec<NastranComponent>,
    /// Constraint sets, all written with SID 1.
    pub spcs: Vec<SpcSet>,
}

/// Width of a small-field column.
const FIELD: usize = 8;

/// Format a float into exactly 8 characters.
///
/// Plain decimal notation is preferred; values that cannot be expressed
/// in 8 characters fall back to the Nastran exponent form (`1.2345+8`
/// meaning 1.2345e+8).
fn float_field(v: f64) -> String {
    if v == 0.0 {
        return format!("{:>width$}", "0.0", width = FIELD);
    }
    // Try plain decimal with decreasing precision
    for precision in (1..=6).rev() {
        let s = format!("{:.*}", precision, v);
        if s.len() <= FIELD && s.contains('.') {
            return format!("{:>width$}", s, width = FIELD);
        }
    }
    // Nastran exponent form: mantissa then signed exponent, no 'e'
    let exponent = v.abs().log10().floor() as i32;
    let mantissa = v / 10f64.powi(exponent);
    let exp_str = if exponent < 0 {
        format!("-{}", -exponent)
    } else {
        format!("+{}", exponent)
    };
    for precision in (0..=5).rev() {
        let s = format!("{:.*}{}", precision, mantissa, exp_str);
        if s.len() <= FIELD {
            return format!("{:>width$}", s, width = FIELD);
        }
    }
    // Last resort: exponent alone always fits
    format!("{:>width$}", format!("1.{}", exp_str), width = FIELD)
}

/// Format an integer into exactly 8 characters.
fn int_field(v: usize) -> String {
    format!("{:>width$}", v, width = FIELD)
}

/// Format a string into exactly 8 characters (left-justified).
fn str_field(s: &str) -> String {
    format!("{:<width$}", s, width = FIELD)
}

/// Write a card with continuations: 8 data fields per line after the name.
fn write_card<W: Write>(w: &mut W, name: &str, fields: &[String]) -> std::io::Result<()> {
    let mut first = true;
    let mut remaining = fields;
    while !remaining.is_empty() || first {
        let take = remaining.len().min(8);
        let (line_fields, rest) = remaining.split_at(take);
        let lead = if first { str_field(name) } else { str_field("+") };
        let cont = if rest.is_empty() { "" } else { "+" };
        writeln!(w, "{}{}{}", lead, line_fields.concat(), cont)?;
        first = false;
        remaining = rest;
    }
    Ok(())
}

/// Write the model to a Nastran bulk data file.
pub fn write_bdf(path: impl AsRef<Path>, model: &NastranModel) -> Result<(), BdfError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "$ Generated wingbox shell model")?;
    writeln!(w, "SOL 101")?;
    writeln!(w, "CEND")?;
    writeln!(w, "BEGIN BULK")?;

    // Grids
    writeln!(w, "$ Nodes")?;
    for (i, p) in model.nodes.iter().enumerate() {
        let fields = vec![
            int_field(i + 1),
            str_field(""),
            float_field(p.x),
            float_field(p.y),
            float_field(p.z),
        ];
        write_card(&mut w, "GRID", &fields)?;
    }

    // Elements, grouped by component
    let mut eid = 1;
    for (pid0, component) in model.components.iter().enumerate() {
        writeln!(w, "$ Component {}", component.name)?;
        for (e, element) in component.elements.iter().enumerate() {
            let card = match element.len() {
                4 => "CQUAD4",
                9 => "CQUAD9",
                16 => "CQUAD16",
                n => {
                    return Err(BdfError::UnsupportedElement {
                        component: component.name.clone(),
                        element: e,
                        nodes: n,
                    });
                }
            };
            let mut fields = vec![int_field(eid), int_field(pid0 + 1)];
            for &node in element {
                if node >= model.nodes.len() {
                    return Err(BdfError::NodeOutOfRange {
                        component: component.name.clone(),
                        node,
                        n_nodes: model.nodes.len(),
                    });
                }
                fields.push(int_field(node + 1));
            }
            write_card(&mut w, card, &fields)?;
            eid += 1;
        }
    }

    // Constraints
    for spc in &model.spcs {
        writeln!(w, "$ SPC set, DOFs {}", spc.dofs)?;
        let mut fields = vec![int_field(1), str_field(&spc.dofs)];
        for &node in &spc.nodes {
            fields.push(int_field(node + 1));
        }
        write_card(&mut w, "SPC1", &fields)?;
    }

    writeln!(w, "ENDDATA")?;
    w.flush()?;
    Ok(())
}

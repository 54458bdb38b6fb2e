//! Wingbox mesh refinement levels.

use std::fmt;
use std::str::FromStr;

use super::order::ElementOrder;

/// Refinement level of a wingbox shell mesh.
///
/// L2 is the baseline; L1 doubles the element counts in every direction
/// and L3 halves them (rounding up so no panel degenerates).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WingboxLevel {
    L1,
    L2,
    L3,
}

impl WingboxLevel {
    /// Multiplier applied to the baseline element counts.
    pub fn factor(&self) -> f64 {
        match self {
            WingboxLevel::L1 => 2.0,
            WingboxLevel::L2 => 1.0,
            WingboxLevel::L3 => 0.5,
        }
    }

    /// Scale a baseline element count, never below one element.
    pub fn scale(&self, n: usize) -> usize {
        ((n as f64 * self.factor()).ceil() as usize).max(1)
    }

    /// File-name label, e.g. `L1`.
    pub fn label(&self) -> &'static str {
        match self {
            WingboxLevel::L1 => "L1",
            WingboxLevel::L2 => "L2",
            WingboxLevel::L3 => "L3",
        }
    }

    /// Archived artifact stem for this level and element order,
    /// e.g. `wingbox-L2-Order2`.
    pub fn artifact_name(&self, order: ElementOrder) -> String {
        format!("wingbox-{}-Order{}", self.label(), order.nodes_per_edge())
    }

    /// All levels, finest first.
    pub fn all() -> [WingboxLevel; 3] {
        [WingboxLevel::L1, WingboxLevel::L2, WingboxLevel::L3]
    }
}

impl fmt::Display for WingboxLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WingboxLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L1" => Ok(WingboxLevel::L1),
            "L2" => Ok(WingboxLevel::L2),
            "L3" => Ok(WingboxLevel::L3),
            other => Err(format!("unknown wingbox level '{}'", other)),
        }
    }
}

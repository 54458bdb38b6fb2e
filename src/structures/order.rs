//! Shell element order and node numbering.

use std::fmt;
use std::str::FromStr;

/// Shell element order: nodes per element edge.
///
/// Order 2 maps to CQUAD4, 3 to CQUAD9, 4 to CQUAD16, the cards the
/// downstream structural solver consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementOrder {
    Order2,
    Order3,
    Order4,
}

impl ElementOrder {
    /// Nodes per element edge.
    pub fn nodes_per_edge(&self) -> usize {
        match self {
            ElementOrder::Order2 => 2,
            ElementOrder::Order3 => 3,
            ElementOrder::Order4 => 4,
        }
    }

    /// Nodes per element.
    pub fn nodes_per_element(&self) -> usize {
        let n = self.nodes_per_edge();
        n * n
    }

    /// Nastran card name.
    pub fn card_name(&self) -> &'static str {
        match self {
            ElementOrder::Order2 => "CQUAD4",
            ElementOrder::Order3 => "CQUAD9",
            ElementOrder::Order4 => "CQUAD16",
        }
    }

    /// All orders.
    pub fn all() -> [ElementOrder; 3] {
        [
            ElementOrder::Order2,
            ElementOrder::Order3,
            ElementOrder::Order4,
        ]
    }

    /// Map an element's local (a, b) sub-grid of node indices into card
    /// order: corners counter-clockwise, then edge nodes following the
    /// perimeter, then interior nodes row-major.
    ///
    /// `grid[b][a]` holds the global node index at local position (a, b),
    /// where both run 0..nodes_per_edge with `a` along the element's
    /// first parametric direction.
    pub fn card_order(&self, grid: &[Vec<usize>]) -> Vec<usize> {
        let e = self.nodes_per_edge() - 1;
        let mut nodes = Vec::with_capacity(self.nodes_per_element());

        // Corners, counter-clockwise
        nodes.push(grid[0][0]);
        nodes.push(grid[0][e]);
        nodes.push(grid[e][e]);
        nodes.push(grid[e][0]);

        // Edge nodes along the perimeter
        for a in 1..e {
            nodes.push(grid[0][a]);
        }
        for b in 1..e {
            nodes.push(grid[b][e]);
        }
        for a in (1..e).rev() {
            nodes.push(grid[e][a]);
        }
        for b in (1..e).rev() {
            nodes.push(grid[b][0]);
        }

        // Interior nodes, row-major
        for b in 1..e {
            for a in 1..e {
                nodes.push(grid[b][a]);
            }
        }

        nodes
    }
}

impl fmt::Display for ElementOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes_per_edge())
    }
}

impl FromStr for ElementOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" => Ok(ElementOrder::Order2),
            "3" => Ok(ElementOrder::Order3),
            "4" => Ok(ElementOrder::Order4),
            other => Err(format!("unknown element order '{}', expected 2, 3, or 4", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_counts() {
        assert_eq!(ElementOrder::Order2.nodes_per_element(), 4);
        assert_eq!(ElementOrder::Order3.nodes_per_element(), 9);
        assert_eq!(ElementOrder::Order4.nodes_per_element(), 16);
    }

    #[test]
    fn test_card_names() {
        assert_eq!(ElementOrder::Order3.card_name(), "CQUAD9");
    }

    #[test]
    fn test_quad4_card_order() {
        let grid = vec![vec![10, 11], vec![12, 13]];
        assert_eq!(ElementOrder::Order2.card_order(&grid), vec![10, 11, 13, 12]);
    }

    #[test]
    fn test_quad9_card_order() {
        // grid[b][a] = 3b + a
        let grid = vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]];
        let order = ElementOrder::Order3.card_order(&grid);
        // Corners CCW, midsides following the perimeter, center last
        assert_eq!(order, vec![0, 2, 8, 6, 1, 5, 7, 3, 4]);
    }

    #[test]
    fn test_quad16_has_four_interior() {
        let grid: Vec<Vec<usize>> = (0..4).map(|b| (0..4).map(|a| 4 * b + a).collect()).collect();
        let order = ElementOrder::Order4.card_order(&grid);
        assert_eq!(order.len(), 16);
        // Interior row-major: 5, 6, 9, 10
        assert_eq!(&order[12..], &[5, 6, 9, 10]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("3".parse::<ElementOrder>().unwrap(), ElementOrder::Order3);
        assert!("5".parse::<ElementOrder>().is_err());
    }
}

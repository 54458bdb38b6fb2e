//! Shell mesh quality metrics.

use std::fmt::Write as _;

use crate::types::Point3;

use super::mesher::{ComponentGroup, WingboxMesh};

/// Quality extrema for one component group.
#[derive(Clone, Copy, Debug)]
pub struct GroupQuality {
    pub group: ComponentGroup,
    pub n_elements: usize,
    /// Smallest corner-quad area in square metres.
    pub min_area: f64,
    /// Largest corner-quad area.
    pub max_area: f64,
    /// Worst edge-length aspect ratio.
    pub max_aspect: f64,
    /// Worst corner angle deviation from 90 degrees.
    pub max_skew_deg: f64,
}

/// Per-group quality report of a wingbox mesh.
///
/// All metrics are taken over the corner quads, so higher-order meshes
/// report the same numbers as their linear counterparts.
#[derive(Clone, Debug)]
pub struct MeshQualityReport {
    pub groups: Vec<GroupQuality>,
}

/// Corner-quad area from the cross product of the diagonals.
fn quad_area(c: &[Point3; 4]) -> f64 {
    let d1 = c[2] - c[0];
    let d2 = c[3] - c[1];
    0.5 * d1.cross(&d2).norm()
}

/// Edge-length aspect ratio of a corner quad.
fn quad_aspect(c: &[Point3; 4]) -> f64 {
    let mut min_edge = f64::INFINITY;
    let mut max_edge = 0.0f64;
    for i in 0..4 {
        let edge = c[i].distance(&c[(i + 1) % 4]);
        min_edge = min_edge.min(edge);
        max_edge = max_edge.max(edge);
    }
    if min_edge > 0.0 {
        max_edge / min_edge
    } else {
        f64::INFINITY
    }
}

/// Worst corner angle deviation from 90 degrees.
fn quad_skew_deg(c: &[Point3; 4]) -> f64 {
    let mut worst = 0.0f64;
    for i in 0..4 {
        let prev = c[(i + 3) % 4] - c[i];
        let next = c[(i + 1) % 4] - c[i];
        let denom = prev.norm() * next.norm();
        if denom == 0.0 {
            return 90.0;
        }
        let cos = (prev.dot(&next) / denom).clamp(-1.0, 1.0);
        let angle = cos.acos().to_degrees();
        worst = worst.max((angle - 90.0).abs());
    }
    worst
}

impl MeshQualityReport {
    /// Compute the report for a mesh.
    pub fn compute(mesh: &WingboxMesh) -> Self {
        let groups = ComponentGroup::all()
            .into_iter()
            .map(|group| {
                let mut quality = GroupQuality {
                    group,
                    n_elements: 0,
                    min_area: f64::INFINITY,
                    max_area: 0.0,
                    max_aspect: 0.0,
                    max_skew_deg: 0.0,
                };
                for (ci, component) in mesh.components.iter().enumerate() {
                    if component.group != group {
                        continue;
                    }
                    for ei in 0..component.elements.len() {
                        let corners = mesh.element_corners(ci, ei);
                        quality.n_elements += 1;
                        let area = quad_area(&corners);
                        quality.min_area = quality.min_area.min(area);
                        quality.max_area = quality.max_area.max(area);
                        quality.max_aspect = quality.max_aspect.max(quad_aspect(&corners));
                        quality.max_skew_deg = quality.max_skew_deg.max(quad_skew_deg(&corners));
                    }
                }
                if quality.n_elements == 0 {
                    quality.min_area = 0.0;
                }
                quality
            })
            .collect();
        Self { groups }
    }

    /// Whether every element is non-degenerate and reasonably shaped.
    pub fn acceptable(&self, max_aspect: f64, max_skew_deg: f64) -> bool {
        self.groups.iter().all(|g| {
            g.n_elements == 0
                || (g.min_area > 0.0 && g.max_aspect <= max_aspect && g.max_skew_deg <= max_skew_deg)
        })
    }

    /// One summary line per group, for progress output.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for g in &self.groups {
            let _ = writeln!(
                out,
                "  {:>6}: {:>6} elements, area [{:.3e}, {:.3e}] m^2, aspect {:.2}, skew {:.1} deg",
                g.group.label(),
                g.n_elements,
                g.min_area,
                g.max_area,
                g.max_aspect,
                g.max_skew_deg
            );
        }
        out
    }
}

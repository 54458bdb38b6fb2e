//! End-to-end checks of the baseline geometry and the lofted OML.
//!
//! Verifies the benchmark's planform numbers, the blunt trailing edge,
//! and that surface meshes survive a Plot3D write/read round trip.

use approx::assert_relative_eq;
use stw_gen::oml::SpanSpacing;
use stw_gen::types::Eta;
use stw_gen::{WingLoft, naca4, read_plot3d, simple_transonic_wing, write_plot3d};

fn baseline_loft() -> WingLoft {
    let geometry = simple_transonic_wing();
    let foil = naca4("2412", 151).unwrap();
    WingLoft::new(&geometry.wing, &[foil.clone(), foil]).unwrap()
}

#[test]
fn test_benchmark_planform_numbers() {
    let geometry = simple_transonic_wing();
    let wing = &geometry.wing;
    assert_relative_eq!(wing.planform_area(), 45.5, epsilon = 1e-12);
    assert_relative_eq!(wing.aspect_ratio(), 2.0 * 14.0 * 14.0 / 45.5, epsilon = 1e-12);
    assert_relative_eq!(wing.taper_ratio(), 0.3, epsilon = 1e-12);
    assert_relative_eq!(wing.mean_aerodynamic_chord(), 3.564103, epsilon = 1e-6);
}

#[test]
fn test_loft_spans_root_to_tip() {
    let loft = baseline_loft();
    let root = loft.section_curve(Eta::new(0.0));
    let tip = loft.section_curve(Eta::new(1.0));
    for p in &root {
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }
    for p in &tip {
        assert_relative_eq!(p.y, 14.0, epsilon = 1e-12);
    }
    // Tip chordwise extent: 1.5 m chord starting 7.5 m aft
    let x_min = tip.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let x_max = tip.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    assert_relative_eq!(x_min, 7.5, epsilon = 1e-3);
    assert_relative_eq!(x_max, 9.0, epsilon = 1e-3);
}

#[test]
fn test_blunt_trailing_edge_everywhere() {
    let loft = baseline_loft();
    let te_height = 0.25 * 0.0254;
    for eta in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let curve = loft.section_curve(Eta::new(eta));
        let gap = curve[0].z - curve[curve.len() - 1].z;
        assert_relative_eq!(gap, te_height, epsilon = 1e-6);
    }
}

#[test]
fn test_surface_mesh_plot3d_round_trip() {
    let loft = baseline_loft();
    let mesh = loft.surface_mesh(32, 16, SpanSpacing::Cosine).unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    write_plot3d(file.path(), &[mesh.to_plot3d()]).unwrap();
    let blocks = read_plot3d(file.path()).unwrap();

    assert_eq!(blocks.len(), 1);
    assert_eq!((blocks[0].ni, blocks[0].nj, blocks[0].nk), (33, 17, 1));
    for (idx, p) in mesh.points.iter().enumerate() {
        let q = blocks[0].point(idx);
        assert_relative_eq!(p.x, q.x, epsilon = 1e-12);
        assert_relative_eq!(p.y, q.y, epsilon = 1e-12);
        assert_relative_eq!(p.z, q.z, epsilon = 1e-12);
    }
}

#[test]
fn test_coarsening_chain_preserves_extent() {
    let loft = baseline_loft();
    // 64 x 32 cells coarsen twice (the L3 schedule)
    let fine = loft.surface_mesh(64, 32, SpanSpacing::Cosine).unwrap();
    let mid = fine.coarsen().unwrap();
    let coarse = mid.coarsen().unwrap();

    assert_eq!((coarse.ni, coarse.nj), (17, 9));
    assert_eq!(coarse.point(0, 0), fine.point(0, 0));
    assert_eq!(
        coarse.point(coarse.ni - 1, coarse.nj - 1),
        fine.point(fine.ni - 1, fine.nj - 1)
    );
}

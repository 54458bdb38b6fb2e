//! Benchmarks for wingbox shell meshing.
//!
//! Run with: `cargo bench --bench wingbox_bench`
//!
//! Meshes the benchmark wingbox across refinement levels and element
//! orders, plus the quality metric pass.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use stw_gen::airfoil::naca4;
use stw_gen::geometry::simple_transonic_wing;
use stw_gen::oml::WingLoft;
use stw_gen::structures::{
    ElementOrder, MeshQualityReport, WingboxGrid, WingboxLevel, WingboxMesher,
};

fn setup() -> (WingboxGrid, WingLoft) {
    let geometry = simple_transonic_wing();
    let foil = naca4("0012", 151).unwrap();
    let airfoils = vec![foil.clone(), foil];
    let loft = WingLoft::new(&geometry.wing, &airfoils).unwrap();
    let grid = WingboxGrid::new(&geometry.wing, &geometry.wingbox);
    (grid, loft)
}

/// Benchmark shell meshing at every refinement level.
fn bench_mesh_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("wingbox_levels");
    let (grid, loft) = setup();

    for level in WingboxLevel::all() {
        let mesher = WingboxMesher::default().with_level(level);
        group.bench_with_input(BenchmarkId::from_parameter(level), &level, |b, _| {
            b.iter(|| mesher.mesh(black_box(&grid), black_box(&loft)).unwrap());
        });
    }
    group.finish();
}

/// Benchmark the higher element orders at the middle level.
fn bench_element_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("wingbox_orders");
    let (grid, loft) = setup();

    for order in ElementOrder::all() {
        let mesher = WingboxMesher::default()
            .with_level(WingboxLevel::L2)
            .with_order(order);
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, _| {
            b.iter(|| mesher.mesh(black_box(&grid), black_box(&loft)).unwrap());
        });
    }
    group.finish();
}

/// Benchmark the quality metric pass on a finished mesh.
fn bench_quality_report(c: &mut Criterion) {
    let (grid, loft) = setup();
    let mesh = WingboxMesher::default()
        .with_level(WingboxLevel::L2)
        .mesh(&grid, &loft)
        .unwrap();

    c.bench_function("quality_report", |b| {
        b.iter(|| MeshQualityReport::compute(black_box(&mesh)));
    });
}

criterion_group!(
    benches,
    bench_mesh_levels,
    bench_element_orders,
    bench_quality_report
);
criterion_main!(benches);

//! Benchmarks for the OML loft and surface mesh sampling.
//!
//! Run with: `cargo bench --bench surface_mesh_bench`
//!
//! Covers loft construction, surface sampling at the CFD family sizes,
//! and the level coarsening chain.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use stw_gen::airfoil::naca4;
use stw_gen::geometry::simple_transonic_wing;
use stw_gen::oml::{SpanSpacing, WingLoft};

fn baseline_loft() -> WingLoft {
    let geometry = simple_transonic_wing();
    let foil = naca4("0012", 151).unwrap();
    WingLoft::new(&geometry.wing, &[foil.clone(), foil]).unwrap()
}

/// Benchmark loft construction at several airfoil samplings.
fn bench_loft_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("loft_construction");
    let geometry = simple_transonic_wing();

    for n_points in [101, 151, 301] {
        let foil = naca4("0012", n_points).unwrap();
        let airfoils = vec![foil.clone(), foil];
        group.bench_with_input(
            BenchmarkId::new("naca0012", n_points),
            &n_points,
            |b, _| {
                b.iter(|| {
                    WingLoft::new(black_box(&geometry.wing), black_box(&airfoils)).unwrap()
                });
            },
        );
    }
    group.finish();
}

/// Benchmark surface sampling at the archive's family sizes.
fn bench_surface_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_sampling");
    let loft = baseline_loft();

    for (n_chord, n_span) in [(64, 32), (128, 64), (192, 96)] {
        group.bench_with_input(
            BenchmarkId::new("cosine", format!("{}x{}", n_chord, n_span)),
            &(n_chord, n_span),
            |b, &(n_chord, n_span)| {
                b.iter(|| {
                    loft.surface_mesh(
                        black_box(n_chord),
                        black_box(n_span),
                        SpanSpacing::Cosine,
                    )
                    .unwrap()
                });
            },
        );
    }
    group.finish();
}

/// Benchmark the two-step coarsening chain used by the coarsest level.
fn bench_coarsening(c: &mut Criterion) {
    let loft = baseline_loft();
    let fine = loft.surface_mesh(128, 64, SpanSpacing::Cosine).unwrap();

    c.bench_function("coarsen_twice", |b| {
        b.iter(|| {
            let mid = black_box(&fine).coarsen().unwrap();
            mid.coarsen().unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_loft_construction,
    bench_surface_sampling,
    bench_coarsening
);
criterion_main!(benches);

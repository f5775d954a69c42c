//! Nearest-neighbour tour construction over growing networks.
//!
//! Each size runs on a regular polygon, so the measured curve reflects the
//! algorithm's quadratic step count rather than the input's geometry. The
//! scattered group is the irregular contrast.
//!
//! Run with: cargo bench --bench nna_scaling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_depot::constructive::build_tour;
use u_depot::generator::{regular_polygon_network, scattered_network};
use u_depot::scaling::log_spaced_sizes;

const RADIUS: f64 = 1_000.0;

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("nna_polygon");
    group.sample_size(20);

    for n in log_spaced_sizes(4, 1024, 9) {
        let network = regular_polygon_network(n, RADIUS).expect("n >= 3");
        let origin = network.settlements()[0].clone();
        group.bench_with_input(BenchmarkId::new("build_tour", n), &n, |b, _| {
            b.iter(|| black_box(build_tour(&network, &origin).expect("complete network")))
        });
    }

    group.finish();
}

fn bench_scattered(c: &mut Criterion) {
    let mut group = c.benchmark_group("nna_scattered");
    group.sample_size(20);

    for n in [16, 128, 1024] {
        let network = scattered_network(n, RADIUS, 42).expect("valid radius");
        let origin = network.settlements()[0].clone();
        group.bench_with_input(BenchmarkId::new("build_tour", n), &n, |b, _| {
            b.iter(|| black_box(build_tour(&network, &origin).expect("complete network")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_polygon, bench_scattered);
criterion_main!(benches);

//! Benchmarks for containment testing and visibility polygon assembly.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sightline::polygon::visibility_polygon;
use sightline::{Point2, Polygon};

/// Generates a star-shaped polygon around the origin with pseudo-random radii.
fn generate_room(vertex_count: usize, seed: u64) -> Polygon<f64> {
    let mut vertices = Vec::with_capacity(vertex_count);
    let mut state = seed;

    for i in 0..vertex_count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let radius = 5.0 + (state as f64 / u64::MAX as f64) * 5.0;

        let angle = i as f64 / vertex_count as f64 * std::f64::consts::TAU;
        vertices.push(Point2::new(radius * angle.cos(), radius * angle.sin()));
    }

    Polygon::new(vertices)
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_contains");

    for &count in &[8, 32, 128] {
        let room = generate_room(count, 42);
        let point = Point2::new(1.0, 2.0);

        group.bench_with_input(BenchmarkId::from_parameter(count), &room, |b, room| {
            b.iter(|| black_box(room.contains(black_box(point))));
        });
    }

    group.finish();
}

fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility_polygon");

    for &count in &[8, 32, 128] {
        let room = generate_room(count, 42);
        // Origin is interior for any star-shaped room with positive radii
        let guard = Point2::origin();

        group.bench_with_input(BenchmarkId::from_parameter(count), &room, |b, room| {
            b.iter(|| black_box(visibility_polygon(room, black_box(guard))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_contains, bench_visibility);
criterion_main!(benches);

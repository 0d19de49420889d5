//! Benchmarks for VSM Network geometry
//!
//! Measures performance of:
//! - Regular polygon vertex generation
//! - Depth-scaled edge length, marker size and color
//! - Recursive subdivision to a fixed depth

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vsm_geometry::{
    color_for_layer, edge_length, marker_size, regular_polygon_vertices, Point, Polygon,
};

/// Benchmark polygon generation at increasing orders
fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("regular_polygon");

    for &order in &[3u32, 6, 12, 64, 360] {
        group.throughput(Throughput::Elements(u64::from(order)));
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, &n| {
            b.iter(|| regular_polygon_vertices(black_box(Point::new(0.25, -0.5)), 0.5, n))
        });
    }
    group.finish();
}

/// Benchmark the depth scaling functions
fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth_scale");

    for &layer in &[0u32, 5, 10, 100] {
        group.bench_with_input(BenchmarkId::new("edge_length", layer), &layer, |b, &l| {
            b.iter(|| edge_length(black_box(l)))
        });
        group.bench_with_input(BenchmarkId::new("marker_size", layer), &layer, |b, &l| {
            b.iter(|| marker_size(black_box(l)))
        });
        group.bench_with_input(BenchmarkId::new("color", layer), &layer, |b, &l| {
            b.iter(|| color_for_layer(black_box(l)))
        });
    }
    group.finish();
}

/// Place every node of a full tree down to `depth`.
fn subdivide(center: Point, layer: u32, depth: u32, order: u32, out: &mut Vec<Point>) {
    if layer == depth {
        return;
    }
    let Ok(polygon) = Polygon::new(center, edge_length(layer), order) else {
        return;
    };
    for vertex in polygon {
        out.push(vertex);
        subdivide(vertex, layer + 1, depth, order, out);
    }
}

/// Benchmark full-tree subdivision
fn bench_subdivision(c: &mut Criterion) {
    let mut group = c.benchmark_group("subdivision");
    group.sample_size(50);

    for &depth in &[2u32, 4, 6] {
        let nodes: u64 = (1..=depth).map(|d| 6u64.pow(d)).sum();
        group.throughput(Throughput::Elements(nodes));
        group.bench_with_input(BenchmarkId::new("hexagon_depth", depth), &depth, |b, &d| {
            b.iter(|| {
                let mut out = Vec::with_capacity(nodes as usize);
                subdivide(Point::ORIGIN, 0, black_box(d), 6, &mut out);
                out
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygon, bench_scale, bench_subdivision);

criterion_main!(benches);

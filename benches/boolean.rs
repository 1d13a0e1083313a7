//! Benchmarks for the polygon boolean operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use polybool::{difference, intersection, union, Contour, Point2, Polygon};

/// Generates a regular n-gon approximating a circle.
fn generate_circle(cx: f64, cy: f64, r: f64, num_points: usize) -> Polygon<f64> {
    let contour = Contour::from(
        (0..num_points)
            .map(|i| {
                let theta = i as f64 / num_points as f64 * 2.0 * std::f64::consts::PI;
                Point2::new(cx + r * theta.cos(), cy + r * theta.sin())
            })
            .collect::<Vec<_>>(),
    );
    Polygon::from_contours(vec![contour])
}

/// Generates a jagged star polygon with deterministic "noise" on the radii.
fn generate_star(cx: f64, cy: f64, num_points: usize) -> Polygon<f64> {
    let contour = Contour::from(
        (0..num_points)
            .map(|i| {
                let theta = i as f64 / num_points as f64 * 2.0 * std::f64::consts::PI;
                let r = if i % 2 == 0 { 10.0 } else { 4.0 } + ((i * 17) % 100) as f64 / 100.0;
                Point2::new(cx + r * theta.cos(), cy + r * theta.sin())
            })
            .collect::<Vec<_>>(),
    );
    Polygon::from_contours(vec![contour])
}

fn bench_circle_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_pairs");

    for size in [16, 64, 256, 1024] {
        let a = generate_circle(0.0, 0.0, 10.0, size);
        let b = generate_circle(7.0, 3.0, 10.0, size);
        group.throughput(Throughput::Elements(2 * size as u64));

        group.bench_with_input(BenchmarkId::new("union", size), &(&a, &b), |bench, &(a, b)| {
            bench.iter(|| union(black_box(a), black_box(b)))
        });
        group.bench_with_input(
            BenchmarkId::new("intersection", size),
            &(&a, &b),
            |bench, &(a, b)| bench.iter(|| intersection(black_box(a), black_box(b))),
        );
        group.bench_with_input(
            BenchmarkId::new("difference", size),
            &(&a, &b),
            |bench, &(a, b)| bench.iter(|| difference(black_box(a), black_box(b))),
        );
    }

    group.finish();
}

fn bench_star_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("star_union");

    for size in [17, 65, 257] {
        let a = generate_star(0.0, 0.0, size);
        let b = generate_star(5.0, 2.0, size);
        group.throughput(Throughput::Elements(2 * size as u64));

        group.bench_with_input(BenchmarkId::new("jagged", size), &(&a, &b), |bench, &(a, b)| {
            bench.iter(|| union(black_box(a), black_box(b)))
        });
    }

    group.finish();
}

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");

    for size in [16, 64, 256] {
        let poly = generate_star(0.0, 0.0, size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("star", size), &poly, |bench, poly| {
            bench.iter(|| black_box(poly).simplify())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_circle_pairs, bench_star_union, bench_simplify);
criterion_main!(benches);

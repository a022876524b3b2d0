//! Benchmarks for segment clipping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use segclip::clip::{clip_all, split_all, ClipOptions};
use segclip::{clip_to_convex_polygon, clip_to_rectangle, ClipRect, ConvexPolygon, Point2, Segment2};

/// Segments with endpoints scattered over `[-15, 15]^2`.
fn generate_segments(count: usize, seed: u64) -> Vec<Segment2<f64>> {
    let mut state = seed;
    let mut next = move || {
        // Simple xorshift for deterministic "random" coordinates
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state as f64 / u64::MAX as f64) * 30.0 - 15.0
    };
    (0..count)
        .map(|_| Segment2::new(Point2::new(next(), next()), Point2::new(next(), next())))
        .collect()
}

/// Regular polygon with `sides` vertices on a circle of radius 6.
fn regular_polygon(sides: usize) -> ConvexPolygon<f64> {
    let vertices = (0..sides)
        .map(|i| {
            let angle = i as f64 / sides as f64 * std::f64::consts::TAU;
            Point2::new(6.0 * angle.cos(), 6.0 * angle.sin())
        })
        .collect();
    ConvexPolygon::new(vertices)
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_segment");
    let segment = Segment2::from_coords(-10.0, 0.0, 10.0, 0.0);
    let rect = ClipRect::new(-5.0, -5.0, 5.0, 5.0);
    let hexagon = ConvexPolygon::reference_hexagon();

    group.bench_function("rectangle", |b| {
        b.iter(|| clip_to_rectangle(black_box(segment), black_box(rect)))
    });
    group.bench_function("hexagon", |b| {
        b.iter(|| clip_to_convex_polygon(black_box(segment), black_box(&hexagon)))
    });

    group.finish();
}

fn bench_polygon_sides(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_sides");
    let segments = generate_segments(1000, 12345);

    for sides in [3, 6, 16, 64] {
        let polygon = regular_polygon(sides);
        group.throughput(Throughput::Elements(segments.len() as u64));
        group.bench_with_input(BenchmarkId::new("clip_all", sides), &polygon, |b, poly| {
            b.iter(|| clip_all(black_box(&segments), poly, &ClipOptions::default()))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let rect = ClipRect::new(-5.0, -5.0, 5.0, 5.0);

    for size in [100, 10000] {
        let segments = generate_segments(size, 777);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("clip_all", size), &segments, |b, segs| {
            b.iter(|| clip_all(black_box(segs), &rect, &ClipOptions::default()))
        });
        group.bench_with_input(BenchmarkId::new("split_all", size), &segments, |b, segs| {
            b.iter(|| split_all(black_box(segs), &rect, &ClipOptions::default()))
        });

        #[cfg(feature = "rayon")]
        group.bench_with_input(BenchmarkId::new("par_clip_all", size), &segments, |b, segs| {
            b.iter(|| segclip::clip::par_clip_all(black_box(segs), &rect, &ClipOptions::default()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_polygon_sides, bench_batch);
criterion_main!(benches);

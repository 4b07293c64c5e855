use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use criterion::Throughput;
use rand::rngs::StdRng;
use rand::SeedableRng as _;
use trisample::Sample as _;

fn triangle(dimension: usize) -> trisample::Triangle {
    let mut v2 = vec![0.0; dimension];
    let mut v3 = vec![0.0; dimension];
    v2[0] = 1.0;
    v3[1] = 1.0;
    trisample::Triangle::new(vec![0.0; dimension], v2, v3).unwrap()
}

pub fn bench_regular_grid(c: &mut Criterion) {
    let triangle = triangle(3);
    let mut group = c.benchmark_group("regular_grid");

    for step_count in [20, 100, 500] {
        let point_count = (step_count + 1) * (step_count + 2) / 2;
        group.throughput(Throughput::Elements(point_count as u64));
        group.bench_function(&step_count.to_string(), |b| {
            let mut algo = trisample::RegularGrid { step_count };
            b.iter(|| algo.sample(black_box(&triangle)))
        });
    }
}

pub fn bench_random_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_points");

    for dimension in [2, 3, 8] {
        let triangle = triangle(dimension);
        let point_count = 10_000;
        group.throughput(Throughput::Elements(point_count as u64));
        group.bench_function(&format!("{dimension}d"), |b| {
            let mut algo = trisample::RandomPoints {
                rng: StdRng::seed_from_u64(0),
                point_count,
                include_vertices: true,
            };
            b.iter(|| algo.sample(black_box(&triangle)))
        });
    }
}

criterion_group!(benches, bench_regular_grid, bench_random_points);
criterion_main!(benches);

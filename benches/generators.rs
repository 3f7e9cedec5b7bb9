use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use randomgraph::{balanced_tree, barabasi_albert, erdos_renyi, watts_strogatz};

fn bench_generators(c: &mut Criterion) {
    let _ = env_logger::try_init();
    let mut group = c.benchmark_group("generators");

    for &n in &[100usize, 1_000] {
        group.bench_with_input(BenchmarkId::new("erdos_renyi_np", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| erdos_renyi::np(black_box(n), 0.05, &mut rng).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("erdos_renyi_nm", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| erdos_renyi::nm(black_box(n), n * 4, &mut rng).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("watts_strogatz", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| watts_strogatz(black_box(n), 6, 0.2, &mut rng).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("barabasi_albert", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| barabasi_albert(black_box(n), 5, 3, &mut rng).unwrap())
        });
    }

    group.bench_function("balanced_tree_3_7", |b| {
        b.iter(|| balanced_tree(black_box(3), black_box(7)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generators);
criterion_main!(benches);

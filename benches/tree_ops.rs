use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lazy_seg::{
    algebras::{
        add_sum::{RangeAddSum, SumLen},
        affine::{Affine, ModSum, RangeAffineSum},
    },
    LazySegTree,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const N: usize = 1 << 17;

fn random_ranges(rng: &mut StdRng, count: usize) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| {
            let lo = rng.gen_range(0..N);
            let hi = rng.gen_range(lo..=N);
            (lo, hi)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xB111D);
    let values: Vec<ModSum> = (0..N)
        .map(|_| ModSum::leaf(rng.gen_range(0..998_244_353)))
        .collect();

    let mut group = c.benchmark_group("build");
    group.bench_function("from_values", |b| {
        b.iter_batched(
            || values.clone(),
            |vals| black_box(LazySegTree::from_values(RangeAffineSum::default(), vals)),
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

fn bench_affine_ops(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xAFF1E);
    let values = (0..N).map(|i| ModSum::leaf(i as u64)).collect();
    let mut tree = LazySegTree::from_values(RangeAffineSum::default(), values);
    let ranges = random_ranges(&mut rng, 1024);
    let tags: Vec<Affine> = (0..1024)
        .map(|_| Affine {
            mul: rng.gen_range(0..998_244_353),
            add: rng.gen_range(0..998_244_353),
        })
        .collect();

    let mut group = c.benchmark_group("range_affine_sum");
    group.bench_function("apply_range", |b| {
        let mut i = 0;
        b.iter(|| {
            let (lo, hi) = ranges[i % ranges.len()];
            tree.apply_range(lo, hi, tags[i % tags.len()]);
            i += 1;
        });
    });
    group.bench_function("prod", |b| {
        let mut i = 0;
        b.iter(|| {
            let (lo, hi) = ranges[i % ranges.len()];
            i += 1;
            black_box(tree.prod(lo, hi));
        });
    });
    group.finish();
}

fn bench_point_ops(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x9017);
    let mut tree = LazySegTree::from_values(RangeAddSum, vec![SumLen::leaf(1); N]);
    tree.apply_range(0, N, 5);
    let slots: Vec<usize> = (0..1024).map(|_| rng.gen_range(0..N)).collect();

    let mut group = c.benchmark_group("range_add_sum_point");
    group.bench_function("get", |b| {
        let mut i = 0;
        b.iter(|| {
            i += 1;
            black_box(tree.get(slots[i % slots.len()]));
        });
    });
    group.bench_function("set", |b| {
        let mut i = 0;
        b.iter(|| {
            i += 1;
            tree.set(slots[i % slots.len()], SumLen::leaf(i as i64));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_affine_ops, bench_point_ops);
criterion_main!(benches);

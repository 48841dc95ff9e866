use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazy_seg::{
    algebras::add_sum::{RangeAddSum, SumLen},
    LazySegTree,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_searches(c: &mut Criterion) {
    let n = 1 << 18;
    let mut rng = StdRng::seed_from_u64(0x5EA2C4);
    let values = (0..n).map(|_| SumLen::leaf(rng.gen_range(0..16))).collect();
    let mut tree = LazySegTree::from_values(RangeAddSum, values);
    for _ in 0..1000 {
        let lo = rng.gen_range(0..n);
        let hi = rng.gen_range(lo..=n);
        tree.apply_range(lo, hi, rng.gen_range(0..4));
    }
    let queries: Vec<(usize, i64)> = (0..1024)
        .map(|_| (rng.gen_range(0..=n), rng.gen_range(0..1 << 20)))
        .collect();

    let mut group = c.benchmark_group("boundary_search");
    group.bench_function("max_right", |b| {
        let mut i = 0;
        b.iter(|| {
            let (lo, bound) = queries[i % queries.len()];
            i += 1;
            black_box(tree.max_right(lo, |acc| acc.sum <= bound));
        });
    });
    group.bench_function("min_left", |b| {
        let mut i = 0;
        b.iter(|| {
            let (hi, bound) = queries[i % queries.len()];
            i += 1;
            black_box(tree.min_left(hi, |acc| acc.sum <= bound));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_searches);
criterion_main!(benches);

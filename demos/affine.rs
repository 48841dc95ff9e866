//! Example: range affine update / range sum modulo 998244353.
//!
//! Run with:
//! `cargo run --example affine`

use lazy_seg::{
    algebras::affine::{Affine, ModSum, RangeAffineSum},
    LazySegTreeBuilder,
};

fn main() {
    let mut tree = LazySegTreeBuilder::new(RangeAffineSum::default())
        .with_values([1, 2, 3, 4, 5].map(ModSum::leaf))
        .build();

    println!("sum[0, 5) = {}", tree.prod(0, 5).sum);

    // x -> 100x + 101 on [2, 4)
    tree.apply_range(2, 4, Affine { mul: 100, add: 101 });
    println!("sum[0, 3) = {}", tree.prod(0, 3).sum);

    // x -> 102x + 103 on [1, 3)
    tree.apply_range(1, 3, Affine { mul: 102, add: 103 });
    println!("sum[2, 5) = {}", tree.prod(2, 5).sum);

    // x -> 104x + 105 on [2, 5)
    tree.apply_range(2, 5, Affine { mul: 104, add: 105 });
    println!("sum[0, 5) = {}", tree.prod(0, 5).sum);
}

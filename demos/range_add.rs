//! Example: range add / range sum over eight slots.
//!
//! Run with:
//! `cargo run --example range_add`

use lazy_seg::{
    algebras::add_sum::{RangeAddSum, SumLen},
    LazySegTree,
};

fn main() {
    let mut tree = LazySegTree::from_values(RangeAddSum, vec![SumLen::leaf(0); 8]);

    tree.apply_range(2, 5, 3);
    println!("after +3 on [2, 5): total = {}", tree.prod(0, 8).sum);
    println!("slot 2 = {}", tree.get(2).sum);

    tree.set(2, SumLen::leaf(10));
    println!("after set(2, 10): sum[2, 5) = {}", tree.prod(2, 5).sum);

    let r = tree.max_right(0, |acc| acc.sum <= 10);
    println!("longest prefix with sum <= 10 ends at {r}");

    let slots: Vec<i64> = tree.values().into_iter().map(|v| v.sum).collect();
    println!("slots: {slots:?}");
}

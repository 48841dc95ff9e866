use lazy_seg::{
    algebras::{
        add_sum::{RangeAddSum, SumLen},
        tuple::FnAlgebra,
    },
    LazySegTree,
};

/// `(sum, len)` pairs under range add, spelled as raw tuples.
fn sum_add_tuples() -> FnAlgebra<2, 1> {
    FnAlgebra::new(
        [0, 0],
        [0],
        |a, b| [a[0] + b[0], a[1] + b[1]],
        |f, g| [f[0] + g[0]],
        |f, x| [x[0] + f[0] * x[1], x[1]],
    )
}

#[test]
fn range_add_sum_walkthrough() {
    let mut tree = LazySegTree::from_values(RangeAddSum, vec![SumLen::leaf(0); 8]);
    tree.apply_range(2, 5, 3);
    assert_eq!(tree.prod(0, 8).sum, 9);
    assert_eq!(tree.prod(2, 5).sum, 9);
    assert_eq!(tree.get(2).sum, 3);
    tree.set(2, SumLen::leaf(10));
    assert_eq!(tree.prod(2, 5).sum, 16);
    // prod(0, 3) = 10 <= 10 but prod(0, 4) = 13 > 10.
    assert_eq!(tree.max_right(0, |acc| acc.sum <= 10), 3);
    assert_eq!(tree.min_left(8, |acc| acc.sum <= 6), 3);
}

#[test]
fn tuple_algebra_walkthrough() {
    let mut tree = LazySegTree::from_values(sum_add_tuples(), vec![[0, 1]; 8]);
    tree.apply_range(2, 5, [3]);
    assert_eq!(tree.prod(0, 8), [9, 8]);
    assert_eq!(tree.get(2), [3, 1]);
    tree.set(2, [10, 1]);
    assert_eq!(tree.prod(2, 5), [16, 3]);
    assert_eq!(tree.all_prod(), [16, 8]);
    assert_eq!(tree.max_right(0, |acc| acc[0] <= 10), 3);
}

#[test]
fn non_power_of_two_capacity() {
    let mut tree = LazySegTree::new(sum_add_tuples(), 5);
    for p in 0..5 {
        tree.set(p, [p as i64, 1]);
    }
    tree.apply_range(0, 5, [1]);
    assert_eq!(tree.all_prod(), [15, 5]);
    assert_eq!(tree.prod(3, 5), [9, 2]);
    assert_eq!(tree.max_right(1, |acc| acc[0] <= 5), 3);
    assert_eq!(tree.max_right(0, |acc| acc[0] <= 100), 5);
    assert_eq!(tree.min_left(5, |acc| acc[0] <= 100), 0);
}

#[test]
fn empty_ranges_are_identities() {
    let mut tree = LazySegTree::from_values(RangeAddSum, vec![SumLen::leaf(4); 6]);
    for p in 0..=6 {
        assert_eq!(tree.prod(p, p), SumLen::default());
        tree.apply_range(p, p, 100);
    }
    assert_eq!(tree.all_prod(), SumLen { sum: 24, len: 6 });
}

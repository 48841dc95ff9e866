//! Example: locating boundaries with `max_right` / `min_left`.
//!
//! Treat slots as seat counts per row; find how many rows from a starting row
//! fit a group, after a block of rows gains extra seats.
//!
//! Run with:
//! `cargo run --example boundary_search`

use lazy_seg::{
    algebras::add_extremum::RangeAddMax,
    algebras::add_sum::{RangeAddSum, SumLen},
    LazySegTree,
};

fn main() {
    let seats = [4, 6, 2, 8, 5, 3, 7, 1];
    let mut rows = LazySegTree::from_values(RangeAddSum, seats.map(SumLen::leaf).to_vec());
    rows.apply_range(2, 6, 2);

    let group = 20;
    for start in [0, 3, 6] {
        let end = rows.max_right(start, |acc| acc.sum < group);
        if end == rows.len() {
            println!("from row {start}: all remaining rows hold fewer than {group} seats");
        } else {
            println!("from row {start}: rows [{start}, {}] seat a group of {group}", end);
        }
    }

    let mut peaks = LazySegTree::from_values(RangeAddMax, seats.to_vec());
    let l = peaks.min_left(peaks.len(), |m| *m < 8);
    println!("rows from {l} onwards all have fewer than 8 seats");
}

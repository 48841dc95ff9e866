//! Range add / range sum.
//!
//! An addition of `t` to every slot of a range raises its sum by `t * len`, so
//! aggregates carry their own slot count. Arithmetic wraps, which keeps every
//! law exact over the whole `i64` domain.

use crate::traits::LazyAlgebra;

/// Sum of a range together with the number of slots it covers.
///
/// The default (identity) value has `len == 0`, so range tags leave it
/// unchanged. Fill trees with `leaf(0)` rather than relying on
/// [`LazySegTree::new`](crate::LazySegTree::new) when slots should count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SumLen {
    pub sum: i64,
    pub len: i64,
}

impl SumLen {
    /// Aggregate of a single slot holding `x`.
    pub fn leaf(x: i64) -> Self {
        Self { sum: x, len: 1 }
    }
}

/// Range add, range sum.
#[derive(Clone, Copy, Debug, Default)]
pub struct RangeAddSum;

impl LazyAlgebra for RangeAddSum {
    type Value = SumLen;
    type Tag = i64;

    fn identity(&self) -> SumLen {
        SumLen::default()
    }

    fn op(&self, left: &SumLen, right: &SumLen) -> SumLen {
        SumLen {
            sum: left.sum.wrapping_add(right.sum),
            len: left.len.wrapping_add(right.len),
        }
    }

    fn tag_identity(&self) -> i64 {
        0
    }

    fn composite(&self, outer: &i64, inner: &i64) -> i64 {
        outer.wrapping_add(*inner)
    }

    fn mapping(&self, tag: &i64, value: &SumLen) -> SumLen {
        SumLen {
            sum: value.sum.wrapping_add(tag.wrapping_mul(value.len)),
            len: value.len,
        }
    }
}

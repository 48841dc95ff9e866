//! Range add / range max and range add / range min.
//!
//! The identity aggregate is the sentinel `i64::MIN` (resp. `i64::MAX`), which
//! additions leave untouched. Additions saturate, so stacked tags clamp at the
//! `i64` bounds instead of overflowing.

use crate::traits::LazyAlgebra;

/// Range add, range max.
#[derive(Clone, Copy, Debug, Default)]
pub struct RangeAddMax;

impl LazyAlgebra for RangeAddMax {
    type Value = i64;
    type Tag = i64;

    fn identity(&self) -> i64 {
        i64::MIN
    }
    fn op(&self, left: &i64, right: &i64) -> i64 {
        *left.max(right)
    }
    fn tag_identity(&self) -> i64 {
        0
    }
    fn composite(&self, outer: &i64, inner: &i64) -> i64 {
        outer.saturating_add(*inner)
    }
    fn mapping(&self, tag: &i64, value: &i64) -> i64 {
        if *value == i64::MIN {
            *value
        } else {
            value.saturating_add(*tag)
        }
    }
}

/// Range add, range min.
#[derive(Clone, Copy, Debug, Default)]
pub struct RangeAddMin;

impl LazyAlgebra for RangeAddMin {
    type Value = i64;
    type Tag = i64;

    fn identity(&self) -> i64 {
        i64::MAX
    }
    fn op(&self, left: &i64, right: &i64) -> i64 {
        *left.min(right)
    }
    fn tag_identity(&self) -> i64 {
        0
    }
    fn composite(&self, outer: &i64, inner: &i64) -> i64 {
        outer.saturating_add(*inner)
    }
    fn mapping(&self, tag: &i64, value: &i64) -> i64 {
        if *value == i64::MAX {
            *value
        } else {
            value.saturating_add(*tag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LazySegTree;

    #[test]
    fn sentinel_survives_tags() {
        assert_eq!(RangeAddMax.mapping(&-5, &i64::MIN), i64::MIN);
        assert_eq!(RangeAddMin.mapping(&5, &i64::MAX), i64::MAX);
    }

    #[test]
    fn stacked_tags_saturate() {
        let mut max = LazySegTree::from_values(RangeAddMax, vec![0, 1, 2, 3]);
        let mut min = LazySegTree::from_values(RangeAddMin, vec![0, 1, 2, 3]);
        for _ in 0..4 {
            max.apply_range(0, 4, i64::MAX / 2);
            min.apply_range(0, 4, i64::MIN / 2);
        }
        assert_eq!(max.all_prod(), i64::MAX);
        assert_eq!(min.all_prod(), i64::MIN);
        assert_eq!(RangeAddMax.composite(&i64::MAX, &1), i64::MAX);
        assert_eq!(RangeAddMin.composite(&i64::MIN, &-1), i64::MIN);
    }

    #[test]
    fn max_tree_tracks_range_adds() {
        let mut tree = LazySegTree::from_values(RangeAddMax, vec![3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(tree.all_prod(), 9);
        tree.apply_range(0, 5, 10);
        assert_eq!(tree.all_prod(), 15);
        assert_eq!(tree.prod(5, 8), 9);
        // First slot whose running max exceeds 13.
        assert_eq!(tree.max_right(0, |m| *m <= 13), 2);
    }

    #[test]
    fn min_tree_tracks_range_adds() {
        let mut tree = LazySegTree::from_values(RangeAddMin, vec![3, 1, 4, 1, 5]);
        tree.apply_range(1, 4, 5);
        assert_eq!(tree.values(), vec![3, 6, 9, 6, 5]);
        assert_eq!(tree.prod(1, 5), 5);
        assert_eq!(tree.min_left(5, |m| *m >= 5), 1);
    }
}

//! Range bit flip / inversion count over a 0/1 sequence.
//!
//! Combining is not commutative: an inversion is a `1` strictly before a `0`,
//! so `op(left, right)` adds `left.ones * right.zeros`. Flipping a range turns
//! every non-inverted `(0, 1)` pair into an inversion and vice versa.

use crate::traits::LazyAlgebra;

/// Bit counts and inversion count of a range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitRun {
    pub zeros: u64,
    pub ones: u64,
    pub inversions: u64,
}

impl BitRun {
    /// Aggregate of a single slot holding `bit`.
    pub fn leaf(bit: bool) -> Self {
        if bit {
            Self {
                zeros: 0,
                ones: 1,
                inversions: 0,
            }
        } else {
            Self {
                zeros: 1,
                ones: 0,
                inversions: 0,
            }
        }
    }
}

/// Range flip, range inversion count. The tag is "flip pending".
#[derive(Clone, Copy, Debug, Default)]
pub struct RangeFlipInversions;

impl LazyAlgebra for RangeFlipInversions {
    type Value = BitRun;
    type Tag = bool;

    fn identity(&self) -> BitRun {
        BitRun::default()
    }

    fn op(&self, left: &BitRun, right: &BitRun) -> BitRun {
        BitRun {
            zeros: left.zeros + right.zeros,
            ones: left.ones + right.ones,
            inversions: left.inversions + right.inversions + left.ones * right.zeros,
        }
    }

    fn tag_identity(&self) -> bool {
        false
    }

    fn composite(&self, outer: &bool, inner: &bool) -> bool {
        outer ^ inner
    }

    fn mapping(&self, tag: &bool, value: &BitRun) -> BitRun {
        if !tag {
            return *value;
        }
        BitRun {
            zeros: value.ones,
            ones: value.zeros,
            inversions: value.zeros * value.ones - value.inversions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LazySegTree;

    fn bits(s: &str) -> Vec<BitRun> {
        s.bytes().map(|b| BitRun::leaf(b == b'1')).collect()
    }

    #[test]
    fn op_counts_cross_inversions() {
        let a = RangeFlipInversions;
        let left = a.op(&BitRun::leaf(true), &BitRun::leaf(true));
        let right = a.op(&BitRun::leaf(false), &BitRun::leaf(true));
        assert_eq!(a.op(&left, &right).inversions, 2);
        assert_eq!(a.op(&right, &left).inversions, 0);
    }

    #[test]
    fn flips_and_queries() {
        let mut tree = LazySegTree::from_values(RangeFlipInversions, bits("01010"));
        // 1 0 1 0 -> inversions (1,0),(1,0),(1,0) over slots 1..5
        assert_eq!(tree.prod(0, 5).inversions, 3);
        tree.apply_range(1, 4, true);
        // 0 0 1 0 0
        assert_eq!(tree.all_prod().inversions, 2);
        tree.apply_range(0, 5, true);
        // 1 1 0 1 1
        assert_eq!(tree.all_prod().inversions, 2);
        assert_eq!(tree.prod(0, 3).inversions, 2);
        tree.apply(2, true);
        assert_eq!(tree.all_prod().inversions, 0);
    }
}

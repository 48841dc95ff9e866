//! Range assign / range min.
//!
//! A pending assignment overrides everything queued below it, so the newer
//! (outer) tag wins on composition.

use crate::traits::LazyAlgebra;

/// Range assign, range min. `None` is the "no assignment" tag.
#[derive(Clone, Copy, Debug, Default)]
pub struct RangeAssignMin;

impl LazyAlgebra for RangeAssignMin {
    type Value = i64;
    type Tag = Option<i64>;

    fn identity(&self) -> i64 {
        i64::MAX
    }

    fn op(&self, left: &i64, right: &i64) -> i64 {
        *left.min(right)
    }

    fn tag_identity(&self) -> Option<i64> {
        None
    }

    fn composite(&self, outer: &Option<i64>, inner: &Option<i64>) -> Option<i64> {
        outer.or(*inner)
    }

    fn mapping(&self, tag: &Option<i64>, value: &i64) -> i64 {
        tag.unwrap_or(*value)
    }
}

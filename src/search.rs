//! Monotone boundary search on top of [`LazySegTree`].
//!
//! Both searches need a predicate `g` that holds for the identity aggregate
//! and is monotone: once `g` fails for a range growing in the search
//! direction it keeps failing. Monotonicity is not checked; a predicate that
//! violates it yields an unspecified (but in-bounds) boundary.

use crate::error::SegTreeError;
use crate::traits::LazyAlgebra;
use crate::tree::{precondition_failed, LazySegTree};

impl<A: LazyAlgebra> LazySegTree<A> {
    /// Largest `r` in `[lo, len()]` such that `pred(prod(lo, r))` holds.
    ///
    /// # Panics
    /// Panics if `lo > len()` or if `pred` rejects the identity aggregate.
    #[track_caller]
    pub fn max_right<G>(&mut self, lo: usize, pred: G) -> usize
    where
        G: FnMut(&A::Value) -> bool,
    {
        match self.try_max_right(lo, pred) {
            Ok(r) => r,
            Err(err) => precondition_failed(err),
        }
    }

    /// Fallible variant of [`max_right`](Self::max_right).
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, pred)))]
    pub fn try_max_right<G>(&mut self, lo: usize, mut pred: G) -> Result<usize, SegTreeError>
    where
        G: FnMut(&A::Value) -> bool,
    {
        let len = self.len();
        SegTreeError::check_boundary(lo, len)?;
        if !pred(self.identity()) {
            return Err(SegTreeError::IdentityRejected);
        }
        if lo == len {
            return Ok(len);
        }

        let size = self.size();
        let mut l = lo + size;
        self.push_to(l);
        let mut acc = self.identity().clone();
        loop {
            // Climb while `l` is a left child: its parent starts at the same slot.
            l >>= l.trailing_zeros();
            let candidate = self.combine(&acc, self.node(l));
            if !pred(&candidate) {
                // The boundary lies inside `l`; walk down, preferring the right
                // child whenever the left one can be absorbed.
                while l < size {
                    self.push(l);
                    l <<= 1;
                    let candidate = self.combine(&acc, self.node(l));
                    if pred(&candidate) {
                        acc = candidate;
                        l += 1;
                    }
                }
                return Ok(l - size);
            }
            acc = candidate;
            l += 1;
            if l.is_power_of_two() {
                break;
            }
        }
        Ok(len)
    }

    /// Smallest `l` in `[0, hi]` such that `pred(prod(l, hi))` holds.
    ///
    /// # Panics
    /// Panics if `hi > len()` or if `pred` rejects the identity aggregate.
    #[track_caller]
    pub fn min_left<G>(&mut self, hi: usize, pred: G) -> usize
    where
        G: FnMut(&A::Value) -> bool,
    {
        match self.try_min_left(hi, pred) {
            Ok(l) => l,
            Err(err) => precondition_failed(err),
        }
    }

    /// Fallible variant of [`min_left`](Self::min_left).
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, pred)))]
    pub fn try_min_left<G>(&mut self, hi: usize, mut pred: G) -> Result<usize, SegTreeError>
    where
        G: FnMut(&A::Value) -> bool,
    {
        SegTreeError::check_boundary(hi, self.len())?;
        if !pred(self.identity()) {
            return Err(SegTreeError::IdentityRejected);
        }
        if hi == 0 {
            return Ok(0);
        }

        let size = self.size();
        let mut r = hi + size;
        self.push_to(r - 1);
        let mut acc = self.identity().clone();
        loop {
            r -= 1;
            while r > 1 && r & 1 == 1 {
                r >>= 1;
            }
            let candidate = self.combine(self.node(r), &acc);
            if !pred(&candidate) {
                while r < size {
                    self.push(r);
                    r = r << 1 | 1;
                    let candidate = self.combine(self.node(r), &acc);
                    if pred(&candidate) {
                        acc = candidate;
                        r -= 1;
                    }
                }
                return Ok(r + 1 - size);
            }
            acc = candidate;
            if r.is_power_of_two() {
                break;
            }
        }
        Ok(0)
    }
}

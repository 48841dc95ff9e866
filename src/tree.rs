//! Lazy-propagation segment tree over an implicit binary-tree array.
//!
//! Layout: node `1` is the root, node `k` has children `2k` and `2k + 1`.
//! Leaves live in `[size, 2 * size)` and slot `p` is leaf `size + p`; leaves at
//! or beyond `size + len` are padding and always hold the identity aggregate.
//!
//! Invariant: `dat[k]` is the correct aggregate of the slots under `k`, while
//! `dat`/`laz` of `k`'s children are stale by exactly `laz[k]`. Every operation
//! that reads or writes below a node first pushes all tags on the path from
//! the root down to it.

use crate::error::SegTreeError;
use crate::traits::LazyAlgebra;
use crate::utils::{is_aligned, tree_height, tree_size};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Segment tree with range aggregation and lazily propagated range updates.
///
/// Typical usage:
/// ```
/// use lazy_seg::{algebras::add_sum::{RangeAddSum, SumLen}, LazySegTree};
///
/// let mut tree = LazySegTree::from_values(RangeAddSum, vec![SumLen::leaf(0); 8]);
/// tree.apply_range(2, 5, 3);
/// assert_eq!(tree.prod(0, 8).sum, 9);
/// assert_eq!(tree.get(2).sum, 3);
/// let r = tree.max_right(0, |acc| acc.sum <= 3);
/// assert_eq!(r, 3);
/// ```
///
/// The tree has no interior synchronisation; every mutating call takes
/// `&mut self`. Wrap it in a `Mutex` to share it between threads.
pub struct LazySegTree<A: LazyAlgebra> {
    algebra: A,
    /// Number of addressable slots.
    len: usize,
    /// Number of leaves, a power of two `>= len`.
    size: usize,
    /// `log2(size)`.
    log: u32,
    e: A::Value,
    id: A::Tag,
    dat: Vec<A::Value>,
    laz: Vec<A::Tag>,
}

impl<A: LazyAlgebra> LazySegTree<A> {
    /// Create a tree over `capacity` slots, all holding the identity aggregate.
    ///
    /// Algebras whose aggregates carry a slot count (such as
    /// [`SumLen`](crate::algebras::add_sum::SumLen) and
    /// [`ModSum`](crate::algebras::affine::ModSum)) give identity slots a
    /// length of zero, which range tags then leave at zero. Seed those with
    /// [`from_values`](Self::from_values) and `vec![leaf(0); capacity]`.
    pub fn new(algebra: A, capacity: usize) -> Self {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("lazy_seg_new", capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let size = tree_size(capacity);
        let e = algebra.identity();
        let id = algebra.tag_identity();
        Self {
            dat: vec![e.clone(); size << 1],
            laz: vec![id.clone(); size],
            algebra,
            len: capacity,
            size,
            log: tree_height(size),
            e,
            id,
        }
    }

    /// Create a tree whose slots hold `values`, built bottom-up in O(n).
    pub fn from_values(algebra: A, values: Vec<A::Value>) -> Self {
        let mut tree = Self::new(algebra, values.len());
        tree.build(values);
        tree
    }

    /// Load `values` into the leading leaves of a fresh tree and recompute
    /// every internal node. Callers guarantee `values.len() <= len` and that
    /// no tags are pending.
    pub(crate) fn build(&mut self, values: Vec<A::Value>) {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("lazy_seg_build", values = values.len(), size = self.size);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.fill_leaves(values);
        for k in (1..self.size).rev() {
            self.pull(k);
        }
    }

    fn fill_leaves(&mut self, values: Vec<A::Value>) {
        debug_assert!(values.len() <= self.len);
        for (slot, value) in values.into_iter().enumerate() {
            self.dat[self.size + slot] = value;
        }
    }

    /// Number of addressable slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree has no addressable slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of leaves in the underlying complete binary tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Height of the underlying tree, `log2(size())`.
    pub fn height(&self) -> u32 {
        self.log
    }

    /// Expose the algebra the tree was built with.
    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    // ----- push/pull engine -----

    #[inline]
    fn pull(&mut self, k: usize) {
        self.dat[k] = self.algebra.op(&self.dat[k << 1], &self.dat[k << 1 | 1]);
    }

    /// Apply `tag` to node `k`: map its aggregate and, for internal nodes,
    /// queue the tag in front of whatever is already pending there.
    #[inline]
    fn apply_node(&mut self, k: usize, tag: &A::Tag) {
        self.dat[k] = self.algebra.mapping(tag, &self.dat[k]);
        if k < self.size {
            self.laz[k] = self.algebra.composite(tag, &self.laz[k]);
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, k: usize) {
        if self.laz[k] == self.id {
            return;
        }
        let tag = std::mem::replace(&mut self.laz[k], self.id.clone());
        self.apply_node(k << 1, &tag);
        self.apply_node(k << 1 | 1, &tag);
    }

    /// Push every strict ancestor of `leaf`, root first.
    pub(crate) fn push_to(&mut self, leaf: usize) {
        for i in (1..=self.log).rev() {
            self.push(leaf >> i);
        }
    }

    /// Push the ancestors of the boundary leaves `l` and `r - 1` that straddle
    /// the half-open leaf range `[l, r)`.
    fn push_to_range(&mut self, l: usize, r: usize) {
        for i in (1..=self.log).rev() {
            if !is_aligned(l, i) {
                self.push(l >> i);
            }
            if !is_aligned(r, i) {
                self.push((r - 1) >> i);
            }
        }
    }

    fn update_from(&mut self, leaf: usize) {
        for i in 1..=self.log {
            self.pull(leaf >> i);
        }
    }

    fn update_from_range(&mut self, l: usize, r: usize) {
        for i in 1..=self.log {
            if !is_aligned(l, i) {
                self.pull(l >> i);
            }
            if !is_aligned(r, i) {
                self.pull((r - 1) >> i);
            }
        }
    }

    // ----- point operations -----

    /// Overwrite slot `slot` with `value`.
    ///
    /// # Panics
    /// Panics if `slot >= len()`.
    #[track_caller]
    pub fn set(&mut self, slot: usize, value: A::Value) {
        if let Err(err) = self.try_set(slot, value) {
            precondition_failed(err);
        }
    }

    /// Fallible variant of [`set`](Self::set).
    pub fn try_set(&mut self, slot: usize, value: A::Value) -> Result<(), SegTreeError> {
        SegTreeError::check_index(slot, self.len)?;
        let leaf = slot + self.size;
        self.push_to(leaf);
        self.dat[leaf] = value;
        self.update_from(leaf);
        Ok(())
    }

    /// Current value of slot `slot`.
    ///
    /// Takes `&mut self` because pending tags above the leaf are materialised.
    ///
    /// # Panics
    /// Panics if `slot >= len()`.
    #[track_caller]
    pub fn get(&mut self, slot: usize) -> A::Value {
        match self.try_get(slot) {
            Ok(value) => value,
            Err(err) => precondition_failed(err),
        }
    }

    /// Fallible variant of [`get`](Self::get).
    pub fn try_get(&mut self, slot: usize) -> Result<A::Value, SegTreeError> {
        SegTreeError::check_index(slot, self.len)?;
        let leaf = slot + self.size;
        self.push_to(leaf);
        Ok(self.dat[leaf].clone())
    }

    /// Apply `tag` to the single slot `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= len()`.
    #[track_caller]
    pub fn apply(&mut self, slot: usize, tag: A::Tag) {
        if let Err(err) = self.try_apply(slot, tag) {
            precondition_failed(err);
        }
    }

    /// Fallible variant of [`apply`](Self::apply).
    pub fn try_apply(&mut self, slot: usize, tag: A::Tag) -> Result<(), SegTreeError> {
        SegTreeError::check_index(slot, self.len)?;
        let leaf = slot + self.size;
        self.push_to(leaf);
        self.dat[leaf] = self.algebra.mapping(&tag, &self.dat[leaf]);
        self.update_from(leaf);
        Ok(())
    }

    // ----- range operations -----

    /// Aggregate of the half-open slot range `[lo, hi)`, combined left to right.
    ///
    /// # Panics
    /// Panics unless `lo <= hi <= len()`.
    #[track_caller]
    pub fn prod(&mut self, lo: usize, hi: usize) -> A::Value {
        match self.try_prod(lo, hi) {
            Ok(value) => value,
            Err(err) => precondition_failed(err),
        }
    }

    /// Fallible variant of [`prod`](Self::prod).
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn try_prod(&mut self, lo: usize, hi: usize) -> Result<A::Value, SegTreeError> {
        SegTreeError::check_range(lo, hi, self.len)?;
        if lo == hi {
            return Ok(self.e.clone());
        }
        let (mut l, mut r) = (lo + self.size, hi + self.size);
        self.push_to_range(l, r);

        let mut left = self.e.clone();
        let mut right = self.e.clone();
        while l < r {
            if l & 1 == 1 {
                left = self.algebra.op(&left, &self.dat[l]);
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                right = self.algebra.op(&self.dat[r], &right);
            }
            l >>= 1;
            r >>= 1;
        }
        Ok(self.algebra.op(&left, &right))
    }

    /// Aggregate of every slot, in O(1).
    pub fn all_prod(&self) -> A::Value {
        self.dat[1].clone()
    }

    /// Apply `tag` to every slot in `[lo, hi)`.
    ///
    /// # Panics
    /// Panics unless `lo <= hi <= len()`.
    #[track_caller]
    pub fn apply_range(&mut self, lo: usize, hi: usize, tag: A::Tag) {
        if let Err(err) = self.try_apply_range(lo, hi, tag) {
            precondition_failed(err);
        }
    }

    /// Fallible variant of [`apply_range`](Self::apply_range).
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, tag)))]
    pub fn try_apply_range(&mut self, lo: usize, hi: usize, tag: A::Tag) -> Result<(), SegTreeError> {
        SegTreeError::check_range(lo, hi, self.len)?;
        if lo == hi {
            return Ok(());
        }
        let (l, r) = (lo + self.size, hi + self.size);
        self.push_to_range(l, r);

        let (mut l2, mut r2) = (l, r);
        while l2 < r2 {
            if l2 & 1 == 1 {
                self.apply_node(l2, &tag);
                l2 += 1;
            }
            if r2 & 1 == 1 {
                r2 -= 1;
                self.apply_node(r2, &tag);
            }
            l2 >>= 1;
            r2 >>= 1;
        }

        self.update_from_range(l, r);
        Ok(())
    }

    /// Flush every pending tag and return the values of all slots in order.
    pub fn values(&mut self) -> Vec<A::Value> {
        for k in 1..self.size {
            self.push(k);
        }
        self.dat[self.size..self.size + self.len].to_vec()
    }

    pub(crate) fn identity(&self) -> &A::Value {
        &self.e
    }

    pub(crate) fn node(&self, k: usize) -> &A::Value {
        &self.dat[k]
    }

    pub(crate) fn combine(&self, left: &A::Value, right: &A::Value) -> A::Value {
        self.algebra.op(left, right)
    }
}

#[cfg(feature = "parallel")]
impl<A> LazySegTree<A>
where
    A: LazyAlgebra + Sync,
    A::Value: Send + Sync,
{
    /// Same as [`from_values`](Self::from_values), but every tree level is
    /// combined in parallel on the rayon pool.
    pub fn from_values_par(algebra: A, values: Vec<A::Value>) -> Self {
        let mut tree = Self::new(algebra, values.len());
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("lazy_seg_build_par", values = values.len(), size = tree.size);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        tree.fill_leaves(values);
        let algebra = &tree.algebra;
        for level in (0..tree.log).rev() {
            let first = 1usize << level;
            let (upper, lower) = tree.dat.split_at_mut(first << 1);
            upper[first..]
                .par_iter_mut()
                .zip(lower[..first << 1].par_chunks(2))
                .for_each(|(node, children)| *node = algebra.op(&children[0], &children[1]));
        }
        tree
    }
}

#[cold]
#[track_caller]
pub(crate) fn precondition_failed(err: SegTreeError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(error = %err, "lazy segment tree precondition violated");
    panic!("{err}")
}

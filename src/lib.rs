//! Lazy-propagation segment tree
//!
//! This crate provides a generic segment tree over a fixed number of slots
//! supporting, in O(log n) each:
//! - range aggregation with an associative (not necessarily commutative) `op`,
//! - range updates with composable tags that are pushed down lazily,
//! - monotone boundary search (`max_right` / `min_left`) over the aggregates.
//!
//! ## Core idea
//! 1. Describe your aggregates and updates as a [`LazyAlgebra`]: a monoid of
//!    values plus a monoid of tags acting on it.
//! 2. Build a [`LazySegTree`] with that algebra, either empty or from initial
//!    values (see also [`LazySegTreeBuilder`]).
//! 3. Mix point/range queries and updates freely; pending tags are flushed only
//!    along the paths an operation touches.
//!
//! ## Quick start
//! ```
//! use lazy_seg::{algebras::add_sum::{RangeAddSum, SumLen}, LazySegTree};
//!
//! let mut tree = LazySegTree::from_values(RangeAddSum, vec![SumLen::leaf(0); 8]);
//! tree.apply_range(2, 5, 3);
//! assert_eq!(tree.prod(2, 5).sum, 9);
//! tree.set(2, SumLen::leaf(10));
//! assert_eq!(tree.prod(2, 5).sum, 16);
//! assert_eq!(tree.max_right(0, |acc| acc.sum <= 10), 3);
//! ```
//!
//! ## Built-in algebras
//! The `algebras` module contains reference implementations for:
//! - fixed-arity `i64` tuples assembled from plain functions
//! - range add / range sum
//! - range affine / range sum modulo a prime
//! - range add / range max and min
//! - range assign / range min
//! - range flip / inversion count over bits
//!
//! The tree is single-threaded and has no interior locking; share it across
//! threads by wrapping it in a `Mutex`.

pub mod algebras;
pub mod builder;
pub mod error;
mod search;
pub mod traits;
pub mod tree;
pub mod utils;

pub use crate::builder::LazySegTreeBuilder;
pub use crate::error::SegTreeError;
pub use crate::traits::LazyAlgebra;
pub use crate::tree::LazySegTree;

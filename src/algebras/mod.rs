//! Reference algebras for [`LazySegTree`](crate::LazySegTree).
//!
//! These modules show how to implement [`LazyAlgebra`](crate::traits::LazyAlgebra)
//! for common range-update/range-query pairs.
//!
//! They are both usable and serve as templates:
//! - [`tuple`]        : fixed-arity `i64` tuples with caller-supplied `fn` operations.
//! - [`add_sum`]      : range add, range sum.
//! - [`affine`]       : range `x -> b*x + c`, range sum modulo a prime.
//! - [`add_extremum`] : range add, range max / range min.
//! - [`assign_min`]   : range assign, range min.
//! - [`flip`]         : range bit flip, inversion count of a 0/1 sequence.

pub mod add_extremum;
pub mod add_sum;
pub mod affine;
pub mod assign_min;
pub mod flip;
pub mod tuple;

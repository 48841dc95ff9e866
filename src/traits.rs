//! Core trait definitions for lazily-propagated range algebras.
//!
//! To plug your aggregate/update pair into [`LazySegTree`](crate::LazySegTree),
//! implement [`LazyAlgebra`] for a strategy struct that captures any
//! configuration (a modulus, an arity, ...).
//!
//! The trait encodes two algebraic structures:
//! - Aggregates: a monoid `(Value, op, identity)`, not necessarily commutative.
//! - Tags: a monoid `(Tag, composite, tag_identity)` acting on aggregates
//!   through `mapping`.
//!
//! The tree orchestrates storage, lazy propagation and traversal using only
//! these primitives. None of the laws below are checked at runtime; breaking
//! them yields wrong aggregates, never undefined behaviour.

/// Aggregate monoid together with a monoid of endomorphisms acting on it.
///
/// A `LazyAlgebra` is a *strategy value*: it is passed by value to the tree at
/// construction and consulted for every combine/apply. Methods take `&self`
/// so implementations can carry parameters.
///
/// Laws the implementation must uphold:
/// - `op` is associative and `identity()` is a two-sided unit for it.
/// - `mapping(&tag_identity(), x) == x`.
/// - `composite(&tag_identity(), f) == composite(f, &tag_identity()) == f`.
/// - `mapping(&composite(f, g), x) == mapping(f, &mapping(g, x))`, i.e.
///   `composite(f, g)` means "apply `g`, then `f`".
/// - Distributivity: `mapping(f, &op(a, b)) == op(&mapping(f, a), &mapping(f, b))`.
pub trait LazyAlgebra {
    /// Aggregate summarising a contiguous range of slots.
    type Value: Clone;

    /// Deferred update applied to every slot of a range.
    ///
    /// Equality is used to skip pushing identity tags; it only needs to
    /// recognise `tag_identity()` reliably.
    type Tag: Clone + PartialEq;

    /// Identity aggregate `E`, the value of an empty range.
    fn identity(&self) -> Self::Value;

    /// Combine two adjacent aggregates, `left` covering the lower slots.
    fn op(&self, left: &Self::Value, right: &Self::Value) -> Self::Value;

    /// Identity tag `Id`, which leaves every aggregate unchanged.
    fn tag_identity(&self) -> Self::Tag;

    /// Compose two tags: the result applies `inner` first, then `outer`.
    ///
    /// The tree always passes the newer tag as `outer` and the tag already
    /// pending on a node as `inner`.
    fn composite(&self, outer: &Self::Tag, inner: &Self::Tag) -> Self::Tag;

    /// Apply `tag` to an aggregate.
    fn mapping(&self, tag: &Self::Tag, value: &Self::Value) -> Self::Value;
}

impl<A: LazyAlgebra + ?Sized> LazyAlgebra for &A {
    type Value = A::Value;
    type Tag = A::Tag;

    fn identity(&self) -> Self::Value {
        (**self).identity()
    }
    fn op(&self, left: &Self::Value, right: &Self::Value) -> Self::Value {
        (**self).op(left, right)
    }
    fn tag_identity(&self) -> Self::Tag {
        (**self).tag_identity()
    }
    fn composite(&self, outer: &Self::Tag, inner: &Self::Tag) -> Self::Tag {
        (**self).composite(outer, inner)
    }
    fn mapping(&self, tag: &Self::Tag, value: &Self::Value) -> Self::Value {
        (**self).mapping(tag, value)
    }
}

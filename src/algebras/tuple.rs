//! Fixed-arity tuple algebra assembled from plain functions.
//!
//! Aggregates are `[i64; S]` and tags are `[i64; F]`, both stack values. The
//! caller supplies the two identities and the three operations once; they are
//! fixed for the lifetime of the algebra. The operations must be closed over
//! their arities and obey the [`LazyAlgebra`] laws.

use crate::traits::LazyAlgebra;

pub type OpFn<const S: usize> = fn(&[i64; S], &[i64; S]) -> [i64; S];
pub type CompositeFn<const F: usize> = fn(&[i64; F], &[i64; F]) -> [i64; F];
pub type MappingFn<const S: usize, const F: usize> = fn(&[i64; F], &[i64; S]) -> [i64; S];

/// Algebra over `S`-tuples of aggregates and `F`-tuples of tags.
///
/// ```
/// use lazy_seg::{algebras::tuple::FnAlgebra, LazySegTree};
///
/// // (sum, len) aggregates under range add.
/// let algebra = FnAlgebra::new(
///     [0, 0],
///     [0],
///     |a, b| [a[0] + b[0], a[1] + b[1]],
///     |f, g| [f[0] + g[0]],
///     |f, x| [x[0] + f[0] * x[1], x[1]],
/// );
/// let mut tree = LazySegTree::from_values(algebra, vec![[1, 1]; 4]);
/// tree.apply_range(1, 3, [10]);
/// assert_eq!(tree.all_prod(), [24, 4]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnAlgebra<const S: usize, const F: usize> {
    e: [i64; S],
    id: [i64; F],
    op: OpFn<S>,
    composite: CompositeFn<F>,
    mapping: MappingFn<S, F>,
}

impl<const S: usize, const F: usize> FnAlgebra<S, F> {
    /// Assemble an algebra from identity aggregate `e`, identity tag `id`
    /// and the three operations.
    pub fn new(
        e: [i64; S],
        id: [i64; F],
        op: OpFn<S>,
        composite: CompositeFn<F>,
        mapping: MappingFn<S, F>,
    ) -> Self {
        Self {
            e,
            id,
            op,
            composite,
            mapping,
        }
    }
}

impl<const S: usize, const F: usize> LazyAlgebra for FnAlgebra<S, F> {
    type Value = [i64; S];
    type Tag = [i64; F];

    fn identity(&self) -> [i64; S] {
        self.e
    }
    fn op(&self, left: &[i64; S], right: &[i64; S]) -> [i64; S] {
        (self.op)(left, right)
    }
    fn tag_identity(&self) -> [i64; F] {
        self.id
    }
    fn composite(&self, outer: &[i64; F], inner: &[i64; F]) -> [i64; F] {
        (self.composite)(outer, inner)
    }
    fn mapping(&self, tag: &[i64; F], value: &[i64; S]) -> [i64; S] {
        (self.mapping)(tag, value)
    }
}

use crate::error::SegTreeError;
use crate::tree::precondition_failed;
use crate::{LazyAlgebra, LazySegTree};

/// Configure capacity and initial contents before building a [`LazySegTree`].
///
/// Capacity defaults to the number of supplied values. Slots without an
/// initial value hold the identity aggregate.
pub struct LazySegTreeBuilder<A: LazyAlgebra> {
    algebra: A,
    capacity: Option<usize>,
    values: Vec<A::Value>,
}

impl<A: LazyAlgebra> LazySegTreeBuilder<A> {
    pub fn new(algebra: A) -> Self {
        Self {
            algebra,
            capacity: None,
            values: Vec::new(),
        }
    }
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
    pub fn with_values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = A::Value>,
    {
        self.values = values.into_iter().collect();
        self
    }
    pub fn try_build(self) -> Result<LazySegTree<A>, SegTreeError> {
        let capacity = self.capacity.unwrap_or(self.values.len());
        if self.values.len() > capacity {
            return Err(SegTreeError::TooManyValues {
                given: self.values.len(),
                capacity,
            });
        }
        let mut tree = LazySegTree::new(self.algebra, capacity);
        if !self.values.is_empty() {
            tree.build(self.values);
        }
        Ok(tree)
    }
    /// # Panics
    /// Panics if more values than the configured capacity were supplied.
    #[track_caller]
    pub fn build(self) -> LazySegTree<A> {
        match self.try_build() {
            Ok(tree) => tree,
            Err(err) => precondition_failed(err),
        }
    }
}

//! Precondition failures reported by the fallible tree API.

use thiserror::Error;

/// Errors returned by the `try_*` family of [`LazySegTree`](crate::LazySegTree)
/// methods and by [`LazySegTreeBuilder::try_build`](crate::LazySegTreeBuilder::try_build).
///
/// Every variant is raised before the tree is touched, so a failed call never
/// leaves partial effects behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegTreeError {
    /// A slot index fell outside `[0, len)`.
    #[error("slot {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested slot.
        index: usize,
        /// Number of logical slots.
        len: usize,
    },

    /// A half-open range was reversed or reached past the last slot.
    #[error("invalid range [{lo}, {hi}) for length {len}")]
    InvalidRange {
        /// Inclusive lower bound.
        lo: usize,
        /// Exclusive upper bound.
        hi: usize,
        /// Number of logical slots.
        len: usize,
    },

    /// A boundary-search predicate returned `false` for the identity aggregate.
    #[error("predicate must hold for the identity aggregate")]
    IdentityRejected,

    /// More initial values were supplied than the tree has slots.
    #[error("{given} initial values exceed capacity {capacity}")]
    TooManyValues {
        /// Number of values supplied.
        given: usize,
        /// Requested capacity.
        capacity: usize,
    },
}

impl SegTreeError {
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(SegTreeError::IndexOutOfBounds { index, len })
        }
    }

    pub(crate) fn check_range(lo: usize, hi: usize, len: usize) -> Result<(), Self> {
        if lo <= hi && hi <= len {
            Ok(())
        } else {
            Err(SegTreeError::InvalidRange { lo, hi, len })
        }
    }

    /// Boundary positions may equal `len` (an empty suffix or a full prefix).
    pub(crate) fn check_boundary(pos: usize, len: usize) -> Result<(), Self> {
        if pos <= len {
            Ok(())
        } else {
            Err(SegTreeError::InvalidRange {
                lo: pos,
                hi: pos,
                len,
            })
        }
    }
}

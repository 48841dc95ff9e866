//! Index arithmetic for the implicit binary-tree layout.
//!
//! Node `1` is the root, node `k` has children `2k` and `2k + 1`, and the
//! leaves of a tree with `size` leaves occupy `[size, 2 * size)`.

/// Number of leaves for a tree over `capacity` slots: the smallest power of
/// two that is `>= capacity` (and at least one).
#[inline]
pub fn tree_size(capacity: usize) -> usize {
    capacity.max(1).next_power_of_two()
}

/// Height of a tree with `size` leaves, i.e. `log2(size)`.
///
/// `size` must be a power of two.
#[inline]
pub fn tree_height(size: usize) -> u32 {
    debug_assert!(size.is_power_of_two());
    size.trailing_zeros()
}

/// Whether node index `k` is a multiple of `2^level`, i.e. it is the leftmost
/// descendant of its ancestor `level` steps up.
#[inline]
pub fn is_aligned(k: usize, level: u32) -> bool {
    (k >> level) << level == k
}

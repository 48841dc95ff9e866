//! Range affine update / range sum modulo a prime.
//!
//! Tags are maps `x -> mul * x + add`. Their composition does not commute,
//! which makes this algebra the canonical check that tags are composed in the
//! right order.

use crate::traits::LazyAlgebra;

/// 998244353, an NTT-friendly prime.
pub const DEFAULT_MODULUS: u64 = 998_244_353;

/// Sum of a range modulo the algebra's modulus, and its slot count.
///
/// The default (identity) value has `len == 0`, so range tags leave it
/// unchanged. Fill trees with `leaf(0)` rather than relying on
/// [`LazySegTree::new`](crate::LazySegTree::new) when slots should count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModSum {
    pub sum: u64,
    pub len: u64,
}

impl ModSum {
    /// Aggregate of a single slot holding `x`; `x` must already be reduced.
    pub fn leaf(x: u64) -> Self {
        Self { sum: x, len: 1 }
    }
}

/// The affine map `x -> mul * x + add`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Affine {
    pub mul: u64,
    pub add: u64,
}

impl Affine {
    pub const IDENTITY: Affine = Affine { mul: 1, add: 0 };
}

/// Range affine, range sum.
#[derive(Clone, Copy, Debug)]
pub struct RangeAffineSum {
    modulus: u64,
}

impl RangeAffineSum {
    /// # Panics
    /// Panics unless `2 <= modulus < 2^31`, which keeps every product in `u64`.
    pub fn new(modulus: u64) -> Self {
        assert!(
            (2..1 << 31).contains(&modulus),
            "modulus must lie in [2, 2^31)"
        );
        Self { modulus }
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl Default for RangeAffineSum {
    fn default() -> Self {
        Self::new(DEFAULT_MODULUS)
    }
}

impl LazyAlgebra for RangeAffineSum {
    type Value = ModSum;
    type Tag = Affine;

    fn identity(&self) -> ModSum {
        ModSum::default()
    }

    fn op(&self, left: &ModSum, right: &ModSum) -> ModSum {
        ModSum {
            sum: (left.sum + right.sum) % self.modulus,
            len: left.len + right.len,
        }
    }

    fn tag_identity(&self) -> Affine {
        Affine::IDENTITY
    }

    fn composite(&self, outer: &Affine, inner: &Affine) -> Affine {
        let m = self.modulus;
        Affine {
            mul: outer.mul * inner.mul % m,
            add: (outer.mul * inner.add + outer.add) % m,
        }
    }

    fn mapping(&self, tag: &Affine, value: &ModSum) -> ModSum {
        let m = self.modulus;
        ModSum {
            sum: (tag.mul * value.sum + tag.add * (value.len % m)) % m,
            len: value.len,
        }
    }
}

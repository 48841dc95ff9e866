#![cfg(feature = "parallel")]

use lazy_seg::{
    algebras::{
        affine::{Affine, ModSum, RangeAffineSum},
        flip::{BitRun, RangeFlipInversions},
    },
    LazySegTree,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parallel_build_matches_sequential_affine(values in proptest::collection::vec(0u64..998_244_353, 0..300)) {
        let slots: Vec<ModSum> = values.into_iter().map(ModSum::leaf).collect();
        let n = slots.len();
        let mut seq = LazySegTree::from_values(RangeAffineSum::default(), slots.clone());
        let mut par = LazySegTree::from_values_par(RangeAffineSum::default(), slots);
        prop_assert_eq!(seq.all_prod(), par.all_prod());

        let tag = Affine { mul: 3, add: 7 };
        seq.apply_range(n / 3, n, tag);
        par.apply_range(n / 3, n, tag);
        for lo in (0..=n).step_by(17) {
            prop_assert_eq!(seq.prod(lo, n), par.prod(lo, n));
        }
    }

    #[test]
    fn parallel_build_matches_sequential_flip(bits in proptest::collection::vec(any::<bool>(), 0..300)) {
        let slots: Vec<BitRun> = bits.into_iter().map(BitRun::leaf).collect();
        let mut seq = LazySegTree::from_values(RangeFlipInversions, slots.clone());
        let mut par = LazySegTree::from_values_par(RangeFlipInversions, slots);
        prop_assert_eq!(seq.all_prod(), par.all_prod());
        prop_assert_eq!(seq.values(), par.values());
    }
}

#[test]
fn parallel_build_large() {
    let n = 1 << 16;
    let slots: Vec<BitRun> = (0..n).map(|i| BitRun::leaf(i % 5 < 2)).collect();
    let seq = LazySegTree::from_values(RangeFlipInversions, slots.clone());
    let par = LazySegTree::from_values_par(RangeFlipInversions, slots);
    assert_eq!(seq.all_prod(), par.all_prod());
}

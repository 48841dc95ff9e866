#![allow(dead_code)]

use lazy_seg::LazyAlgebra;

/// Plain `Vec` model: every update touches every slot, every query folds.
pub struct Naive<A: LazyAlgebra> {
    pub algebra: A,
    pub slots: Vec<A::Value>,
}

impl<A: LazyAlgebra> Naive<A> {
    pub fn new(algebra: A, slots: Vec<A::Value>) -> Self {
        Self { algebra, slots }
    }

    pub fn set(&mut self, p: usize, value: A::Value) {
        self.slots[p] = value;
    }

    pub fn apply(&mut self, p: usize, tag: &A::Tag) {
        self.slots[p] = self.algebra.mapping(tag, &self.slots[p]);
    }

    pub fn apply_range(&mut self, lo: usize, hi: usize, tag: &A::Tag) {
        for p in lo..hi {
            self.apply(p, tag);
        }
    }

    pub fn prod(&self, lo: usize, hi: usize) -> A::Value {
        self.slots[lo..hi]
            .iter()
            .fold(self.algebra.identity(), |acc, x| self.algebra.op(&acc, x))
    }

    pub fn max_right(&self, lo: usize, mut pred: impl FnMut(&A::Value) -> bool) -> usize {
        let mut acc = self.algebra.identity();
        for r in lo..self.slots.len() {
            let next = self.algebra.op(&acc, &self.slots[r]);
            if !pred(&next) {
                return r;
            }
            acc = next;
        }
        self.slots.len()
    }

    pub fn min_left(&self, hi: usize, mut pred: impl FnMut(&A::Value) -> bool) -> usize {
        let mut acc = self.algebra.identity();
        for l in (0..hi).rev() {
            let next = self.algebra.op(&self.slots[l], &acc);
            if !pred(&next) {
                return l + 1;
            }
            acc = next;
        }
        0
    }
}

/// Map two arbitrary seeds onto a valid half-open range of `[0, len]`.
pub fn range_from(len: usize, a: usize, b: usize) -> (usize, usize) {
    let x = a % (len + 1);
    let y = b % (len + 1);
    (x.min(y), x.max(y))
}

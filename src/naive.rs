//! LCE structures answering queries by direct text scans.
//!
//! No preprocessing beyond borrowing the text; [`LceNaive`] doubles as
//! the reference oracle of the test suite.

use crate::block;
use crate::LceIndex;
use crate::MAX_LENGTH;

/// LCE by plain byte comparison.
#[derive(Clone)]
pub struct LceNaive<'s> {
    text: &'s [u8],
}

impl<'s> LceNaive<'s> {
    pub fn new(text: &'s [u8]) -> Self {
        assert!(text.len() <= MAX_LENGTH);
        LceNaive { text }
    }
}

impl<'s> LceIndex for LceNaive<'s> {
    fn lce(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= self.text.len() && j <= self.text.len());
        if i == j {
            return self.text.len() - i;
        }
        Iterator::zip(self.text[i..].iter(), self.text[j..].iter())
            .take_while(|(x, y)| x == y)
            .count()
    }

    fn char_at(&self, i: usize) -> u8 {
        self.text[i]
    }

    fn len(&self) -> usize {
        self.text.len()
    }
}

/// LCE by comparing 8 and 16 byte blocks of the text, resolving the
/// first mismatching block with an XOR and a trailing zero count.
#[derive(Clone)]
pub struct LceNaiveXor<'s> {
    text: &'s [u8],
}

impl<'s> LceNaiveXor<'s> {
    pub fn new(text: &'s [u8]) -> Self {
        assert!(text.len() <= MAX_LENGTH);
        LceNaiveXor { text }
    }
}

impl<'s> LceIndex for LceNaiveXor<'s> {
    fn lce(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= self.text.len() && j <= self.text.len());
        if i == j {
            return self.text.len() - i;
        }
        block::lce_scan(self.text, i, j)
    }

    fn char_at(&self, i: usize) -> u8 {
        self.text[i]
    }

    fn len(&self) -> usize {
        self.text.len()
    }
}

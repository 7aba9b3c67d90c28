//! Longest common extension (LCE) queries balanced for indexing small or
//! median sized binary data in memory.
//!
//! The core index samples a string synchronizing set as described in
//! [String Synchronizing Sets: Sublinear-Time BWT Construction and Optimal
//! LCE Data Structure](https://arxiv.org/abs/1904.04228), engineered along
//! the lines of [Practical Performance of Space Efficient Data Structures
//! for Longest Common Extensions](https://doi.org/10.4230/LIPIcs.ESA.2020.39).
//! The block-accelerated scan and the fingerprint-based structure answer
//! the same queries without preprocessing and serve as peers in tests and
//! benchmarks.

mod block;
mod fingerprint;
mod naive;
mod prezza;
mod rmq;
mod sais;
mod sss;

pub use naive::{LceNaive, LceNaiveXor};
pub use prezza::{LcePrezza, PrezzaOptions};
pub use sss::{LceSyncSets, Options, Tau};

/// Maximum length of the input text.
pub const MAX_LENGTH: usize = std::u32::MAX as usize - 2;

/// Common interface of the LCE data structures.
///
/// All structures borrow the text for their lifetime and are immutable
/// after construction, so concurrent readers need no synchronization.
pub trait LceIndex {
    /// Length of the longest common prefix of the suffixes starting at
    /// `i` and `j`.
    ///
    /// Defined for `i, j <= len()`; `lce(i, i)` is `len() - i`. Positions
    /// out of range are debug-checked only.
    fn lce(&self, i: usize, j: usize) -> usize;

    /// Byte of the underlying text at position `i`.
    fn char_at(&self, i: usize) -> u8;

    /// Length of the underlying text in bytes.
    fn len(&self) -> usize;

    /// Test if the underlying text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Test if the suffix starting at `i` is lexicographically smaller
    /// than the suffix starting at `j`.
    ///
    /// When one suffix is a prefix of the other, the shorter suffix is
    /// the smaller one; `i == j` compares equal.
    fn is_smaller_suffix(&self, i: usize, j: usize) -> bool {
        let n = self.len();
        let l = self.lce(i, j);
        if i + l == n || j + l == n {
            i + l == n && i != j
        } else {
            self.char_at(i + l) < self.char_at(j + l)
        }
    }
}

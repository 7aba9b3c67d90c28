//! LCE via Karp-Rabin fingerprints of text prefixes, after
//! [Prezza's in-place fingerprinting scheme](https://arxiv.org/abs/1608.01907).
//!
//! A query grows the common extension by decreasing powers of two as long
//! as the fingerprints of both extensions agree, then verifies the
//! claimed extension with a block scan. Fingerprints of equal substrings
//! always agree, so the descent never undershoots and the verification
//! restores exactness in the face of collisions.

use crate::block;
use crate::fingerprint::{self, PrefixFingerprints};
use crate::LceIndex;
use crate::MAX_LENGTH;

#[derive(Clone, Copy, Debug, Default)]
pub struct PrezzaOptions {
    pub seed: Option<u64>,
}

pub struct LcePrezza<'s> {
    text: &'s [u8],
    fps: PrefixFingerprints<'s>,
}

impl<'s> LcePrezza<'s> {
    pub fn new(text: &'s [u8]) -> Self {
        Self::with_options(text, PrezzaOptions::default())
    }

    pub fn with_options(text: &'s [u8], options: PrezzaOptions) -> Self {
        assert!(text.len() <= MAX_LENGTH);
        let base = fingerprint::draw_base(options.seed);
        LcePrezza { text, fps: PrefixFingerprints::new(text, base) }
    }
}

impl<'s> LceIndex for LcePrezza<'s> {
    fn lce(&self, i: usize, j: usize) -> usize {
        let n = self.text.len();
        debug_assert!(i <= n && j <= n);
        if i == j {
            return n - i;
        }

        let max_length = n - Ord::max(i, j);
        if max_length == 0 {
            return 0;
        }

        // descend over power-of-two extensions
        let mut claimed = 0;
        let mut e = 63 - (max_length as u64).leading_zeros() as usize;
        loop {
            let step = 1 << e;
            if claimed + step <= max_length && self.fps.eq_pow2(i + claimed, j + claimed, e) {
                claimed += step;
            }
            if e == 0 {
                break;
            }
            e -= 1;
        }

        // fingerprints may overclaim on collisions, never underclaim
        if claimed == 0 {
            0
        } else {
            block::lce_scan_bounded(self.text, i, j, claimed)
        }
    }

    fn char_at(&self, i: usize) -> u8 {
        self.text[i]
    }

    fn len(&self) -> usize {
        self.text.len()
    }
}

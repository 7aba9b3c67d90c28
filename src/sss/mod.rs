//! The string-synchronizing-set LCE index.
//!
//! Construction samples a sparse set of text positions (the sync set),
//! sorts the sampled suffixes through a rank reduction, and prepares an
//! RMQ over their LCP array. A query scans at most 3tau bytes directly;
//! anything longer is resolved through the successors of i and j in the
//! sync set, whose distance to the query positions agrees whenever the
//! suffixes share 3tau bytes. Queries never fail: every case the sampled
//! structure cannot vouch for falls back to the exact block scan.

mod ranks;
mod sampler;
mod sort;

#[cfg(feature = "parallel")]
mod par;

use self::ranks::SuffixRanks;
use crate::block;
use crate::fingerprint;
use crate::LceIndex;
use crate::MAX_LENGTH;

/// Sampling rate of the synchronizing set.
///
/// Smaller values answer more queries without touching the sampled
/// structure but store more positions; 1024 is a good default for most
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tau {
    T256,
    T512,
    T1024,
    T2048,
}

impl Tau {
    pub fn get(self) -> usize {
        match self {
            Tau::T256 => 256,
            Tau::T512 => 512,
            Tau::T1024 => 1024,
            Tau::T2048 => 2048,
        }
    }
}

impl Default for Tau {
    fn default() -> Tau {
        Tau::T1024
    }
}

/// Construction options.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub tau: Tau,
    /// Precompute a dense successor table (one word per text byte) so
    /// that long queries skip the binary search over the sync set.
    pub prefer_long_queries: bool,
    /// Fixes the fingerprint base for reproducible construction.
    pub seed: Option<u64>,
}

/// LCE index over a borrowed text, built on a string synchronizing set.
pub struct LceSyncSets<'s> {
    text: &'s [u8],
    tau: usize,
    index: Option<SyncIndex>,
}

struct SyncIndex {
    sync: Vec<u32>,
    ranks: SuffixRanks,
    /// succ[i] = sync index of the first sampled position at or after i.
    succ: Option<Vec<u32>>,
}

impl<'s> LceSyncSets<'s> {
    pub fn new(text: &'s [u8]) -> Self {
        Self::with_options(text, Options::default())
    }

    pub fn with_options(text: &'s [u8], options: Options) -> Self {
        assert!(text.len() <= MAX_LENGTH);
        let tau = options.tau.get();

        // texts shorter than one window degrade to the plain scan
        if text.len() < 3 * tau {
            return LceSyncSets { text, tau, index: None };
        }

        let base = fingerprint::draw_base(options.seed);
        let sync = sampler::sample(text, tau, base);
        let index = Self::assemble(text, tau, options.prefer_long_queries, sync);
        LceSyncSets { text, tau, index }
    }

    /// Parallel construction; same index, same query path.
    #[cfg(feature = "parallel")]
    pub fn with_options_par(text: &'s [u8], options: Options) -> Self {
        assert!(text.len() <= MAX_LENGTH);
        let tau = options.tau.get();

        if text.len() < 3 * tau {
            return LceSyncSets { text, tau, index: None };
        }

        let base = fingerprint::draw_base(options.seed);
        let sync = par::sample(text, tau, base);
        if sync.is_empty() {
            return LceSyncSets { text, tau, index: None };
        }
        let ranks = par::build_ranks(text, tau, &sync);
        let succ = if options.prefer_long_queries {
            Some(build_successors(text.len(), &sync))
        } else {
            None
        };
        LceSyncSets { text, tau, index: Some(SyncIndex { sync, ranks, succ }) }
    }

    fn assemble(text: &[u8], tau: usize, prefer_long: bool, sync: Vec<u32>) -> Option<SyncIndex> {
        if sync.is_empty() {
            return None;
        }
        let ranks = SuffixRanks::build(text, tau, &sync);
        let succ = if prefer_long {
            Some(build_successors(text.len(), &sync))
        } else {
            None
        };
        Some(SyncIndex { sync, ranks, succ })
    }

    /// The sampling rate the index was built with.
    pub fn tau(&self) -> usize {
        self.tau
    }

    /// True if the text was too short for the synchronizing set and
    /// queries run as plain scans.
    pub fn is_degraded(&self) -> bool {
        self.index.is_none()
    }

    /// Sync index of the first sampled position at or after `i`.
    #[inline]
    fn successor(index: &SyncIndex, i: usize) -> Option<usize> {
        if let Some(succ) = &index.succ {
            let k = succ[i] as usize;
            return if k < index.sync.len() { Some(k) } else { None };
        }
        match index.sync.binary_search(&(i as u32)) {
            Ok(k) => Some(k),
            Err(k) => {
                if k < index.sync.len() {
                    Some(k)
                } else {
                    None
                }
            }
        }
    }
}

fn build_successors(n: usize, sync: &[u32]) -> Vec<u32> {
    let mut succ = vec![sync.len() as u32; n];
    let mut k = 0;
    for (i, s) in succ.iter_mut().enumerate() {
        while k < sync.len() && (sync[k] as usize) < i {
            k += 1;
        }
        *s = k as u32;
    }
    succ
}

impl<'s> LceIndex for LceSyncSets<'s> {
    fn lce(&self, i: usize, j: usize) -> usize {
        let n = self.text.len();
        debug_assert!(i <= n && j <= n);
        if i == j {
            return n - i;
        }

        let index = match &self.index {
            Some(index) => index,
            None => return block::lce_scan(self.text, i, j),
        };

        let tau = self.tau;
        if Ord::max(i, j) + 3 * tau > n {
            return block::lce_scan(self.text, i, j);
        }

        // short answers never touch the sampled structure
        let scanned = block::lce_scan_bounded(self.text, i, j, 3 * tau);
        if scanned < 3 * tau {
            return scanned;
        }

        let (ki, kj) = match (Self::successor(index, i), Self::successor(index, j)) {
            (Some(ki), Some(kj)) => (ki, kj),
            _ => return block::lce_scan(self.text, i, j),
        };
        let off = index.sync[ki] as usize - i;
        // the offsets agree whenever both successors were sampled from
        // the bytes the scan just proved equal; run-extension positions
        // may disagree, and then the exact scan takes over
        if off != index.sync[kj] as usize - j || off > tau || ki == kj {
            return block::lce_scan(self.text, i, j);
        }

        off + index.ranks.suffix_lce(ki, kj)
    }

    fn char_at(&self, i: usize) -> u8 {
        self.text[i]
    }

    fn len(&self) -> usize {
        self.text.len()
    }
}

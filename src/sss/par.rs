//! Parallel construction of the synchronizing-set index.
//!
//! Sampling fans out over disjoint position ranges (each worker reads up
//! to 3tau bytes past its range, so the pieces concatenate without
//! deduplication), the window sort parallelizes across the top-level
//! byte buckets, and the rank flags and LCP entries are independent per
//! index. The suffix array of the reduced text stays serial; it works on
//! a sequence a tau-th the size of the input.

use std::ops::Range;

use rayon::prelude::*;

use super::ranks::{self, SuffixRanks};
use super::sampler;
use super::sort;
use crate::block;
use crate::rmq::SparseRmq;

/// Below this many positions the serial paths win.
const SERIAL_CUTOFF: usize = 1 << 14;

/// Range of window starts handed to one sampling task.
const SAMPLE_CHUNK: usize = 1 << 17;

/// Parallel counterpart of [`sampler::sample`].
pub fn sample(text: &[u8], tau: usize, base: u64) -> Vec<u32> {
    let last = text.len() - 2 * tau;
    let runs = sampler::long_runs(text, 3 * tau);

    if last + 1 <= SAMPLE_CHUNK {
        return sampler::sample_range(text, tau, base, 0..last + 1, &runs);
    }

    let ranges: Vec<Range<usize>> = (0..=last)
        .step_by(SAMPLE_CHUNK)
        .map(|lo| lo..Ord::min(lo + SAMPLE_CHUNK, last + 1))
        .collect();
    let pieces: Vec<Vec<u32>> = ranges
        .into_par_iter()
        .map(|range| sampler::sample_range(text, tau, base, range, &runs))
        .collect();
    pieces.concat()
}

/// Parallel counterpart of `SuffixRanks::build`.
pub fn build_ranks(text: &[u8], tau: usize, sync: &[u32]) -> SuffixRanks {
    debug_assert!(!sync.is_empty());
    let width = 3 * tau;

    let sorted = sort_par(text, width, sync);

    // "differs from predecessor" is independent per sorted pair
    let mut flags = vec![false; sorted.len()];
    flags[1..].par_iter_mut().enumerate().for_each(|(k, flag)| {
        *flag = !ranks::window_eq(text, width, sorted[k], sorted[k + 1]);
    });
    let rank_seq = ranks::assign_ranks(text, width, sync, &sorted, Some(&flags));

    let sa = ranks::rank_suffix_array(&rank_seq);

    let mut isa = vec![0u32; sync.len()];
    for k in 0..sync.len() {
        isa[sa[k] as usize] = k as u32;
    }

    let lcp: Vec<u32> = (0..sync.len())
        .into_par_iter()
        .map(|r| {
            if r == 0 {
                0
            } else {
                block::lce_scan(
                    text,
                    sync[sa[r - 1] as usize] as usize,
                    sync[sa[r] as usize] as usize,
                ) as u32
            }
        })
        .collect();

    SuffixRanks::from_parts(isa, SparseRmq::new(lcp))
}

/// MSD radix sort with the top-level byte buckets sorted in parallel.
fn sort_par(text: &[u8], width: usize, positions: &[u32]) -> Vec<u32> {
    let mut sorted = positions.to_vec();
    if sorted.len() <= SERIAL_CUTOFF {
        sort::sort_window_slice(text, width, &mut sorted, 0);
        return sorted;
    }

    // stable scatter by the first window byte
    let mut starts = [0u32; 258];
    for &p in sorted.iter() {
        starts[first_key(text, p) + 1] += 1;
    }
    for k in 1..starts.len() {
        starts[k] += starts[k - 1];
    }
    let bounds = starts;
    let mut scratch = vec![0u32; sorted.len()];
    for &p in sorted.iter() {
        let k = first_key(text, p);
        scratch[starts[k] as usize] = p;
        starts[k] += 1;
    }
    sorted.copy_from_slice(&scratch);
    drop(scratch);

    // cut the permutation into per-bucket slices for the workers
    let mut buckets: Vec<&mut [u32]> = Vec::new();
    let mut rest: &mut [u32] = &mut sorted[..];
    let mut consumed = 0;
    for k in 1..=256 {
        let end = bounds[k + 1] as usize;
        buckets.push(take_bucket(&mut rest, end - consumed));
        consumed = end;
    }

    buckets
        .into_par_iter()
        .filter(|bucket| bucket.len() > 1)
        .for_each(|bucket| sort::sort_window_slice(text, width, bucket, 1));

    sorted
}

/// Detach the first `len` entries from the working slice.
fn take_bucket<'a>(rest: &mut &'a mut [u32], len: usize) -> &'a mut [u32] {
    let slice = std::mem::replace(rest, &mut []);
    let (bucket, tail) = slice.split_at_mut(len);
    *rest = tail;
    bucket
}

#[inline(always)]
fn first_key(text: &[u8], p: u32) -> usize {
    if (p as usize) < text.len() {
        text[p as usize] as usize + 1
    } else {
        0
    }
}

//! The synchronizing-set sampler.
//!
//! A text position p is sampled when, among the tau-length windows
//! starting at p..=p+tau, the leftmost minimum under the fingerprint
//! order sits at offset 0 or tau. This gives the two guarantees the
//! query path builds on: whether p is sampled depends only on
//! text[p..p+2tau), and every interval of tau+1 consecutive window
//! starts contains a sampled position. The minimum of the sliding
//! candidate range is maintained with a monotone deque, so the pass is
//! amortized O(1) per position. Fingerprint ties are broken by the
//! actual window bytes; byte-identical windows keep the earlier entry.
//!
//! Inside a maximal single-byte run longer than 3tau every candidate
//! window is identical and the minimum rule would sample everything, so
//! the sampler suspends it there and emits a tau-spaced grid anchored at
//! the deepest position whose 3tau window still lies in the run. The
//! anchoring keeps sampled positions of equal windows advancing in
//! lockstep, which the rank reduction depends on, and the grid keeps the
//! set O(n/tau) dense per run without losing coverage.

use std::collections::VecDeque;
use std::ops::Range;

use crate::fingerprint::RollingWindow;

/// A tau-window in the sliding candidate range.
#[derive(Clone, Copy)]
struct Candidate {
    pos: u32,
    fp: u64,
}

/// True if `a` orders strictly after `b` under the fingerprint-then-bytes
/// order.
#[inline]
fn orders_after(text: &[u8], tau: usize, a: Candidate, b: Candidate) -> bool {
    if a.fp != b.fp {
        return a.fp > b.fp;
    }
    let x = &text[a.pos as usize..a.pos as usize + tau];
    let y = &text[b.pos as usize..b.pos as usize + tau];
    x > y
}

/// Maximal runs of a single repeated byte strictly longer than `min_len`,
/// as half-open text ranges.
pub fn long_runs(text: &[u8], min_len: usize) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=text.len() {
        if i == text.len() || text[i] != text[start] {
            if i - start > min_len {
                runs.push(start..i);
            }
            start = i;
        }
    }
    runs
}

/// Sample the synchronizing set of `text`, in strictly increasing order.
/// Requires `3 * tau <= text.len()`.
///
/// Window starts run through `n - 2tau`: sampling a position reads the
/// tau-windows at offsets 0..=tau, i.e. 2tau bytes, and stopping earlier
/// would leave the last query-relevant positions without a successor.
pub fn sample(text: &[u8], tau: usize, base: u64) -> Vec<u32> {
    let last = text.len() - 2 * tau;
    let runs = long_runs(text, 3 * tau);
    sample_range(text, tau, base, 0..last + 1, &runs)
}

/// Sample window starts within `range` (a sub-range of `0..=n - 2tau`).
/// `runs` must list the long runs of the whole text.
pub fn sample_range(
    text: &[u8],
    tau: usize,
    base: u64,
    range: Range<usize>,
    runs: &[Range<usize>],
) -> Vec<u32> {
    debug_assert!(range.end + 2 * tau <= text.len() + 1);
    if range.start >= range.end {
        return Vec::new();
    }

    let mut sync = Vec::with_capacity(2 * (range.end - range.start) / tau + 4);

    // skip runs whose sampling region ends before the range
    let mut next_run = runs
        .iter()
        .position(|r| r.end >= range.start + 3 * tau)
        .unwrap_or(runs.len());

    // prime the deque with the candidate windows of the first position
    let mut deque: VecDeque<Candidate> = VecDeque::new();
    let mut window = RollingWindow::new(&text[range.start..], tau, base);
    push_monotone(
        &mut deque,
        text,
        tau,
        Candidate { pos: range.start as u32, fp: window.get() },
    );
    let mut q = range.start;
    while q < range.start + tau {
        window.slide(q - range.start);
        q += 1;
        push_monotone(&mut deque, text, tau, Candidate { pos: q as u32, fp: window.get() });
    }

    for p in range.clone() {
        if p > range.start {
            window.slide(q - range.start);
            q += 1;
            push_monotone(&mut deque, text, tau, Candidate { pos: q as u32, fp: window.get() });
            while deque[0].pos < p as u32 {
                deque.pop_front();
            }
        }

        // positions whose whole 3tau window lies in a long run follow the
        // run-extension grid instead of the window minimum
        if next_run < runs.len() && p + 3 * tau > runs[next_run].end {
            next_run += 1;
        }
        if next_run < runs.len() && p >= runs[next_run].start {
            let anchor = runs[next_run].end - 3 * tau;
            if (anchor - p) % tau == 0 {
                sync.push(p as u32);
            }
            continue;
        }

        let offset = deque[0].pos as usize - p;
        if offset == 0 || offset == tau {
            sync.push(p as u32);
        }
    }
    sync
}

#[inline]
fn push_monotone(deque: &mut VecDeque<Candidate>, text: &[u8], tau: usize, cand: Candidate) {
    while let Some(&back) = deque.back() {
        if orders_after(text, tau, back, cand) {
            deque.pop_back();
        } else {
            break;
        }
    }
    deque.push_back(cand);
}

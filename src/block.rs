//! Block-accelerated suffix comparison.
//!
//! The scans below compare 8 and 16 byte blocks of the text and locate
//! the mismatching byte inside the first unequal block with an XOR and a
//! trailing zero count. Loads go through `from_le_bytes`, which compiles
//! to a single unaligned load and keeps the trailing-zero arithmetic
//! independent of the host byte order.

#[inline(always)]
fn load_u64(text: &[u8], at: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&text[at..at + 8]);
    u64::from_le_bytes(buf)
}

#[inline(always)]
fn load_u128(text: &[u8], at: usize) -> u128 {
    let mut buf = [0u8; 16];
    buf.copy_from_slice(&text[at..at + 16]);
    u128::from_le_bytes(buf)
}

/// Index of the first mismatching byte in a nonzero XOR of two blocks.
#[inline(always)]
fn mismatch_in(x: u64) -> usize {
    (x.trailing_zeros() / 8) as usize
}

/// Exact length of the longest common prefix of the suffixes starting at
/// `i` and `j`, requiring `i != j`.
#[inline]
pub fn lce_scan(text: &[u8], i: usize, j: usize) -> usize {
    lce_scan_bounded(text, i, j, std::usize::MAX)
}

/// Like [`lce_scan`], but compares at most `limit` bytes.
///
/// A return value equal to `limit` means the suffixes agree on at least
/// `limit` bytes; any smaller value is the exact LCE.
pub fn lce_scan_bounded(text: &[u8], i: usize, j: usize, limit: usize) -> usize {
    debug_assert!(i != j);
    debug_assert!(i <= text.len() && j <= text.len());

    let max_length = Ord::min(text.len() - Ord::max(i, j), limit);

    // in the usual case the lce is low, so the first block often decides
    if max_length > 8 {
        let x = load_u64(text, i) ^ load_u64(text, j);
        if x != 0 {
            return mismatch_in(x);
        }
    }

    // compare 16-byte blocks until the first mismatch
    let mut lce = 0;
    while lce + 16 <= max_length {
        let x = load_u128(text, i + lce) ^ load_u128(text, j + lce);
        if x != 0 {
            let low = x as u64;
            return if low != 0 {
                lce + mismatch_in(low)
            } else {
                lce + 8 + mismatch_in((x >> 64) as u64)
            };
        }
        lce += 16;
    }

    // the mismatch, if any, sits in the partial block at the end
    while lce < max_length && text[i + lce] == text[j + lce] {
        lce += 1;
    }
    lce
}

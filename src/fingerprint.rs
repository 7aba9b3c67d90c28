//! Karp-Rabin fingerprints modulo the Mersenne prime 2^61 - 1.
//!
//! Products are taken in 128 bits and folded with the shift-and-add
//! identity `a = (a & p) + (a >> 61) (mod p)`. Fingerprint equality is
//! only ever a performance hint: every consumer compares actual text
//! bytes whenever equality would change an outcome.

use rand::prelude::*;

/// The Mersenne prime 2^61 - 1.
pub const PRIME: u64 = (1 << 61) - 1;

/// Fold a 128-bit value modulo 2^61 - 1.
#[inline(always)]
fn fold(x: u128) -> u64 {
    let x = (x & PRIME as u128) as u64 + (x >> 61) as u64;
    let x = (x & PRIME) + (x >> 61);
    if x >= PRIME {
        x - PRIME
    } else {
        x
    }
}

#[inline(always)]
pub fn mul_mod(a: u64, b: u64) -> u64 {
    fold(a as u128 * b as u128)
}

#[inline(always)]
pub fn add_mod(a: u64, b: u64) -> u64 {
    let x = a + b;
    if x >= PRIME {
        x - PRIME
    } else {
        x
    }
}

#[inline(always)]
pub fn sub_mod(a: u64, b: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        a + PRIME - b
    }
}

/// Draw a fingerprint base uniformly from `[2, PRIME - 1)`, from the
/// given seed or from the thread-local generator.
pub fn draw_base(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed).gen_range(2, PRIME - 1),
        None => thread_rng().gen_range(2, PRIME - 1),
    }
}

/// Rolling fingerprint of a fixed-length window over the text.
///
/// Sliding the window one byte to the right is O(1): the outgoing byte is
/// removed with a precomputed leading power and the incoming byte is
/// appended.
pub struct RollingWindow<'s> {
    text: &'s [u8],
    base: u64,
    /// base^(len - 1), the weight of the window's first byte.
    lead: u64,
    len: usize,
    fp: u64,
}

impl<'s> RollingWindow<'s> {
    /// Fingerprint the window `text[0..len)`.
    pub fn new(text: &'s [u8], len: usize, base: u64) -> Self {
        debug_assert!(0 < len && len <= text.len());
        let mut fp = 0;
        for &c in &text[..len] {
            fp = add_mod(mul_mod(fp, base), c as u64);
        }
        let mut lead = 1;
        for _ in 1..len {
            lead = mul_mod(lead, base);
        }
        RollingWindow { text, base, lead, len, fp }
    }

    /// Fingerprint of the current window.
    #[inline]
    pub fn get(&self) -> u64 {
        self.fp
    }

    /// Slide from the window starting at `at` to the one starting at
    /// `at + 1`.
    #[inline]
    pub fn slide(&mut self, at: usize) {
        let out = self.text[at] as u64;
        let inc = self.text[at + self.len] as u64;
        let fp = sub_mod(self.fp, mul_mod(out, self.lead));
        self.fp = add_mod(mul_mod(fp, self.base), inc);
    }
}

/// Fingerprints of text prefixes at 8-byte block boundaries, plus the
/// power-of-two base powers used by the doubling descent.
///
/// The space beyond the borrowed text is one word per 8 text bytes, and
/// the fingerprint of an arbitrary prefix costs at most seven extension
/// steps.
pub struct PrefixFingerprints<'s> {
    text: &'s [u8],
    base: u64,
    blocks: Vec<u64>,
    pow2: Vec<u64>,
}

impl<'s> PrefixFingerprints<'s> {
    pub fn new(text: &'s [u8], base: u64) -> Self {
        let mut blocks = Vec::with_capacity(text.len() / 8 + 1);
        blocks.push(0);
        let mut fp = 0;
        for (i, &c) in text.iter().enumerate() {
            fp = add_mod(mul_mod(fp, base), c as u64);
            if (i + 1) % 8 == 0 {
                blocks.push(fp);
            }
        }

        let mut pow2 = Vec::with_capacity(40);
        let mut pw = base;
        let mut len = 1usize;
        while len <= text.len() {
            pow2.push(pw);
            pw = mul_mod(pw, pw);
            len *= 2;
        }

        PrefixFingerprints { text, base, blocks, pow2 }
    }

    /// Fingerprint of `text[0..at)`.
    #[inline]
    fn prefix(&self, at: usize) -> u64 {
        let mut fp = self.blocks[at / 8];
        for &c in &self.text[at & !7..at] {
            fp = add_mod(mul_mod(fp, self.base), c as u64);
        }
        fp
    }

    /// Fingerprint of `text[at..at + 2^e)`.
    #[inline]
    fn substring_pow2(&self, at: usize, e: usize) -> u64 {
        let head = mul_mod(self.prefix(at), self.pow2[e]);
        sub_mod(self.prefix(at + (1 << e)), head)
    }

    /// Test whether `text[i..i + 2^e)` and `text[j..j + 2^e)` have equal
    /// fingerprints. Equal substrings always compare equal; unequal ones
    /// may collide.
    #[inline]
    pub fn eq_pow2(&self, i: usize, j: usize, e: usize) -> bool {
        self.substring_pow2(i, e) == self.substring_pow2(j, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::random;

    fn direct(text: &[u8], base: u64) -> u64 {
        let mut fp = 0;
        for &c in text {
            fp = add_mod(mul_mod(fp, base), c as u64);
        }
        fp
    }

    #[test]
    fn rolling_window_matches_direct() {
        let base = draw_base(Some(42));
        let text: Vec<u8> = (0..500).map(|_| random::<u8>()).collect();
        for &len in &[1, 2, 7, 8, 31, 64, 200] {
            let mut window = RollingWindow::new(&text, len, base);
            assert_eq!(window.get(), direct(&text[..len], base));
            for at in 0..text.len() - len {
                window.slide(at);
                assert_eq!(window.get(), direct(&text[at + 1..at + 1 + len], base));
            }
        }
    }

    #[test]
    fn prefix_substrings_match_direct() {
        let base = draw_base(Some(7));
        let text: Vec<u8> = (0..300).map(|_| random::<u8>()).collect();
        let fps = PrefixFingerprints::new(&text, base);
        for e in 0..8 {
            let len = 1 << e;
            for at in (0..text.len() - len).step_by(13) {
                assert_eq!(
                    fps.substring_pow2(at, e),
                    direct(&text[at..at + len], base)
                );
            }
        }
    }

    #[test]
    fn equal_substrings_have_equal_fingerprints() {
        let base = draw_base(None);
        let text: Vec<u8> = b"abcabcabcabcabcabc".to_vec();
        let fps = PrefixFingerprints::new(&text, base);
        assert!(fps.eq_pow2(0, 3, 2));
        assert!(fps.eq_pow2(0, 6, 3));
    }

    #[test]
    fn seeded_base_is_deterministic() {
        assert_eq!(draw_base(Some(123)), draw_base(Some(123)));
        assert!(draw_base(Some(1)) >= 2 && draw_base(Some(1)) < PRIME - 1);
    }
}

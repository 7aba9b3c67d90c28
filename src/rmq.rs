//! Range minimum queries over the LCP array.

/// Sparse table answering argmin over inclusive index ranges in O(1),
/// with ties resolved towards the smaller index.
///
/// Space is O(n log n) words, which is fine here: the table is only ever
/// built over the LCP array of the synchronizing set, whose length is a
/// small fraction of the text.
pub struct SparseRmq {
    values: Vec<u32>,
    /// levels[e][i] = argmin of values[i..i + 2^(e+1)].
    levels: Vec<Vec<u32>>,
}

impl SparseRmq {
    pub fn new(values: Vec<u32>) -> Self {
        let n = values.len();
        let mut levels: Vec<Vec<u32>> = Vec::new();
        let mut width = 2;
        while width <= n {
            let half = width / 2;
            let level: Vec<u32> = (0..n - width + 1)
                .map(|i| {
                    let (a, b) = Self::halves(&levels, i, half);
                    if values[b as usize] < values[a as usize] {
                        b
                    } else {
                        a
                    }
                })
                .collect();
            levels.push(level);
            width *= 2;
        }
        SparseRmq { values, levels }
    }

    #[inline]
    fn halves(levels: &[Vec<u32>], i: usize, half: usize) -> (u32, u32) {
        if half == 1 {
            (i as u32, (i + 1) as u32)
        } else {
            let prev = &levels[levels.len() - 1];
            (prev[i], prev[i + half])
        }
    }

    /// Index of a minimum value in `values[lo..=hi]`; the leftmost one
    /// when the minimum is not unique.
    pub fn argmin(&self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo <= hi && hi < self.values.len());
        if lo == hi {
            return lo;
        }
        let len = hi - lo + 1;
        let e = 63 - (len as u64).leading_zeros() as usize;
        let level = &self.levels[e - 1];
        let a = level[lo] as usize;
        let b = level[hi + 1 - (1 << e)] as usize;
        if self.values[b] < self.values[a] {
            b
        } else if self.values[a] < self.values[b] {
            a
        } else {
            Ord::min(a, b)
        }
    }

    #[inline]
    pub fn value(&self, k: usize) -> u32 {
        self.values[k]
    }
}

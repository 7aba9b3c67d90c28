#![allow(dead_code)]

use rand::random;

pub const SMALL: usize = 1 << 20;
pub const MEDIUM: usize = 1 << 23;

/// Uniform random bytes over an alphabet of the given size.
pub fn random_bytes(len: usize, scale: u8) -> Vec<u8> {
    (0..len).map(|_| random::<u8>() % scale).collect()
}

/// Random DNA-like text.
pub fn dna(len: usize) -> Vec<u8> {
    let sigma = b"ACGT";
    (0..len).map(|_| sigma[random::<usize>() % 4]).collect()
}

/// A random half repeated twice; queries across the halves have long
/// extensions.
pub fn doubled(len: usize, scale: u8) -> Vec<u8> {
    let half = random_bytes(len / 2, scale);
    [&half[..], &half[..]].concat()
}

/// Query pairs with mostly short extensions.
pub fn short_pairs(len: usize, count: usize) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| (random::<usize>() % len, random::<usize>() % len))
        .collect()
}

/// Query pairs across the halves of a doubled text.
pub fn long_pairs(len: usize, count: usize) -> Vec<(usize, usize)> {
    let half = len / 2;
    (0..count)
        .map(|_| {
            let i = random::<usize>() % half;
            (i, i + half)
        })
        .collect()
}

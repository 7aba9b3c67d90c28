mod utils;

use criterion::{criterion_group, criterion_main, Criterion};
use lce::{LceNaiveXor, LcePrezza, LceSyncSets, Options, Tau};
use utils::*;

criterion_group!(
    benches,
    construct_naive_xor,
    construct_prezza,
    construct_sss_256,
    construct_sss_1024,
    construct_sss_1024_par,
);
criterion_main!(benches);

fn construct_naive_xor(c: &mut Criterion) {
    let text = random_bytes(SMALL, 250);
    c.bench_function("construct naive-xor bin-1m", move |b| {
        b.iter(|| LceNaiveXor::new(&text))
    });
}

fn construct_prezza(c: &mut Criterion) {
    let text = random_bytes(SMALL, 250);
    c.bench_function("construct prezza bin-1m", move |b| {
        b.iter(|| LcePrezza::new(&text))
    });
}

fn construct_sss_256(c: &mut Criterion) {
    let text = dna(SMALL);
    c.bench_function("construct sss256 dna-1m", move |b| {
        b.iter(|| {
            LceSyncSets::with_options(
                &text,
                Options { tau: Tau::T256, prefer_long_queries: false, seed: None },
            )
        })
    });
}

fn construct_sss_1024(c: &mut Criterion) {
    let text = dna(SMALL);
    c.bench_function("construct sss1024 dna-1m", move |b| {
        b.iter(|| {
            LceSyncSets::with_options(
                &text,
                Options { tau: Tau::T1024, prefer_long_queries: false, seed: None },
            )
        })
    });
}

#[cfg(feature = "parallel")]
fn construct_sss_1024_par(c: &mut Criterion) {
    let text = dna(MEDIUM);
    c.bench_function("construct sss1024-par dna-8m", move |b| {
        b.iter(|| {
            LceSyncSets::with_options_par(
                &text,
                Options { tau: Tau::T1024, prefer_long_queries: false, seed: None },
            )
        })
    });
}

#[cfg(not(feature = "parallel"))]
fn construct_sss_1024_par(_: &mut Criterion) {}

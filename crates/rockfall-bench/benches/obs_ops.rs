//! Criterion micro-benchmarks for observation tensor extraction.

use criterion::{criterion_group, criterion_main, Criterion};
use rockfall_core::VisibleCell;
use rockfall_engine::GameState;

use rockfall_bench::stock_profile;

/// Benchmark: full one-hot observation on the stock 22x40 level.
fn bench_observation_full(c: &mut Criterion) {
    let state = GameState::new(&stock_profile(42)).expect("stock profile parses");

    c.bench_function("observation_full_22x40", |b| {
        b.iter(|| {
            std::hint::black_box(state.observation());
        });
    });
}

/// Benchmark: filtered observation over the four channels a typical
/// navigation policy uses.
fn bench_observation_filtered(c: &mut Criterion) {
    let state = GameState::new(&stock_profile(42)).expect("stock profile parses");
    let filter = [
        VisibleCell::Agent,
        VisibleCell::Stone,
        VisibleCell::Diamond,
        VisibleCell::ExitOpen,
    ];

    c.bench_function("observation_filtered_4ch", |b| {
        b.iter(|| {
            std::hint::black_box(state.observation_filtered(&filter));
        });
    });
}

criterion_group!(benches, bench_observation_full, bench_observation_filtered);
criterion_main!(benches);

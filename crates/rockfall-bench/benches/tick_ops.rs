//! Criterion micro-benchmarks for the per-tick update pass.

use criterion::{criterion_group, criterion_main, Criterion};
use rockfall_core::Action;
use rockfall_engine::GameState;

use rockfall_bench::{dense_profile, stock_profile};

/// Benchmark: 8 no-op ticks on the stock 22x40 level from a fresh clone.
fn bench_tick_stock(c: &mut Criterion) {
    let state = GameState::new(&stock_profile(42)).expect("stock profile parses");

    c.bench_function("tick_stock_22x40", |b| {
        b.iter(|| {
            let mut run = state.clone();
            for _ in 0..8 {
                run.apply_action(Action::Noop);
            }
            std::hint::black_box(run.hash());
        });
    });
}

/// Benchmark: 8 no-op ticks on a generated 64x64 level.
fn bench_tick_dense_64(c: &mut Criterion) {
    let state = GameState::new(&dense_profile(64, 64, 42)).expect("dense profile parses");

    c.bench_function("tick_dense_64x64", |b| {
        b.iter(|| {
            let mut run = state.clone();
            for _ in 0..8 {
                run.apply_action(Action::Noop);
            }
            std::hint::black_box(run.hash());
        });
    });
}

/// Benchmark: cloning a state, the hot operation in tree search.
fn bench_state_clone(c: &mut Criterion) {
    let mut state = GameState::new(&stock_profile(42)).expect("stock profile parses");
    // Advance a little so the identity table has churned.
    for _ in 0..16 {
        state.apply_action(Action::Noop);
    }

    c.bench_function("state_clone_22x40", |b| {
        b.iter(|| {
            std::hint::black_box(state.clone());
        });
    });
}

criterion_group!(benches, bench_tick_stock, bench_tick_dense_64, bench_state_clone);
criterion_main!(benches);

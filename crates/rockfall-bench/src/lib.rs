//! Benchmark profiles for the Rockfall simulator.
//!
//! Provides pre-built [`GameConfig`] profiles for benchmarking:
//!
//! - [`stock_profile`]: the stock 22x40 level
//! - [`dense_profile`]: a generated level of arbitrary size with a
//!   dense interior mix of dirt, stones and diamonds

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rockfall_engine::GameConfig;

/// The stock 22x40 level under the given seed.
pub fn stock_profile(seed: u64) -> GameConfig {
    let mut config = GameConfig::default();
    config.rng_seed = seed;
    config
}

/// A generated `rows x cols` level under the given seed.
pub fn dense_profile(rows: usize, cols: usize, seed: u64) -> GameConfig {
    let mut config = GameConfig::with_board(dense_board(rows, cols, seed));
    config.rng_seed = seed;
    config
}

/// Generate a `rows x cols` board string: steel border, agent in the
/// top-left interior corner, and a deterministic interior mix of dirt,
/// stones, diamonds and empty space keyed off `seed`.
pub fn dense_board(rows: usize, cols: usize, seed: u64) -> String {
    let mut out = format!("{rows}|{cols}|-1|10");
    for row in 0..rows {
        for col in 0..cols {
            let code = if row == 0 || col == 0 || row == rows - 1 || col == cols - 1 {
                19 // steel wall
            } else if (row, col) == (1, 1) {
                0 // agent
            } else {
                let cell = (row * cols + col) as u64;
                let hash = seed
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(cell.wrapping_mul(1442695040888963407));
                match hash % 10 {
                    0 | 1 => 3, // stone
                    2 => 5,     // diamond
                    3 => 1,     // empty
                    _ => 2,     // dirt
                }
            };
            out.push_str(&format!("|{code:02}"));
        }
    }
    out
}

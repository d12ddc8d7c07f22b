//! Zobrist hash constants.
//!
//! One `u64` constant per (hidden code, cell) pair, generated once per
//! episode from the configured seed. The board hash is the XOR of the
//! constants selected by the current grid contents, so any single-cell
//! change is a two-XOR update.

use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rockfall_core::{HiddenCell, NUM_HIDDEN};

/// Table of Zobrist constants for a board with a fixed cell count.
#[derive(Clone, Debug)]
pub struct ZobristTable {
    cells: usize,
    constants: Vec<u64>,
}

impl ZobristTable {
    /// Generate constants for `cells` grid cells from `seed`.
    ///
    /// The same seed and cell count always produce the same table.
    pub fn new(seed: u64, cells: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let constants = (0..NUM_HIDDEN * cells).map(|_| rng.random::<u64>()).collect();
        Self { cells, constants }
    }

    /// Number of grid cells the table was generated for.
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Constant for `cell` occupying flat grid index `index`.
    pub fn constant(&self, cell: HiddenCell, index: usize) -> u64 {
        self.constants[cell.code() as usize * self.cells + index]
    }
}

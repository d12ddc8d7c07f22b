//! Per-episode immutable state shared across state clones.

use rockfall_board::{BoundsTable, ZobristTable};
use rockfall_core::HiddenCell;

use crate::config::GameConfig;

/// Resolved configuration plus the lookup tables derived from it.
///
/// Built once at construction, then shared read-only behind an `Arc`:
/// cloning a game state copies the board and local state but not these
/// tables.
#[derive(Debug)]
pub struct SharedState {
    /// Whether stones, diamonds, nuts and bombs fall.
    pub gravity: bool,
    /// Ticks a struck magic wall stays active.
    pub magic_wall_steps: i32,
    /// Blob growth chance out of 256.
    pub blob_chance: u8,
    /// Blob size cap in cells for this board.
    pub blob_max_size: usize,
    /// Seed for the Zobrist table and the episode RNG.
    pub rng_seed: u64,
    /// Predetermined blob replacement element, if configured.
    pub blob_swap: Option<HiddenCell>,
    /// Zobrist constants for this board shape.
    pub zobrist: ZobristTable,
    /// Padded in-bounds lookup for this board shape.
    pub bounds: BoundsTable,
}

impl SharedState {
    /// Resolve `config` against a `rows × cols` board.
    pub fn new(config: &GameConfig, rows: usize, cols: usize) -> Self {
        let cells = rows * cols;
        Self {
            gravity: config.gravity,
            magic_wall_steps: config.magic_wall_steps,
            blob_chance: config.blob_chance,
            blob_max_size: config.blob_max_size(cells),
            rng_seed: config.rng_seed,
            blob_swap: config.blob_swap,
            zobrist: ZobristTable::new(config.rng_seed, cells),
            bounds: BoundsTable::new(rows, cols),
        }
    }
}

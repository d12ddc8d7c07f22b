//! Episode configuration.
//!
//! A [`GameConfig`] fully determines an episode: the level string, the
//! RNG seed, gravity, and the magic-wall/blob tuning knobs. `Default`
//! reproduces the stock level and parameters.

use rockfall_core::HiddenCell;

/// Default number of ticks a struck magic wall stays active.
pub const DEFAULT_MAGIC_WALL_STEPS: i32 = 140;

/// Default blob growth chance out of 256 per blob cell per tick.
pub const DEFAULT_BLOB_CHANCE: u8 = 20;

/// Default blob size cap as a fraction of the board area.
pub const DEFAULT_BLOB_MAX_PERCENTAGE: f32 = 0.16;

/// The stock 22x40 level.
pub const DEFAULT_BOARD_STR: &str = concat!(
    "22|40|1280|12|",
    "19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|",
    "19|02|02|02|02|02|02|01|02|02|05|02|03|01|02|02|02|02|02|03|02|03|02|02|02|02|02|02|02|01|02|02|02|02|03|02|02|02|02|19|",
    "19|01|03|00|03|02|02|02|02|02|02|01|02|02|02|02|02|02|02|02|02|03|05|02|02|03|02|02|02|02|01|02|02|02|02|02|01|02|02|19|",
    "19|02|02|02|02|02|02|02|02|02|02|01|02|02|03|02|02|02|02|02|03|02|03|02|02|03|02|02|02|02|02|02|02|02|03|02|02|02|02|19|",
    "19|03|02|03|03|02|02|02|02|02|02|02|02|02|03|02|02|02|02|02|02|03|02|02|03|02|02|02|02|03|02|02|02|03|02|02|02|02|02|19|",
    "19|03|02|01|03|02|02|02|02|02|02|02|02|02|01|03|02|02|03|02|02|02|02|02|02|02|02|03|02|02|02|02|02|02|03|02|03|03|02|19|",
    "19|02|02|02|01|02|02|03|02|02|02|02|02|02|02|02|03|02|02|02|02|02|03|02|01|03|02|02|02|02|02|02|02|02|03|02|03|03|02|19|",
    "19|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|02|02|02|03|02|02|03|02|19|",
    "19|02|01|02|02|02|03|02|02|05|02|01|02|02|03|02|03|02|02|02|02|02|02|02|02|02|02|05|02|03|05|02|02|02|02|02|02|01|02|19|",
    "19|02|02|05|02|02|02|02|02|03|02|02|02|02|02|01|02|02|02|02|02|02|02|02|03|03|01|03|02|02|03|02|02|02|02|03|02|02|02|19|",
    "19|02|02|02|03|02|02|03|02|03|02|02|02|02|02|02|02|02|02|02|02|02|02|02|03|01|02|03|02|02|03|02|02|02|02|02|02|02|02|19|",
    "19|02|03|02|02|02|02|02|03|02|02|02|02|02|02|02|02|03|03|03|02|02|02|02|02|02|02|03|02|02|01|02|05|02|02|02|02|03|02|19|",
    "19|02|05|02|02|01|02|02|03|02|01|01|02|02|02|02|02|03|02|03|05|02|02|05|02|02|02|02|03|02|02|02|03|02|02|05|02|01|02|19|",
    "19|02|01|03|02|02|02|02|02|02|02|02|02|02|02|02|02|02|03|01|03|02|02|03|02|02|02|02|02|02|02|02|05|02|02|02|02|02|03|19|",
    "19|02|02|02|02|02|02|02|02|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|18|19|",
    "19|01|03|02|02|02|02|02|02|02|02|02|03|02|02|02|05|02|02|02|02|03|02|02|02|02|02|03|02|02|02|03|02|02|02|02|02|02|02|19|",
    "19|01|03|02|02|02|02|02|02|02|02|02|01|03|02|02|03|02|02|02|02|02|02|02|02|03|02|02|02|02|02|02|03|02|03|03|02|02|07|19|",
    "19|02|01|02|02|03|02|02|02|02|02|02|02|02|03|02|02|02|02|02|03|02|01|01|02|02|02|02|05|02|02|02|03|02|03|03|02|02|02|19|",
    "19|02|02|02|02|03|05|02|02|03|02|02|02|02|02|02|02|02|03|02|02|02|02|02|02|03|02|03|05|02|02|02|02|02|02|03|02|02|02|19|",
    "19|02|02|02|01|02|02|03|02|01|02|02|03|02|03|03|02|02|02|02|02|02|02|02|02|03|02|03|05|02|02|02|02|02|02|01|02|02|03|19|",
    "19|02|05|02|02|02|02|01|02|02|02|02|02|01|02|02|02|02|02|02|02|02|02|01|02|03|02|02|03|02|02|02|02|03|02|02|02|03|02|19|",
    "19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19|19"
);

/// Everything needed to construct a reproducible episode.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Whether stones, diamonds, nuts and bombs fall.
    pub gravity: bool,
    /// Ticks a struck magic wall stays active before expiring.
    pub magic_wall_steps: i32,
    /// Blob growth chance out of 256 per blob cell per tick.
    pub blob_chance: u8,
    /// Blob size cap as a fraction of the board area.
    pub blob_max_percentage: f32,
    /// Seed for the Zobrist table and the episode RNG.
    pub rng_seed: u64,
    /// Level encoding, as accepted by the board codec.
    pub board_str: String,
    /// Predetermined blob replacement element, overriding the
    /// enclosed/oversize decision.
    pub blob_swap: Option<HiddenCell>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: true,
            magic_wall_steps: DEFAULT_MAGIC_WALL_STEPS,
            blob_chance: DEFAULT_BLOB_CHANCE,
            blob_max_percentage: DEFAULT_BLOB_MAX_PERCENTAGE,
            rng_seed: 0,
            board_str: DEFAULT_BOARD_STR.to_string(),
            blob_swap: None,
        }
    }
}

impl GameConfig {
    /// Config for `board_str` with every other knob at its default.
    pub fn with_board(board_str: impl Into<String>) -> Self {
        Self {
            board_str: board_str.into(),
            ..Self::default()
        }
    }

    /// Blob size cap in cells for a board of `cells` total cells.
    pub fn blob_max_size(&self, cells: usize) -> usize {
        (cells as f32 * self.blob_max_percentage) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rockfall_board::parse_board_str;

    #[test]
    fn default_board_parses() {
        let board = parse_board_str(DEFAULT_BOARD_STR).unwrap();
        assert_eq!(board.rows, 22);
        assert_eq!(board.cols, 40);
        assert_eq!(board.max_steps, 1280);
        assert_eq!(board.gems_required, 12);
    }

    #[test]
    fn blob_cap_scales_with_area() {
        let config = GameConfig::default();
        assert_eq!(config.blob_max_size(100), 16);
        assert_eq!(config.blob_max_size(0), 0);
    }
}

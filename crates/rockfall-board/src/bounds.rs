//! Branch-free neighbour bounds checking.
//!
//! A `(rows + 2) × (cols + 2)` boolean ring marks the one-cell border
//! around the board as out of bounds, and a conversion table maps each
//! flat board index to its padded counterpart. Checking whether a step
//! in any of the nine directions stays on the board is then a single
//! table lookup with no per-access row/column arithmetic.

use rockfall_core::Direction;

/// Padded in-bounds lookup for a fixed board shape.
#[derive(Clone, Debug)]
pub struct BoundsTable {
    padded_cols: usize,
    in_bounds: Vec<bool>,
    board_to_padded: Vec<usize>,
}

impl BoundsTable {
    /// Build the table for a `rows × cols` board.
    pub fn new(rows: usize, cols: usize) -> Self {
        let padded_rows = rows + 2;
        let padded_cols = cols + 2;
        let mut in_bounds = vec![true; padded_rows * padded_cols];
        for c in 0..padded_cols {
            in_bounds[c] = false;
            in_bounds[(padded_rows - 1) * padded_cols + c] = false;
        }
        for r in 0..padded_rows {
            in_bounds[r * padded_cols] = false;
            in_bounds[r * padded_cols + padded_cols - 1] = false;
        }
        let mut board_to_padded = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                board_to_padded.push(padded_cols * (r + 1) + c + 1);
            }
        }
        Self {
            padded_cols,
            in_bounds,
            board_to_padded,
        }
    }

    /// True if stepping from flat board index `index` in `direction`
    /// stays on the board. `Noop` is always in bounds.
    pub fn in_bounds(&self, index: usize, direction: Direction) -> bool {
        let padded = self.padded_neighbour(self.board_to_padded[index], direction);
        self.in_bounds[padded]
    }

    fn padded_neighbour(&self, padded: usize, direction: Direction) -> usize {
        let stride = self.padded_cols;
        match direction {
            Direction::Noop => padded,
            Direction::Up => padded - stride,
            Direction::Right => padded + 1,
            Direction::Down => padded + stride,
            Direction::Left => padded - 1,
            Direction::UpRight => padded - stride + 1,
            Direction::DownRight => padded + stride + 1,
            Direction::DownLeft => padded + stride - 1,
            Direction::UpLeft => padded - stride - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rockfall_core::ALL_DIRECTIONS;

    #[test]
    fn interior_cell_is_in_bounds_everywhere() {
        // 3x3 board, centre index 4
        let table = BoundsTable::new(3, 3);
        for dir in ALL_DIRECTIONS {
            assert!(table.in_bounds(4, dir), "{dir:?}");
        }
    }

    #[test]
    fn corners_block_outward_steps() {
        let table = BoundsTable::new(3, 3);
        assert!(!table.in_bounds(0, Direction::Up));
        assert!(!table.in_bounds(0, Direction::Left));
        assert!(!table.in_bounds(0, Direction::UpLeft));
        assert!(table.in_bounds(0, Direction::Right));
        assert!(table.in_bounds(0, Direction::Down));
        assert!(table.in_bounds(0, Direction::DownRight));
        assert!(!table.in_bounds(8, Direction::Down));
        assert!(!table.in_bounds(8, Direction::Right));
        assert!(!table.in_bounds(8, Direction::DownRight));
    }

    #[test]
    fn single_row_board_blocks_vertical_steps() {
        let table = BoundsTable::new(1, 4);
        for index in 0..4 {
            assert!(!table.in_bounds(index, Direction::Up));
            assert!(!table.in_bounds(index, Direction::Down));
        }
        assert!(table.in_bounds(1, Direction::Left));
        assert!(table.in_bounds(1, Direction::Right));
        assert!(!table.in_bounds(0, Direction::Left));
        assert!(!table.in_bounds(3, Direction::Right));
    }

    #[test]
    fn noop_always_in_bounds() {
        let table = BoundsTable::new(2, 2);
        for index in 0..4 {
            assert!(table.in_bounds(index, Direction::Noop));
        }
    }
}

//! The mutable grid and its hash-preserving mutation primitives.

use rockfall_core::{Direction, HiddenCell};

use crate::zobrist::ZobristTable;

/// Sentinel for `agent_pos` once the agent has escaped through the exit.
pub const AGENT_POS_EXIT: usize = usize::MAX;

/// Sentinel for `agent_pos` once the agent has been destroyed.
pub const AGENT_POS_DIE: usize = usize::MAX - 1;

/// Flat row-major grid of hidden cell codes plus per-episode board
/// scalars.
///
/// All writes after construction must go through [`Board::set_item`] or
/// [`Board::move_item`] so the Zobrist hash and the updated-this-tick
/// flags stay consistent with the grid.
#[derive(Clone, Debug)]
pub struct Board {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Diamonds needed before the exit opens.
    pub gems_required: u8,
    /// Step budget, or a negative value for no limit.
    pub max_steps: i32,
    /// Agent's flat position, or one of the terminal sentinels
    /// ([`AGENT_POS_EXIT`], [`AGENT_POS_DIE`]).
    pub agent_pos: usize,
    /// Last real flat index the agent occupied, kept meaningful even
    /// after `agent_pos` turns into a sentinel.
    pub agent_idx: usize,
    /// Incrementally maintained Zobrist hash of the grid contents.
    pub hash: u64,
    grid: Vec<HiddenCell>,
    updated: Vec<bool>,
}

impl Board {
    /// A board with every cell set to `fill`.
    ///
    /// `agent_pos`/`agent_idx` start at the dead sentinel; the codec and
    /// the tests place the agent explicitly.
    pub fn filled(rows: usize, cols: usize, gems_required: u8, max_steps: i32, fill: HiddenCell) -> Self {
        Self {
            rows,
            cols,
            gems_required,
            max_steps,
            agent_pos: AGENT_POS_DIE,
            agent_idx: AGENT_POS_DIE,
            hash: 0,
            grid: vec![fill; rows * cols],
            updated: vec![false; rows * cols],
        }
    }

    /// Number of grid cells.
    pub fn cells(&self) -> usize {
        self.grid.len()
    }

    /// Cell contents at flat index `index`.
    pub fn item(&self, index: usize) -> HiddenCell {
        self.grid[index]
    }

    /// Grid contents in row-major order.
    pub fn grid(&self) -> &[HiddenCell] {
        &self.grid
    }

    /// Write `cell` directly, bypassing hash maintenance.
    ///
    /// Construction-time only; callers must finish with
    /// [`Board::recompute_hash`].
    pub fn place(&mut self, index: usize, cell: HiddenCell) {
        self.grid[index] = cell;
    }

    /// True if the cell at `index` was already written this tick.
    pub fn has_updated(&self, index: usize) -> bool {
        self.updated[index]
    }

    /// Clear every updated-this-tick flag.
    pub fn reset_updated(&mut self) {
        self.updated.fill(false);
    }

    /// Flat indices of every cell currently holding `cell`.
    pub fn find_all(&self, cell: HiddenCell) -> Vec<usize> {
        self.grid
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(i, _)| i)
            .collect()
    }

    /// Flat index one step from `index` in `direction`.
    ///
    /// Uses wrapping arithmetic; the result is meaningful only when the
    /// step is known to be in bounds.
    pub fn neighbour(&self, index: usize, direction: Direction) -> usize {
        match direction {
            Direction::Noop => index,
            Direction::Up => index.wrapping_sub(self.cols),
            Direction::Right => index.wrapping_add(1),
            Direction::Down => index.wrapping_add(self.cols),
            Direction::Left => index.wrapping_sub(1),
            Direction::UpRight => index.wrapping_sub(self.cols).wrapping_add(1),
            Direction::DownRight => index.wrapping_add(self.cols).wrapping_add(1),
            Direction::DownLeft => index.wrapping_add(self.cols).wrapping_sub(1),
            Direction::UpLeft => index.wrapping_sub(self.cols).wrapping_sub(1),
        }
    }

    /// `(row, col)` of a flat index.
    pub fn index_to_position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Flat index of `(row, col)`.
    pub fn position_to_index(&self, position: (usize, usize)) -> usize {
        position.0 * self.cols + position.1
    }

    /// Recompute the hash from scratch over the whole grid.
    ///
    /// Used at construction and deserialization; every other hash change
    /// goes through the mutation primitives.
    pub fn recompute_hash(&mut self, zobrist: &ZobristTable) {
        self.hash = 0;
        for (index, cell) in self.grid.iter().enumerate() {
            self.hash ^= zobrist.constant(*cell, index);
        }
    }

    /// Overwrite the cell at `index` with `cell`, marking it updated and
    /// folding the change into the hash.
    pub fn set_item(&mut self, zobrist: &ZobristTable, index: usize, cell: HiddenCell) {
        self.hash ^= zobrist.constant(self.grid[index], index);
        self.grid[index] = cell;
        self.hash ^= zobrist.constant(cell, index);
        self.updated[index] = true;
    }

    /// Relocate the occupant of `from` to `to`, leaving empty space
    /// behind. Marks the destination updated and folds both cell changes
    /// into the hash.
    pub fn move_item(&mut self, zobrist: &ZobristTable, from: usize, to: usize) {
        self.hash ^= zobrist.constant(self.grid[to], to);
        self.grid[to] = self.grid[from];
        self.hash ^= zobrist.constant(self.grid[to], to);

        self.hash ^= zobrist.constant(self.grid[from], from);
        self.grid[from] = HiddenCell::Empty;
        self.hash ^= zobrist.constant(HiddenCell::Empty, from);
        self.updated[to] = true;
    }
}

impl PartialEq for Board {
    /// Boards compare by grid contents; the hash is a function of the
    /// grid and the scalars are configuration.
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Board {}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> (Board, ZobristTable) {
        let mut board = Board::filled(3, 3, 1, -1, HiddenCell::Empty);
        board.place(4, HiddenCell::Stone);
        let zobrist = ZobristTable::new(11, board.cells());
        board.recompute_hash(&zobrist);
        (board, zobrist)
    }

    #[test]
    fn set_item_matches_recompute() {
        let (mut board, zobrist) = small_board();
        board.set_item(&zobrist, 2, HiddenCell::Diamond);
        board.set_item(&zobrist, 4, HiddenCell::Dirt);
        let incremental = board.hash;
        board.recompute_hash(&zobrist);
        assert_eq!(board.hash, incremental);
    }

    #[test]
    fn move_item_relocates_and_empties_source() {
        let (mut board, zobrist) = small_board();
        board.move_item(&zobrist, 4, 7);
        assert_eq!(board.item(4), HiddenCell::Empty);
        assert_eq!(board.item(7), HiddenCell::Stone);
        assert!(board.has_updated(7));
        assert!(!board.has_updated(4));
        let incremental = board.hash;
        board.recompute_hash(&zobrist);
        assert_eq!(board.hash, incremental);
    }

    #[test]
    fn set_then_revert_restores_hash() {
        let (mut board, zobrist) = small_board();
        let before = board.hash;
        board.set_item(&zobrist, 0, HiddenCell::WallBrick);
        assert_ne!(board.hash, before);
        board.set_item(&zobrist, 0, HiddenCell::Empty);
        assert_eq!(board.hash, before);
    }

    #[test]
    fn neighbour_addresses_row_major_grid() {
        let (board, _) = small_board();
        assert_eq!(board.neighbour(4, Direction::Up), 1);
        assert_eq!(board.neighbour(4, Direction::Down), 7);
        assert_eq!(board.neighbour(4, Direction::Left), 3);
        assert_eq!(board.neighbour(4, Direction::Right), 5);
        assert_eq!(board.neighbour(4, Direction::DownLeft), 6);
        assert_eq!(board.neighbour(4, Direction::Noop), 4);
    }

    #[test]
    fn equality_ignores_updated_flags() {
        let (mut a, zobrist) = small_board();
        let (b, _) = small_board();
        a.set_item(&zobrist, 4, HiddenCell::Stone);
        assert!(a.has_updated(4));
        assert_eq!(a, b);
    }
}

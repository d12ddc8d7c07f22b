//! The game state: board, per-episode local state and shared tables.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rockfall_board::{parse_board_str, Board, ParseError, AGENT_POS_DIE, AGENT_POS_EXIT};
use rockfall_core::{reward_signal_for, Action, Direction, HiddenCell, Properties, RewardSignal, VisibleCell, ALL_ACTIONS};

use crate::config::GameConfig;
use crate::rng::splitmix64;
use crate::shared::SharedState;

/// Per-episode mutable state outside the grid itself.
#[derive(Clone, Debug)]
pub(crate) struct LocalState {
    /// xorshift64 state.
    pub rng_state: u64,
    /// Event bits raised by the current tick.
    pub reward_signal: RewardSignal,
    /// Remaining step budget; negative when unlimited.
    pub steps_remaining: i32,
    /// Diamonds collected so far.
    pub gems_collected: u32,
    /// Reward earned by the current tick.
    pub current_reward: u64,
    /// Remaining magic-wall activity budget.
    pub magic_wall_steps: i32,
    /// True while the magic wall is transmuting.
    pub magic_active: bool,
    /// Blob cells counted by the current tick's scan.
    pub blob_size: usize,
    /// True until the scan finds the blob touching empty space or dirt.
    pub blob_enclosed: bool,
    /// Replacement element for blob cells, once decided.
    pub blob_swap: Option<HiddenCell>,
    /// Monotonically increasing identity counter.
    pub id_counter: u32,
    /// Flat index → identity for tracked objects.
    pub ids: IndexMap<usize, u32>,
}

impl LocalState {
    fn new(config: &GameConfig, steps_remaining: i32) -> Self {
        Self {
            rng_state: splitmix64(config.rng_seed),
            reward_signal: RewardSignal::EMPTY,
            steps_remaining,
            gems_collected: 0,
            current_reward: 0,
            magic_wall_steps: config.magic_wall_steps,
            magic_active: false,
            blob_size: 0,
            blob_enclosed: true,
            blob_swap: config.blob_swap,
            id_counter: 0,
            ids: IndexMap::new(),
        }
    }

    /// Next fresh identity.
    pub fn next_id(&mut self) -> u32 {
        self.id_counter += 1;
        self.id_counter
    }
}

impl PartialEq for LocalState {
    /// Compares the observable episode progress fields only; RNG state,
    /// rewards and identities are excluded, matching board-level
    /// equality being grid-only.
    fn eq(&self, other: &Self) -> bool {
        self.magic_wall_steps == other.magic_wall_steps
            && self.blob_size == other.blob_size
            && self.gems_collected == other.gems_collected
            && self.magic_active == other.magic_active
            && self.blob_enclosed == other.blob_enclosed
    }
}

impl Eq for LocalState {}

/// A complete simulation state.
///
/// Cloning deep-copies the board and local state and shares the
/// episode's immutable tables, so clones advance independently and
/// cheaply enough for tree search.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) shared: Arc<SharedState>,
    pub(crate) board: Board,
    pub(crate) local: LocalState,
}

impl GameState {
    /// Construct the initial state for `config`.
    pub fn new(config: &GameConfig) -> Result<Self, ParseError> {
        let board = parse_board_str(&config.board_str)?;
        let shared = Arc::new(SharedState::new(config, board.rows, board.cols));
        let local = LocalState::new(config, board.max_steps);
        let mut state = Self { shared, board, local };
        for index in 0..state.board.cells() {
            state.add_id(index);
        }
        state.board.recompute_hash(&state.shared.zobrist);
        Ok(state)
    }

    /// Rebuild a state from bytes produced by [`GameState::serialize`],
    /// using `config` for the tables the encoding omits.
    pub fn deserialize(bytes: &[u8], config: &GameConfig) -> Result<Self, crate::serialize::SerializeError> {
        crate::serialize::decode(bytes, config)
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// True once the episode has ended: step budget exhausted (when a
    /// positive budget is configured), agent escaped, or agent dead.
    pub fn is_terminal(&self) -> bool {
        let out_of_time = self.board.max_steps > 0 && self.local.steps_remaining <= 0;
        out_of_time || self.board.agent_pos == AGENT_POS_EXIT || self.board.agent_pos == AGENT_POS_DIE
    }

    /// True if the agent escaped through the exit in time.
    pub fn is_solution(&self) -> bool {
        let out_of_time = self.board.max_steps > 0 && self.local.steps_remaining <= 0;
        !out_of_time && self.board.agent_pos == AGENT_POS_EXIT
    }

    /// All actions; every action is always legal.
    pub fn legal_actions(&self) -> [Action; 5] {
        ALL_ACTIONS
    }

    /// Event bits raised by the most recent tick.
    pub fn reward_signal(&self) -> RewardSignal {
        self.local.reward_signal
    }

    /// Reward earned by the most recent tick.
    pub fn last_reward(&self) -> u64 {
        self.local.current_reward
    }

    /// Diamonds collected so far.
    pub fn gems_collected(&self) -> u32 {
        self.local.gems_collected
    }

    /// Remaining step budget; negative when unlimited.
    pub fn steps_remaining(&self) -> i32 {
        self.local.steps_remaining
    }

    /// Structural Zobrist hash of the grid.
    pub fn hash(&self) -> u64 {
        self.board.hash
    }

    /// Agent's flat position, or [`AGENT_POS_EXIT`] / [`AGENT_POS_DIE`]
    /// once the episode ended.
    pub fn agent_pos(&self) -> usize {
        self.board.agent_pos
    }

    /// Last real flat index the agent occupied, meaningful even after
    /// escape or death.
    pub fn agent_index(&self) -> usize {
        self.board.agent_idx
    }

    /// Hidden cell at a flat index.
    pub fn hidden_cell(&self, index: usize) -> HiddenCell {
        self.board.item(index)
    }

    /// Flat indices of every cell holding `cell`.
    pub fn indices_of(&self, cell: HiddenCell) -> Vec<usize> {
        self.board.find_all(cell)
    }

    /// `(row, col)` positions of every cell holding `cell`.
    pub fn positions_of(&self, cell: HiddenCell) -> Vec<(usize, usize)> {
        self.board
            .find_all(cell)
            .into_iter()
            .map(|index| self.board.index_to_position(index))
            .collect()
    }

    /// `(row, col)` of a flat index.
    pub fn index_to_position(&self, index: usize) -> (usize, usize) {
        self.board.index_to_position(index)
    }

    /// Flat index of `(row, col)`.
    pub fn position_to_index(&self, position: (usize, usize)) -> usize {
        self.board.position_to_index(position)
    }

    /// True if `(row, col)` lies on the board.
    pub fn is_pos_in_bounds(&self, position: (usize, usize)) -> bool {
        position.0 < self.board.rows && position.1 < self.board.cols
    }

    /// Identity of the tracked object at `index`, if any.
    pub fn index_id(&self, index: usize) -> Option<u32> {
        self.local.ids.get(&index).copied()
    }

    /// Flat index of the tracked object with identity `id`, if alive.
    pub fn id_index(&self, id: u32) -> Option<usize> {
        self.local
            .ids
            .iter()
            .find(|(_, object)| **object == id)
            .map(|(index, _)| *index)
    }

    /// Union of every event bit still obtainable from the current board
    /// contents.
    pub fn reachable_rewards(&self) -> RewardSignal {
        let mut signal = RewardSignal::EMPTY;
        for cell in self.board.grid() {
            signal |= reward_signal_for(*cell);
        }
        signal
    }

    /// Re-encode the live board as a board string.
    pub fn board_to_str(&self) -> String {
        rockfall_board::board_to_str(&self.board)
    }

    // ── Observations ────────────────────────────────────────────────

    /// `[channels, rows, cols]` of the full observation tensor.
    pub fn observation_shape(&self) -> [usize; 3] {
        rockfall_obs::observation_shape(&self.board)
    }

    /// One-hot observation over all visible cell types.
    pub fn observation(&self) -> Vec<f32> {
        rockfall_obs::observation(&self.board)
    }

    /// `[channels, rows, cols]` of a filtered observation tensor.
    pub fn observation_shape_filtered(&self, filter: &[VisibleCell]) -> [usize; 3] {
        rockfall_obs::observation_shape_filtered(&self.board, filter)
    }

    /// One-hot observation restricted to `filter`, channels in filter
    /// order.
    pub fn observation_filtered(&self, filter: &[VisibleCell]) -> Vec<f32> {
        rockfall_obs::observation_filtered(&self.board, filter)
    }

    // ── Neighbour access (engine-internal) ──────────────────────────

    /// True if one step from `index` in `direction` stays on the board.
    pub(crate) fn in_bounds(&self, index: usize, direction: Direction) -> bool {
        self.shared.bounds.in_bounds(index, direction)
    }

    /// Flat index one step away. Meaningful only when in bounds.
    pub(crate) fn neighbour(&self, index: usize, direction: Direction) -> usize {
        self.board.neighbour(index, direction)
    }

    /// Cell one step away. Callers must have checked bounds.
    pub(crate) fn item_toward(&self, index: usize, direction: Direction) -> HiddenCell {
        self.board.item(self.neighbour(index, direction))
    }

    /// True if the neighbour exists and holds exactly `cell`.
    pub(crate) fn is_type(&self, index: usize, cell: HiddenCell, direction: Direction) -> bool {
        self.in_bounds(index, direction) && self.item_toward(index, direction) == cell
    }

    /// True if the neighbour exists and has all bits of `props`.
    pub(crate) fn has_property(&self, index: usize, props: Properties, direction: Direction) -> bool {
        self.in_bounds(index, direction) && self.item_toward(index, direction).has_property(props)
    }

    /// True if any cardinal neighbour holds exactly `cell`.
    pub(crate) fn is_type_adjacent(&self, index: usize, cell: HiddenCell) -> bool {
        self.is_type(index, cell, Direction::Up)
            || self.is_type(index, cell, Direction::Left)
            || self.is_type(index, cell, Direction::Down)
            || self.is_type(index, cell, Direction::Right)
    }

    // ── Mutation wrappers (engine-internal) ─────────────────────────

    /// Overwrite the neighbour cell in `direction` with `cell`.
    pub(crate) fn set_item(&mut self, index: usize, cell: HiddenCell, direction: Direction) {
        let target = self.board.neighbour(index, direction);
        self.board.set_item(&self.shared.zobrist, target, cell);
    }

    /// Relocate the occupant of `index` one step in `direction`,
    /// carrying its identity along.
    pub(crate) fn move_item(&mut self, index: usize, direction: Direction) {
        let target = self.board.neighbour(index, direction);
        self.board.move_item(&self.shared.zobrist, index, target);
        self.relocate_id(index, target);
    }

    // ── Identity maintenance (engine-internal) ──────────────────────

    /// Register a fresh identity for the cell at `index` if its
    /// contents are tracked.
    pub(crate) fn add_id(&mut self, index: usize) {
        if self.board.item(index).is_tracked() {
            let id = self.local.next_id();
            self.local.ids.insert(index, id);
        }
    }

    /// Drop the identity at `index`, if any.
    pub(crate) fn remove_id(&mut self, index: usize) {
        self.local.ids.swap_remove(&index);
    }

    /// Move the identity keyed at `from` to `to`.
    pub(crate) fn relocate_id(&mut self, from: usize, to: usize) {
        if let Some(id) = self.local.ids.swap_remove(&from) {
            self.local.ids.insert(to, id);
        }
    }

    /// Re-key the object at `index` with a fresh identity.
    pub(crate) fn refresh_id(&mut self, index: usize) {
        let id = self.local.next_id();
        if let Some(entry) = self.local.ids.get_mut(&index) {
            *entry = id;
        }
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.local == other.local && self.board == other.board
    }
}

impl Eq for GameState {}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.board.cols + 2);
        writeln!(f, "{border}")?;
        for row in 0..self.board.rows {
            write!(f, "|")?;
            for col in 0..self.board.cols {
                write!(f, "{}", self.board.item(row * self.board.cols + col).glyph())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{border}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x3, agent centred in empty space
    const WALK: &str = "3|3|-1|1|01|01|01|01|00|01|01|01|01";

    #[test]
    fn new_seeds_ids_for_tracked_cells() {
        // agent, stone, diamond, nut / bomb, dirt, empty, brick
        let config = GameConfig::with_board("2|4|-1|1|00|03|05|39|41|02|01|18");
        let state = GameState::new(&config).unwrap();
        assert_eq!(state.index_id(1), Some(1));
        assert_eq!(state.index_id(2), Some(2));
        assert_eq!(state.index_id(3), Some(3));
        assert_eq!(state.index_id(4), Some(4));
        assert_eq!(state.index_id(0), None);
        assert_eq!(state.index_id(5), None);
        assert_eq!(state.id_index(2), Some(2));
        assert_eq!(state.id_index(99), None);
    }

    #[test]
    fn hash_is_nonzero_and_seed_dependent() {
        let a = GameState::new(&GameConfig::with_board(WALK)).unwrap();
        let mut config = GameConfig::with_board(WALK);
        config.rng_seed = 1;
        let b = GameState::new(&config).unwrap();
        assert_ne!(a.hash(), 0);
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn clones_share_tables_and_diverge() {
        let config = GameConfig::with_board(WALK);
        let original = GameState::new(&config).unwrap();
        let mut clone = original.clone();
        assert!(Arc::ptr_eq(&original.shared, &clone.shared));
        clone.apply_action(Action::Up);
        assert_ne!(original.agent_pos(), clone.agent_pos());
        assert_eq!(original.agent_pos(), 4);
    }

    #[test]
    fn display_renders_bordered_glyph_grid() {
        let state = GameState::new(&GameConfig::with_board(WALK)).unwrap();
        let rendered = state.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "-----");
        assert_eq!(lines[2], "| @ |");
    }

    #[test]
    fn reachable_rewards_reflect_board_contents() {
        // agent, diamond, red key, open exit
        let config = GameConfig::with_board("1|4|-1|1|00|05|29|08");
        let state = GameState::new(&config).unwrap();
        let reachable = state.reachable_rewards();
        assert!(reachable.contains(RewardSignal::COLLECT_DIAMOND));
        assert!(reachable.contains(RewardSignal::COLLECT_KEY_RED));
        assert!(reachable.contains(RewardSignal::WALK_THROUGH_EXIT));
        assert!(!reachable.contains(RewardSignal::WALK_THROUGH_GATE_BLUE));
    }
}

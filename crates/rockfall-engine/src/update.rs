//! The per-tick update pass.
//!
//! A tick is: scan-start bookkeeping, agent resolution, then one
//! row-major pass over the grid dispatching each not-yet-updated cell
//! to its element rule, then scan-end bookkeeping. Mutations mark
//! their destination cells updated, so an object that moved down or
//! right is not advanced twice in the same tick.

use smallvec::SmallVec;

use rockfall_board::{AGENT_POS_DIE, AGENT_POS_EXIT};
use rockfall_core::{
    Action, Direction, DirectionList, HiddenCell, Properties, RewardSignal, ALL_ACTIONS, ALL_DIRECTIONS, CARDINALS,
    NUM_ACTIONS,
};

use crate::rng::xorshift64;
use crate::state::GameState;

const BLOB_CHANCE_BASE: u64 = 256;

impl GameState {
    /// Advance the simulation by one tick under `action`.
    ///
    /// Total over all actions; blocked moves resolve to no-ops. Calling
    /// this on a terminal state only burns step budget.
    pub fn apply_action(&mut self, action: Action) {
        self.start_scan();

        let agent_idx = self.board.agent_idx;
        self.update_agent(agent_idx, Direction::from(action));

        for index in 0..self.board.cells() {
            if self.board.has_updated(index) {
                continue;
            }
            match self.board.item(index) {
                HiddenCell::Stone => self.update_stone(index),
                HiddenCell::StoneFalling => self.update_stone_falling(index),
                HiddenCell::Diamond => self.update_diamond(index),
                HiddenCell::DiamondFalling => self.update_diamond_falling(index),
                HiddenCell::Nut => self.update_nut(index),
                HiddenCell::NutFalling => self.update_nut_falling(index),
                HiddenCell::Bomb => self.update_bomb(index),
                HiddenCell::BombFalling => self.update_bomb_falling(index),
                HiddenCell::ExitClosed => self.update_exit(index),
                HiddenCell::Blob => self.update_blob(index),
                other => {
                    if let Some(heading) = other.heading() {
                        if other.is_butterfly() {
                            self.update_butterfly(index, heading);
                        } else if other.is_firefly() {
                            self.update_firefly(index, heading);
                        } else {
                            self.update_orange(index, heading);
                        }
                    } else if other.is_magic_wall() {
                        self.update_magic_wall(index);
                    } else if other.is_explosion() {
                        self.update_explosions(index);
                    }
                }
            }
        }

        self.end_scan();
    }

    // ── Scan bookkeeping ────────────────────────────────────────────

    fn start_scan(&mut self) {
        if self.local.steps_remaining > 0 {
            self.local.steps_remaining -= 1;
        }
        self.local.current_reward = 0;
        self.local.blob_size = 0;
        self.local.blob_enclosed = true;
        self.local.reward_signal.clear();
        self.board.reset_updated();
    }

    fn end_scan(&mut self) {
        // The blob replacement is decided at most once per episode;
        // oversize is checked last and wins over enclosure.
        if self.local.blob_swap.is_none() {
            if self.local.blob_enclosed {
                self.local.blob_swap = Some(HiddenCell::Diamond);
            }
            if self.local.blob_size > self.shared.blob_max_size {
                self.local.blob_swap = Some(HiddenCell::Stone);
            }
        }
        if self.local.magic_active {
            self.local.magic_wall_steps = (self.local.magic_wall_steps - 1).max(0);
        }
        self.local.magic_active = self.local.magic_active && self.local.magic_wall_steps > 0;
    }

    // ── Agent ───────────────────────────────────────────────────────

    fn update_agent(&mut self, index: usize, direction: Direction) {
        // After escape or death the stored index no longer holds the
        // agent; there is nothing to resolve.
        if self.board.item(index) != HiddenCell::Agent || !self.in_bounds(index, direction) {
            return;
        }
        let target = self.neighbour(index, direction);
        let target_cell = self.board.item(target);
        match target_cell {
            HiddenCell::Empty | HiddenCell::Dirt => {
                self.move_item(index, direction);
                self.board.agent_pos = target;
                self.board.agent_idx = target;
            }
            HiddenCell::Diamond | HiddenCell::DiamondFalling => {
                self.collect_diamond(target_cell);
                self.move_item(index, direction);
                self.remove_id(target);
                self.board.agent_pos = target;
                self.board.agent_idx = target;
            }
            _ if direction.is_horizontal() && target_cell.has_property(Properties::PUSHABLE) => {
                self.push(index, target_cell, direction);
            }
            _ if target_cell.is_key() => {
                self.collect_key(target_cell);
                self.move_item(index, direction);
                self.board.agent_pos = target;
                self.board.agent_idx = target;
            }
            _ if target_cell.is_open_gate() => {
                self.walk_through_gate(index, target, target_cell, direction);
            }
            HiddenCell::ExitOpen => {
                self.move_item(index, direction);
                self.set_item(index, HiddenCell::AgentInExit, direction);
                self.board.agent_pos = AGENT_POS_EXIT;
                self.board.agent_idx = target;
                self.local.reward_signal |= RewardSignal::WALK_THROUGH_EXIT;
                self.local.current_reward += self.local.steps_remaining.max(0) as u64;
            }
            _ => {}
        }
    }

    fn collect_diamond(&mut self, cell: HiddenCell) {
        self.local.gems_collected += 1;
        self.local.current_reward += cell.points();
        self.local.reward_signal |= RewardSignal::COLLECT_DIAMOND;
    }

    fn collect_key(&mut self, key: HiddenCell) {
        if let Some(gate) = key.matching_gate() {
            self.open_gate(gate);
        }
        self.local.reward_signal |= RewardSignal::COLLECT_KEY;
        if let Some(colour) = key.key_signal() {
            self.local.reward_signal |= colour;
        }
    }

    /// Push the object at `index + direction` one cell further and step
    /// the agent into its place. Requires empty space beyond the object.
    fn push(&mut self, index: usize, pushed: HiddenCell, direction: Direction) {
        let object = self.neighbour(index, direction);
        if self.is_type(object, HiddenCell::Empty, direction) {
            let destination = self.neighbour(object, direction);
            let falls = self.is_type(destination, HiddenCell::Empty, Direction::Down);
            self.move_item(object, direction);
            let settled = if falls { pushed.to_falling() } else { pushed };
            self.set_item(destination, settled, Direction::Noop);
            self.move_item(index, direction);
            self.board.agent_pos = object;
            self.board.agent_idx = object;
        }
    }

    /// Step through an open gate onto the traversable cell beyond it,
    /// applying collection effects to whatever the agent lands on.
    fn walk_through_gate(&mut self, index: usize, gate: usize, gate_cell: HiddenCell, direction: Direction) {
        if !self.has_property(gate, Properties::TRAVERSABLE, direction) {
            return;
        }
        let beyond = self.neighbour(gate, direction);
        let landing = self.board.item(beyond);
        match landing {
            HiddenCell::Diamond | HiddenCell::DiamondFalling => {
                self.collect_diamond(landing);
                self.remove_id(beyond);
            }
            key if key.is_key() => {
                self.collect_key(key);
            }
            _ => {}
        }
        self.set_item(gate, HiddenCell::Agent, direction);
        self.set_item(index, HiddenCell::Empty, Direction::Noop);
        self.board.agent_pos = beyond;
        self.board.agent_idx = beyond;
        self.local.reward_signal |= RewardSignal::WALK_THROUGH_GATE;
        if let Some(colour) = gate_cell.gate_signal() {
            self.local.reward_signal |= colour;
        }
    }

    /// Flip every closed gate of the given kind to its open variant.
    fn open_gate(&mut self, closed: HiddenCell) {
        let Some(open) = closed.opened_gate() else {
            return;
        };
        for index in self.board.find_all(closed) {
            self.set_item(index, open, Direction::Noop);
        }
    }

    // ── Falling bodies ──────────────────────────────────────────────

    fn can_roll_left(&self, index: usize) -> bool {
        self.has_property(index, Properties::ROUNDED, Direction::Down)
            && self.is_type(index, HiddenCell::Empty, Direction::Left)
            && self.is_type(index, HiddenCell::Empty, Direction::DownLeft)
    }

    fn can_roll_right(&self, index: usize) -> bool {
        self.has_property(index, Properties::ROUNDED, Direction::Down)
            && self.is_type(index, HiddenCell::Empty, Direction::Right)
            && self.is_type(index, HiddenCell::Empty, Direction::DownRight)
    }

    fn roll(&mut self, index: usize, rolled: HiddenCell, direction: Direction) {
        self.set_item(index, rolled, Direction::Noop);
        self.move_item(index, direction);
    }

    fn update_stone(&mut self, index: usize) {
        if !self.shared.gravity {
            return;
        }
        if self.is_type(index, HiddenCell::Empty, Direction::Down) {
            self.set_item(index, HiddenCell::StoneFalling, Direction::Noop);
            self.update_stone_falling(index);
        } else if self.can_roll_left(index) {
            self.roll(index, HiddenCell::StoneFalling, Direction::Left);
        } else if self.can_roll_right(index) {
            self.roll(index, HiddenCell::StoneFalling, Direction::Right);
        }
    }

    fn update_stone_falling(&mut self, index: usize) {
        if self.is_type(index, HiddenCell::Empty, Direction::Down) {
            self.move_item(index, Direction::Down);
        } else if self.has_property(index, Properties::CAN_EXPLODE, Direction::Down) {
            // Landing on anything explodable (creatures, bombs, the
            // agent) detonates it.
            let below = self.item_toward(index, Direction::Down);
            self.explode(index, below.explosion_flavour(), Direction::Down);
        } else if self.is_type(index, HiddenCell::WallMagicOn, Direction::Down)
            || self.is_type(index, HiddenCell::WallMagicDormant, Direction::Down)
        {
            if let Some(converted) = self.board.item(index).magic_transmute() {
                self.move_through_magic(index, converted);
            }
        } else if self.is_type(index, HiddenCell::Nut, Direction::Down) {
            // Crack the nut into a diamond; the diamond is a new object.
            let below = self.neighbour(index, Direction::Down);
            self.set_item(below, HiddenCell::Diamond, Direction::Noop);
            self.refresh_id(below);
            self.local.reward_signal |= RewardSignal::NUT_TO_DIAMOND;
        } else if self.can_roll_left(index) {
            self.roll(index, HiddenCell::StoneFalling, Direction::Left);
        } else if self.can_roll_right(index) {
            self.roll(index, HiddenCell::StoneFalling, Direction::Right);
        } else {
            self.set_item(index, HiddenCell::Stone, Direction::Noop);
        }
    }

    fn update_diamond(&mut self, index: usize) {
        if !self.shared.gravity {
            return;
        }
        if self.is_type(index, HiddenCell::Empty, Direction::Down) {
            self.set_item(index, HiddenCell::DiamondFalling, Direction::Noop);
            self.update_diamond_falling(index);
        } else if self.can_roll_left(index) {
            self.roll(index, HiddenCell::DiamondFalling, Direction::Left);
        } else if self.can_roll_right(index) {
            self.roll(index, HiddenCell::DiamondFalling, Direction::Right);
        }
    }

    fn update_diamond_falling(&mut self, index: usize) {
        if self.is_type(index, HiddenCell::Empty, Direction::Down) {
            self.move_item(index, Direction::Down);
        } else if self.has_property(index, Properties::CAN_EXPLODE, Direction::Down)
            && !self.is_type(index, HiddenCell::Bomb, Direction::Down)
            && !self.is_type(index, HiddenCell::BombFalling, Direction::Down)
        {
            // Diamonds detonate creatures but are too light to set off
            // bombs.
            let below = self.item_toward(index, Direction::Down);
            self.explode(index, below.explosion_flavour(), Direction::Down);
        } else if self.is_type(index, HiddenCell::WallMagicOn, Direction::Down)
            || self.is_type(index, HiddenCell::WallMagicDormant, Direction::Down)
        {
            if let Some(converted) = self.board.item(index).magic_transmute() {
                self.move_through_magic(index, converted);
            }
        } else if self.can_roll_left(index) {
            self.roll(index, HiddenCell::DiamondFalling, Direction::Left);
        } else if self.can_roll_right(index) {
            self.roll(index, HiddenCell::DiamondFalling, Direction::Right);
        } else {
            self.set_item(index, HiddenCell::Diamond, Direction::Noop);
        }
    }

    fn update_nut(&mut self, index: usize) {
        if !self.shared.gravity {
            return;
        }
        if self.is_type(index, HiddenCell::Empty, Direction::Down) {
            self.set_item(index, HiddenCell::NutFalling, Direction::Noop);
            self.update_nut_falling(index);
        } else if self.can_roll_left(index) {
            self.roll(index, HiddenCell::NutFalling, Direction::Left);
        } else if self.can_roll_right(index) {
            self.roll(index, HiddenCell::NutFalling, Direction::Right);
        }
    }

    fn update_nut_falling(&mut self, index: usize) {
        if self.is_type(index, HiddenCell::Empty, Direction::Down) {
            self.move_item(index, Direction::Down);
        } else if self.can_roll_left(index) {
            self.roll(index, HiddenCell::NutFalling, Direction::Left);
        } else if self.can_roll_right(index) {
            self.roll(index, HiddenCell::NutFalling, Direction::Right);
        } else {
            self.set_item(index, HiddenCell::Nut, Direction::Noop);
        }
    }

    fn update_bomb(&mut self, index: usize) {
        if !self.shared.gravity {
            return;
        }
        if self.is_type(index, HiddenCell::Empty, Direction::Down) {
            self.set_item(index, HiddenCell::BombFalling, Direction::Noop);
            self.update_bomb_falling(index);
        } else if self.can_roll_left(index) {
            self.roll(index, HiddenCell::Bomb, Direction::Left);
        } else if self.can_roll_right(index) {
            self.roll(index, HiddenCell::Bomb, Direction::Right);
        }
    }

    fn update_bomb_falling(&mut self, index: usize) {
        if self.is_type(index, HiddenCell::Empty, Direction::Down) {
            self.move_item(index, Direction::Down);
        } else if self.can_roll_left(index) {
            self.roll(index, HiddenCell::BombFalling, Direction::Left);
        } else if self.can_roll_right(index) {
            self.roll(index, HiddenCell::BombFalling, Direction::Right);
        } else {
            // A bomb that can neither fall nor roll goes off.
            let flavour = self.board.item(index).explosion_flavour();
            self.explode(index, flavour, Direction::Noop);
        }
    }

    /// Pass a falling body through an active magic wall, transmuted,
    /// into the cell two below. Requires remaining wall budget; the
    /// strike activates the wall even when the cell beneath is blocked
    /// and the body stays put.
    fn move_through_magic(&mut self, index: usize, converted: HiddenCell) {
        if self.local.magic_wall_steps <= 0 {
            return;
        }
        self.local.magic_active = true;
        let wall = self.neighbour(index, Direction::Down);
        if !self.in_bounds(wall, Direction::Down) {
            return;
        }
        let under = self.neighbour(wall, Direction::Down);
        if self.board.item(under) == HiddenCell::Empty {
            self.set_item(index, HiddenCell::Empty, Direction::Noop);
            self.set_item(under, converted, Direction::Noop);
            self.relocate_id(index, under);
        }
    }

    // ── Creatures ───────────────────────────────────────────────────

    fn update_firefly(&mut self, index: usize, heading: Direction) {
        let preferred = heading.rotate_left();
        if self.is_type_adjacent(index, HiddenCell::Agent) || self.is_type_adjacent(index, HiddenCell::Blob) {
            let flavour = self.board.item(index).explosion_flavour();
            self.explode(index, flavour, Direction::Noop);
        } else if self.is_type(index, HiddenCell::Empty, preferred) {
            let turned = self.board.item(index).facing(preferred);
            self.set_item(index, turned, Direction::Noop);
            self.move_item(index, preferred);
        } else if self.is_type(index, HiddenCell::Empty, heading) {
            let ahead = self.board.item(index).facing(heading);
            self.set_item(index, ahead, Direction::Noop);
            self.move_item(index, heading);
        } else {
            let reversed = self.board.item(index).facing(heading.rotate_right());
            self.set_item(index, reversed, Direction::Noop);
        }
    }

    fn update_butterfly(&mut self, index: usize, heading: Direction) {
        let preferred = heading.rotate_right();
        if self.is_type_adjacent(index, HiddenCell::Agent) || self.is_type_adjacent(index, HiddenCell::Blob) {
            let flavour = self.board.item(index).explosion_flavour();
            self.explode(index, flavour, Direction::Noop);
        } else if self.is_type(index, HiddenCell::Empty, preferred) {
            let turned = self.board.item(index).facing(preferred);
            self.set_item(index, turned, Direction::Noop);
            self.move_item(index, preferred);
        } else if self.is_type(index, HiddenCell::Empty, heading) {
            let ahead = self.board.item(index).facing(heading);
            self.set_item(index, ahead, Direction::Noop);
            self.move_item(index, heading);
        } else {
            let reversed = self.board.item(index).facing(heading.rotate_left());
            self.set_item(index, reversed, Direction::Noop);
        }
    }

    fn update_orange(&mut self, index: usize, heading: Direction) {
        if self.is_type(index, HiddenCell::Empty, heading) {
            self.move_item(index, heading);
        } else if self.is_type_adjacent(index, HiddenCell::Agent) {
            let flavour = self.board.item(index).explosion_flavour();
            self.explode(index, flavour, Direction::Noop);
        } else {
            // Blocked: reorient at random among the open cardinal
            // directions without moving this tick.
            let mut open: DirectionList = SmallVec::new();
            for dir in CARDINALS {
                if self.in_bounds(index, dir) && self.is_type(index, HiddenCell::Empty, dir) {
                    open.push(dir);
                }
            }
            if !open.is_empty() {
                let roll = xorshift64(&mut self.local.rng_state) % open.len() as u64;
                let turned = self.board.item(index).facing(open[roll as usize]);
                self.set_item(index, turned, Direction::Noop);
            }
        }
    }

    // ── Walls, blob, explosions ─────────────────────────────────────

    fn update_exit(&mut self, index: usize) {
        if self.local.gems_collected >= u32::from(self.board.gems_required) {
            self.set_item(index, HiddenCell::ExitOpen, Direction::Noop);
        }
    }

    fn update_magic_wall(&mut self, index: usize) {
        if self.local.magic_active {
            self.set_item(index, HiddenCell::WallMagicOn, Direction::Noop);
        } else if self.local.magic_wall_steps > 0 {
            self.set_item(index, HiddenCell::WallMagicDormant, Direction::Noop);
        } else {
            self.set_item(index, HiddenCell::WallMagicExpired, Direction::Noop);
        }
    }

    fn update_blob(&mut self, index: usize) {
        if let Some(swap) = self.local.blob_swap {
            self.set_item(index, swap, Direction::Noop);
            self.add_id(index);
            return;
        }
        self.local.blob_size += 1;
        if self.is_type_adjacent(index, HiddenCell::Empty) || self.is_type_adjacent(index, HiddenCell::Dirt) {
            self.local.blob_enclosed = false;
        }
        // Both rolls happen unconditionally to keep the RNG stream
        // independent of the board contents around this cell.
        let will_grow = xorshift64(&mut self.local.rng_state) % BLOB_CHANCE_BASE < u64::from(self.shared.blob_chance);
        let dir_roll = xorshift64(&mut self.local.rng_state) % NUM_ACTIONS as u64;
        let grow_dir = Direction::from(ALL_ACTIONS[dir_roll as usize]);
        if will_grow
            && (self.is_type(index, HiddenCell::Empty, grow_dir) || self.is_type(index, HiddenCell::Dirt, grow_dir))
        {
            self.set_item(index, HiddenCell::Blob, grow_dir);
            let target = self.neighbour(index, grow_dir);
            self.remove_id(target);
        }
    }

    fn update_explosions(&mut self, index: usize) {
        if let Some(residue) = self.board.item(index).explosion_residue() {
            self.set_item(index, residue, Direction::Noop);
            self.add_id(index);
        }
    }

    /// Detonate the cell one step from `index` in `direction`, writing
    /// `flavour` there, then chain through the 8-neighbourhood:
    /// explodable neighbours detonate recursively with the flavour of
    /// the cell just destroyed, merely consumable ones are overwritten.
    /// Terminates because every visited cell is overwritten with a
    /// non-explodable marker before recursing.
    fn explode(&mut self, index: usize, flavour: HiddenCell, direction: Direction) {
        let target = self.neighbour(index, direction);
        let destroyed = self.board.item(target);
        let chain_flavour = destroyed.explosion_flavour();
        if destroyed == HiddenCell::Agent {
            self.board.agent_pos = AGENT_POS_DIE;
            self.local.reward_signal |= RewardSignal::AGENT_DIES;
        }
        self.set_item(target, flavour, Direction::Noop);
        self.remove_id(target);
        for dir in ALL_DIRECTIONS {
            if dir == Direction::Noop || !self.in_bounds(target, dir) {
                continue;
            }
            if self.has_property(target, Properties::CAN_EXPLODE, dir) {
                self.explode(target, chain_flavour, dir);
            } else if self.has_property(target, Properties::CONSUMABLE, dir) {
                let neighbour = self.neighbour(target, dir);
                self.set_item(neighbour, chain_flavour, Direction::Noop);
                self.remove_id(neighbour);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rockfall_board::AGENT_POS_DIE;

    fn state(board: &str) -> GameState {
        GameState::new(&GameConfig::with_board(board)).unwrap()
    }

    #[test]
    fn agent_digs_dirt_and_moves() {
        // agent on dirt row
        let mut s = state("1|3|-1|1|00|02|01");
        s.apply_action(Action::Right);
        assert_eq!(s.agent_pos(), 1);
        assert_eq!(s.hidden_cell(0), HiddenCell::Empty);
        assert_eq!(s.hidden_cell(1), HiddenCell::Agent);
        assert!(s.reward_signal().is_empty());
    }

    #[test]
    fn blocked_moves_are_noops() {
        // agent walled in by steel
        let mut s = state("1|3|-1|1|19|00|19");
        let hash = s.hash();
        s.apply_action(Action::Left);
        s.apply_action(Action::Up);
        assert_eq!(s.agent_pos(), 1);
        assert_eq!(s.hash(), hash);
    }

    #[test]
    fn diamond_collection_counts_and_signals() {
        let mut s = state("1|3|-1|1|00|05|01");
        s.apply_action(Action::Right);
        assert_eq!(s.gems_collected(), 1);
        assert_eq!(s.last_reward(), 1);
        assert!(s.reward_signal().contains(RewardSignal::COLLECT_DIAMOND));
        assert_eq!(s.index_id(1), None);
    }

    #[test]
    fn stone_push_conserves_the_stone() {
        // agent, stone, empty on a floor row (1x4 so nothing falls)
        let mut s = state("1|4|-1|1|00|03|01|01");
        let stone_id = s.index_id(1);
        s.apply_action(Action::Right);
        assert_eq!(s.agent_pos(), 1);
        assert_eq!(s.hidden_cell(2), HiddenCell::Stone);
        assert_eq!(s.index_id(2), stone_id);
    }

    #[test]
    fn push_into_blocked_cell_fails() {
        let mut s = state("1|3|-1|1|00|03|19");
        s.apply_action(Action::Right);
        assert_eq!(s.agent_pos(), 0);
        assert_eq!(s.hidden_cell(1), HiddenCell::Stone);
    }

    #[test]
    fn pushed_object_falls_when_unsupported() {
        // row 0: agent, stone, empty; row 1: brick, brick, empty
        let mut s = state("2|3|-1|1|00|03|01|18|18|01");
        s.apply_action(Action::Right);
        // the stone was pushed over a hole and becomes falling
        assert_eq!(s.hidden_cell(2), HiddenCell::StoneFalling);
    }

    #[test]
    fn stone_falls_and_lands() {
        // stone above empty above brick, agent parked aside
        let mut s = state("3|2|-1|1|03|00|01|18|18|18");
        s.apply_action(Action::Noop);
        assert_eq!(s.hidden_cell(0), HiddenCell::Empty);
        assert_eq!(s.hidden_cell(2), HiddenCell::StoneFalling);
        s.apply_action(Action::Noop);
        assert_eq!(s.hidden_cell(2), HiddenCell::Stone);
    }

    #[test]
    fn falling_preserves_identity() {
        let mut s = state("3|2|-1|1|03|00|01|18|18|18");
        let id = s.index_id(0);
        assert!(id.is_some());
        s.apply_action(Action::Noop);
        assert_eq!(s.index_id(2), id);
        assert_eq!(s.index_id(0), None);
    }

    #[test]
    fn stone_rolls_off_rounded_support() {
        // stone on stone with open space to the right
        // row 0: agent, stone, empty; row 1: brick, stone, empty;
        // row 2: brick, brick, brick
        let mut s = state("3|3|-1|1|00|03|01|18|03|01|18|18|18");
        s.apply_action(Action::Noop);
        // top stone rolled right and is now falling at index 2
        assert_eq!(s.hidden_cell(1), HiddenCell::Empty);
        assert_eq!(s.hidden_cell(2), HiddenCell::StoneFalling);
    }

    #[test]
    fn stone_crushes_agent() {
        // stone directly above agent, gap below agent is solid
        let mut s = state("3|2|-1|1|03|01|01|01|00|18");
        // stone starts falling into the empty cell above the agent
        s.apply_action(Action::Noop);
        assert_eq!(s.hidden_cell(2), HiddenCell::StoneFalling);
        // next tick it lands on the agent and detonates it
        s.apply_action(Action::Noop);
        assert_eq!(s.agent_pos(), AGENT_POS_DIE);
        assert!(s.is_terminal());
        assert!(!s.is_solution());
        assert!(s.reward_signal().contains(RewardSignal::AGENT_DIES));
    }

    #[test]
    fn stone_cracks_nut_into_diamond() {
        // stone above empty above nut on brick
        let mut s = state("4|2|-1|1|03|00|01|01|39|01|18|18");
        let nut_id = s.index_id(4);
        s.apply_action(Action::Noop);
        // stone now rests on the nut
        assert_eq!(s.hidden_cell(2), HiddenCell::StoneFalling);
        s.apply_action(Action::Noop);
        assert_eq!(s.hidden_cell(4), HiddenCell::Diamond);
        assert!(s.reward_signal().contains(RewardSignal::NUT_TO_DIAMOND));
        // the diamond is a fresh object
        assert!(s.index_id(4).is_some());
        assert_ne!(s.index_id(4), nut_id);
    }

    #[test]
    fn bomb_explodes_when_it_lands() {
        // bomb above empty above the agent, dirt all around
        let mut s = state("3|3|-1|1|02|41|02|02|01|02|02|00|02");
        s.apply_action(Action::Noop);
        // falling bomb moved down one
        assert_eq!(s.hidden_cell(4), HiddenCell::BombFalling);
        s.apply_action(Action::Noop);
        // blocked by the agent below, it detonates in place and the
        // chain reaches the agent
        assert!(s.hidden_cell(4).is_explosion());
        assert_eq!(s.agent_pos(), AGENT_POS_DIE);
    }

    #[test]
    fn exit_opens_after_enough_gems_and_scores_remaining_budget() {
        // agent, diamond, closed exit with a 10-step budget
        let mut s = state("1|3|10|1|00|05|07");
        s.apply_action(Action::Right);
        assert_eq!(s.gems_collected(), 1);
        // the exit cell opened during the same scan
        assert_eq!(s.hidden_cell(2), HiddenCell::ExitOpen);
        s.apply_action(Action::Right);
        assert!(s.is_terminal());
        assert!(s.is_solution());
        assert!(s.reward_signal().contains(RewardSignal::WALK_THROUGH_EXIT));
        assert_eq!(s.last_reward(), 8);
        assert_eq!(s.hidden_cell(2), HiddenCell::AgentInExit);
    }

    #[test]
    fn key_opens_all_matching_gates() {
        // agent, red key, red gate closed, red gate closed
        let mut s = state("1|4|-1|1|00|29|27|27");
        s.apply_action(Action::Right);
        assert!(s.reward_signal().contains(RewardSignal::COLLECT_KEY));
        assert!(s.reward_signal().contains(RewardSignal::COLLECT_KEY_RED));
        assert_eq!(s.hidden_cell(2), HiddenCell::GateRedOpen);
        assert_eq!(s.hidden_cell(3), HiddenCell::GateRedOpen);
    }

    #[test]
    fn agent_steps_through_open_gate() {
        // agent, open red gate, empty
        let mut s = state("1|3|-1|1|00|28|01");
        s.apply_action(Action::Right);
        assert_eq!(s.agent_pos(), 2);
        assert_eq!(s.hidden_cell(0), HiddenCell::Empty);
        assert_eq!(s.hidden_cell(1), HiddenCell::GateRedOpen);
        assert_eq!(s.hidden_cell(2), HiddenCell::Agent);
        assert!(s.reward_signal().contains(RewardSignal::WALK_THROUGH_GATE));
        assert!(s.reward_signal().contains(RewardSignal::WALK_THROUGH_GATE_RED));
    }

    #[test]
    fn gate_blocked_beyond_is_noop() {
        // agent, open red gate, steel wall
        let mut s = state("1|3|-1|1|00|28|19");
        s.apply_action(Action::Right);
        assert_eq!(s.agent_pos(), 0);
        assert!(s.reward_signal().is_empty());
    }

    #[test]
    fn firefly_rotates_left_and_roams() {
        // firefly heading up in the corner of an open 3x3 room, agent
        // in the opposite corner
        let mut s = state("3|3|-1|1|10|01|01|01|01|01|01|01|00");
        s.apply_action(Action::Noop);
        // rotate-left of up is left; left of index 0 is out of bounds,
        // forward (up) also out, so it turned right in place
        assert_eq!(s.hidden_cell(0), HiddenCell::FireflyRight);
    }

    #[test]
    fn firefly_explodes_next_to_agent() {
        // firefly directly left of agent in dirt pocket
        let mut s = state("1|3|-1|1|10|00|02");
        s.apply_action(Action::Noop);
        assert!(s.hidden_cell(0).is_explosion());
        assert_eq!(s.agent_pos(), AGENT_POS_DIE);
        assert!(s.is_terminal());
    }

    #[test]
    fn butterfly_explodes_into_diamonds() {
        // butterfly beside agent, surrounded by dirt
        let mut s = state("3|3|-1|1|02|02|02|14|00|02|02|02|02");
        s.apply_action(Action::Noop);
        // the butterfly cell bursts into a diamond-flavoured explosion
        assert_eq!(s.hidden_cell(3), HiddenCell::ExplosionDiamond);
        // one further tick settles the markers into diamonds
        s.apply_action(Action::Noop);
        assert_eq!(s.hidden_cell(3), HiddenCell::Diamond);
        assert!(s.index_id(3).is_some());
    }

    #[test]
    fn explosion_markers_settle_next_tick() {
        let mut s = state("1|3|-1|1|10|00|02");
        s.apply_action(Action::Noop);
        let markers = s.indices_of(HiddenCell::ExplosionEmpty);
        assert!(!markers.is_empty());
        s.apply_action(Action::Noop);
        assert!(s.indices_of(HiddenCell::ExplosionEmpty).is_empty());
        for index in markers {
            assert_eq!(s.hidden_cell(index), HiddenCell::Empty);
        }
    }

    #[test]
    fn step_budget_floors_at_zero() {
        let mut s = state("1|2|2|1|00|01");
        assert_eq!(s.steps_remaining(), 2);
        s.apply_action(Action::Noop);
        s.apply_action(Action::Noop);
        assert!(s.is_terminal());
        s.apply_action(Action::Noop);
        assert_eq!(s.steps_remaining(), 0);
    }

    #[test]
    fn unlimited_budget_never_terminates_on_time() {
        let mut s = state("1|2|-1|1|00|01");
        for _ in 0..100 {
            s.apply_action(Action::Noop);
        }
        assert!(!s.is_terminal());
        assert_eq!(s.steps_remaining(), -1);
    }

    #[test]
    fn simple_walk_returns_home_with_no_signals() {
        let mut s = state("3|3|-1|1|01|01|01|01|00|01|01|01|01");
        let start = s.agent_pos();
        s.apply_action(Action::Up);
        assert_eq!(s.agent_pos(), 1);
        assert!(s.reward_signal().is_empty());
        s.apply_action(Action::Down);
        assert_eq!(s.agent_pos(), start);
        assert!(s.reward_signal().is_empty());
    }
}

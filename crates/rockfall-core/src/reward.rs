//! Event bit-field accumulated across a tick.
//!
//! Each notable in-game event sets one bit in a [`RewardSignal`]. The
//! field is cleared at the start of every tick and accumulates the
//! events raised while that tick's update pass runs, independent of
//! the numeric reward value.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bit-field of in-game events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RewardSignal(pub u64);

impl RewardSignal {
    /// No events.
    pub const EMPTY: RewardSignal = RewardSignal(0);
    /// The agent was destroyed.
    pub const AGENT_DIES: RewardSignal = RewardSignal(1 << 0);
    /// A diamond was collected.
    pub const COLLECT_DIAMOND: RewardSignal = RewardSignal(1 << 1);
    /// The agent walked through the open exit.
    pub const WALK_THROUGH_EXIT: RewardSignal = RewardSignal(1 << 2);
    /// A nut was cracked into a diamond.
    pub const NUT_TO_DIAMOND: RewardSignal = RewardSignal(1 << 3);
    /// A key of any colour was collected.
    pub const COLLECT_KEY: RewardSignal = RewardSignal(1 << 4);
    /// The red key was collected.
    pub const COLLECT_KEY_RED: RewardSignal = RewardSignal(1 << 5);
    /// The blue key was collected.
    pub const COLLECT_KEY_BLUE: RewardSignal = RewardSignal(1 << 6);
    /// The green key was collected.
    pub const COLLECT_KEY_GREEN: RewardSignal = RewardSignal(1 << 7);
    /// The yellow key was collected.
    pub const COLLECT_KEY_YELLOW: RewardSignal = RewardSignal(1 << 8);
    /// An open gate of any colour was walked through.
    pub const WALK_THROUGH_GATE: RewardSignal = RewardSignal(1 << 9);
    /// The red gate was walked through.
    pub const WALK_THROUGH_GATE_RED: RewardSignal = RewardSignal(1 << 10);
    /// The blue gate was walked through.
    pub const WALK_THROUGH_GATE_BLUE: RewardSignal = RewardSignal(1 << 11);
    /// The green gate was walked through.
    pub const WALK_THROUGH_GATE_GREEN: RewardSignal = RewardSignal(1 << 12);
    /// The yellow gate was walked through.
    pub const WALK_THROUGH_GATE_YELLOW: RewardSignal = RewardSignal(1 << 13);

    /// Raw bits.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// True if no event bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Set every bit of `other`.
    pub fn insert(&mut self, other: RewardSignal) {
        self.0 |= other.0;
    }

    /// True if every bit of `other` is set.
    pub const fn contains(self, other: RewardSignal) -> bool {
        self.0 & other.0 == other.0
    }

    /// Clear all bits.
    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

impl BitOr for RewardSignal {
    type Output = RewardSignal;

    fn bitor(self, rhs: RewardSignal) -> RewardSignal {
        RewardSignal(self.0 | rhs.0)
    }
}

impl BitOrAssign for RewardSignal {
    fn bitor_assign(&mut self, rhs: RewardSignal) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for RewardSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#016b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_bits_are_distinct() {
        let all = [
            RewardSignal::AGENT_DIES,
            RewardSignal::COLLECT_DIAMOND,
            RewardSignal::WALK_THROUGH_EXIT,
            RewardSignal::NUT_TO_DIAMOND,
            RewardSignal::COLLECT_KEY,
            RewardSignal::COLLECT_KEY_RED,
            RewardSignal::COLLECT_KEY_BLUE,
            RewardSignal::COLLECT_KEY_GREEN,
            RewardSignal::COLLECT_KEY_YELLOW,
            RewardSignal::WALK_THROUGH_GATE,
            RewardSignal::WALK_THROUGH_GATE_RED,
            RewardSignal::WALK_THROUGH_GATE_BLUE,
            RewardSignal::WALK_THROUGH_GATE_GREEN,
            RewardSignal::WALK_THROUGH_GATE_YELLOW,
        ];
        let mut acc = RewardSignal::EMPTY;
        for bit in all {
            assert_eq!(bit.bits().count_ones(), 1);
            assert!(!acc.contains(bit));
            acc |= bit;
        }
        assert_eq!(acc.bits(), (1 << 14) - 1);
    }

    #[test]
    fn insert_accumulates_and_clear_resets() {
        let mut signal = RewardSignal::EMPTY;
        assert!(signal.is_empty());
        signal.insert(RewardSignal::COLLECT_DIAMOND);
        signal.insert(RewardSignal::COLLECT_KEY | RewardSignal::COLLECT_KEY_RED);
        assert!(signal.contains(RewardSignal::COLLECT_DIAMOND));
        assert!(signal.contains(RewardSignal::COLLECT_KEY_RED));
        assert!(!signal.contains(RewardSignal::AGENT_DIES));
        signal.clear();
        assert!(signal.is_empty());
    }
}

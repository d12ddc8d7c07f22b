//! Agent actions and neighbour-addressing directions.
//!
//! An [`Action`] is what the external controller supplies each tick
//! (no-op plus the four cardinal moves). A [`Direction`] extends the
//! action set with the four diagonals, which the engine needs for roll
//! checks and the 8-neighbourhood explosion pass. The numeric codes of
//! the first five directions coincide with the action codes so an
//! action converts to a direction without a lookup.

use smallvec::SmallVec;

/// Number of distinct agent actions.
pub const NUM_ACTIONS: usize = 5;

/// Number of distinct interaction directions (none + 4 cardinal + 4 diagonal).
pub const NUM_DIRECTIONS: usize = 9;

/// One discrete agent action.
///
/// All five actions are always legal; resolution of blocked moves is a
/// no-op rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Stand still.
    Noop = 0,
    /// Move one cell up (row − 1).
    Up = 1,
    /// Move one cell right (col + 1).
    Right = 2,
    /// Move one cell down (row + 1).
    Down = 3,
    /// Move one cell left (col − 1).
    Left = 4,
}

/// All actions, in code order.
pub const ALL_ACTIONS: [Action; NUM_ACTIONS] = [
    Action::Noop,
    Action::Up,
    Action::Right,
    Action::Down,
    Action::Left,
];

/// A direction of interaction between a cell and one of its neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// The cell itself.
    Noop = 0,
    /// Row − 1.
    Up = 1,
    /// Col + 1.
    Right = 2,
    /// Row + 1.
    Down = 3,
    /// Col − 1.
    Left = 4,
    /// Row − 1, col + 1.
    UpRight = 5,
    /// Row + 1, col + 1.
    DownRight = 6,
    /// Row + 1, col − 1.
    DownLeft = 7,
    /// Row − 1, col − 1.
    UpLeft = 8,
}

/// The four cardinal directions, in action-code order.
pub const CARDINALS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

/// All nine directions, in code order.
pub const ALL_DIRECTIONS: [Direction; NUM_DIRECTIONS] = [
    Direction::Noop,
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::UpRight,
    Direction::DownRight,
    Direction::DownLeft,
    Direction::UpLeft,
];

impl From<Action> for Direction {
    fn from(action: Action) -> Self {
        match action {
            Action::Noop => Direction::Noop,
            Action::Up => Direction::Up,
            Action::Right => Direction::Right,
            Action::Down => Direction::Down,
            Action::Left => Direction::Left,
        }
    }
}

impl Direction {
    /// `(row_offset, col_offset)` for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Noop => (0, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// True for [`Direction::Left`] and [`Direction::Right`].
    ///
    /// Pushing is only possible along the horizontal axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Cardinal heading rotated 90° counter-clockwise.
    ///
    /// [`Direction::Noop`] maps to itself; diagonals are not headings
    /// and also map to themselves.
    pub fn rotate_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
            other => other,
        }
    }

    /// Cardinal heading rotated 90° clockwise.
    pub fn rotate_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            other => other,
        }
    }
}

/// A small list of directions, inline up to the full cardinal set.
///
/// Used for collecting the open directions around a roaming creature
/// without a heap allocation.
pub type DirectionList = SmallVec<[Direction; 4]>;

//! Core types for the Rockfall puzzle simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the element catalog (every kind of board content together with its
//! behavioural properties), the direction/action types used for agent
//! control and neighbour addressing, and the reward-signal bit-field
//! raised by notable in-game events.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod element;
pub mod reward;

pub use direction::{
    Action, Direction, DirectionList, ALL_ACTIONS, ALL_DIRECTIONS, CARDINALS, NUM_ACTIONS, NUM_DIRECTIONS,
};
pub use element::{
    reward_signal_for, Element, HiddenCell, Properties, VisibleCell, CATALOG, NUM_HIDDEN, NUM_VISIBLE,
};
pub use reward::RewardSignal;

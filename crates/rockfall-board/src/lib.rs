//! Grid storage and spatial addressing for the Rockfall simulator.
//!
//! This crate owns the mutable board (a flat row-major grid of hidden
//! cell codes with an incrementally maintained Zobrist hash), the
//! boundary-padded bounds table used for branch-free neighbour checks,
//! the Zobrist constant table, and the textual board codec used to
//! construct boards from level strings.
//!
//! The board is storage only: the two mutation primitives
//! ([`Board::set_item`] and [`Board::move_item`]) keep the hash and the
//! updated-this-tick flags consistent, and everything above them
//! (update rules, identity tracking) lives in the engine crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod bounds;
pub mod error;
pub mod parse;
pub mod zobrist;

pub use board::{Board, AGENT_POS_DIE, AGENT_POS_EXIT};
pub use bounds::BoundsTable;
pub use error::ParseError;
pub use parse::{board_to_str, parse_board_str};
pub use zobrist::ZobristTable;

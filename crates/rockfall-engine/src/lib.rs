//! Deterministic simulation engine: game state, the per-tick update
//! pass, and byte serialization.
//!
//! The entry point is [`GameState`], constructed from a [`GameConfig`]
//! and advanced one tick at a time with
//! [`apply_action`](GameState::apply_action). States clone cheaply
//! (shared lookup tables live behind an `Arc`) and compare, hash and
//! serialize deterministically, which is what tree search and replay
//! tooling need.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod rng;
mod serialize;
mod shared;
mod state;
mod update;

pub use config::{
    GameConfig, DEFAULT_BLOB_CHANCE, DEFAULT_BLOB_MAX_PERCENTAGE, DEFAULT_BOARD_STR, DEFAULT_MAGIC_WALL_STEPS,
};
pub use serialize::{SerializeError, FORMAT_VERSION, MAGIC};
pub use state::GameState;

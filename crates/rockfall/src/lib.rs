//! Rockfall: a deterministic falling-rocks puzzle simulator for
//! reinforcement learning and tree search.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Rockfall sub-crates. For most users, adding `rockfall` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rockfall::prelude::*;
//!
//! // The stock 22x40 level with default tuning.
//! let config = GameConfig::default();
//! let mut state = GameState::new(&config).unwrap();
//!
//! // Every action is always legal; blocked moves are no-ops.
//! state.apply_action(Action::Down);
//! assert!(!state.is_terminal());
//!
//! // One-hot observation tensor over the visible cell types.
//! assert_eq!(state.observation_shape(), [34, 22, 40]);
//!
//! // States serialize to bytes and restore bit-for-bit.
//! let bytes = state.serialize();
//! let restored = GameState::deserialize(&bytes, &config).unwrap();
//! assert_eq!(restored.hash(), state.hash());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rockfall-core` | Cell catalog, directions, actions, reward signal bits |
//! | [`board`] | `rockfall-board` | Grid, board-string codec, Zobrist and bounds tables |
//! | [`obs`] | `rockfall-obs` | Observation tensor extraction |
//! | [`engine`] | `rockfall-engine` | Game state, per-tick update pass, serialization |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell catalog, directions, actions, and reward signal bits
/// (`rockfall-core`).
pub use rockfall_core as types;

/// Grid storage, the board-string codec, and the Zobrist and bounds
/// lookup tables (`rockfall-board`).
pub use rockfall_board as board;

/// Observation tensor extraction (`rockfall-obs`).
pub use rockfall_obs as obs;

/// Game state, the per-tick update pass, and byte serialization
/// (`rockfall-engine`).
pub use rockfall_engine as engine;

/// Common imports for typical Rockfall usage.
///
/// ```rust
/// use rockfall::prelude::*;
/// ```
pub mod prelude {
    // Cells, actions, rewards
    pub use rockfall_core::{Action, Direction, HiddenCell, Properties, RewardSignal, VisibleCell};

    // Board codec and terminal sentinels
    pub use rockfall_board::{board_to_str, parse_board_str, ParseError, AGENT_POS_DIE, AGENT_POS_EXIT};

    // Engine
    pub use rockfall_engine::{GameConfig, GameState, SerializeError};
}

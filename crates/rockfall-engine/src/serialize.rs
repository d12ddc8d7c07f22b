//! Byte serialization of game states.
//!
//! The encoding is little-endian and versioned: a four-byte magic, a
//! format version, the board scalars and raw grid codes, then the local
//! episode state including the identity table. Shared tables are not
//! encoded; decoding rebuilds them from the configuration, so a state
//! only round-trips against the configuration that produced it.

use std::error::Error;
use std::fmt;
use std::io::{self, Read, Write};
use std::sync::Arc;

use indexmap::IndexMap;
use rockfall_board::{Board, AGENT_POS_DIE, AGENT_POS_EXIT};
use rockfall_core::{HiddenCell, RewardSignal};

use crate::config::GameConfig;
use crate::shared::SharedState;
use crate::state::{GameState, LocalState};

/// Magic bytes opening every encoded state.
pub const MAGIC: [u8; 4] = *b"RKFL";

/// Current encoding version.
pub const FORMAT_VERSION: u8 = 1;

/// Failures while decoding an encoded state.
#[derive(Debug)]
pub enum SerializeError {
    /// The underlying reader or writer failed, including truncation.
    Io(io::Error),
    /// The buffer does not open with the magic bytes.
    BadMagic,
    /// The encoding version is not supported by this build.
    UnsupportedVersion {
        /// Version byte found in the buffer.
        found: u8,
    },
    /// A grid byte is not a valid cell code.
    InvalidCellCode {
        /// The offending code.
        code: i8,
        /// Flat grid index it was read for.
        index: usize,
    },
    /// A decoded field is out of range for the board it describes.
    Malformed {
        /// Human-readable description of the inconsistency.
        detail: &'static str,
    },
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::Io(err) => write!(f, "i/o error: {err}"),
            SerializeError::BadMagic => write!(f, "missing state magic bytes"),
            SerializeError::UnsupportedVersion { found } => {
                write!(f, "unsupported state format version {found} (expected {FORMAT_VERSION})")
            }
            SerializeError::InvalidCellCode { code, index } => {
                write!(f, "invalid cell code {code} at grid index {index}")
            }
            SerializeError::Malformed { detail } => write!(f, "malformed state: {detail}"),
        }
    }
}

impl Error for SerializeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SerializeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SerializeError {
    fn from(err: io::Error) -> Self {
        SerializeError::Io(err)
    }
}

// Agent position sentinels are encoded at the top of the u64 range so
// the width is platform-independent.
const POS_EXIT: u64 = u64::MAX;
const POS_DIE: u64 = u64::MAX - 1;

fn encode_pos(pos: usize) -> u64 {
    if pos == AGENT_POS_EXIT {
        POS_EXIT
    } else if pos == AGENT_POS_DIE {
        POS_DIE
    } else {
        pos as u64
    }
}

fn decode_pos(raw: u64, cells: usize) -> Result<usize, SerializeError> {
    match raw {
        POS_EXIT => Ok(AGENT_POS_EXIT),
        POS_DIE => Ok(AGENT_POS_DIE),
        _ => {
            let pos = usize::try_from(raw).map_err(|_| SerializeError::Malformed {
                detail: "agent position exceeds the address space",
            })?;
            if pos >= cells {
                return Err(SerializeError::Malformed {
                    detail: "agent position beyond the grid",
                });
            }
            Ok(pos)
        }
    }
}

fn read_u8(reader: &mut impl Read) -> io::Result<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_u32(reader: &mut impl Read) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_i32(reader: &mut impl Read) -> io::Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

fn read_u64(reader: &mut impl Read) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

impl GameState {
    /// Encode this state as bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(64 + self.board.cells());
        // Writes to a Vec cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writer.write_all(&MAGIC)?;
        writer.write_all(&[FORMAT_VERSION])?;

        writer.write_all(&(self.board.rows as u32).to_le_bytes())?;
        writer.write_all(&(self.board.cols as u32).to_le_bytes())?;
        writer.write_all(&[self.board.gems_required])?;
        writer.write_all(&self.board.max_steps.to_le_bytes())?;
        writer.write_all(&encode_pos(self.board.agent_pos).to_le_bytes())?;
        writer.write_all(&encode_pos(self.board.agent_idx).to_le_bytes())?;
        for cell in self.board.grid() {
            writer.write_all(&[cell.code() as u8])?;
        }

        let local = &self.local;
        writer.write_all(&local.rng_state.to_le_bytes())?;
        writer.write_all(&local.reward_signal.bits().to_le_bytes())?;
        writer.write_all(&local.steps_remaining.to_le_bytes())?;
        writer.write_all(&local.gems_collected.to_le_bytes())?;
        writer.write_all(&local.current_reward.to_le_bytes())?;
        writer.write_all(&local.magic_wall_steps.to_le_bytes())?;
        writer.write_all(&[local.magic_active as u8])?;
        writer.write_all(&(local.blob_size as u64).to_le_bytes())?;
        writer.write_all(&[local.blob_enclosed as u8])?;
        let swap = local.blob_swap.map_or(-1, HiddenCell::code);
        writer.write_all(&[swap as u8])?;
        writer.write_all(&local.id_counter.to_le_bytes())?;
        writer.write_all(&(local.ids.len() as u32).to_le_bytes())?;
        for (index, id) in &local.ids {
            writer.write_all(&(*index as u64).to_le_bytes())?;
            writer.write_all(&id.to_le_bytes())?;
        }
        Ok(())
    }
}

/// Decode a state encoded by [`GameState::serialize`], rebuilding the
/// shared tables from `config`.
pub(crate) fn decode(bytes: &[u8], config: &GameConfig) -> Result<GameState, SerializeError> {
    let reader = &mut &bytes[..];

    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(SerializeError::BadMagic);
    }
    let version = read_u8(reader)?;
    if version != FORMAT_VERSION {
        return Err(SerializeError::UnsupportedVersion { found: version });
    }

    let rows = read_u32(reader)? as usize;
    let cols = read_u32(reader)? as usize;
    if rows == 0 || cols == 0 {
        return Err(SerializeError::Malformed {
            detail: "empty board dimensions",
        });
    }
    let gems_required = read_u8(reader)?;
    let max_steps = read_i32(reader)?;
    let cells = rows * cols;
    let agent_pos = decode_pos(read_u64(reader)?, cells)?;
    let agent_idx = decode_pos(read_u64(reader)?, cells)?;

    let mut board = Board::filled(rows, cols, gems_required, max_steps, HiddenCell::Empty);
    board.agent_pos = agent_pos;
    board.agent_idx = agent_idx;
    let mut codes = vec![0u8; cells];
    reader.read_exact(&mut codes)?;
    for (index, raw) in codes.into_iter().enumerate() {
        let code = raw as i8;
        let cell = HiddenCell::from_code(code).ok_or(SerializeError::InvalidCellCode { code, index })?;
        board.place(index, cell);
    }

    let rng_state = read_u64(reader)?;
    let reward_signal = RewardSignal(read_u64(reader)?);
    let steps_remaining = read_i32(reader)?;
    let gems_collected = read_u32(reader)?;
    let current_reward = read_u64(reader)?;
    let magic_wall_steps = read_i32(reader)?;
    let magic_active = read_u8(reader)? != 0;
    let blob_size = usize::try_from(read_u64(reader)?).map_err(|_| SerializeError::Malformed {
        detail: "blob size exceeds the address space",
    })?;
    let blob_enclosed = read_u8(reader)? != 0;
    let blob_swap = match read_u8(reader)? as i8 {
        -1 => None,
        code => Some(HiddenCell::from_code(code).ok_or(SerializeError::Malformed {
            detail: "invalid blob swap code",
        })?),
    };
    let id_counter = read_u32(reader)?;
    let id_count = read_u32(reader)? as usize;
    let mut ids = IndexMap::with_capacity(id_count);
    for _ in 0..id_count {
        let index = usize::try_from(read_u64(reader)?).map_err(|_| SerializeError::Malformed {
            detail: "identity index exceeds the address space",
        })?;
        if index >= cells {
            return Err(SerializeError::Malformed {
                detail: "identity index beyond the grid",
            });
        }
        let id = read_u32(reader)?;
        ids.insert(index, id);
    }

    let shared = Arc::new(SharedState::new(config, rows, cols));
    board.recompute_hash(&shared.zobrist);
    let local = LocalState {
        rng_state,
        reward_signal,
        steps_remaining,
        gems_collected,
        current_reward,
        magic_wall_steps,
        magic_active,
        blob_size,
        blob_enclosed,
        blob_swap,
        id_counter,
        ids,
    };
    Ok(GameState {
        shared,
        board,
        local,
    })
}

//! Textual board codec.
//!
//! A board string is `rows|cols|max_steps|gems_required|` followed by
//! `rows × cols` cell codes, all `|`-separated, codes zero-padded to
//! two digits. [`parse_board_str`] and [`board_to_str`] are mutual
//! inverses over well-formed boards.

use rockfall_core::HiddenCell;

use crate::board::Board;
use crate::error::ParseError;

fn parse_usize(field: &'static str, value: &str) -> Result<usize, ParseError> {
    value.trim().parse().map_err(|_| ParseError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

/// Parse a board string.
///
/// Fails on a short header, non-integer header fields, a cell count
/// that does not match the declared shape, unknown cell codes, and
/// boards without exactly one agent.
pub fn parse_board_str(board_str: &str) -> Result<Board, ParseError> {
    let segments: Vec<&str> = board_str.split('|').collect();
    if segments.len() < 4 {
        return Err(ParseError::MissingHeader {
            found: segments.len(),
        });
    }

    let rows = parse_usize("rows", segments[0])?;
    let cols = parse_usize("cols", segments[1])?;
    let max_steps: i32 = segments[2].trim().parse().map_err(|_| ParseError::InvalidInteger {
        field: "max_steps",
        value: segments[2].to_string(),
    })?;
    let gems_required: u8 = segments[3].trim().parse().map_err(|_| ParseError::InvalidInteger {
        field: "gems_required",
        value: segments[3].to_string(),
    })?;

    let cell_segments = &segments[4..];
    if cell_segments.len() != rows * cols {
        return Err(ParseError::WrongCellCount {
            expected: rows * cols,
            found: cell_segments.len(),
        });
    }

    let mut board = Board::filled(rows, cols, gems_required, max_steps, HiddenCell::Empty);
    let mut agent_count = 0usize;
    for (index, segment) in cell_segments.iter().enumerate() {
        let code: i8 = segment.trim().parse().map_err(|_| ParseError::InvalidCellCode {
            value: segment.to_string(),
            index,
        })?;
        let cell = HiddenCell::from_code(code).ok_or_else(|| ParseError::InvalidCellCode {
            value: segment.to_string(),
            index,
        })?;
        board.place(index, cell);
        if cell == HiddenCell::Agent || cell == HiddenCell::AgentInExit {
            board.agent_pos = index;
            board.agent_idx = index;
            agent_count += 1;
        }
    }

    match agent_count {
        0 => Err(ParseError::NoAgent),
        1 => Ok(board),
        count => Err(ParseError::MultipleAgents { count }),
    }
}

/// Encode a board back into its string form.
pub fn board_to_str(board: &Board) -> String {
    let mut out = format!(
        "{}|{}|{}|{}",
        board.rows, board.cols, board.max_steps, board.gems_required
    );
    for cell in board.grid() {
        out.push('|');
        out.push_str(&format!("{:02}", cell.code()));
    }
    out
}

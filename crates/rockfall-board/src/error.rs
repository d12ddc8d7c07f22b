//! Error type for board construction.

use std::fmt;

/// Errors raised while parsing a board string.
#[derive(Debug)]
pub enum ParseError {
    /// The string has fewer than the four `|`-separated header fields.
    MissingHeader {
        /// Number of fields found.
        found: usize,
    },
    /// A header field is not a valid integer.
    InvalidInteger {
        /// Which header field failed.
        field: &'static str,
        /// The offending text.
        value: String,
    },
    /// The number of cell codes does not match `rows * cols`.
    WrongCellCount {
        /// Expected cell count.
        expected: usize,
        /// Cell codes actually present.
        found: usize,
    },
    /// A cell code is not a valid hidden cell.
    InvalidCellCode {
        /// The offending text.
        value: String,
        /// Flat index of the bad cell.
        index: usize,
    },
    /// No agent cell is present on the board.
    NoAgent,
    /// More than one agent cell is present on the board.
    MultipleAgents {
        /// Number of agent cells found.
        count: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader { found } => {
                write!(f, "expected 4 header fields, found {found}")
            }
            Self::InvalidInteger { field, value } => {
                write!(f, "invalid integer for {field}: {value:?}")
            }
            Self::WrongCellCount { expected, found } => {
                write!(f, "expected {expected} cell codes, found {found}")
            }
            Self::InvalidCellCode { value, index } => {
                write!(f, "invalid cell code {value:?} at index {index}")
            }
            Self::NoAgent => write!(f, "board contains no agent cell"),
            Self::MultipleAgents { count } => {
                write!(f, "board contains {count} agent cells, expected exactly one")
            }
        }
    }
}

impl std::error::Error for ParseError {}

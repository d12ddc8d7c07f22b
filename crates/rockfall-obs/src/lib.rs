//! Observation tensor extraction for the Rockfall simulator.
//!
//! Observations are flat `f32` one-hot tensors over the visible cell
//! types, laid out channel-major: channel `c` occupies the contiguous
//! range `[c * rows * cols, (c + 1) * rows * cols)`. A filtered variant
//! restricts and reorders the channels for controllers that only care
//! about a subset of element kinds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use rockfall_board::Board;
use rockfall_core::{VisibleCell, NUM_VISIBLE};

/// `[channels, rows, cols]` of the full observation tensor.
pub fn observation_shape(board: &Board) -> [usize; 3] {
    [NUM_VISIBLE, board.rows, board.cols]
}

/// One-hot observation over all visible cell types.
///
/// Exactly one channel is hot per cell.
pub fn observation(board: &Board) -> Vec<f32> {
    let channel_len = board.cells();
    let mut obs = vec![0.0f32; NUM_VISIBLE * channel_len];
    for index in 0..channel_len {
        let channel = board.item(index).visible().code() as usize;
        obs[channel * channel_len + index] = 1.0;
    }
    obs
}

/// `[channels, rows, cols]` of a filtered observation tensor.
pub fn observation_shape_filtered(board: &Board, filter: &[VisibleCell]) -> [usize; 3] {
    [filter.len(), board.rows, board.cols]
}

/// One-hot observation restricted to `filter`, with channels in filter
/// order.
///
/// Cells whose visible type is absent from the filter contribute to no
/// channel.
pub fn observation_filtered(board: &Board, filter: &[VisibleCell]) -> Vec<f32> {
    let channel_len = board.cells();
    let mut obs = vec![0.0f32; filter.len() * channel_len];
    for index in 0..channel_len {
        let visible = board.item(index).visible();
        if let Some(channel) = filter.iter().position(|f| *f == visible) {
            obs[channel * channel_len + index] = 1.0;
        }
    }
    obs
}

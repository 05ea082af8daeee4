//! Per-invocation update request: which piece of how many is being produced.

use serde::{Deserialize, Serialize};

/// What the downstream consumer asked the pipeline to produce.
///
/// A request with no piece means the pipeline is not partitioned; the filter
/// then falls back to the process rank.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Requested piece index, or `None` when unspecified.
    pub piece: Option<u32>,
    /// Total number of pieces the dataset is split into (at least 1).
    /// A requested piece must be below this count.
    pub number_of_pieces: u32,
}

impl Default for UpdateRequest {
    fn default() -> Self {
        Self::unspecified()
    }
}

impl UpdateRequest {
    /// A request that does not name a piece.
    pub fn unspecified() -> Self {
        Self {
            piece: None,
            number_of_pieces: 1,
        }
    }

    /// A request for piece `piece` of `number_of_pieces`.
    pub fn piece(piece: u32, number_of_pieces: u32) -> Self {
        Self {
            piece: Some(piece),
            number_of_pieces: number_of_pieces.max(1),
        }
    }

    /// Build from the signed integers a pipeline traditionally passes around.
    ///
    /// A negative piece is the "not partitioned" sentinel; non-positive piece
    /// counts become 1.
    pub fn from_raw(piece: i32, number_of_pieces: i32) -> Self {
        Self {
            piece: u32::try_from(piece).ok(),
            number_of_pieces: u32::try_from(number_of_pieces).unwrap_or(0).max(1),
        }
    }
}

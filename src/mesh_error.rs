//! PieceScalarsError: Unified error type for mesh-piece-scalars public APIs
//!
//! Every fallible operation in the crate reports through this enum so hosts can
//! abort a pipeline request without the library panicking.

use crate::data::dataset::FieldAssociation;
use thiserror::Error;

/// Unified error type for piece labelling operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PieceScalarsError {
    /// A synthesized array does not match the element count of its target.
    #[error(
        "scalar array length mismatch on {association} data: expected {expected} tuples, found {found}"
    )]
    ScalarLengthMismatch {
        association: FieldAssociation,
        expected: usize,
        found: usize,
    },
    /// A piece index was negative where a concrete piece was required.
    #[error("piece index must be non-negative, got {0}")]
    NegativePiece(i64),
    /// A piece index or process rank is too large to store as a label.
    #[error("piece {0} exceeds the largest storable piece label")]
    PieceOutOfRange(u64),
    /// A requested piece is not below the request's piece count.
    #[error("piece {piece} requested, but the dataset has only {pieces} pieces")]
    PieceBeyondCount { piece: u32, pieces: u32 },
    /// A simulated rank is not below its group size.
    #[error("rank {rank} out of range for group of {size}")]
    RankOutOfRange { rank: usize, size: usize },
    /// A rank-driven run was given a different number of ranks and pieces.
    #[error("{ranks} communicator handles supplied for {pieces} pieces")]
    GroupSizeMismatch { ranks: usize, pieces: usize },
    /// No array with this name exists in the field data.
    #[error("no array named `{name}` in field data")]
    MissingArray { name: String },
    /// A cell references a point index past the end of the point list.
    #[error("cell {cell} references point {point}, but the piece has only {num_points} points")]
    CellConnectivityOutOfRange {
        cell: usize,
        point: usize,
        num_points: usize,
    },
    /// An attached array does not have one tuple per element.
    #[error(
        "{association} array `{name}` has {found} tuples but the piece has {expected} elements"
    )]
    FieldDataLengthMismatch {
        association: FieldAssociation,
        name: String,
        expected: usize,
        found: usize,
    },
    /// Active scalars name an array that is no longer present.
    #[error("active scalars `{name}` do not name a stored array")]
    ActiveScalarsMissing { name: String },
}

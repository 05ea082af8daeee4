//! Resolve which piece an invocation is labelling.

use std::fmt;

use crate::algs::communicator::Communicator;
use crate::mesh_error::PieceScalarsError;
use crate::pipeline::request::UpdateRequest;

/// Non-negative label for one piece of a partitioned dataset.
///
/// Always in `0..=PieceId::MAX`, so it can be stored as an `i32` label.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PieceId(u32);

impl PieceId {
    /// The label used when nothing else is known.
    pub const SERIAL: PieceId = PieceId(0);
    /// Largest representable piece.
    pub const MAX: u32 = i32::MAX as u32;

    /// Creates a piece id, rejecting values that do not fit an `i32` label.
    pub fn new(piece: u32) -> Result<Self, PieceScalarsError> {
        if piece > Self::MAX {
            return Err(PieceScalarsError::PieceOutOfRange(u64::from(piece)));
        }
        Ok(PieceId(piece))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The piece as stored in integer label arrays.
    #[inline]
    pub const fn as_label(self) -> i32 {
        self.0 as i32
    }
}

impl TryFrom<i64> for PieceId {
    type Error = PieceScalarsError;

    fn try_from(piece: i64) -> Result<Self, Self::Error> {
        if piece < 0 {
            return Err(PieceScalarsError::NegativePiece(piece));
        }
        let piece =
            u32::try_from(piece).map_err(|_| PieceScalarsError::PieceOutOfRange(piece as u64))?;
        PieceId::new(piece)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Picks the piece label for this request.
///
/// An explicit piece number wins; otherwise the communicator's rank is used;
/// with neither the piece is [`PieceId::SERIAL`]. An explicit piece must be
/// below the request's piece count.
pub fn resolve_piece<C>(
    request: &UpdateRequest,
    comm: Option<&C>,
) -> Result<PieceId, PieceScalarsError>
where
    C: Communicator + ?Sized,
{
    if let Some(piece) = request.piece {
        let id = PieceId::new(piece)?;
        if piece >= request.number_of_pieces {
            return Err(PieceScalarsError::PieceBeyondCount {
                piece,
                pieces: request.number_of_pieces,
            });
        }
        log::debug!(
            "labelling piece {piece} of {} from update request",
            request.number_of_pieces
        );
        return Ok(id);
    }
    match comm {
        Some(comm) => {
            let rank = comm.rank();
            let piece = u32::try_from(rank)
                .map_err(|_| PieceScalarsError::PieceOutOfRange(rank as u64))
                .and_then(PieceId::new)?;
            log::debug!("labelling piece {piece} from process rank {rank}");
            Ok(piece)
        }
        None => {
            log::debug!("no piece requested and no communicator; labelling piece 0");
            Ok(PieceId::SERIAL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::communicator::{NoComm, RayonComm};

    #[test]
    fn explicit_piece_wins_over_rank() {
        let comm = RayonComm::new(7, 8).unwrap();
        let piece = resolve_piece(&UpdateRequest::piece(3, 8), Some(&comm)).unwrap();
        assert_eq!(piece, PieceId::new(3).unwrap());
    }

    #[test]
    fn rank_used_without_piece() {
        let comm = RayonComm::new(7, 8).unwrap();
        let piece = resolve_piece(&UpdateRequest::unspecified(), Some(&comm)).unwrap();
        assert_eq!(piece.get(), 7);
    }

    #[test]
    fn serial_fallback_is_zero() {
        let piece = resolve_piece::<NoComm>(&UpdateRequest::unspecified(), None).unwrap();
        assert_eq!(piece, PieceId::SERIAL);
        let piece = resolve_piece(&UpdateRequest::from_raw(-1, 1), Some(&NoComm)).unwrap();
        assert_eq!(piece, PieceId::SERIAL);
    }

    #[test]
    fn negative_piece_is_rejected() {
        assert_eq!(
            PieceId::try_from(-2i64),
            Err(PieceScalarsError::NegativePiece(-2))
        );
        assert_eq!(PieceId::try_from(5i64), PieceId::new(5));
    }

    #[test]
    fn oversized_piece_is_rejected() {
        let req = UpdateRequest::piece(u32::MAX, 1);
        assert_eq!(
            resolve_piece::<NoComm>(&req, None),
            Err(PieceScalarsError::PieceOutOfRange(u64::from(u32::MAX)))
        );
        assert_eq!(PieceId::new(PieceId::MAX).unwrap().as_label(), i32::MAX);
    }

    #[test]
    fn piece_must_be_below_piece_count() {
        assert_eq!(
            resolve_piece::<NoComm>(&UpdateRequest::piece(4, 4), None),
            Err(PieceScalarsError::PieceBeyondCount { piece: 4, pieces: 4 })
        );
        // a zero count is clamped to one piece
        assert_eq!(
            resolve_piece::<NoComm>(&UpdateRequest::from_raw(1, 0), None),
            Err(PieceScalarsError::PieceBeyondCount { piece: 1, pieces: 1 })
        );
        assert_eq!(
            resolve_piece::<NoComm>(&UpdateRequest::piece(3, 4), None),
            PieceId::new(3)
        );
    }
}

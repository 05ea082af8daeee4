//! Drive the labelling filter over every piece of a partitioned dataset.
//!
//! A streaming pipeline executes the same filter once per piece. These
//! helpers do that for pieces held in memory: [`label_pieces`] names each
//! piece explicitly in its update request, [`label_pieces_with_comm`] leaves
//! the request unspecified so each piece takes the rank of its communicator.
//! With the `rayon` feature the pieces are labelled in parallel; the filter
//! configuration is only read while they run.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::algs::communicator::Communicator;
use crate::data::dataset::DataSet;
use crate::filter::identity::PieceId;
use crate::filter::process_id_scalars::ProcessIdScalars;
use crate::mesh_error::PieceScalarsError;
use crate::pipeline::request::UpdateRequest;

fn piece_request(index: usize, count: usize) -> Result<UpdateRequest, PieceScalarsError> {
    let piece = u32::try_from(index).map_err(|_| PieceScalarsError::PieceOutOfRange(index as u64))?;
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    Ok(UpdateRequest::piece(piece, count))
}

/// Label piece `i` of `pieces` with id `i`.
pub fn label_pieces<D>(
    filter: &ProcessIdScalars,
    pieces: &mut [D],
) -> Result<Vec<PieceId>, PieceScalarsError>
where
    D: DataSet + Send,
{
    let count = pieces.len();
    log::debug!("labelling {count} pieces by index");
    let run = |(i, piece): (usize, &mut D)| -> Result<PieceId, PieceScalarsError> {
        let request = piece_request(i, count)?;
        filter.execute_serial(&request, piece)
    };

    #[cfg(feature = "rayon")]
    let ids: Result<Vec<PieceId>, PieceScalarsError> =
        pieces.par_iter_mut().enumerate().map(run).collect();
    #[cfg(not(feature = "rayon"))]
    let ids: Result<Vec<PieceId>, PieceScalarsError> =
        pieces.iter_mut().enumerate().map(run).collect();
    ids
}

/// Label each piece with the rank of the communicator at the same position.
///
/// `comms` and `pieces` must have the same length.
pub fn label_pieces_with_comm<D, C>(
    filter: &ProcessIdScalars,
    comms: &[C],
    pieces: &mut [D],
) -> Result<Vec<PieceId>, PieceScalarsError>
where
    D: DataSet + Send,
    C: Communicator,
{
    if comms.len() != pieces.len() {
        return Err(PieceScalarsError::GroupSizeMismatch {
            ranks: comms.len(),
            pieces: pieces.len(),
        });
    }
    log::debug!("labelling {} pieces by rank", pieces.len());
    let request = UpdateRequest::unspecified();
    let run = |(comm, piece): (&C, &mut D)| filter.execute(&request, Some(comm), piece);

    #[cfg(feature = "rayon")]
    let ids: Result<Vec<PieceId>, PieceScalarsError> =
        comms.par_iter().zip(pieces.par_iter_mut()).map(run).collect();
    #[cfg(not(feature = "rayon"))]
    let ids: Result<Vec<PieceId>, PieceScalarsError> =
        comms.iter().zip(pieces.iter_mut()).map(run).collect();
    ids
}

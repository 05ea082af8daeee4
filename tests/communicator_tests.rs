use mesh_piece_scalars::algs::communicator::{Communicator, NoComm, RayonComm};
use mesh_piece_scalars::mesh_error::PieceScalarsError;

#[test]
fn no_comm_reports_single_rank() {
    let comm = NoComm;
    assert!(comm.is_no_comm());
    assert_eq!(comm.rank(), 0);
    assert_eq!(comm.size(), 1);
}

#[test]
fn rayon_comm_reports_its_slot() {
    let c = RayonComm::new(2, 5).unwrap();
    assert_eq!((c.rank(), c.size()), (2, 5));
    assert_eq!(RayonComm::group(5)[2], c);
}

#[test]
fn rayon_comm_out_of_range_rank_is_an_error() {
    let err = RayonComm::new(5, 5).unwrap_err();
    assert_eq!(err, PieceScalarsError::RankOutOfRange { rank: 5, size: 5 });
    assert_eq!(err.to_string(), "rank 5 out of range for group of 5");
}

#[test]
fn empty_group_has_no_handles() {
    assert!(RayonComm::group(0).is_empty());
}

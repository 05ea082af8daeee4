//! Process-group service: "which rank am I, and how many ranks are there".
//!
//! Labelling only ever reads the local rank, so the façade is limited to the
//! two metadata queries. Backends: [`NoComm`] for serial runs, [`RayonComm`]
//! for ranks simulated inside one process, and `MpiComm` (feature
//! `mpi-support`) for real MPI jobs.

use crate::mesh_error::PieceScalarsError;

/// Rank/size queries on the current process group.
pub trait Communicator: Send + Sync + 'static {
    /// Rank of the calling worker, in `0..size()`.
    fn rank(&self) -> usize;
    /// Number of workers in the group.
    fn size(&self) -> usize;

    /// True for the serial stand-in.
    fn is_no_comm(&self) -> bool {
        false
    }
}

/// Compile-time serial comm: a group of one.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoComm;

impl Communicator for NoComm {
    fn rank(&self) -> usize {
        0
    }

    fn size(&self) -> usize {
        1
    }

    fn is_no_comm(&self) -> bool {
        true
    }
}

/// One of `size` ranks simulated within the current process.
///
/// A plain rank/size pair with no thread pool behind it; it is always
/// available. The `rayon` feature only decides whether the streaming driver
/// runs these ranks in parallel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RayonComm {
    rank: usize,
    size: usize,
}

impl RayonComm {
    /// Creates the handle for `rank` out of `size` simulated ranks.
    ///
    /// Returns [`PieceScalarsError::RankOutOfRange`] if `rank >= size`.
    pub fn new(rank: usize, size: usize) -> Result<Self, PieceScalarsError> {
        if rank >= size {
            return Err(PieceScalarsError::RankOutOfRange { rank, size });
        }
        Ok(Self { rank, size })
    }

    /// Handles for every rank of a group of `size`, in rank order.
    pub fn group(size: usize) -> Vec<Self> {
        (0..size).map(|rank| Self { rank, size }).collect()
    }
}

impl Communicator for RayonComm {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }
}

#[cfg(feature = "mpi-support")]
mod mpi_backend {
    use super::Communicator;
    use mpi::topology::Communicator as MpiCommunicator;

    /// Rank and size of an MPI communicator, captured at construction.
    ///
    /// The MPI universe must outlive any collective work, but rank and size
    /// never change for a communicator, so the handle itself only keeps the
    /// two numbers.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct MpiComm {
        rank: usize,
        size: usize,
    }

    impl MpiComm {
        /// Wrap the world communicator of an initialized universe.
        pub fn new(universe: &mpi::environment::Universe) -> Self {
            Self::from_communicator(&universe.world())
        }

        /// Capture rank/size from any MPI communicator.
        pub fn from_communicator<C: MpiCommunicator>(comm: &C) -> Self {
            Self {
                rank: comm.rank() as usize,
                size: comm.size() as usize,
            }
        }
    }

    impl Communicator for MpiComm {
        fn rank(&self) -> usize {
            self.rank
        }

        fn size(&self) -> usize {
            self.size
        }
    }
}

#[cfg(feature = "mpi-support")]
pub use mpi_backend::MpiComm;

//! The process-id scalars filter: label a piece by its owner.
//!
//! One invocation resolves the piece id, builds an array sized to the
//! configured association and attaches it. Typical use:
//!
//! ```
//! use mesh_piece_scalars::prelude::*;
//!
//! let mut piece = UnstructuredPiece::from_points(vec![[0.0; 3]; 10]);
//! let filter = ProcessIdScalars::default();
//! filter.execute_serial(&UpdateRequest::piece(2, 4), &mut piece)?;
//! assert_eq!(piece.point_data().get_typed::<i32>("ProcessId"), Some(&[2; 10][..]));
//! # Ok::<(), mesh_piece_scalars::mesh_error::PieceScalarsError>(())
//! ```

use crate::algs::communicator::Communicator;
use crate::data::dataset::DataSet;
use crate::filter::attach::attach_scalars;
use crate::filter::config::ProcessIdScalarsConfig;
use crate::filter::identity::{PieceId, resolve_piece};
use crate::filter::synthesize::synthesize;
use crate::mesh_error::PieceScalarsError;
use crate::pipeline::request::UpdateRequest;

/// Labels the points or cells of a piece with its piece id or a per-piece
/// random value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProcessIdScalars {
    config: ProcessIdScalarsConfig,
}

impl ProcessIdScalars {
    /// Creates a filter with the given configuration.
    pub fn new(config: ProcessIdScalarsConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &ProcessIdScalarsConfig {
        &self.config
    }

    /// Mutable access between runs.
    pub fn config_mut(&mut self) -> &mut ProcessIdScalarsConfig {
        &mut self.config
    }

    /// Replaces the configuration used by later runs.
    pub fn set_config(&mut self, config: ProcessIdScalarsConfig) {
        self.config = config;
    }

    /// Run one invocation on `dataset` and return the piece it was labelled with.
    ///
    /// `comm` is consulted only when `request` does not name a piece. On error
    /// nothing has been attached.
    pub fn execute<D, C>(
        &self,
        request: &UpdateRequest,
        comm: Option<&C>,
        dataset: &mut D,
    ) -> Result<PieceId, PieceScalarsError>
    where
        D: DataSet + ?Sized,
        C: Communicator + ?Sized,
    {
        let piece = resolve_piece(request, comm)?;
        let association = self.config.scalar_mode.association();
        let len = dataset.number_of_elements(association);
        let array = synthesize(piece, len, self.config.random_mode);
        attach_scalars(dataset, association, &self.config.array_name, array)?;
        crate::debug_invariants!(
            crate::debug_invariants::DebugInvariants::validate_invariants(
                dataset.field_data(association)
            ),
            "ProcessIdScalars::execute"
        );
        Ok(piece)
    }

    /// [`execute`](Self::execute) without a process group.
    pub fn execute_serial<D>(
        &self,
        request: &UpdateRequest,
        dataset: &mut D,
    ) -> Result<PieceId, PieceScalarsError>
    where
        D: DataSet + ?Sized,
    {
        self.execute::<D, crate::algs::communicator::NoComm>(request, None, dataset)
    }
}

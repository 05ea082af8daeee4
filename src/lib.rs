#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-piece-scalars
//!
//! mesh-piece-scalars labels the pieces of a partitioned mesh so a renderer can
//! colour them by owner. Each piece of a distributed or streamed dataset gets
//! one scalar array, attached to its points or its cells, holding either the
//! piece index (or process rank) or a single reproducible random value in
//! `[0, 1)` drawn for that piece.
//!
//! ## Features
//! - Piece resolution from the pipeline's update request, falling back to the
//!   process rank, and finally to piece 0 for serial runs
//! - Integer process-id labels or per-piece random labels
//! - Attachment that replaces any previous label array and leaves every other
//!   array untouched
//! - Pluggable process groups (serial, in-process simulated ranks, MPI)
//! - Streaming driver labelling every piece of a set, in parallel with `rayon`
//!
//! ## Determinism
//!
//! Random labels use a `SmallRng` seeded from the piece id and a fixed base, so
//! re-running the same piece reproduces the same value.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! mesh-piece-scalars = "0.1"
//! # Optional features:
//! # features = ["mpi-support", "rayon"]
//! ```

pub mod algs;
pub mod data;
pub mod debug_invariants;
pub mod filter;
pub mod mesh_error;
pub mod pipeline;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::communicator::{Communicator, NoComm, RayonComm};
    #[cfg(feature = "mpi-support")]
    pub use crate::algs::communicator::MpiComm;
    pub use crate::algs::streaming::{label_pieces, label_pieces_with_comm};
    pub use crate::data::data_array::{ArrayScalar, DataArray, ScalarType};
    pub use crate::data::dataset::{CellType, DataSet, FieldAssociation, UnstructuredPiece};
    pub use crate::data::field_data::FieldData;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::filter::{
        PROCESS_ID_ARRAY, PieceId, ProcessIdScalars, ProcessIdScalarsConfig, ScalarMode,
    };
    pub use crate::mesh_error::PieceScalarsError;
    pub use crate::pipeline::request::UpdateRequest;
}

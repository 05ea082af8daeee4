//! Data module: typed arrays, field data and the host dataset interface
#![warn(missing_docs)]

pub mod data_array;
pub mod dataset;
pub mod field_data;

pub use crate::debug_invariants::DebugInvariants;

pub use data_array::{ArrayScalar, DataArray, ScalarType};
pub use dataset::{Cell, CellType, DataSet, FieldAssociation, UnstructuredPiece};
pub use field_data::FieldData;

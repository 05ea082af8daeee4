//! Re-export public algorithms.

pub mod communicator;
pub mod streaming;

pub use streaming::{label_pieces, label_pieces_with_comm};

//! Piece labelling: resolve the piece, synthesize its scalars, attach them.

pub mod attach;
pub mod config;
pub mod identity;
pub mod process_id_scalars;
pub mod synthesize;

pub use attach::attach_scalars;
pub use config::{PROCESS_ID_ARRAY, ProcessIdScalarsConfig, ScalarMode};
pub use identity::{PieceId, resolve_piece};
pub use process_id_scalars::ProcessIdScalars;
pub use synthesize::{make_process_id_scalars, make_random_scalars, piece_random_value, synthesize};

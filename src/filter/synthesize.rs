//! Build the per-piece label array.
//!
//! Every element of a piece gets the same value: the piece index in
//! deterministic mode, or one seeded draw in `[0, 1)` in random mode, so a
//! renderer paints each piece in a single colour.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::data::data_array::DataArray;
use crate::filter::identity::PieceId;

/// Base mixed into every random-mode seed so labels are stable across runs.
pub const RANDOM_SEED_BASE: u64 = 0x5EED_0F_C0_10_25;

/// The single random value assigned to `piece`, in `[0, 1)`.
pub fn piece_random_value(piece: PieceId) -> f32 {
    let mut rng = SmallRng::seed_from_u64(RANDOM_SEED_BASE ^ u64::from(piece.get()));
    rng.gen_range(0.0f32..1.0)
}

/// Integer array of `len` copies of the piece index.
pub fn make_process_id_scalars(piece: PieceId, len: usize) -> DataArray {
    let value = piece.as_label();
    log::trace!("process-id scalars: {len} x {value}");
    DataArray::filled(value, len)
}

/// Float array of `len` copies of the piece's random value.
pub fn make_random_scalars(piece: PieceId, len: usize) -> DataArray {
    let value = piece_random_value(piece);
    log::trace!("random scalars for piece {piece}: {len} x {value}");
    DataArray::filled(value, len)
}

/// Dispatch on the configured mode.
pub fn synthesize(piece: PieceId, len: usize, random_mode: bool) -> DataArray {
    if random_mode {
        make_random_scalars(piece, len)
    } else {
        make_process_id_scalars(piece, len)
    }
}

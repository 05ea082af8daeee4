//! Invariant checks for field data and dataset pieces.
//!
//! Attached arrays must carry exactly one tuple per element of their
//! association, and an active-scalars designation must name a stored array.

use crate::data::dataset::FieldAssociation;
use crate::mesh_error::PieceScalarsError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), PieceScalarsError>;
}

/// Checks that the array `name` carries one tuple per element.
pub fn check_tuple_count(
    association: FieldAssociation,
    name: &str,
    expected: usize,
    found: usize,
) -> Result<(), PieceScalarsError> {
    if expected == found {
        Ok(())
    } else {
        Err(PieceScalarsError::FieldDataLengthMismatch {
            association,
            name: name.to_string(),
            expected,
            found,
        })
    }
}

/// Run a fallible check and panic on error when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

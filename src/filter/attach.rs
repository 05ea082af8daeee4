//! Attach a label array to a dataset piece.

use crate::data::data_array::DataArray;
use crate::data::dataset::{DataSet, FieldAssociation};
use crate::mesh_error::PieceScalarsError;

/// Store `array` under `name` in the `association` field data and make it the
/// active scalars there.
///
/// The length is checked before anything is written: on mismatch the dataset
/// is left untouched. Returns the array previously stored under `name`.
pub fn attach_scalars<D>(
    dataset: &mut D,
    association: FieldAssociation,
    name: &str,
    array: DataArray,
) -> Result<Option<DataArray>, PieceScalarsError>
where
    D: DataSet + ?Sized,
{
    let expected = dataset.number_of_elements(association);
    if array.len() != expected {
        return Err(PieceScalarsError::ScalarLengthMismatch {
            association,
            expected,
            found: array.len(),
        });
    }

    let field_data = dataset.field_data_mut(association);
    let scalar_type = array.scalar_type();
    let previous = field_data.set_array(name, array);
    if let Some(prev) = &previous {
        if prev.scalar_type() != scalar_type {
            log::warn!(
                "replacing {association} array `{name}` of type {} with type {}",
                prev.scalar_type().as_str(),
                scalar_type.as_str()
            );
        }
    }
    field_data.set_active_scalars(name)?;
    log::debug!("attached {expected} {association} scalars as `{name}`");
    Ok(previous)
}

//! Named array collections attached to the points or cells of a piece.

use std::collections::BTreeMap;

use crate::data::data_array::{ArrayScalar, DataArray};
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::PieceScalarsError;

/// Named arrays for one association, plus the active-scalars designation.
///
/// Names are unique: inserting under an existing name replaces the stored
/// array in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldData {
    arrays: BTreeMap<String, DataArray>,
    active_scalars: Option<String>,
}

impl FieldData {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `array` under `name`, returning the array it replaced, if any.
    pub fn set_array(&mut self, name: impl Into<String>, array: DataArray) -> Option<DataArray> {
        self.arrays.insert(name.into(), array)
    }

    /// Retrieve an array by name.
    pub fn get(&self, name: &str) -> Option<&DataArray> {
        self.arrays.get(name)
    }

    /// Retrieve typed values by name.
    pub fn get_typed<T: ArrayScalar>(&self, name: &str) -> Option<&[T]> {
        self.arrays.get(name).and_then(T::unwrap)
    }

    /// Return true if an array named `name` is stored.
    pub fn contains(&self, name: &str) -> bool {
        self.arrays.contains_key(name)
    }

    /// Remove an array; clears the active designation if it pointed here.
    pub fn remove(&mut self, name: &str) -> Option<DataArray> {
        let removed = self.arrays.remove(name);
        if removed.is_some() && self.active_scalars.as_deref() == Some(name) {
            self.active_scalars = None;
        }
        removed
    }

    /// Mark a stored array as the default scalars for colouring.
    pub fn set_active_scalars(&mut self, name: &str) -> Result<(), PieceScalarsError> {
        if !self.arrays.contains_key(name) {
            return Err(PieceScalarsError::MissingArray {
                name: name.to_string(),
            });
        }
        self.active_scalars = Some(name.to_string());
        Ok(())
    }

    /// Name of the active scalars, if designated.
    pub fn active_scalars_name(&self) -> Option<&str> {
        self.active_scalars.as_deref()
    }

    /// Name and array of the active scalars, if designated.
    pub fn active_scalars(&self) -> Option<(&str, &DataArray)> {
        let name = self.active_scalars.as_deref()?;
        self.arrays.get(name).map(|array| (name, array))
    }

    /// Array names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arrays.keys().map(String::as_str)
    }

    /// Iterate over all named arrays.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataArray)> {
        self.arrays.iter().map(|(name, array)| (name.as_str(), array))
    }

    /// Number of stored arrays.
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Return true if no arrays are stored.
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }
}

impl DebugInvariants for FieldData {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "FieldData");
    }

    fn validate_invariants(&self) -> Result<(), PieceScalarsError> {
        match self.active_scalars_name() {
            Some(name) if !self.contains(name) => Err(PieceScalarsError::ActiveScalarsMissing {
                name: name.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_array_replaces_same_name() {
        let mut fd = FieldData::new();
        assert!(fd.set_array("a", DataArray::I32(vec![1, 2])).is_none());
        let prev = fd.set_array("a", DataArray::F32(vec![0.5, 0.5]));
        assert_eq!(prev, Some(DataArray::I32(vec![1, 2])));
        assert_eq!(fd.len(), 1);
        assert_eq!(fd.get_typed::<f32>("a"), Some(&[0.5, 0.5][..]));
    }

    #[test]
    fn active_scalars_require_stored_array() {
        let mut fd = FieldData::new();
        let err = fd.set_active_scalars("missing").unwrap_err();
        assert_eq!(
            err,
            PieceScalarsError::MissingArray {
                name: "missing".into()
            }
        );
        fd.set_array("temp", DataArray::F64(vec![1.0]));
        fd.set_active_scalars("temp").unwrap();
        assert_eq!(fd.active_scalars_name(), Some("temp"));
        fd.remove("temp");
        assert!(fd.active_scalars().is_none());
        assert!(fd.active_scalars_name().is_none());
    }
}

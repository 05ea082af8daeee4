//! Typed scalar arrays with a runtime type tag.
//!
//! Field data on a piece may hold integer and floating arrays side by side;
//! [`DataArray`] keeps each one homogeneous while letting collections store
//! them under a single type.

use serde::{Deserialize, Serialize};

/// Scalar type tag for data arrays.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
}

impl ScalarType {
    /// Returns a stable string label for the scalar type.
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
        }
    }
}

/// One homogeneous, single-component array of per-element values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DataArray {
    /// 32-bit signed integer values.
    I32(Vec<i32>),
    /// 64-bit signed integer values.
    I64(Vec<i64>),
    /// 32-bit float values.
    F32(Vec<f32>),
    /// 64-bit float values.
    F64(Vec<f64>),
}

impl DataArray {
    /// Scalar type tag for this array.
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            DataArray::I32(_) => ScalarType::I32,
            DataArray::I64(_) => ScalarType::I64,
            DataArray::F32(_) => ScalarType::F32,
            DataArray::F64(_) => ScalarType::F64,
        }
    }

    /// Number of tuples in the array.
    pub fn len(&self) -> usize {
        match self {
            DataArray::I32(data) => data.len(),
            DataArray::I64(data) => data.len(),
            DataArray::F32(data) => data.len(),
            DataArray::F64(data) => data.len(),
        }
    }

    /// Return true if the array holds no tuples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the values if the array stores `T`.
    pub fn as_slice<T: ArrayScalar>(&self) -> Option<&[T]> {
        T::unwrap(self)
    }

    /// Build an array of `len` copies of `value`.
    pub fn filled<T: ArrayScalar>(value: T, len: usize) -> Self {
        T::wrap(vec![value; len])
    }
}

/// Maps concrete scalar types onto [`DataArray`] variants.
pub trait ArrayScalar: Copy + Sized + 'static {
    /// Scalar type tag for this concrete type.
    const SCALAR_TYPE: ScalarType;

    /// Wrap typed values into a tagged array.
    fn wrap(values: Vec<Self>) -> DataArray;
    /// Borrow typed values if the tag matches.
    fn unwrap(array: &DataArray) -> Option<&[Self]>;
}

macro_rules! impl_array_scalar {
    ($ty:ty, $variant:ident) => {
        impl ArrayScalar for $ty {
            const SCALAR_TYPE: ScalarType = ScalarType::$variant;

            fn wrap(values: Vec<Self>) -> DataArray {
                DataArray::$variant(values)
            }

            fn unwrap(array: &DataArray) -> Option<&[Self]> {
                if let DataArray::$variant(values) = array {
                    Some(values)
                } else {
                    None
                }
            }
        }
    };
}

impl_array_scalar!(i32, I32);
impl_array_scalar!(i64, I64);
impl_array_scalar!(f32, F32);
impl_array_scalar!(f64, F64);

use crate::value::{Array, Map, Value, ValueKind};
use serde::{Serialize, de::DeserializeOwned};
use smol_str::SmolStr;
use std::collections::BTreeMap;

/// Error used for converting from and into [`Value`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[non_exhaustive]
pub enum ValueError {
    /// The value wasn't the kind we expected.
    #[error("kind error: expected {expected:?} but found {found:?}")]
    WrongType {
        /// The expected kind.
        expected: ValueKind,
        /// The actual kind.
        found: ValueKind,
    },
    /// Serde bridge failure while crossing the boundary.
    #[error("serde bridge error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Convert a typed entity into its scripting-boundary [`Value`].
///
/// This is the single isolated step between the typed interior and the
/// loosely-typed exterior: everything the serde annotations on the entity
/// declare (key names, skipped options, integer-backed enums) defines the
/// shape script code sees.
pub fn to_value<T: Serialize>(entity: &T) -> Result<Value, ValueError> {
    Ok(Value::from(serde_json::to_value(entity)?))
}

/// Reconstruct a typed entity from a scripting-boundary [`Value`].
///
/// Missing optional keys fall back to the entity's serde defaults; missing
/// required keys surface as [`ValueError::Serde`].
pub fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T, ValueError> {
    Ok(serde_json::from_value(serde_json::Value::from(
        value.clone(),
    ))?)
}

macro_rules! derive_into_value {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(v.into())
            }
        }
    };
}

macro_rules! derive_into_value_int {
    ($ty:ty) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::Integer(v as i64)
            }
        }
    };
}

macro_rules! derive_try_from_value {
    ($variant:ident, $kind:ident, $ty:ty) => {
        impl TryFrom<Value> for $ty {
            type Error = ValueError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$variant(v) => Ok(v.into()),
                    other => Err(ValueError::WrongType {
                        expected: ValueKind::$kind,
                        found: other.kind(),
                    }),
                }
            }
        }

        impl TryFrom<Value> for Option<$ty> {
            type Error = ValueError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::Null => Ok(None),
                    Value::$variant(v) => Ok(Some(v.into())),
                    other => Err(ValueError::WrongType {
                        expected: ValueKind::$kind,
                        found: other.kind(),
                    }),
                }
            }
        }
    };
}

derive_into_value!(Boolean, bool);
derive_into_value_int!(i8);
derive_into_value_int!(i16);
derive_into_value_int!(i32);
derive_into_value_int!(i64);
derive_into_value_int!(u8);
derive_into_value_int!(u16);
derive_into_value_int!(u32);
derive_into_value!(Double, f64);
derive_into_value!(Double, f32);
derive_into_value!(String, SmolStr);
derive_into_value!(String, String);
derive_into_value!(Map, Map);
derive_into_value!(Array, Array);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(SmolStr::from(s))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(Array(items.into_iter().map(Into::into).collect()))
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Array(items)
    }
}

impl From<BTreeMap<SmolStr, Value>> for Map {
    fn from(entries: BTreeMap<SmolStr, Value>) -> Self {
        Map(entries)
    }
}

derive_try_from_value!(Boolean, Boolean, bool);
derive_try_from_value!(Integer, Integer, i64);
derive_try_from_value!(String, String, SmolStr);
derive_try_from_value!(String, String, String);
derive_try_from_value!(Array, Array, Array);
derive_try_from_value!(Map, Map, Map);

impl TryFrom<Value> for f64 {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(i) => Ok(i as f64),
            Value::Double(d) => Ok(d),
            other => Err(ValueError::WrongType {
                expected: ValueKind::Double,
                found: other.kind(),
            }),
        }
    }
}

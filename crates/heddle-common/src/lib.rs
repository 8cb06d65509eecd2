//! Common types for the heddle scripting-boundary marshaling layer
//!
//! The centerpiece is [`value::Value`], the loosely-typed value model that
//! crosses into the scripting runtime: null, booleans, integers, doubles,
//! strings, arrays and string-keyed maps. Typed entities move across the
//! boundary in one isolated step via [`value::to_value`] and
//! [`value::from_value`].

#![warn(missing_docs)]

pub use smol_str;
pub use value::{Array, Map, Value, ValueError, ValueKind, from_value, to_value};

/// The scripting-boundary value model.
pub mod value;

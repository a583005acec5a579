//! Scalar values and their declared field types
//!
//! Only simple scalar types are profiled. Nullable fields deliver
//! `ScalarValue::Null` for missing observations; the declared type of a
//! nullable field unwraps to its base type before routing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Int32,
    Int64,
    Float32,
    Float64,
    Text,
    Boolean,
}

impl FieldType {
    /// All supported scalar types, in a fixed order
    pub const ALL: [FieldType; 6] = [
        FieldType::Int32,
        FieldType::Int64,
        FieldType::Float32,
        FieldType::Float64,
        FieldType::Text,
        FieldType::Boolean,
    ];

    /// Whether this type carries a numeric value
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldType::Int32 | FieldType::Int64 | FieldType::Float32 | FieldType::Float64
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Int32 => "int32",
            FieldType::Int64 => "int64",
            FieldType::Float32 => "float32",
            FieldType::Float64 => "float64",
            FieldType::Text => "text",
            FieldType::Boolean => "boolean",
        };
        write!(f, "{name}")
    }
}

/// One observation delivered by the host for a single field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    Null,
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Text(String),
    Boolean(bool),
}

impl ScalarValue {
    /// The runtime type of this value, `None` for null
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            ScalarValue::Null => None,
            ScalarValue::Int32(_) => Some(FieldType::Int32),
            ScalarValue::Int64(_) => Some(FieldType::Int64),
            ScalarValue::Float32(_) => Some(FieldType::Float32),
            ScalarValue::Float64(_) => Some(FieldType::Float64),
            ScalarValue::Text(_) => Some(FieldType::Text),
            ScalarValue::Boolean(_) => Some(FieldType::Boolean),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Numeric view of the value, `None` for null and non-numeric types
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Int32(v) => Some(f64::from(*v)),
            ScalarValue::Int64(v) => Some(*v as f64),
            ScalarValue::Float32(v) => Some(f64::from(*v)),
            ScalarValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether the runtime type matches a declared type
    ///
    /// Null matches any declared type: nullability is a property of the
    /// field declaration, not of the value's type.
    pub fn matches(&self, declared: FieldType) -> bool {
        match self.field_type() {
            None => true,
            Some(t) => t == declared,
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::Text(s.to_string())
    }
}

impl From<i64> for ScalarValue {
    fn from(v: i64) -> Self {
        ScalarValue::Int64(v)
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        ScalarValue::Float64(v)
    }
}

impl From<bool> for ScalarValue {
    fn from(v: bool) -> Self {
        ScalarValue::Boolean(v)
    }
}

//! Input field schema
//!
//! The host declares, per field, a name, a scalar type and whether the
//! field is nullable. Routing always works against the non-nullable base
//! type; nullability only tells the router to expect `ScalarValue::Null`
//! observations.

use crate::value::FieldType;
use serde::{Deserialize, Serialize};

/// Declaration of a single input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub field_type: FieldType,
    pub nullable: bool,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: false,
        }
    }

    pub fn nullable(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: true,
        }
    }
}

/// An ordered set of field declarations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    fields: Vec<FieldDecl>,
}

impl FieldSchema {
    pub fn new(fields: Vec<FieldDecl>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared base type of a field, nullability unwrapped
    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.field_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_unwraps_nullability() {
        let schema = FieldSchema::new(vec![
            FieldDecl::nullable("s", FieldType::Text),
            FieldDecl::new("n", FieldType::Int64),
        ]);
        assert_eq!(schema.field_type("s"), Some(FieldType::Text));
        assert_eq!(schema.field_type("n"), Some(FieldType::Int64));
        assert_eq!(schema.field_type("missing"), None);
        assert_eq!(schema.len(), 2);
    }
}

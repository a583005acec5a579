//! Shared types for the data-profiler workspace
//!
//! This crate provides the vocabulary the rest of the workspace builds
//! on: scalar values and their declared types, the input field schema,
//! the structured output model, the [`Collector`] contract, and the
//! unified error type.
//!
//! # Example
//!
//! ```rust
//! use profiler_core::{FieldDecl, FieldSchema, FieldType, ScalarValue};
//!
//! let schema = FieldSchema::new(vec![
//!     FieldDecl::nullable("price", FieldType::Float64),
//!     FieldDecl::nullable("label", FieldType::Text),
//! ]);
//!
//! let value = ScalarValue::Float64(9.99);
//! assert_eq!(schema.field_type("price"), Some(FieldType::Float64));
//! assert!(value.matches(schema.field_type("price").unwrap()));
//! ```

pub mod collector;
pub mod error;
pub mod output;
pub mod schema;
pub mod value;

pub use collector::{guard, Collector, CollectorKind};
pub use error::{Error, Result};
pub use output::{Block, BucketRecord, OutputField, StatType, StatValue};
pub use schema::{FieldDecl, FieldSchema};
pub use value::{FieldType, ScalarValue};

//! The streaming field-profiling engine
//!
//! Ties the workspace together: the built-in collectors (numeric,
//! categorical, boolean, histogram, distinct-count) and the
//! [`Profiler`] router that maps each field's declared type to its
//! applicable collectors and assembles one output record per field.
//!
//! The host delivers, per field, a finite sequence of scalar values and
//! an end-of-sequence signal; the engine never partitions or schedules
//! records itself.
//!
//! # Example
//!
//! ```rust
//! use profiler_core::{CollectorKind, FieldDecl, FieldSchema, FieldType, ScalarValue};
//! use profiler_engine::Profiler;
//!
//! let schema = FieldSchema::new(vec![FieldDecl::nullable("i", FieldType::Int64)]);
//! let mut profiler = Profiler::with_default_collectors(Some(schema)).unwrap();
//!
//! let record = profiler.aggregate_field(
//!     "i",
//!     vec![ScalarValue::Int64(3), ScalarValue::Int64(7), ScalarValue::Null],
//! );
//!
//! let stats = record.block(CollectorKind::Quantitative).unwrap();
//! assert_eq!(stats.long("count"), Some(3));
//! assert_eq!(stats.long("nulls"), Some(1));
//! assert_eq!(stats.double("mean"), Some(5.0));
//! ```

pub mod profiles;
pub mod record;
pub mod router;

pub use profiles::{default_collectors, Categorical, Histogram, Logical, Quantitative, Uniques};
pub use record::{BlockSchema, OutputRecord, OutputSchema};
pub use router::Profiler;

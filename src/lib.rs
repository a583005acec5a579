//! Single-pass, fixed-memory descriptive statistics over typed record fields
//!
//! The workspace splits the engine into focused crates, re-exported here
//! under one roof:
//!
//! - [`core`]: scalar values, field schemas, the collector contract and
//!   the shared error type
//! - [`stats`]: streaming central moments and quantile estimation
//! - [`histogram`]: the self-adjusting, decaying bucket histogram
//! - [`sketch`]: distinct-count estimation
//! - [`engine`]: the built-in collectors and the per-field router
//!
//! Most hosts only need the router:
//!
//! ```rust
//! use data_profiler::core::{CollectorKind, FieldDecl, FieldSchema, FieldType, ScalarValue};
//! use data_profiler::engine::Profiler;
//!
//! let schema = FieldSchema::new(vec![FieldDecl::nullable("age", FieldType::Int64)]);
//! let mut profiler = Profiler::with_default_collectors(Some(schema))?;
//!
//! let record = profiler.aggregate_field(
//!     "age",
//!     vec![ScalarValue::Int64(34), ScalarValue::Int64(58), ScalarValue::Null],
//! );
//! let stats = record.block(CollectorKind::Quantitative).unwrap();
//! assert_eq!(stats.long("nulls"), Some(1));
//! assert_eq!(stats.double("mean"), Some(46.0));
//! # Ok::<(), data_profiler::core::Error>(())
//! ```

pub use profiler_core as core;
pub use profiler_engine as engine;
pub use profiler_histogram as histogram;
pub use profiler_sketch as sketch;
pub use profiler_stats as stats;

pub use profiler_core::{Collector, CollectorKind, Error, Result};
pub use profiler_engine::{OutputRecord, OutputSchema, Profiler};

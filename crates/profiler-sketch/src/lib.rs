//! Approximate distinct counting for field profiling
//!
//! A HyperLogLog sketch per field estimates the number of distinct
//! values in constant memory with a bounded relative error. Values are
//! hashed with a stable canonical encoding so estimates are
//! deterministic across runs.
//!
//! # Example
//!
//! ```rust
//! use profiler_sketch::HyperLogLog;
//! use profiler_core::ScalarValue;
//!
//! let mut hll = HyperLogLog::default();
//! for name in ["a", "b", "c", "c"] {
//!     hll.add(&ScalarValue::Text(name.into()));
//! }
//! assert_eq!(hll.cardinality(), 3);
//! ```

pub mod hash;
pub mod hll;

pub use hash::{fnv1a, hash_scalar};
pub use hll::{HyperLogLog, DEFAULT_PRECISION};

//! Online numeric statistics for unbounded streams
//!
//! This crate provides the numeric half of the profiling engine: a
//! single-pass accumulator that maintains count, sum, min/max, central
//! moments up to kurtosis, geometric and quadratic means, and streaming
//! percentile estimates, all in memory that does not grow with the
//! stream.
//!
//! # Example
//!
//! ```rust
//! use profiler_stats::NumericAccumulator;
//!
//! let mut acc = NumericAccumulator::new();
//! for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     acc.add(v);
//! }
//!
//! assert_eq!(acc.count(), 8);
//! assert!((acc.mean() - 5.0).abs() < 1e-12);
//! assert!((acc.population_variance() - 4.0).abs() < 1e-12);
//! ```

pub mod accumulator;
pub mod moments;
pub mod quantile;

pub use accumulator::NumericAccumulator;
pub use moments::Moments;
pub use quantile::{QuantileSketch, DEFAULT_ERROR};

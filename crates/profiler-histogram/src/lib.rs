//! Adaptive, memory-bounded streaming histogram
//!
//! Summarizes an unbounded numeric stream with a fixed number of
//! contiguous buckets that follow the empirical density, with an
//! exponential-decay mechanism so that recent observations outweigh old
//! ones. Memory is O(num_buckets) regardless of stream length; each
//! update costs at most O(num_buckets).
//!
//! # Example
//!
//! ```rust
//! use profiler_histogram::{AdaptiveHistogram, HistogramConfig};
//!
//! let config = HistogramConfig::new(10, 5, 10).unwrap();
//! let mut hist = AdaptiveHistogram::new(config);
//! for i in 0..1_000 {
//!     hist.add((i % 100) as f64);
//! }
//!
//! let buckets = hist.snapshot();
//! assert!(buckets.len() <= 10);
//! assert_eq!(buckets[0].low, 0.0);
//! ```

pub mod adaptive;
pub mod config;

pub use adaptive::AdaptiveHistogram;
pub use config::{
    HistogramConfig, DEFAULT_HALF_LIFE, DEFAULT_INITIAL_POINTS_PER_BUCKET, DEFAULT_NUM_BUCKETS,
};

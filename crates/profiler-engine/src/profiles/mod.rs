//! The built-in collector set
//!
//! One module per statistic family. Each collector implements the
//! [`profiler_core::Collector`] contract and is wired to field types by
//! the router, never directly by the host.

pub mod categorical;
pub mod histogram;
pub mod logical;
pub mod quantitative;
pub mod uniques;

pub use categorical::Categorical;
pub use histogram::Histogram;
pub use logical::Logical;
pub use quantitative::Quantitative;
pub use uniques::Uniques;

use profiler_core::Collector;

/// The standard collector set, in its canonical registration order
pub fn default_collectors() -> Vec<Box<dyn Collector>> {
    vec![
        Box::new(Categorical::new()),
        Box::new(Logical::new()),
        Box::new(Quantitative::new()),
        Box::new(Uniques::new()),
        Box::new(Histogram::default()),
    ]
}

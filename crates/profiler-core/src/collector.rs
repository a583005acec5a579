//! The collector contract
//!
//! A collector accumulates one statistic family for one field's value
//! stream. The router decides which collectors a field's declared type
//! routes to; collectors themselves never error on input they do not
//! recognize, an unexpected runtime type is simply a no-op.

use crate::output::{Block, OutputField};
use crate::value::{FieldType, ScalarValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a collector's output block
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CollectorKind {
    /// Numeric descriptive statistics
    Quantitative,
    /// String-length statistics plus null/empty bookkeeping
    Categorical,
    /// Boolean true/false/unknown tallies
    Logical,
    /// Adaptive streaming histogram
    Histogram,
    /// Approximate distinct-value count
    Uniques,
}

impl CollectorKind {
    /// Block name used in output records and schemas
    pub fn name(&self) -> &'static str {
        match self {
            CollectorKind::Quantitative => "quantitative",
            CollectorKind::Categorical => "categorical",
            CollectorKind::Logical => "logical",
            CollectorKind::Histogram => "histogram",
            CollectorKind::Uniques => "uniques",
        }
    }
}

impl fmt::Display for CollectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert a NaN statistic to 0 before emission
///
/// Collectors that saw zero observations produce NaN for ratios like
/// mean or variance. Emitted output must stay NaN-free, so the guard
/// collapses those to 0. Consumers can distinguish a genuine 0 from an
/// empty stream via the accompanying count fields.
pub fn guard(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// One statistic family accumulated over a single field's stream
pub trait Collector {
    /// Which output block this collector produces
    fn kind(&self) -> CollectorKind;

    /// Declared field types this collector applies to
    fn applicable_types(&self) -> &'static [FieldType];

    /// Shape of the output block, available without any data
    fn output_fields(&self) -> Vec<OutputField>;

    /// Return to the zero state, observationally identical to a fresh
    /// instance with the same configuration
    fn reset(&mut self);

    /// Consume one observation
    fn update(&mut self, value: &ScalarValue);

    /// Emit the structured result block matching `output_fields`
    ///
    /// Returns `None` when the collector has nothing to report (e.g. a
    /// histogram that received no observations); the router then leaves
    /// the block absent in the output record.
    fn result(&self) -> Option<Block>;
}

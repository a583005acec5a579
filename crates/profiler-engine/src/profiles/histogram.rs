//! Adaptive histogram collector

use profiler_core::{
    Block, Collector, CollectorKind, FieldType, OutputField, ScalarValue, StatType, StatValue,
};
use profiler_histogram::{AdaptiveHistogram, HistogramConfig};

const APPLICABLE: &[FieldType] = &[
    FieldType::Int32,
    FieldType::Int64,
    FieldType::Float32,
    FieldType::Float64,
    FieldType::Text,
];

/// Distribution-shaped histogram over numeric and text fields
///
/// Text values contribute their length rather than the string itself.
/// The output block is absent when the field delivered no non-null
/// observations.
#[derive(Debug)]
pub struct Histogram {
    histogram: AdaptiveHistogram,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new(HistogramConfig::default())
    }
}

impl Histogram {
    pub fn new(config: HistogramConfig) -> Self {
        Self {
            histogram: AdaptiveHistogram::new(config),
        }
    }
}

impl Collector for Histogram {
    fn kind(&self) -> CollectorKind {
        CollectorKind::Histogram
    }

    fn applicable_types(&self) -> &'static [FieldType] {
        APPLICABLE
    }

    fn output_fields(&self) -> Vec<OutputField> {
        vec![OutputField::new("hist", StatType::BucketArray)]
    }

    fn reset(&mut self) {
        self.histogram.reset();
    }

    fn update(&mut self, value: &ScalarValue) {
        let v = match value {
            ScalarValue::Text(s) => s.chars().count() as f64,
            other => match other.as_f64() {
                Some(v) => v,
                None => return,
            },
        };
        self.histogram.add(v);
    }

    fn result(&self) -> Option<Block> {
        let buckets = self.histogram.snapshot();
        if buckets.is_empty() {
            return None;
        }
        let mut block = Block::with_capacity(1);
        block.push("hist", StatValue::Buckets(buckets));
        Some(block)
    }
}

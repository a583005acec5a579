//! Approximate distinct-count collector

use profiler_core::{
    Block, Collector, CollectorKind, FieldType, OutputField, ScalarValue, StatType,
};
use profiler_sketch::HyperLogLog;

/// Approximate distinct-value count over any scalar field
///
/// Nulls are not folded into the sketch; a field of nothing but nulls
/// reports zero uniques.
#[derive(Debug, Default)]
pub struct Uniques {
    sketch: HyperLogLog,
}

impl Uniques {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a specific sketch precision (4..=18)
    pub fn with_precision(precision: u8) -> profiler_core::Result<Self> {
        Ok(Self {
            sketch: HyperLogLog::new(precision)?,
        })
    }
}

impl Collector for Uniques {
    fn kind(&self) -> CollectorKind {
        CollectorKind::Uniques
    }

    fn applicable_types(&self) -> &'static [FieldType] {
        &FieldType::ALL
    }

    fn output_fields(&self) -> Vec<OutputField> {
        vec![OutputField::new("uniques", StatType::Long)]
    }

    fn reset(&mut self) {
        self.sketch.reset();
    }

    fn update(&mut self, value: &ScalarValue) {
        if value.is_null() {
            return;
        }
        self.sketch.add(value);
    }

    fn result(&self) -> Option<Block> {
        let mut block = Block::with_capacity(1);
        block.push_long("uniques", self.sketch.cardinality() as i64);
        Some(block)
    }
}

//! Boolean tally collector

use profiler_core::{
    Block, Collector, CollectorKind, FieldType, OutputField, ScalarValue, StatType,
};

const APPLICABLE: &[FieldType] = &[FieldType::Boolean];

/// True/false/unknown tallies for boolean fields
///
/// Null observations land in `unknown_count`. Counters are emitted
/// verbatim; integers need no NaN guard.
#[derive(Debug, Default)]
pub struct Logical {
    true_count: u64,
    false_count: u64,
    unknown_count: u64,
}

impl Logical {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collector for Logical {
    fn kind(&self) -> CollectorKind {
        CollectorKind::Logical
    }

    fn applicable_types(&self) -> &'static [FieldType] {
        APPLICABLE
    }

    fn output_fields(&self) -> Vec<OutputField> {
        vec![
            OutputField::new("true_count", StatType::Long),
            OutputField::new("false_count", StatType::Long),
            OutputField::new("unknown_count", StatType::Long),
        ]
    }

    fn reset(&mut self) {
        self.true_count = 0;
        self.false_count = 0;
        self.unknown_count = 0;
    }

    fn update(&mut self, value: &ScalarValue) {
        match value {
            ScalarValue::Boolean(true) => self.true_count += 1,
            ScalarValue::Boolean(false) => self.false_count += 1,
            ScalarValue::Null => self.unknown_count += 1,
            _ => {}
        }
    }

    fn result(&self) -> Option<Block> {
        let mut block = Block::with_capacity(3);
        block.push_long("true_count", self.true_count as i64);
        block.push_long("false_count", self.false_count as i64);
        block.push_long("unknown_count", self.unknown_count as i64);
        Some(block)
    }
}

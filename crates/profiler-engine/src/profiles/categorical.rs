//! String-length statistics collector

use profiler_core::{
    guard, Block, Collector, CollectorKind, FieldType, OutputField, ScalarValue, StatType,
};
use profiler_stats::NumericAccumulator;

const APPLICABLE: &[FieldType] = &[FieldType::Text];

/// Length statistics over text fields
///
/// The numeric accumulator sees the lengths of non-empty strings only:
/// empty strings are tallied separately so they do not drag the minimum
/// length to 0 for fields that are predominantly non-empty, and nulls
/// are tallied without touching the length distribution at all.
#[derive(Debug, Default)]
pub struct Categorical {
    lengths: NumericAccumulator,
    count: u64,
    nulls: u64,
    empty: u64,
}

impl Categorical {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collector for Categorical {
    fn kind(&self) -> CollectorKind {
        CollectorKind::Categorical
    }

    fn applicable_types(&self) -> &'static [FieldType] {
        APPLICABLE
    }

    fn output_fields(&self) -> Vec<OutputField> {
        vec![
            OutputField::new("nulls", StatType::Long),
            OutputField::new("non_nulls", StatType::Long),
            OutputField::new("empty", StatType::Long),
            OutputField::new("min", StatType::Double),
            OutputField::new("max", StatType::Double),
            OutputField::new("mean", StatType::Double),
            OutputField::new("stdev", StatType::Double),
            OutputField::new("median", StatType::Double),
            OutputField::new("skewness", StatType::Double),
            OutputField::new("kurtosis", StatType::Double),
            OutputField::new("population_variance", StatType::Double),
            OutputField::new("geometric_mean", StatType::Double),
            OutputField::new("quadratic_mean", StatType::Double),
        ]
    }

    fn reset(&mut self) {
        self.lengths.reset();
        self.count = 0;
        self.nulls = 0;
        self.empty = 0;
    }

    fn update(&mut self, value: &ScalarValue) {
        self.count += 1;
        match value {
            ScalarValue::Null => self.nulls += 1,
            ScalarValue::Text(s) if s.is_empty() => self.empty += 1,
            ScalarValue::Text(s) => self.lengths.add(s.chars().count() as f64),
            _ => {}
        }
    }

    fn result(&self) -> Option<Block> {
        let mut block = Block::with_capacity(13);
        block.push_long("nulls", self.nulls as i64);
        block.push_long("non_nulls", (self.count - self.nulls) as i64);
        block.push_long("empty", self.empty as i64);
        block.push_double("min", guard(self.lengths.min()));
        block.push_double("max", guard(self.lengths.max()));
        block.push_double("mean", guard(self.lengths.mean()));
        block.push_double("stdev", guard(self.lengths.stdev()));
        block.push_double("median", guard(self.lengths.median()));
        block.push_double("skewness", guard(self.lengths.skewness()));
        block.push_double("kurtosis", guard(self.lengths.kurtosis()));
        block.push_double(
            "population_variance",
            guard(self.lengths.population_variance()),
        );
        block.push_double("geometric_mean", guard(self.lengths.geometric_mean()));
        block.push_double("quadratic_mean", guard(self.lengths.quadratic_mean()));
        Some(block)
    }
}

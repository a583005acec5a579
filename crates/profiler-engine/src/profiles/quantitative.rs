//! Numeric descriptive statistics collector

use profiler_core::{
    guard, Block, Collector, CollectorKind, FieldType, OutputField, ScalarValue, StatType,
};
use profiler_stats::NumericAccumulator;

const APPLICABLE: &[FieldType] = &[
    FieldType::Int32,
    FieldType::Int64,
    FieldType::Float32,
    FieldType::Float64,
];

/// Online mean/variance/percentile/shape statistics for numeric fields
///
/// Null observations are counted but excluded from the statistics, so
/// `count - nulls` is the number of values the accumulator actually saw.
#[derive(Debug, Default)]
pub struct Quantitative {
    stats: NumericAccumulator,
    count: u64,
    nulls: u64,
}

impl Quantitative {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collector for Quantitative {
    fn kind(&self) -> CollectorKind {
        CollectorKind::Quantitative
    }

    fn applicable_types(&self) -> &'static [FieldType] {
        APPLICABLE
    }

    fn output_fields(&self) -> Vec<OutputField> {
        vec![
            OutputField::new("count", StatType::Long),
            OutputField::new("nulls", StatType::Long),
            OutputField::new("min", StatType::Double),
            OutputField::new("max", StatType::Double),
            OutputField::new("mean", StatType::Double),
            OutputField::new("sum", StatType::Double),
            OutputField::new("stdev", StatType::Double),
            OutputField::new("median", StatType::Double),
            OutputField::new("percentile_80", StatType::Double),
            OutputField::new("percentile_95", StatType::Double),
            OutputField::new("percentile_99", StatType::Double),
            OutputField::new("skewness", StatType::Double),
            OutputField::new("kurtosis", StatType::Double),
            OutputField::new("population_variance", StatType::Double),
            OutputField::new("geometric_mean", StatType::Double),
            OutputField::new("quadratic_mean", StatType::Double),
        ]
    }

    fn reset(&mut self) {
        self.stats.reset();
        self.count = 0;
        self.nulls = 0;
    }

    fn update(&mut self, value: &ScalarValue) {
        self.count += 1;
        if value.is_null() {
            self.nulls += 1;
            return;
        }
        if let Some(v) = value.as_f64() {
            self.stats.add(v);
        }
    }

    fn result(&self) -> Option<Block> {
        let mut block = Block::with_capacity(16);
        block.push_long("count", self.count as i64);
        block.push_long("nulls", self.nulls as i64);
        block.push_double("min", guard(self.stats.min()));
        block.push_double("max", guard(self.stats.max()));
        block.push_double("mean", guard(self.stats.mean()));
        block.push_double("sum", guard(self.stats.sum()));
        block.push_double("stdev", guard(self.stats.stdev()));
        block.push_double("median", guard(self.stats.median()));
        block.push_double("percentile_80", guard(self.stats.percentile(80.0)));
        block.push_double("percentile_95", guard(self.stats.percentile(95.0)));
        block.push_double("percentile_99", guard(self.stats.percentile(99.0)));
        block.push_double("skewness", guard(self.stats.skewness()));
        block.push_double("kurtosis", guard(self.stats.kurtosis()));
        block.push_double(
            "population_variance",
            guard(self.stats.population_variance()),
        );
        block.push_double("geometric_mean", guard(self.stats.geometric_mean()));
        block.push_double("quadratic_mean", guard(self.stats.quadratic_mean()));
        Some(block)
    }
}

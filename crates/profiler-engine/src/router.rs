//! The profile router
//!
//! Maps each field's declared type to the subset of registered
//! collectors that apply to it, drives the per-field aggregation cycle,
//! and assembles the combined output record. The routing table and
//! output schema are built once at construction from the registered
//! collector list and never mutated afterwards.

use crate::record::{BlockSchema, OutputRecord, OutputSchema};
use profiler_core::{Collector, Error, FieldSchema, FieldType, Result, ScalarValue};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Routes one field's value stream to its applicable collectors
///
/// A `Profiler` drives one aggregation at a time: `begin_field`, any
/// number of `update` calls, then `finish_field`. Hosts that profile
/// fields in parallel give every worker its own `Profiler`; instances
/// share no mutable state.
pub struct Profiler {
    collectors: Vec<Box<dyn Collector>>,
    /// FieldType -> indices into `collectors`, in registration order
    routing: BTreeMap<FieldType, Vec<usize>>,
    schema: Option<FieldSchema>,
    output_schema: OutputSchema,
}

impl Profiler {
    /// Build a router from an ordered collector registry and an optional
    /// field schema
    ///
    /// Without a schema the router runs in discovery mode: the output
    /// schema is still available but no routing information exists, so
    /// every `update` is a no-op. Registering two collectors with the
    /// same kind is a configuration error.
    pub fn new(collectors: Vec<Box<dyn Collector>>, schema: Option<FieldSchema>) -> Result<Self> {
        let mut routing: BTreeMap<FieldType, Vec<usize>> = BTreeMap::new();
        let mut blocks = Vec::with_capacity(collectors.len());

        for (index, collector) in collectors.iter().enumerate() {
            if blocks
                .iter()
                .any(|b: &BlockSchema| b.kind == collector.kind())
            {
                return Err(Error::InvalidParameter(format!(
                    "collector kind {} registered twice",
                    collector.kind()
                )));
            }
            blocks.push(BlockSchema {
                kind: collector.kind(),
                fields: collector.output_fields(),
            });
            // Append, never overwrite: several collectors may claim the
            // same type and all of them must receive its values.
            for &field_type in collector.applicable_types() {
                routing.entry(field_type).or_default().push(index);
            }
        }

        Ok(Self {
            collectors,
            routing,
            schema,
            output_schema: OutputSchema::new(blocks),
        })
    }

    /// Build a router with the standard collector set: categorical,
    /// logical, quantitative, uniques and histogram
    pub fn with_default_collectors(schema: Option<FieldSchema>) -> Result<Self> {
        Self::new(crate::profiles::default_collectors(), schema)
    }

    /// Aggregate output schema, available with no data
    pub fn output_schema(&self) -> &OutputSchema {
        &self.output_schema
    }

    /// Indices of the collectors applicable to a field, empty when the
    /// field is unknown or no schema was supplied
    fn applicable(&self, name: &str) -> &[usize] {
        self.schema
            .as_ref()
            .and_then(|s| s.field_type(name))
            .and_then(|ty| self.routing.get(&ty))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Start a field's aggregation, resetting its collector set
    pub fn begin_field(&mut self, name: &str) {
        let indices: Vec<usize> = self.applicable(name).to_vec();
        debug!(field = name, collectors = indices.len(), "begin field");
        for i in indices {
            self.collectors[i].reset();
        }
    }

    /// Dispatch one observation to every collector applicable to `name`
    ///
    /// Unknown fields, unsupported declared types and runtime values
    /// that contradict the declared type are skipped silently; schema
    /// drift upstream is expected and non-fatal.
    pub fn update(&mut self, name: &str, value: &ScalarValue) {
        let Some(declared) = self.schema.as_ref().and_then(|s| s.field_type(name)) else {
            return;
        };
        if !value.matches(declared) {
            trace!(
                field = name,
                declared = %declared,
                "runtime type mismatch, value skipped"
            );
            return;
        }
        if let Some(indices) = self.routing.get(&declared) {
            for &i in indices {
                self.collectors[i].update(value);
            }
        }
    }

    /// End a field's aggregation and collect the combined record
    ///
    /// Every registered collector gets a slot in the record; only the
    /// applicable ones contribute a block, and a collector may withhold
    /// its block when it has nothing to report.
    pub fn finish_field(&mut self, name: &str) -> OutputRecord {
        let applicable = self.applicable(name);
        let blocks = self
            .collectors
            .iter()
            .enumerate()
            .map(|(i, collector)| {
                let block = if applicable.contains(&i) {
                    collector.result()
                } else {
                    None
                };
                (collector.kind(), block)
            })
            .collect();
        debug!(field = name, "finish field");
        OutputRecord::new(name.to_string(), blocks)
    }

    /// Convenience wrapper for a complete aggregation cycle over a
    /// finite value sequence
    pub fn aggregate_field<I>(&mut self, name: &str, values: I) -> OutputRecord
    where
        I: IntoIterator<Item = ScalarValue>,
    {
        self.begin_field(name);
        for value in values {
            self.update(name, &value);
        }
        self.finish_field(name)
    }
}

impl std::fmt::Debug for Profiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profiler")
            .field("collectors", &self.output_schema.blocks().len())
            .field("schema", &self.schema.as_ref().map(FieldSchema::len))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{default_collectors, Logical, Uniques};
    use profiler_core::{CollectorKind, FieldDecl};

    fn schema() -> FieldSchema {
        FieldSchema::new(vec![
            FieldDecl::nullable("s", FieldType::Text),
            FieldDecl::nullable("i", FieldType::Int64),
            FieldDecl::nullable("b", FieldType::Boolean),
        ])
    }

    #[test]
    fn test_duplicate_kind_is_rejected() {
        let collectors: Vec<Box<dyn Collector>> =
            vec![Box::new(Logical::new()), Box::new(Logical::new())];
        assert!(Profiler::new(collectors, None).is_err());
    }

    #[test]
    fn test_routing_appends_all_collectors_for_a_type() {
        let profiler = Profiler::with_default_collectors(Some(schema())).unwrap();
        // Int64 routes to quantitative, uniques and histogram.
        let record = {
            let mut profiler = profiler;
            profiler.aggregate_field("i", vec![ScalarValue::Int64(1), ScalarValue::Int64(2)])
        };
        assert!(record.block(CollectorKind::Quantitative).is_some());
        assert!(record.block(CollectorKind::Uniques).is_some());
        assert!(record.block(CollectorKind::Histogram).is_some());
        assert!(record.block(CollectorKind::Categorical).is_none());
        assert!(record.block(CollectorKind::Logical).is_none());
    }

    #[test]
    fn test_discovery_mode_exposes_schema_but_ignores_updates() {
        let mut profiler = Profiler::with_default_collectors(None).unwrap();
        assert_eq!(profiler.output_schema().blocks().len(), 5);

        let record = profiler.aggregate_field("anything", vec![ScalarValue::Int64(5)]);
        for (_, block) in record.blocks() {
            assert!(block.is_none());
        }
    }

    #[test]
    fn test_runtime_type_mismatch_is_skipped() {
        let mut profiler = Profiler::with_default_collectors(Some(schema())).unwrap();
        let record = profiler.aggregate_field(
            "i",
            vec![
                ScalarValue::Int64(3),
                ScalarValue::Text("drifted".into()),
                ScalarValue::Int64(5),
            ],
        );
        let block = record.block(CollectorKind::Quantitative).unwrap();
        assert_eq!(block.long("count"), Some(2));
    }

    #[test]
    fn test_unknown_field_yields_empty_record() {
        let mut profiler = Profiler::with_default_collectors(Some(schema())).unwrap();
        let record = profiler.aggregate_field("nope", vec![ScalarValue::Int64(1)]);
        assert_eq!(record.name(), "nope");
        for (_, block) in record.blocks() {
            assert!(block.is_none());
        }
    }

    #[test]
    fn test_begin_field_resets_between_aggregations() {
        let mut profiler = Profiler::with_default_collectors(Some(schema())).unwrap();
        profiler.aggregate_field("i", vec![ScalarValue::Int64(100)]);
        let record = profiler.aggregate_field("i", vec![ScalarValue::Int64(1)]);
        let block = record.block(CollectorKind::Quantitative).unwrap();
        assert_eq!(block.long("count"), Some(1));
        assert_eq!(block.double("max"), Some(1.0));
    }

    #[test]
    fn test_output_schema_order_follows_registration() {
        let profiler = Profiler::new(
            vec![Box::new(Uniques::new()), Box::new(Logical::new())],
            None,
        )
        .unwrap();
        let kinds: Vec<CollectorKind> = profiler
            .output_schema()
            .blocks()
            .iter()
            .map(|b| b.kind)
            .collect();
        assert_eq!(kinds, vec![CollectorKind::Uniques, CollectorKind::Logical]);

        let default = Profiler::new(default_collectors(), None).unwrap();
        let kinds: Vec<CollectorKind> = default
            .output_schema()
            .blocks()
            .iter()
            .map(|b| b.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                CollectorKind::Categorical,
                CollectorKind::Logical,
                CollectorKind::Quantitative,
                CollectorKind::Uniques,
                CollectorKind::Histogram,
            ]
        );
    }
}

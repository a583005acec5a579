//! Per-field output records and the aggregate output schema
//!
//! One [`OutputRecord`] is produced per profiled field. It carries a
//! slot for every registered collector, in registration order; slots for
//! collectors that are inapplicable to the field's type (or that had
//! nothing to report) are absent and serialize as `null`.

use profiler_core::{Block, CollectorKind, OutputField};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Profiling results for a single field
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    name: String,
    blocks: Vec<(CollectorKind, Option<Block>)>,
}

impl OutputRecord {
    pub(crate) fn new(name: String, blocks: Vec<(CollectorKind, Option<Block>)>) -> Self {
        Self { name, blocks }
    }

    /// Field this record describes
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Result block of one collector, `None` if absent
    pub fn block(&self, kind: CollectorKind) -> Option<&Block> {
        self.blocks
            .iter()
            .find(|(k, _)| *k == kind)
            .and_then(|(_, b)| b.as_ref())
    }

    /// All block slots in registration order
    pub fn blocks(&self) -> impl Iterator<Item = (CollectorKind, Option<&Block>)> {
        self.blocks.iter().map(|(k, b)| (*k, b.as_ref()))
    }
}

impl Serialize for OutputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.blocks.len() + 1))?;
        map.serialize_entry("name", &self.name)?;
        for (kind, block) in &self.blocks {
            map.serialize_entry(kind.name(), block)?;
        }
        map.end()
    }
}

/// Shape of one collector's block in the aggregate output schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockSchema {
    pub kind: CollectorKind,
    /// Block slots are nullable at the record level: a collector may be
    /// inapplicable to a given field's type.
    pub fields: Vec<OutputField>,
}

/// The aggregate output schema: one nullable block per registered
/// collector, in registration order, plus the leading field name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSchema {
    blocks: Vec<BlockSchema>,
}

impl OutputSchema {
    pub(crate) fn new(blocks: Vec<BlockSchema>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[BlockSchema] {
        &self.blocks
    }

    pub fn block(&self, kind: CollectorKind) -> Option<&BlockSchema> {
        self.blocks.iter().find(|b| b.kind == kind)
    }
}

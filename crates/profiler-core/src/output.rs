//! Structured output model
//!
//! Each collector reports its results as a [`Block`]: an ordered list of
//! named statistic values whose shape is described, independently of any
//! data, by the collector's [`OutputField`] list. Blocks serialize as
//! maps so downstream consumers see `{"min": 1.0, "max": 9.0, ...}`.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Type of a single output statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatType {
    /// 64-bit integer statistic (counts)
    Long,
    /// 64-bit float statistic
    Double,
    /// Ordered array of histogram buckets
    BucketArray,
}

/// One histogram bucket in an output block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketRecord {
    pub low: f64,
    pub high: f64,
    pub count: f64,
}

/// Value of a single output statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Long(i64),
    Double(f64),
    Buckets(Vec<BucketRecord>),
}

impl StatValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Long(v) => Some(*v as f64),
            StatValue::Double(v) => Some(*v),
            StatValue::Buckets(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StatValue::Long(v) => Some(*v),
            _ => None,
        }
    }
}

/// Name and type of one statistic in a collector's output block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputField {
    pub name: &'static str,
    pub stat_type: StatType,
}

impl OutputField {
    pub const fn new(name: &'static str, stat_type: StatType) -> Self {
        Self { name, stat_type }
    }
}

/// Ordered set of named statistics produced by one collector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    fields: Vec<(&'static str, StatValue)>,
}

impl Block {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a statistic; insertion order is the output order
    pub fn push(&mut self, name: &'static str, value: StatValue) {
        self.fields.push((name, value));
    }

    pub fn push_double(&mut self, name: &'static str, value: f64) {
        self.push(name, StatValue::Double(value));
    }

    pub fn push_long(&mut self, name: &'static str, value: i64) {
        self.push(name, StatValue::Long(value));
    }

    pub fn get(&self, name: &str) -> Option<&StatValue> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Convenience accessor for numeric statistics
    pub fn double(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(StatValue::as_f64)
    }

    /// Convenience accessor for count statistics
    pub fn long(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(StatValue::as_i64)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StatValue)> {
        self.fields.iter().map(|(n, v)| (*n, v))
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

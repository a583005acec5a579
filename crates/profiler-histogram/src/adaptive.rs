//! Adaptive streaming histogram
//!
//! Summarizes an unbounded, unordered numeric stream with a fixed number
//! of contiguous buckets. Three mechanisms keep those buckets pointed
//! at the data:
//!
//! 1. **Warm-up**: raw points are buffered until
//!    `num_buckets * initial_points_per_bucket` arrive, then sorted and
//!    partitioned into equal-count buckets.
//! 2. **Decay**: every steady-state insertion first multiplies all bucket
//!    counts by `0.5^(1/half_life)`, so an untouched bucket loses half
//!    its weight every `half_life` insertions and the histogram tracks
//!    distributional drift instead of all-time shape.
//! 3. **Rebalancing**: when one bucket grows too heavy, the adjacent pair
//!    whose merge least distorts the count-mass profile is merged and the
//!    heavy bucket is bisected, re-allocating resolution toward the dense
//!    region while holding the bucket count fixed.

use crate::config::HistogramConfig;
use profiler_core::BucketRecord;
use tracing::{debug, trace};

/// A heavy bucket triggers a rebalance once it exceeds this multiple of
/// the mean bucket weight.
const REBALANCE_FACTOR: f64 = 2.0;

/// Boundaries closer than this are treated as coincident.
const EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy)]
struct Bucket {
    /// Inclusive upper boundary
    high: f64,
    /// Weighted count, fractional once decay has applied
    count: f64,
}

/// Fixed-bucket streaming histogram with recency weighting
#[derive(Debug)]
pub struct AdaptiveHistogram {
    config: HistogramConfig,
    decay: f64,
    /// Raw-point buffer, only used before the first partition
    warmup: Vec<f64>,
    /// Ascending by `high`; empty until warm-up completes
    buckets: Vec<Bucket>,
    /// Lower boundary of the first bucket
    low: f64,
    /// Total observations accepted since the last reset
    observations: u64,
}

impl Default for AdaptiveHistogram {
    fn default() -> Self {
        Self::new(HistogramConfig::default())
    }
}

impl AdaptiveHistogram {
    pub fn new(config: HistogramConfig) -> Self {
        Self {
            config,
            decay: config.decay_factor(),
            warmup: Vec::with_capacity(config.warmup_capacity()),
            buckets: Vec::new(),
            low: 0.0,
            observations: 0,
        }
    }

    /// Discard all state, keeping the configuration
    pub fn reset(&mut self) {
        self.warmup.clear();
        self.buckets.clear();
        self.low = 0.0;
        self.observations = 0;
    }

    /// Add one observation; NaN is ignored
    pub fn add(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.observations += 1;

        if self.buckets.is_empty() {
            self.warmup.push(value);
            if self.warmup.len() >= self.config.warmup_capacity() {
                self.seed();
            }
            return;
        }

        // Steady state: age out old mass before adding new mass.
        for bucket in &mut self.buckets {
            bucket.count *= self.decay;
        }
        self.route(value);
        self.maybe_rebalance();
    }

    /// Number of observations accepted since the last reset
    pub fn observations(&self) -> u64 {
        self.observations
    }

    /// Current number of buckets (0 while warming up)
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations == 0
    }

    /// Sum of all bucket weights, including buffered warm-up points
    pub fn total_weight(&self) -> f64 {
        if self.buckets.is_empty() {
            self.warmup.len() as f64
        } else {
            self.buckets.iter().map(|b| b.count).sum()
        }
    }

    /// Ordered `(low, high, count)` triples describing the histogram
    ///
    /// The first bucket's emitted low bound is 0 and each subsequent low
    /// is the previous high. An empty stream yields an empty vector. A
    /// stream still in warm-up is partitioned on the fly so short streams
    /// still produce a summary.
    pub fn snapshot(&self) -> Vec<BucketRecord> {
        let buckets: Vec<Bucket> = if self.buckets.is_empty() {
            if self.warmup.is_empty() {
                return Vec::new();
            }
            let mut sorted = self.warmup.clone();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            partition(&sorted, self.config.num_buckets()).1
        } else {
            self.buckets.clone()
        };

        let mut records = Vec::with_capacity(buckets.len());
        let mut low = 0.0;
        for bucket in &buckets {
            records.push(BucketRecord {
                low,
                high: bucket.high,
                count: bucket.count,
            });
            low = bucket.high;
        }
        records
    }

    /// Sort the warm-up buffer and partition it into the initial buckets
    fn seed(&mut self) {
        let mut sorted = std::mem::take(&mut self.warmup);
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let (low, buckets) = partition(&sorted, self.config.num_buckets());
        debug!(
            points = sorted.len(),
            buckets = buckets.len(),
            "histogram warm-up complete"
        );
        self.low = low;
        self.buckets = buckets;
    }

    /// Place a value into its bucket, extending an end bucket when the
    /// value falls outside the current range
    fn route(&mut self, value: f64) {
        let last = self.buckets.len() - 1;
        if value > self.buckets[last].high {
            self.buckets[last].high = value;
            self.buckets[last].count += 1.0;
            return;
        }
        if value < self.low {
            self.low = value;
            self.buckets[0].count += 1.0;
            return;
        }
        let idx = self.buckets.partition_point(|b| b.high < value);
        self.buckets[idx.min(last)].count += 1.0;
    }

    /// Merge-then-split rebalance, triggered when one bucket holds more
    /// than `REBALANCE_FACTOR` times the mean weight
    fn maybe_rebalance(&mut self) {
        if self.buckets.len() < 3 {
            return;
        }

        let total: f64 = self.buckets.iter().map(|b| b.count).sum();
        let mean = total / self.buckets.len() as f64;

        // Split candidate: heaviest bucket with a bisectable range.
        let mut split_idx = None;
        let mut split_count = REBALANCE_FACTOR * mean;
        for (i, bucket) in self.buckets.iter().enumerate() {
            let width = bucket.high - self.bucket_low(i);
            if bucket.count > split_count && width > EPSILON {
                split_count = bucket.count;
                split_idx = Some(i);
            }
        }
        let Some(split_idx) = split_idx else {
            return;
        };

        // Merge candidate: adjacent pair, not touching the split bucket,
        // whose merge least increases the count-mass (count x width) total.
        let mut merge_idx = None;
        let mut merge_cost = f64::INFINITY;
        for i in 0..self.buckets.len() - 1 {
            if i == split_idx || i + 1 == split_idx {
                continue;
            }
            let left = &self.buckets[i];
            let right = &self.buckets[i + 1];
            let left_low = self.bucket_low(i);
            let merged = (left.count + right.count) * (right.high - left_low);
            let separate = left.count * (left.high - left_low)
                + right.count * (right.high - left.high);
            let cost = merged - separate;
            if cost < merge_cost {
                merge_cost = cost;
                merge_idx = Some(i);
            }
        }
        let Some(merge_idx) = merge_idx else {
            return;
        };

        trace!(split = split_idx, merge = merge_idx, "rebalancing histogram");

        // Merge first; boundary of the pair becomes the higher one.
        let merged_count = self.buckets[merge_idx].count + self.buckets[merge_idx + 1].count;
        self.buckets[merge_idx].high = self.buckets[merge_idx + 1].high;
        self.buckets[merge_idx].count = merged_count;
        self.buckets.remove(merge_idx + 1);

        // The split target may have shifted left by the removal.
        let split_idx = if merge_idx + 1 < split_idx {
            split_idx - 1
        } else {
            split_idx
        };

        // Bisect the heavy bucket into two equal-count halves.
        let low = self.bucket_low(split_idx);
        let high = self.buckets[split_idx].high;
        let mid = low + (high - low) / 2.0;
        let half = self.buckets[split_idx].count / 2.0;
        self.buckets[split_idx].count = half;
        self.buckets.insert(
            split_idx,
            Bucket {
                high: mid,
                count: half,
            },
        );
    }

    /// Lower boundary of bucket `i`
    fn bucket_low(&self, i: usize) -> f64 {
        if i == 0 {
            self.low
        } else {
            self.buckets[i - 1].high
        }
    }
}

/// Partition sorted points into at most `num_buckets` equal-count
/// buckets; returns the global low and the bucket list
///
/// Coincident boundaries (runs of identical values) collapse into a
/// single bucket, so the result can hold fewer than `num_buckets`
/// buckets but highs are always strictly ascending.
fn partition(sorted: &[f64], num_buckets: usize) -> (f64, Vec<Bucket>) {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    let chunks = num_buckets.min(n);
    let base = n / chunks;
    let extra = n % chunks;

    let mut buckets: Vec<Bucket> = Vec::with_capacity(chunks);
    let mut start = 0;
    for i in 0..chunks {
        let size = base + usize::from(i < extra);
        let end = start + size;
        let high = sorted[end - 1];
        match buckets.last_mut() {
            Some(last) if (high - last.high).abs() <= EPSILON => {
                last.count += size as f64;
            }
            _ => buckets.push(Bucket {
                high,
                count: size as f64,
            }),
        }
        start = end;
    }
    (sorted[0], buckets)
}

//! Property tests for the adaptive histogram

use profiler_histogram::{AdaptiveHistogram, HistogramConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bucket_count_is_bounded(
        values in prop::collection::vec(-1e4f64..1e4, 1..2_000),
        num_buckets in 1usize..20,
    ) {
        let config = HistogramConfig::new(num_buckets, 5, 10).unwrap();
        let mut hist = AdaptiveHistogram::new(config);
        for &v in &values {
            hist.add(v);
        }
        prop_assert!(hist.snapshot().len() <= num_buckets);
        prop_assert!(hist.len() <= num_buckets);
    }

    #[test]
    fn snapshot_is_contiguous(
        values in prop::collection::vec(-1e4f64..1e4, 1..1_000),
    ) {
        let config = HistogramConfig::new(10, 5, 10).unwrap();
        let mut hist = AdaptiveHistogram::new(config);
        for &v in &values {
            hist.add(v);
        }
        let snapshot = hist.snapshot();
        prop_assert!(!snapshot.is_empty());
        prop_assert_eq!(snapshot[0].low, 0.0);
        for pair in snapshot.windows(2) {
            prop_assert_eq!(pair[1].low, pair[0].high);
        }
        for bucket in &snapshot {
            prop_assert!(bucket.count >= 0.0);
        }
    }

    #[test]
    fn warmup_mass_is_exact(
        values in prop::collection::vec(-1e4f64..1e4, 50..=50),
    ) {
        // Exactly the warm-up threshold for a 10x5 configuration: decay
        // has not applied, so mass conservation is exact.
        let config = HistogramConfig::new(10, 5, 10).unwrap();
        let mut hist = AdaptiveHistogram::new(config);
        for &v in &values {
            hist.add(v);
        }
        let total: f64 = hist.snapshot().iter().map(|b| b.count).sum();
        prop_assert!((total - 50.0).abs() < 1e-9);
    }

    #[test]
    fn reset_then_replay_matches_fresh(
        first in prop::collection::vec(-1e3f64..1e3, 0..200),
        second in prop::collection::vec(-1e3f64..1e3, 1..200),
    ) {
        let config = HistogramConfig::new(8, 4, 12).unwrap();
        let mut used = AdaptiveHistogram::new(config);
        for &v in &first {
            used.add(v);
        }
        used.reset();

        let mut fresh = AdaptiveHistogram::new(config);
        for &v in &second {
            used.add(v);
            fresh.add(v);
        }

        let a = used.snapshot();
        let b = fresh.snapshot();
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            prop_assert_eq!(x.high.to_bits(), y.high.to_bits());
            prop_assert!((x.count - y.count).abs() < 1e-9);
        }
    }
}

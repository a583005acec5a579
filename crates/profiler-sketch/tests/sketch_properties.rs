//! Property tests for the distinct-count sketch

use profiler_sketch::{hash_scalar, HyperLogLog};
use profiler_core::ScalarValue;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn estimate_tracks_true_cardinality(
        values in prop::collection::vec(any::<i64>(), 1..2_000)
    ) {
        let mut hll = HyperLogLog::default();
        for &v in &values {
            hll.add(&ScalarValue::Int64(v));
        }
        let truth = values.iter().collect::<HashSet<_>>().len() as f64;
        let estimate = hll.estimate();

        // Well below the linear-counting crossover at p = 14, so the
        // estimate is essentially exact; leave a generous margin anyway.
        prop_assert!((estimate - truth).abs() <= truth * 0.05 + 2.0);
    }

    #[test]
    fn duplicates_never_change_the_estimate(
        values in prop::collection::vec(any::<i64>(), 1..200)
    ) {
        let mut once = HyperLogLog::default();
        let mut thrice = HyperLogLog::default();
        for &v in &values {
            once.add(&ScalarValue::Int64(v));
            for _ in 0..3 {
                thrice.add(&ScalarValue::Int64(v));
            }
        }
        prop_assert_eq!(once.cardinality(), thrice.cardinality());
    }

    #[test]
    fn hashes_are_stable(value in any::<i64>()) {
        let a = hash_scalar(&ScalarValue::Int64(value));
        let b = hash_scalar(&ScalarValue::Int64(value));
        prop_assert_eq!(a, b);
    }
}

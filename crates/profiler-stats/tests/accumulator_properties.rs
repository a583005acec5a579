//! Property tests for the numeric accumulator

use profiler_stats::NumericAccumulator;
use proptest::prelude::*;

proptest! {
    #[test]
    fn percentiles_stay_inside_observed_range(
        values in prop::collection::vec(-1e6f64..1e6, 1..200)
    ) {
        let mut acc = NumericAccumulator::new();
        for &v in &values {
            acc.add(v);
        }

        let median = acc.median();
        let p80 = acc.percentile(80.0);
        let p95 = acc.percentile(95.0);
        let p99 = acc.percentile(99.0);

        prop_assert!(acc.min() <= median && median <= acc.max());
        prop_assert!(p80 <= p95);
        prop_assert!(p95 <= p99);
        prop_assert!(acc.min() <= p80 && p99 <= acc.max());
    }

    #[test]
    fn mean_is_bounded_by_min_and_max(
        values in prop::collection::vec(-1e6f64..1e6, 1..200)
    ) {
        let mut acc = NumericAccumulator::new();
        for &v in &values {
            acc.add(v);
        }
        prop_assert!(acc.min() <= acc.mean() + 1e-9);
        prop_assert!(acc.mean() <= acc.max() + 1e-9);
    }

    #[test]
    fn reset_is_observationally_fresh(
        values in prop::collection::vec(-1e3f64..1e3, 0..50)
    ) {
        let mut used = NumericAccumulator::new();
        for &v in &values {
            used.add(v);
        }
        used.reset();

        let fresh = NumericAccumulator::new();

        // Feed both the same follow-up stream and compare every output.
        let follow_up = [1.5, -2.5, 4.0, 4.0, 9.0];
        let mut used = used;
        let mut fresh = fresh;
        for &v in &follow_up {
            used.add(v);
            fresh.add(v);
        }

        prop_assert_eq!(used.count(), fresh.count());
        prop_assert_eq!(used.sum(), fresh.sum());
        prop_assert_eq!(used.mean(), fresh.mean());
        prop_assert_eq!(used.stdev(), fresh.stdev());
        prop_assert_eq!(used.median(), fresh.median());
        prop_assert_eq!(used.skewness(), fresh.skewness());
        prop_assert_eq!(used.kurtosis(), fresh.kurtosis());
    }

    #[test]
    fn population_variance_is_non_negative(
        values in prop::collection::vec(-1e6f64..1e6, 1..200)
    ) {
        let mut acc = NumericAccumulator::new();
        for &v in &values {
            acc.add(v);
        }
        prop_assert!(acc.population_variance() >= -1e-9);
    }
}

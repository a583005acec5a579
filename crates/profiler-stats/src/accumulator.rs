//! The combined numeric accumulator
//!
//! One instance per profiled numeric stream: moment statistics and
//! percentile estimates behind a single `add` call, all in O(1) memory.
//! Statistics that are undefined for the observed stream come back as
//! NaN; the output layer guards those to 0.

use crate::moments::Moments;
use crate::quantile::QuantileSketch;

/// Online mean/variance/percentile/shape statistics for one stream
#[derive(Debug, Default)]
pub struct NumericAccumulator {
    moments: Moments,
    quantiles: QuantileSketch,
}

impl NumericAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the zero state
    pub fn reset(&mut self) {
        self.moments = Moments::new();
        self.quantiles.reset();
    }

    /// Add one observation
    pub fn add(&mut self, value: f64) {
        self.moments.add(value);
        self.quantiles.add(value);
    }

    pub fn count(&self) -> u64 {
        self.moments.count()
    }

    pub fn sum(&self) -> f64 {
        self.moments.sum()
    }

    pub fn min(&self) -> f64 {
        self.moments.min()
    }

    pub fn max(&self) -> f64 {
        self.moments.max()
    }

    pub fn mean(&self) -> f64 {
        self.moments.mean()
    }

    pub fn stdev(&self) -> f64 {
        self.moments.stdev()
    }

    pub fn population_variance(&self) -> f64 {
        self.moments.population_variance()
    }

    pub fn skewness(&self) -> f64 {
        self.moments.skewness()
    }

    pub fn kurtosis(&self) -> f64 {
        self.moments.kurtosis()
    }

    pub fn geometric_mean(&self) -> f64 {
        self.moments.geometric_mean()
    }

    pub fn quadratic_mean(&self) -> f64 {
        self.moments.quadratic_mean()
    }

    pub fn median(&self) -> f64 {
        self.quantiles.median()
    }

    pub fn percentile(&self, p: f64) -> f64 {
        self.quantiles.percentile(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_combined_statistics() {
        let mut acc = NumericAccumulator::new();
        for v in [0.0, -10.0, 10.0, 0.0] {
            acc.add(v);
        }
        assert_eq!(acc.count(), 4);
        assert_relative_eq!(acc.mean(), 0.0);
        assert_relative_eq!(acc.sum(), 0.0);
        assert_relative_eq!(acc.min(), -10.0);
        assert_relative_eq!(acc.max(), 10.0);
    }

    #[test]
    fn test_percentile_ordering() {
        let mut acc = NumericAccumulator::new();
        for i in 0..1000 {
            acc.add(i as f64);
        }
        let median = acc.median();
        let p80 = acc.percentile(80.0);
        let p95 = acc.percentile(95.0);
        let p99 = acc.percentile(99.0);

        assert!(acc.min() <= median && median <= acc.max());
        assert!(p80 <= p95 && p95 <= p99);
    }

    #[test]
    fn test_reset_matches_fresh_instance() {
        let mut acc = NumericAccumulator::new();
        for v in [5.0, 6.0, 7.0] {
            acc.add(v);
        }
        acc.reset();

        let fresh = NumericAccumulator::new();
        assert_eq!(acc.count(), fresh.count());
        assert!(acc.mean().is_nan() && fresh.mean().is_nan());
        assert!(acc.median().is_nan() && fresh.median().is_nan());
        assert_eq!(acc.stdev(), fresh.stdev());
    }
}

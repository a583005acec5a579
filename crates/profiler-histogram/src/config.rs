//! Histogram construction parameters

use profiler_core::{Error, Result};

/// Default number of buckets
pub const DEFAULT_NUM_BUCKETS: usize = 10;
/// Default warm-up buffer size per bucket
pub const DEFAULT_INITIAL_POINTS_PER_BUCKET: usize = 5;
/// Default decay half-life, in insertions
pub const DEFAULT_HALF_LIFE: u32 = 10;

/// Validated construction parameters for [`crate::AdaptiveHistogram`]
///
/// Invalid parameters fail at construction; they are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramConfig {
    num_buckets: usize,
    initial_points_per_bucket: usize,
    half_life: u32,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            num_buckets: DEFAULT_NUM_BUCKETS,
            initial_points_per_bucket: DEFAULT_INITIAL_POINTS_PER_BUCKET,
            half_life: DEFAULT_HALF_LIFE,
        }
    }
}

impl HistogramConfig {
    /// Create a configuration, rejecting any parameter below 1
    pub fn new(num_buckets: usize, initial_points_per_bucket: usize, half_life: u32) -> Result<Self> {
        if num_buckets < 1 {
            return Err(Error::parameter_too_small("num_buckets", 1, num_buckets));
        }
        if initial_points_per_bucket < 1 {
            return Err(Error::parameter_too_small(
                "initial_points_per_bucket",
                1,
                initial_points_per_bucket,
            ));
        }
        if half_life < 1 {
            return Err(Error::parameter_too_small(
                "half_life",
                1,
                half_life as usize,
            ));
        }
        Ok(Self {
            num_buckets,
            initial_points_per_bucket,
            half_life,
        })
    }

    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    pub fn initial_points_per_bucket(&self) -> usize {
        self.initial_points_per_bucket
    }

    pub fn half_life(&self) -> u32 {
        self.half_life
    }

    /// Number of raw points buffered before the first bucket split
    pub fn warmup_capacity(&self) -> usize {
        self.num_buckets * self.initial_points_per_bucket
    }

    /// Per-insertion decay factor `0.5^(1/half_life)`
    pub fn decay_factor(&self) -> f64 {
        0.5f64.powf(1.0 / f64::from(self.half_life))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = HistogramConfig::default();
        assert_eq!(config.num_buckets(), 10);
        assert_eq!(config.initial_points_per_bucket(), 5);
        assert_eq!(config.half_life(), 10);
        assert_eq!(config.warmup_capacity(), 50);
    }

    #[test]
    fn test_rejects_zero_parameters() {
        assert!(HistogramConfig::new(0, 5, 10).is_err());
        assert!(HistogramConfig::new(10, 0, 10).is_err());
        assert!(HistogramConfig::new(10, 5, 0).is_err());
        assert!(HistogramConfig::new(1, 1, 1).is_ok());
    }

    #[test]
    fn test_decay_halves_after_half_life_steps() {
        let config = HistogramConfig::new(10, 5, 10).unwrap();
        let factor = config.decay_factor();
        assert_relative_eq!(factor.powi(10), 0.5, epsilon = 1e-12);
    }
}

//! Streaming percentile estimation
//!
//! Wraps the CKMS sketch from the `quantiles` crate: biased quantile
//! estimation over an unbounded stream with bounded memory and a
//! configurable relative error. The profiler only ever asks for a fixed
//! handful of percentiles, so sketch state stays small.

use quantiles::ckms::CKMS;

/// Default relative error of the quantile sketch
pub const DEFAULT_ERROR: f64 = 0.001;

/// Bounded-memory percentile estimator for a single numeric stream
pub struct QuantileSketch {
    sketch: CKMS<f64>,
    error: f64,
}

impl Default for QuantileSketch {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR)
    }
}

impl QuantileSketch {
    /// Create a sketch with the given relative error bound
    pub fn new(error: f64) -> Self {
        Self {
            sketch: CKMS::new(error),
            error,
        }
    }

    /// Discard all observations, keeping the configured error bound
    pub fn reset(&mut self) {
        self.sketch = CKMS::new(self.error);
    }

    /// Add one observation; NaN is ignored
    pub fn add(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.sketch.insert(value);
    }

    /// Estimate the q-quantile (q in [0, 1]), NaN for an empty stream
    pub fn quantile(&self, q: f64) -> f64 {
        match self.sketch.query(q) {
            Some((_, v)) => v,
            None => f64::NAN,
        }
    }

    /// Estimate the p-th percentile (p in [0, 100])
    pub fn percentile(&self, p: f64) -> f64 {
        self.quantile(p / 100.0)
    }

    /// Median shorthand
    pub fn median(&self) -> f64 {
        self.quantile(0.5)
    }
}

impl std::fmt::Debug for QuantileSketch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuantileSketch")
            .field("error", &self.error)
            .finish()
    }
}

//! Online central moments up to fourth order
//!
//! Single-pass accumulation of count, sum, min, max and the central
//! moments M2..M4 using Welford-style updates (Pébay's formulas), plus
//! the auxiliary sums needed for geometric and quadratic means. State is
//! O(1) regardless of stream length.

/// Welford-style moment accumulator
///
/// NaN observations are ignored so a single bad value cannot poison the
/// whole stream.
pub struct Moments {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
    mean: f64,
    m2: f64,
    m3: f64,
    m4: f64,
    sum_squares: f64,
    sum_logs: f64,
    saw_non_positive: bool,
}

impl Default for Moments {
    fn default() -> Self {
        Self::new()
    }
}

impl Moments {
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            mean: 0.0,
            m2: 0.0,
            m3: 0.0,
            m4: 0.0,
            sum_squares: 0.0,
            sum_logs: 0.0,
            saw_non_positive: false,
        }
    }

    /// Add one observation
    pub fn add(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }

        self.count += 1;
        self.sum += value;
        self.sum_squares += value * value;
        if value > 0.0 {
            self.sum_logs += value.ln();
        } else {
            self.saw_non_positive = true;
        }

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }

        // Pébay's single-pass update for M2, M3, M4
        let n = self.count as f64;
        let n1 = n - 1.0;
        let delta = value - self.mean;
        let delta_n = delta / n;
        let delta_n2 = delta_n * delta_n;
        let term1 = delta * delta_n * n1;

        self.mean += delta_n;
        self.m4 += term1 * delta_n2 * (n * n - 3.0 * n + 3.0) + 6.0 * delta_n2 * self.m2
            - 4.0 * delta_n * self.m3;
        self.m3 += term1 * delta_n * (n - 2.0) - 3.0 * delta_n * self.m2;
        self.m2 += term1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Minimum observed value, NaN if empty
    pub fn min(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.min
        }
    }

    /// Maximum observed value, NaN if empty
    pub fn max(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.max
        }
    }

    /// Arithmetic mean, NaN if empty
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// Population variance M2/n, NaN if empty
    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Sample variance M2/(n-1), 0 for fewer than two observations
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Sample standard deviation with Bessel's correction, 0 for n < 2
    pub fn stdev(&self) -> f64 {
        self.sample_variance().sqrt()
    }

    /// Bias-corrected sample skewness, NaN for fewer than three observations
    pub fn skewness(&self) -> f64 {
        if self.count < 3 {
            return f64::NAN;
        }
        let n = self.count as f64;
        let s = self.stdev();
        if s == 0.0 {
            return 0.0;
        }
        (n / ((n - 1.0) * (n - 2.0))) * self.m3 / (s * s * s)
    }

    /// Sample excess kurtosis, NaN for fewer than four observations
    pub fn kurtosis(&self) -> f64 {
        if self.count < 4 {
            return f64::NAN;
        }
        let n = self.count as f64;
        let variance = self.sample_variance();
        if variance == 0.0 {
            return 0.0;
        }
        let coefficient = n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0));
        let correction = 3.0 * (n - 1.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0));
        coefficient * self.m4 / (variance * variance) - correction
    }

    /// Geometric mean over strictly positive observations
    ///
    /// 0 if the stream is empty or contained any non-positive value.
    pub fn geometric_mean(&self) -> f64 {
        if self.count == 0 || self.saw_non_positive {
            0.0
        } else {
            (self.sum_logs / self.count as f64).exp()
        }
    }

    /// Root mean square, NaN if empty
    pub fn quadratic_mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            (self.sum_squares / self.count as f64).sqrt()
        }
    }
}

impl std::fmt::Debug for Moments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Moments")
            .field("count", &self.count)
            .field("mean", &self.mean)
            .field("m2", &self.m2)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_stream() {
        let m = Moments::new();
        assert_eq!(m.count(), 0);
        assert!(m.mean().is_nan());
        assert!(m.min().is_nan());
        assert!(m.max().is_nan());
        assert_eq!(m.stdev(), 0.0);
        assert_eq!(m.geometric_mean(), 0.0);
    }

    #[test]
    fn test_basic_statistics() {
        let mut m = Moments::new();
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            m.add(v);
        }
        assert_eq!(m.count(), 8);
        assert_relative_eq!(m.mean(), 5.0);
        assert_relative_eq!(m.sum(), 40.0);
        assert_relative_eq!(m.min(), 2.0);
        assert_relative_eq!(m.max(), 9.0);
        assert_relative_eq!(m.population_variance(), 4.0);
        // Sample variance uses n-1
        assert_relative_eq!(m.sample_variance(), 32.0 / 7.0);
    }

    #[test]
    fn test_stdev_below_two_observations() {
        let mut m = Moments::new();
        assert_eq!(m.stdev(), 0.0);
        m.add(42.0);
        assert_eq!(m.stdev(), 0.0);
        m.add(44.0);
        assert!(m.stdev() > 0.0);
    }

    #[test]
    fn test_skewness_matches_reference() {
        // Reference value from the corrected sample skewness formula:
        // g = [n / ((n-1)(n-2))] * sum((x - mean)^3) / s^3
        let data = [1.0, 2.0, 3.0, 4.0, 10.0];
        let mut m = Moments::new();
        for v in data {
            m.add(v);
        }
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let s = (data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt();
        let m3: f64 = data.iter().map(|x| (x - mean).powi(3)).sum();
        let expected = n / ((n - 1.0) * (n - 2.0)) * m3 / (s * s * s);
        assert_relative_eq!(m.skewness(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_kurtosis_matches_reference() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let mut m = Moments::new();
        for v in data {
            m.add(v);
        }
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let var = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let m4: f64 = data.iter().map(|x| (x - mean).powi(4)).sum();
        let expected = n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0)) * m4 / (var * var)
            - 3.0 * (n - 1.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0));
        assert_relative_eq!(m.kurtosis(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_skewness_kurtosis_need_enough_data() {
        let mut m = Moments::new();
        m.add(1.0);
        m.add(2.0);
        assert!(m.skewness().is_nan());
        m.add(3.0);
        assert!(!m.skewness().is_nan());
        assert!(m.kurtosis().is_nan());
        m.add(4.0);
        assert!(!m.kurtosis().is_nan());
    }

    #[test]
    fn test_geometric_mean_positive_values() {
        let mut m = Moments::new();
        for v in [1.0, 2.0, 4.0] {
            m.add(v);
        }
        assert_relative_eq!(m.geometric_mean(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_geometric_mean_zeroed_by_non_positive() {
        let mut m = Moments::new();
        m.add(2.0);
        m.add(0.0);
        m.add(8.0);
        assert_eq!(m.geometric_mean(), 0.0);

        let mut m = Moments::new();
        m.add(-1.0);
        assert_eq!(m.geometric_mean(), 0.0);
    }

    #[test]
    fn test_quadratic_mean() {
        let mut m = Moments::new();
        for v in [3.0, 4.0] {
            m.add(v);
        }
        assert_relative_eq!(m.quadratic_mean(), (12.5f64).sqrt());
    }

    #[test]
    fn test_nan_observations_ignored() {
        let mut m = Moments::new();
        m.add(1.0);
        m.add(f64::NAN);
        m.add(3.0);
        assert_eq!(m.count(), 2);
        assert_relative_eq!(m.mean(), 2.0);
    }

    #[test]
    fn test_constant_stream_has_zero_shape() {
        let mut m = Moments::new();
        for _ in 0..10 {
            m.add(5.0);
        }
        assert_eq!(m.skewness(), 0.0);
        assert_eq!(m.kurtosis(), 0.0);
        assert_eq!(m.stdev(), 0.0);
    }
}

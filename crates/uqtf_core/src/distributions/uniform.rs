//! Continuous uniform and triangular distributions.

use super::traits::validate;
use super::{DistributionFamily, UnivariateDistribution};
use crate::types::Result;

/// Continuous uniform distribution on `[lower, upper]`.
///
/// # Example
///
/// ```
/// use uqtf_core::distributions::{Uniform, UnivariateDistribution};
///
/// let dist = Uniform::new(1.0, 10.0).unwrap();
/// assert!((dist.pdf(5.0) - 1.0 / 9.0).abs() < 1e-15);
/// assert_eq!(dist.icdf(0.0).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    lower: f64,
    upper: f64,
}

impl Uniform {
    /// Create a uniform distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless both bounds are finite and `lower < upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        validate::ordered_bounds(DistributionFamily::Uniform, lower, upper)?;
        Ok(Self { lower, upper })
    }
}

impl UnivariateDistribution for Uniform {
    fn family(&self) -> DistributionFamily {
        DistributionFamily::Uniform
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.lower, self.upper]
    }

    fn support(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    fn density(&self, _x: f64) -> f64 {
        1.0 / (self.upper - self.lower)
    }

    fn probability(&self, x: f64) -> f64 {
        (x - self.lower) / (self.upper - self.lower)
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        Ok(self.lower + p * (self.upper - self.lower))
    }
}

/// Triangular distribution on `[lower, upper]` peaking at `mode`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    lower: f64,
    upper: f64,
    mode: f64,
}

impl Triangular {
    /// Create a triangular distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless `lower < upper` and `lower <= mode <= upper`.
    pub fn new(lower: f64, upper: f64, mode: f64) -> Result<Self> {
        let family = DistributionFamily::Triangular;
        validate::ordered_bounds(family, lower, upper)?;
        validate::within_bounds(family, "mode", mode, lower, upper)?;
        Ok(Self { lower, upper, mode })
    }

    /// CDF value at the mode.
    #[inline]
    fn mode_probability(&self) -> f64 {
        (self.mode - self.lower) / (self.upper - self.lower)
    }
}

impl UnivariateDistribution for Triangular {
    fn family(&self) -> DistributionFamily {
        DistributionFamily::Triangular
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.lower, self.upper, self.mode]
    }

    fn support(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    fn density(&self, x: f64) -> f64 {
        let (a, b, c) = (self.lower, self.upper, self.mode);
        if x < c {
            2.0 * (x - a) / ((b - a) * (c - a))
        } else if x == c {
            2.0 / (b - a)
        } else {
            2.0 * (b - x) / ((b - a) * (b - c))
        }
    }

    fn probability(&self, x: f64) -> f64 {
        let (a, b, c) = (self.lower, self.upper, self.mode);
        if x <= c {
            (x - a).powi(2) / ((b - a) * (c - a))
        } else {
            1.0 - (b - x).powi(2) / ((b - a) * (b - c))
        }
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        let (a, b, c) = (self.lower, self.upper, self.mode);
        if p < self.mode_probability() {
            Ok(a + (p * (b - a) * (c - a)).sqrt())
        } else {
            Ok(b - ((1.0 - p) * (b - a) * (b - c)).sqrt())
        }
    }
}

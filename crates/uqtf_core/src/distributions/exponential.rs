//! Exponential and truncated exponential distributions.

use super::traits::validate;
use super::{DistributionFamily, UnivariateDistribution};
use crate::types::{Result, UqError};

/// Exponential distribution with rate λ.
///
/// # Example
///
/// ```
/// use uqtf_core::distributions::{Exponential, UnivariateDistribution};
///
/// let dist = Exponential::new(2.0).unwrap();
/// assert_eq!(dist.cdf(0.0), 0.0);
/// assert_eq!(dist.cdf(f64::INFINITY), 1.0);
/// assert!((dist.icdf(0.5).unwrap() - 0.34657359027997264).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Create an exponential distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` ("rate must be > 0") unless `rate` is finite and
    /// positive.
    pub fn new(rate: f64) -> Result<Self> {
        validate::positive(DistributionFamily::Exponential, "rate", rate)?;
        Ok(Self { rate })
    }

    /// Rate parameter λ.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl UnivariateDistribution for Exponential {
    fn family(&self) -> DistributionFamily {
        DistributionFamily::Exponential
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.rate]
    }

    fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn density(&self, x: f64) -> f64 {
        self.rate * (-self.rate * x).exp()
    }

    fn probability(&self, x: f64) -> f64 {
        -(-self.rate * x).exp_m1()
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        Ok(-(-p).ln_1p() / self.rate)
    }
}

/// Exponential distribution truncated to `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncExponential {
    rate: f64,
    lower: f64,
    upper: f64,
    /// Parent probability mass inside the bounds, relative to `lower`
    mass: f64,
}

impl TruncExponential {
    /// Create a truncated exponential distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `rate <= 0`, `lower < 0` or the bounds are not
    /// ordered.
    pub fn new(rate: f64, lower: f64, upper: f64) -> Result<Self> {
        let family = DistributionFamily::TruncExponential;
        validate::positive(family, "rate", rate)?;
        validate::ordered_bounds(family, lower, upper)?;
        if lower < 0.0 {
            return Err(UqError::invalid_parameter(
                family.as_str(),
                format!("lower bound must be >= 0, got {}", lower),
            ));
        }
        Ok(Self {
            rate,
            lower,
            upper,
            mass: -(-rate * (upper - lower)).exp_m1(),
        })
    }
}

impl UnivariateDistribution for TruncExponential {
    fn family(&self) -> DistributionFamily {
        DistributionFamily::TruncExponential
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.rate, self.lower, self.upper]
    }

    fn support(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    fn density(&self, x: f64) -> f64 {
        self.rate * (-self.rate * (x - self.lower)).exp() / self.mass
    }

    fn probability(&self, x: f64) -> f64 {
        -(-self.rate * (x - self.lower)).exp_m1() / self.mass
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        Ok(self.lower - (-p * self.mass).ln_1p() / self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exponential_rate_two() {
        let dist = Exponential::new(2.0).unwrap();
        assert_eq!(dist.cdf(0.0), 0.0);
        assert_eq!(dist.cdf(f64::INFINITY), 1.0);
        assert_eq!(dist.pdf(0.0), 2.0);
        assert_relative_eq!(dist.icdf(0.5).unwrap(), -(0.5_f64.ln()) / 2.0, epsilon = 1e-15);
        assert_relative_eq!(dist.icdf(0.5).unwrap(), 0.3466, epsilon = 1e-4);
    }

    #[test]
    fn test_exponential_outside_support() {
        let dist = Exponential::new(1.0).unwrap();
        assert_eq!(dist.pdf(-0.1), 0.0);
        assert_eq!(dist.cdf(-5.0), 0.0);
        assert_eq!(dist.icdf(1.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_exponential_invalid_rate_message() {
        let err = Exponential::new(-1.0).unwrap_err();
        assert!(matches!(err, UqError::InvalidParameter { .. }));
        assert!(format!("{}", err).contains("rate must be > 0"));
    }

    #[test]
    fn test_exponential_icdf_domain() {
        let dist = Exponential::new(1.0).unwrap();
        assert!(matches!(dist.icdf(1.5), Err(UqError::Domain { .. })));
        assert!(matches!(dist.icdf(-0.1), Err(UqError::Domain { .. })));
        assert!(matches!(dist.icdf(f64::NAN), Err(UqError::Domain { .. })));
    }

    #[test]
    fn test_trunc_exponential_normalised() {
        let dist = TruncExponential::new(1.0, 0.0, 2.0).unwrap();
        let mass = 1.0 - (-2.0_f64).exp();
        assert_relative_eq!(dist.pdf(0.0), 1.0 / mass, epsilon = 1e-14);
        assert_relative_eq!(dist.cdf(1.0), (1.0 - (-1.0_f64).exp()) / mass, epsilon = 1e-14);
        assert_eq!(dist.cdf(2.0), 1.0);
        assert_eq!(dist.icdf(1.0).unwrap(), 2.0);
    }

    #[test]
    fn test_trunc_exponential_shifted_round_trip() {
        let dist = TruncExponential::new(0.5, 1.0, 4.0).unwrap();
        for &p in &[0.05, 0.4, 0.75, 0.999] {
            let x = dist.icdf(p).unwrap();
            assert!((1.0..=4.0).contains(&x));
            assert_relative_eq!(dist.cdf(x), p, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_trunc_exponential_negative_lower() {
        assert!(TruncExponential::new(1.0, -1.0, 1.0).is_err());
    }
}

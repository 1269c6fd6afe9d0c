//! Normal and truncated normal distributions.

use super::traits::validate;
use super::{DistributionFamily, UnivariateDistribution};
use crate::math::special::{norm_cdf, norm_pdf, norm_ppf};
use crate::types::Result;

/// Normal (Gaussian) distribution N(mu, sigma²).
///
/// # Example
///
/// ```
/// use uqtf_core::distributions::{Normal, UnivariateDistribution};
///
/// let dist = Normal::new(0.0, 1.0).unwrap();
/// assert!((dist.cdf(0.0) - 0.5).abs() < 1e-15);
/// assert_eq!(dist.icdf(0.0).unwrap(), f64::NEG_INFINITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Create a normal distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `mu` is not finite or `sigma <= 0`.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        let family = DistributionFamily::Normal;
        validate::finite(family, "mu", mu)?;
        validate::positive(family, "sigma", sigma)?;
        Ok(Self { mu, sigma })
    }

    /// Location parameter.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Scale parameter.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl UnivariateDistribution for Normal {
    fn family(&self) -> DistributionFamily {
        DistributionFamily::Normal
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.mu, self.sigma]
    }

    fn support(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn density(&self, x: f64) -> f64 {
        norm_pdf((x - self.mu) / self.sigma) / self.sigma
    }

    fn probability(&self, x: f64) -> f64 {
        norm_cdf((x - self.mu) / self.sigma)
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        Ok(self.mu + self.sigma * norm_ppf(p))
    }
}

/// Normal distribution truncated to `[lower, upper]`.
///
/// Parametrised by the location and scale of the parent normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncNormal {
    mu: f64,
    sigma: f64,
    lower: f64,
    upper: f64,
    /// Φ at the standardised lower bound
    cdf_lower: f64,
    /// Probability mass of the parent inside the bounds
    mass: f64,
}

impl TruncNormal {
    /// Create a truncated normal distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `sigma <= 0`, the bounds are not ordered, or
    /// `mu` lies outside the bounds.
    pub fn new(mu: f64, sigma: f64, lower: f64, upper: f64) -> Result<Self> {
        let family = DistributionFamily::TruncNormal;
        validate::positive(family, "sigma", sigma)?;
        validate::ordered_bounds(family, lower, upper)?;
        validate::within_bounds(family, "mu", mu, lower, upper)?;

        let cdf_lower = norm_cdf((lower - mu) / sigma);
        let cdf_upper = norm_cdf((upper - mu) / sigma);
        Ok(Self {
            mu,
            sigma,
            lower,
            upper,
            cdf_lower,
            mass: cdf_upper - cdf_lower,
        })
    }
}

impl UnivariateDistribution for TruncNormal {
    fn family(&self) -> DistributionFamily {
        DistributionFamily::TruncNormal
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.mu, self.sigma, self.lower, self.upper]
    }

    fn support(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    fn density(&self, x: f64) -> f64 {
        norm_pdf((x - self.mu) / self.sigma) / (self.sigma * self.mass)
    }

    fn probability(&self, x: f64) -> f64 {
        (norm_cdf((x - self.mu) / self.sigma) - self.cdf_lower) / self.mass
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        Ok(self.mu + self.sigma * norm_ppf(self.cdf_lower + p * self.mass))
    }
}

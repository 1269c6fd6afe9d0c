//! Gumbel (maximum) and truncated Gumbel distributions.

use super::traits::validate;
use super::{DistributionFamily, UnivariateDistribution};
use crate::types::Result;

/// Gumbel distribution of maxima with location `mu` and scale `beta`.
///
/// CDF: `exp(-exp(-(x - mu) / beta))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gumbel {
    mu: f64,
    beta: f64,
}

impl Gumbel {
    /// Create a Gumbel distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `mu` is not finite or `beta <= 0`.
    pub fn new(mu: f64, beta: f64) -> Result<Self> {
        let family = DistributionFamily::Gumbel;
        validate::finite(family, "mu", mu)?;
        validate::positive(family, "beta", beta)?;
        Ok(Self { mu, beta })
    }
}

#[inline]
fn gumbel_pdf(mu: f64, beta: f64, x: f64) -> f64 {
    let z = (x - mu) / beta;
    (-(z + (-z).exp())).exp() / beta
}

#[inline]
fn gumbel_cdf(mu: f64, beta: f64, x: f64) -> f64 {
    (-(-(x - mu) / beta).exp()).exp()
}

#[inline]
fn gumbel_ppf(mu: f64, beta: f64, p: f64) -> f64 {
    mu - beta * (-p.ln()).ln()
}

impl UnivariateDistribution for Gumbel {
    fn family(&self) -> DistributionFamily {
        DistributionFamily::Gumbel
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.mu, self.beta]
    }

    fn support(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn density(&self, x: f64) -> f64 {
        gumbel_pdf(self.mu, self.beta, x)
    }

    fn probability(&self, x: f64) -> f64 {
        gumbel_cdf(self.mu, self.beta, x)
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        Ok(gumbel_ppf(self.mu, self.beta, p))
    }
}

/// Gumbel (maximum) distribution truncated to `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncGumbel {
    mu: f64,
    beta: f64,
    lower: f64,
    upper: f64,
    cdf_lower: f64,
    mass: f64,
}

impl TruncGumbel {
    /// Create a truncated Gumbel distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `beta <= 0`, the bounds are not ordered, or
    /// `mu` lies outside the bounds.
    pub fn new(mu: f64, beta: f64, lower: f64, upper: f64) -> Result<Self> {
        let family = DistributionFamily::TruncGumbel;
        validate::positive(family, "beta", beta)?;
        validate::ordered_bounds(family, lower, upper)?;
        validate::within_bounds(family, "mu", mu, lower, upper)?;

        let cdf_lower = gumbel_cdf(mu, beta, lower);
        let cdf_upper = gumbel_cdf(mu, beta, upper);
        Ok(Self {
            mu,
            beta,
            lower,
            upper,
            cdf_lower,
            mass: cdf_upper - cdf_lower,
        })
    }
}

impl UnivariateDistribution for TruncGumbel {
    fn family(&self) -> DistributionFamily {
        DistributionFamily::TruncGumbel
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.mu, self.beta, self.lower, self.upper]
    }

    fn support(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    fn density(&self, x: f64) -> f64 {
        gumbel_pdf(self.mu, self.beta, x) / self.mass
    }

    fn probability(&self, x: f64) -> f64 {
        (gumbel_cdf(self.mu, self.beta, x) - self.cdf_lower) / self.mass
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        Ok(gumbel_ppf(self.mu, self.beta, self.cdf_lower + p * self.mass))
    }
}

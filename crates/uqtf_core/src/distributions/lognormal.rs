//! Log-normal and logit-normal distributions.
//!
//! Both are parametrised by the mean and standard deviation of the
//! underlying normal variable.

use super::traits::validate;
use super::{DistributionFamily, UnivariateDistribution};
use crate::math::special::{expit, logit, norm_cdf, norm_pdf, norm_ppf};
use crate::types::Result;

/// Log-normal distribution: `exp(Y)` with `Y ~ N(mu, sigma²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormal {
    mu: f64,
    sigma: f64,
}

impl LogNormal {
    /// Create a log-normal distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `mu` is not finite or `sigma <= 0`.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        let family = DistributionFamily::LogNormal;
        validate::finite(family, "mu", mu)?;
        validate::positive(family, "sigma", sigma)?;
        Ok(Self { mu, sigma })
    }

    /// Mean of the distribution, `exp(mu + sigma² / 2)`.
    pub fn mean(&self) -> f64 {
        (self.mu + 0.5 * self.sigma * self.sigma).exp()
    }
}

impl UnivariateDistribution for LogNormal {
    fn family(&self) -> DistributionFamily {
        DistributionFamily::LogNormal
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.mu, self.sigma]
    }

    fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn density(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        norm_pdf((x.ln() - self.mu) / self.sigma) / (self.sigma * x)
    }

    fn probability(&self, x: f64) -> f64 {
        norm_cdf((x.ln() - self.mu) / self.sigma)
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        Ok((self.mu + self.sigma * norm_ppf(p)).exp())
    }
}

/// Logit-normal distribution: `expit(Y)` with `Y ~ N(mu, sigma²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogitNormal {
    mu: f64,
    sigma: f64,
}

impl LogitNormal {
    /// Create a logit-normal distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `mu` is not finite or `sigma <= 0`.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        let family = DistributionFamily::LogitNormal;
        validate::finite(family, "mu", mu)?;
        validate::positive(family, "sigma", sigma)?;
        Ok(Self { mu, sigma })
    }
}

impl UnivariateDistribution for LogitNormal {
    fn family(&self) -> DistributionFamily {
        DistributionFamily::LogitNormal
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.mu, self.sigma]
    }

    fn support(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn density(&self, x: f64) -> f64 {
        if x <= 0.0 || x >= 1.0 {
            return 0.0;
        }
        norm_pdf((logit(x) - self.mu) / self.sigma) / (self.sigma * x * (1.0 - x))
    }

    fn probability(&self, x: f64) -> f64 {
        norm_cdf((logit(x) - self.mu) / self.sigma)
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        Ok(expit(self.mu + self.sigma * norm_ppf(p)))
    }
}

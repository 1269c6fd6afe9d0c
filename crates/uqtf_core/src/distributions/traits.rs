//! Univariate distribution trait definition.

use super::DistributionFamily;
use crate::types::{Result, UqError};

/// Contract shared by every distribution family.
///
/// Implementors provide the analytical kernel on the interior of the
/// support (`density`, `probability`, `quantile`); the provided methods
/// (`pdf`, `cdf`, `icdf`) add the boundary behaviour common to all
/// families.
///
/// # Contract
///
/// - `pdf(x)` is `0` outside `[lo, hi]` and at `±inf`, finite and
///   nonnegative inside
/// - `cdf(x)` is `0` at or below `lo`, `1` at or above `hi`, nondecreasing
/// - `icdf(p)` fails with `UqError::Domain` unless `p ∈ [0, 1]`;
///   `icdf(0) == lo` and `icdf(1) == hi` exactly
/// - `cdf(icdf(p)) ≈ p` and `icdf(cdf(x)) ≈ x` on the interior
///
/// NaN arguments to `pdf`/`cdf` propagate as NaN.
///
/// # Example
///
/// ```
/// use uqtf_core::distributions::{Exponential, UnivariateDistribution};
///
/// let dist = Exponential::new(2.0).unwrap();
/// assert_eq!(dist.pdf(0.0), 2.0);
/// assert_eq!(dist.cdf(-1.0), 0.0);
/// assert!((dist.icdf(0.5).unwrap() - 0.5_f64.ln().abs() / 2.0).abs() < 1e-12);
/// ```
pub trait UnivariateDistribution {
    /// Family tag of the distribution.
    fn family(&self) -> DistributionFamily;

    /// Parameters in construction order.
    fn parameters(&self) -> Vec<f64>;

    /// Support interval `(lo, hi)`, possibly infinite.
    fn support(&self) -> (f64, f64);

    /// Density for `x` within the closed support.
    fn density(&self, x: f64) -> f64;

    /// Distribution function for `x` strictly inside the support.
    fn probability(&self, x: f64) -> f64;

    /// Quantile for `p` strictly inside `(0, 1)`.
    fn quantile(&self, p: f64) -> Result<f64>;

    /// Probability density function.
    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let (lo, hi) = self.support();
        if x < lo || x > hi || x.is_infinite() {
            0.0
        } else {
            self.density(x)
        }
    }

    /// Cumulative distribution function.
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let (lo, hi) = self.support();
        if x <= lo {
            0.0
        } else if x >= hi {
            1.0
        } else {
            self.probability(x).clamp(0.0, 1.0)
        }
    }

    /// Inverse cumulative distribution function (quantile function).
    fn icdf(&self, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(UqError::probability_out_of_range(p));
        }
        let (lo, hi) = self.support();
        if p == 0.0 {
            return Ok(lo);
        }
        if p == 1.0 {
            return Ok(hi);
        }
        Ok(self.quantile(p)?.clamp(lo, hi))
    }
}

/// Parameter validation helpers shared by the family constructors.
pub(crate) mod validate {
    use super::DistributionFamily;
    use crate::types::{Result, UqError};

    pub(crate) fn finite(family: DistributionFamily, name: &str, value: f64) -> Result<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(UqError::invalid_parameter(
                family.as_str(),
                format!("{} must be finite, got {}", name, value),
            ))
        }
    }

    pub(crate) fn positive(family: DistributionFamily, name: &str, value: f64) -> Result<()> {
        finite(family, name, value)?;
        if value > 0.0 {
            Ok(())
        } else {
            Err(UqError::invalid_parameter(
                family.as_str(),
                format!("{} must be > 0, got {}", name, value),
            ))
        }
    }

    pub(crate) fn ordered_bounds(family: DistributionFamily, lower: f64, upper: f64) -> Result<()> {
        finite(family, "lower bound", lower)?;
        finite(family, "upper bound", upper)?;
        if lower < upper {
            Ok(())
        } else {
            Err(UqError::invalid_parameter(
                family.as_str(),
                format!(
                    "lower bound must be < upper bound, got [{}, {}]",
                    lower, upper
                ),
            ))
        }
    }

    pub(crate) fn within_bounds(
        family: DistributionFamily,
        name: &str,
        value: f64,
        lower: f64,
        upper: f64,
    ) -> Result<()> {
        finite(family, name, value)?;
        if (lower..=upper).contains(&value) {
            Ok(())
        } else {
            Err(UqError::invalid_parameter(
                family.as_str(),
                format!(
                    "{} must lie within [{}, {}], got {}",
                    name, lower, upper, value
                ),
            ))
        }
    }
}

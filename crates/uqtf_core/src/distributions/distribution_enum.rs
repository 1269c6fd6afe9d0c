//! Static dispatch enum over the supported distribution families.
//!
//! This module provides:
//! - [`Distribution`]: closed enum wrapping one validated kernel per family
//!
//! The set of families is closed; adding one means adding a variant here and
//! letting the compiler point at every `match` that needs an arm.

use super::{
    Beta, DistributionFamily, Exponential, Gumbel, LogNormal, LogitNormal, Normal, Triangular,
    TruncExponential, TruncGumbel, TruncNormal, Uniform, UnivariateDistribution,
};
use crate::types::{Result, UqError};
use std::fmt;

/// Static dispatch enum wrapping concrete distribution kernels.
///
/// # Example
///
/// ```
/// use uqtf_core::distributions::{Distribution, DistributionFamily, UnivariateDistribution};
///
/// let dist = Distribution::new(DistributionFamily::Gumbel, &[0.0, 1.0]).unwrap();
/// assert_eq!(dist.family(), DistributionFamily::Gumbel);
/// assert_eq!(dist.to_string(), "gumbel(mu=0, beta=1)");
///
/// let err = Distribution::from_name("exponential", &[1.0, 2.0]).unwrap_err();
/// assert!(err.to_string().contains("expects 1 parameters, got 2"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    /// Continuous uniform
    Uniform(Uniform),
    /// Normal
    Normal(Normal),
    /// Truncated normal
    TruncNormal(TruncNormal),
    /// Log-normal
    LogNormal(LogNormal),
    /// Logit-normal
    LogitNormal(LogitNormal),
    /// Exponential
    Exponential(Exponential),
    /// Truncated exponential
    TruncExponential(TruncExponential),
    /// Gumbel (maximum)
    Gumbel(Gumbel),
    /// Truncated Gumbel (maximum)
    TruncGumbel(TruncGumbel),
    /// Beta on `[lower, upper]`
    Beta(Beta),
    /// Triangular
    Triangular(Triangular),
}

macro_rules! dispatch {
    ($self:expr, $dist:ident => $body:expr) => {
        match $self {
            Distribution::Uniform($dist) => $body,
            Distribution::Normal($dist) => $body,
            Distribution::TruncNormal($dist) => $body,
            Distribution::LogNormal($dist) => $body,
            Distribution::LogitNormal($dist) => $body,
            Distribution::Exponential($dist) => $body,
            Distribution::TruncExponential($dist) => $body,
            Distribution::Gumbel($dist) => $body,
            Distribution::TruncGumbel($dist) => $body,
            Distribution::Beta($dist) => $body,
            Distribution::Triangular($dist) => $body,
        }
    };
}

impl Distribution {
    /// Build a distribution from its family and ordered parameters.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the number of parameters does not match the
    /// family's arity or a family constraint is violated.
    pub fn new(family: DistributionFamily, parameters: &[f64]) -> Result<Self> {
        if parameters.len() != family.arity() {
            return Err(UqError::invalid_parameter(
                family.as_str(),
                format!(
                    "expects {} parameters, got {}",
                    family.arity(),
                    parameters.len()
                ),
            ));
        }

        let p = parameters;
        let dist = match family {
            DistributionFamily::Uniform => Uniform::new(p[0], p[1])?.into(),
            DistributionFamily::Normal => Normal::new(p[0], p[1])?.into(),
            DistributionFamily::TruncNormal => TruncNormal::new(p[0], p[1], p[2], p[3])?.into(),
            DistributionFamily::LogNormal => LogNormal::new(p[0], p[1])?.into(),
            DistributionFamily::LogitNormal => LogitNormal::new(p[0], p[1])?.into(),
            DistributionFamily::Exponential => Exponential::new(p[0])?.into(),
            DistributionFamily::TruncExponential => {
                TruncExponential::new(p[0], p[1], p[2])?.into()
            }
            DistributionFamily::Gumbel => Gumbel::new(p[0], p[1])?.into(),
            DistributionFamily::TruncGumbel => TruncGumbel::new(p[0], p[1], p[2], p[3])?.into(),
            DistributionFamily::Beta => Beta::new(p[0], p[1], p[2], p[3])?.into(),
            DistributionFamily::Triangular => Triangular::new(p[0], p[1], p[2])?.into(),
        };
        Ok(dist)
    }

    /// Build a distribution from a family name (canonical id or alias).
    ///
    /// # Errors
    ///
    /// `UnknownDistribution` for an unrecognised name, otherwise as
    /// [`Distribution::new`].
    pub fn from_name(name: &str, parameters: &[f64]) -> Result<Self> {
        let family: DistributionFamily = name.parse()?;
        Self::new(family, parameters)
    }
}

impl UnivariateDistribution for Distribution {
    fn family(&self) -> DistributionFamily {
        dispatch!(self, d => d.family())
    }

    fn parameters(&self) -> Vec<f64> {
        dispatch!(self, d => d.parameters())
    }

    fn support(&self) -> (f64, f64) {
        dispatch!(self, d => d.support())
    }

    fn density(&self, x: f64) -> f64 {
        dispatch!(self, d => d.density(x))
    }

    fn probability(&self, x: f64) -> f64 {
        dispatch!(self, d => d.probability(x))
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        dispatch!(self, d => d.quantile(p))
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = self.family();
        write!(f, "{}(", family)?;
        for (i, (name, value)) in family
            .parameter_names()
            .iter()
            .zip(self.parameters())
            .enumerate()
        {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        write!(f, ")")
    }
}

macro_rules! impl_from_kernel {
    ($($kernel:ident),* $(,)?) => {
        $(
            impl From<$kernel> for Distribution {
                fn from(dist: $kernel) -> Self {
                    Distribution::$kernel(dist)
                }
            }
        )*
    };
}

impl_from_kernel!(
    Uniform,
    Normal,
    TruncNormal,
    LogNormal,
    LogitNormal,
    Exponential,
    TruncExponential,
    Gumbel,
    TruncGumbel,
    Beta,
    Triangular,
);

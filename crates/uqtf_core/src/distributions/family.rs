//! Distribution family identifiers.

use crate::types::UqError;
use std::str::FromStr;

/// Closed set of supported distribution families.
///
/// Each family has a canonical identifier (as accepted by
/// [`Marginal::new`](crate::prob_input::Marginal::new)), a fixed arity and
/// named parameters.
///
/// # Example
///
/// ```
/// use uqtf_core::distributions::DistributionFamily;
///
/// let family: DistributionFamily = "Gumbel-Max".parse().unwrap();
/// assert_eq!(family, DistributionFamily::Gumbel);
/// assert_eq!(family.as_str(), "gumbel");
/// assert_eq!(family.parameter_names(), &["mu", "beta"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DistributionFamily {
    /// Continuous uniform on `[lower, upper]`
    Uniform,
    /// Normal (Gaussian)
    Normal,
    /// Normal truncated to `[lower, upper]`
    TruncNormal,
    /// Log-normal, parametrised by the underlying normal
    LogNormal,
    /// Logit-normal, parametrised by the underlying normal
    LogitNormal,
    /// Exponential with rate λ
    Exponential,
    /// Exponential truncated to `[lower, upper]`
    TruncExponential,
    /// Gumbel (maximum), a.k.a. type I extreme value
    Gumbel,
    /// Gumbel (maximum) truncated to `[lower, upper]`
    TruncGumbel,
    /// Beta on `[lower, upper]`
    Beta,
    /// Triangular on `[lower, upper]` with a mode
    Triangular,
}

impl DistributionFamily {
    /// All supported families, in declaration order.
    pub const ALL: [DistributionFamily; 11] = [
        DistributionFamily::Uniform,
        DistributionFamily::Normal,
        DistributionFamily::TruncNormal,
        DistributionFamily::LogNormal,
        DistributionFamily::LogitNormal,
        DistributionFamily::Exponential,
        DistributionFamily::TruncExponential,
        DistributionFamily::Gumbel,
        DistributionFamily::TruncGumbel,
        DistributionFamily::Beta,
        DistributionFamily::Triangular,
    ];

    /// Canonical family identifier.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionFamily::Uniform => "uniform",
            DistributionFamily::Normal => "normal",
            DistributionFamily::TruncNormal => "trunc-normal",
            DistributionFamily::LogNormal => "lognormal",
            DistributionFamily::LogitNormal => "logitnormal",
            DistributionFamily::Exponential => "exponential",
            DistributionFamily::TruncExponential => "trunc-exponential",
            DistributionFamily::Gumbel => "gumbel",
            DistributionFamily::TruncGumbel => "trunc-gumbel",
            DistributionFamily::Beta => "beta",
            DistributionFamily::Triangular => "triangular",
        }
    }

    /// Ordered parameter names.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            DistributionFamily::Uniform => &["lower", "upper"],
            DistributionFamily::Normal
            | DistributionFamily::LogNormal
            | DistributionFamily::LogitNormal => &["mu", "sigma"],
            DistributionFamily::TruncNormal => &["mu", "sigma", "lower", "upper"],
            DistributionFamily::Exponential => &["rate"],
            DistributionFamily::TruncExponential => &["rate", "lower", "upper"],
            DistributionFamily::Gumbel => &["mu", "beta"],
            DistributionFamily::TruncGumbel => &["mu", "beta", "lower", "upper"],
            DistributionFamily::Beta => &["alpha", "beta", "lower", "upper"],
            DistributionFamily::Triangular => &["lower", "upper", "mode"],
        }
    }

    /// Number of parameters the family expects.
    #[inline]
    pub fn arity(&self) -> usize {
        self.parameter_names().len()
    }
}

impl std::fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DistributionFamily {
    type Err = UqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        match key.as_str() {
            "uniform" | "unif" => Ok(DistributionFamily::Uniform),
            "normal" | "gaussian" => Ok(DistributionFamily::Normal),
            "trunc-normal" | "truncnormal" | "truncated-normal" => {
                Ok(DistributionFamily::TruncNormal)
            }
            "lognormal" | "log-normal" => Ok(DistributionFamily::LogNormal),
            "logitnormal" | "logit-normal" => Ok(DistributionFamily::LogitNormal),
            "exponential" | "exp" => Ok(DistributionFamily::Exponential),
            "trunc-exponential" | "truncexponential" | "truncated-exponential" => {
                Ok(DistributionFamily::TruncExponential)
            }
            "gumbel" | "gumbel-max" | "gumbel-r" => Ok(DistributionFamily::Gumbel),
            "trunc-gumbel" | "truncgumbel" | "truncated-gumbel" => {
                Ok(DistributionFamily::TruncGumbel)
            }
            "beta" => Ok(DistributionFamily::Beta),
            "triangular" | "triang" => Ok(DistributionFamily::Triangular),
            _ => Err(UqError::UnknownDistribution(s.to_string())),
        }
    }
}

//! # Distribution Kernels
//!
//! Pure PDF/CDF/ICDF functions for a closed set of univariate families.
//!
//! ## Structure
//!
//! - [`UnivariateDistribution`]: the kernel contract with shared boundary
//!   handling
//! - One struct per family holding validated parameters
//! - [`Distribution`]: static dispatch enum over all families
//! - [`DistributionFamily`]: family tags, names and arity
//!
//! Every family except [`Beta`] has closed-form quantiles; the beta
//! quantile is found by bisection on the CDF.

mod beta;
mod distribution_enum;
mod exponential;
mod family;
mod gumbel;
mod lognormal;
mod normal;
mod traits;
mod uniform;

pub use beta::Beta;
pub use distribution_enum::Distribution;
pub use exponential::{Exponential, TruncExponential};
pub use family::DistributionFamily;
pub use gumbel::{Gumbel, TruncGumbel};
pub use lognormal::{LogNormal, LogitNormal};
pub use normal::{Normal, TruncNormal};
pub use traits::UnivariateDistribution;
pub use uniform::{Triangular, Uniform};

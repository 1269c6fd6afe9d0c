//! Mathematical building blocks for the distribution kernels.
//!
//! - [`special`]: normal CDF/PDF/quantile, logit, incomplete beta
//! - [`solvers`]: bisection root finder used for numerical quantile inversion

pub mod solvers;
pub mod special;

//! Special functions shared by the distribution kernels.
//!
//! Provides the standard normal density, distribution and quantile
//! functions, the logit/logistic pair, and the regularised incomplete beta
//! function. Error functions come from `statrs`.

use statrs::function::beta;
use statrs::function::erf::{erfc, erfc_inv};

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal probability density function.
///
/// # Examples
/// ```
/// use uqtf_core::math::special::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(z: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Standard normal cumulative distribution function.
///
/// Computed as `0.5 * erfc(-z / sqrt(2))`, which keeps full relative
/// precision in the lower tail.
///
/// # Examples
/// ```
/// use uqtf_core::math::special::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / std::f64::consts::SQRT_2)
}

/// Standard normal quantile function Φ⁻¹(p).
///
/// Returns `-inf` at `p = 0` and `+inf` at `p = 1`. The caller is
/// responsible for checking `p ∈ [0, 1]`.
///
/// # Examples
/// ```
/// use uqtf_core::math::special::norm_ppf;
///
/// assert_eq!(norm_ppf(0.5), 0.0);
/// assert!((norm_ppf(0.975) - 1.959963984540054).abs() < 1e-12);
/// ```
#[inline]
pub fn norm_ppf(p: f64) -> f64 {
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    -std::f64::consts::SQRT_2 * erfc_inv(2.0 * p)
}

/// Logit transform `ln(x / (1 - x))`.
#[inline]
pub fn logit(x: f64) -> f64 {
    (x / (1.0 - x)).ln()
}

/// Logistic (inverse logit) function `1 / (1 + exp(-x))`.
#[inline]
pub fn expit(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Distance from 0 or 1 below which `beta_reg` switches to its power series.
const BETA_SERIES_CUTOFF: f64 = 1e-8;

/// Regularised incomplete beta function I_x(a, b).
///
/// `x` is clamped to `[0, 1]`; `a` and `b` must be positive. Within
/// `1e-8` of either end the power series is summed directly, since
/// `statrs` flushes arguments below machine epsilon to zero.
///
/// # Examples
/// ```
/// use uqtf_core::math::special::beta_reg;
///
/// // Arcsine law: I_x(1/2, 1/2) = 2 asin(sqrt(x)) / pi
/// let p = beta_reg(0.5, 0.5, 1e-16);
/// assert!((p - 2.0e-8 / std::f64::consts::PI).abs() < 1e-20);
/// ```
#[inline]
pub fn beta_reg(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    if x < BETA_SERIES_CUTOFF {
        return beta_reg_series(a, b, x).min(1.0);
    }
    let tail = 1.0 - x;
    if tail < BETA_SERIES_CUTOFF {
        return (1.0 - beta_reg_series(b, a, tail)).max(0.0);
    }
    beta::beta_reg(a, b, x)
}

/// `x^a / B(a, b) * sum_n (1 - b)_n x^n / (n! (a + n))`, for small `x`.
fn beta_reg_series(a: f64, b: f64, x: f64) -> f64 {
    let mut coeff = 1.0;
    let mut sum = 1.0 / a;
    for n in 1..32_u32 {
        let n = f64::from(n);
        coeff *= (n - b) / n * x;
        let term = coeff / (a + n);
        sum += term;
        if term.abs() <= f64::EPSILON * sum.abs() {
            break;
        }
    }
    (a * x.ln() - ln_beta(a, b)).exp() * sum
}

/// Natural logarithm of the beta function B(a, b).
#[inline]
pub fn ln_beta(a: f64, b: f64) -> f64 {
    beta::ln_beta(a, b)
}

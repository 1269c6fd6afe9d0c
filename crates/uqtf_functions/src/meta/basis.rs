//! Univariate basis functions of Becker's (2020) metafunction.

use std::f64::consts::{E, PI};
use std::fmt;

/// Shape applied to one input before the effect terms are multiplied out.
///
/// Every shape is meant for inputs on the unit interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisFunction {
    /// `x`
    Linear,
    /// `x^2`
    Quadratic,
    /// `x^3`
    Cubic,
    /// `(exp(x) - 1) / (e - 1)`
    Exponential,
    /// `sin(2 pi x) / 2`
    Periodic,
    /// `1` above one half, `0` otherwise
    Discontinuous,
    /// `4 (x - 1/2)^2`
    NonMonotonic,
    /// `1 / ((10 - 1/1.1) (x + 0.1))`
    Inverse,
    /// `0`
    NoEffect,
    /// `cos(x)`
    Trigonometric,
}

impl BasisFunction {
    /// All shapes, in catalogue order.
    pub const ALL: [BasisFunction; 10] = [
        BasisFunction::Linear,
        BasisFunction::Quadratic,
        BasisFunction::Cubic,
        BasisFunction::Exponential,
        BasisFunction::Periodic,
        BasisFunction::Discontinuous,
        BasisFunction::NonMonotonic,
        BasisFunction::Inverse,
        BasisFunction::NoEffect,
        BasisFunction::Trigonometric,
    ];

    /// Short identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            BasisFunction::Linear => "linear",
            BasisFunction::Quadratic => "quadratic",
            BasisFunction::Cubic => "cubic",
            BasisFunction::Exponential => "exponential",
            BasisFunction::Periodic => "periodic",
            BasisFunction::Discontinuous => "discontinuous",
            BasisFunction::NonMonotonic => "non-monotonic",
            BasisFunction::Inverse => "inverse",
            BasisFunction::NoEffect => "no-effect",
            BasisFunction::Trigonometric => "trigonometric",
        }
    }

    /// Evaluate the shape at `x`.
    ///
    /// # Example
    ///
    /// ```
    /// use uqtf_functions::meta::BasisFunction;
    ///
    /// assert_eq!(BasisFunction::NonMonotonic.apply(0.5), 0.0);
    /// assert_eq!(BasisFunction::Discontinuous.apply(0.75), 1.0);
    /// ```
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            BasisFunction::Linear => x,
            BasisFunction::Quadratic => x * x,
            BasisFunction::Cubic => x * x * x,
            BasisFunction::Exponential => x.exp_m1() / (E - 1.0),
            BasisFunction::Periodic => (2.0 * PI * x).sin() / 2.0,
            BasisFunction::Discontinuous => {
                if x > 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            BasisFunction::NonMonotonic => 4.0 * (x - 0.5) * (x - 0.5),
            BasisFunction::Inverse => 1.0 / ((10.0 - 1.0 / 1.1) * (x + 0.1)),
            BasisFunction::NoEffect => 0.0,
            BasisFunction::Trigonometric => x.cos(),
        }
    }
}

impl fmt::Display for BasisFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

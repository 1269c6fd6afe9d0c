//! Linear screening functions from Linkletter et al. (2006).
//!
//! Both are defined on ten inputs, of which only some are active.

use crate::input_spec::{MarginalSpec, ProbInputSpec};
use crate::traits::{impl_display_via_summary, TestFunction};
use ndarray::{Array1, ArrayView2};

const AVAILABLE_INPUTS: &[&str] = &["Linkletter2006"];
const TAGS: &[&str] = &["sensitivity"];
const DIMENSION: usize = 10;

fn linkletter_input() -> ProbInputSpec {
    ProbInputSpec::new(
        "Linkletter2006",
        "Input specification for the test functions from Linkletter et al. (2006)",
        (1..=DIMENSION)
            .map(|i| MarginalSpec::uniform(format!("x_{}", i), 0.0, 1.0))
            .collect(),
    )
}

/// `f(x) = 0.2 (x1 + x2 + x3 + x4)`; `x5..x10` are inert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkletterLinear;

impl LinkletterLinear {
    /// Create the function with its default input.
    pub fn new() -> Self {
        Self
    }
}

impl TestFunction for LinkletterLinear {
    fn name(&self) -> &'static str {
        "LinkletterLinear"
    }

    fn description(&self) -> &'static str {
        "Simple linear function from Linkletter et al. (2006)"
    }

    fn tags(&self) -> &'static [&'static str] {
        TAGS
    }

    fn available_inputs(&self) -> &'static [&'static str] {
        AVAILABLE_INPUTS
    }

    fn input_selection(&self) -> &'static str {
        AVAILABLE_INPUTS[0]
    }

    fn input_spec(&self) -> ProbInputSpec {
        linkletter_input()
    }

    fn spatial_dimension(&self) -> usize {
        DIMENSION
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        xx.slice(ndarray::s![.., ..4]).sum_axis(ndarray::Axis(1)) * 0.2
    }
}

/// `f(x) = Σ_{j=1}^{8} 0.2 / 2^{j-1} x_j`; `x9` and `x10` are inert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkletterDecCoeffs;

impl LinkletterDecCoeffs {
    /// Create the function with its default input.
    pub fn new() -> Self {
        Self
    }
}

impl TestFunction for LinkletterDecCoeffs {
    fn name(&self) -> &'static str {
        "LinkletterDecCoeffs"
    }

    fn description(&self) -> &'static str {
        "Linear function with decreasing coefficients from Linkletter et al. (2006)"
    }

    fn tags(&self) -> &'static [&'static str] {
        TAGS
    }

    fn available_inputs(&self) -> &'static [&'static str] {
        AVAILABLE_INPUTS
    }

    fn input_selection(&self) -> &'static str {
        AVAILABLE_INPUTS[0]
    }

    fn input_spec(&self) -> ProbInputSpec {
        linkletter_input()
    }

    fn spatial_dimension(&self) -> usize {
        DIMENSION
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        let coeffs = Array1::from_iter((0..8).map(|j| 0.2 / 2f64.powi(j)));
        xx.slice(ndarray::s![.., ..8]).dot(&coeffs)
    }
}

impl_display_via_summary!(LinkletterLinear, LinkletterDecCoeffs);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    #[test]
    fn test_linear_on_ones() {
        let yy = LinkletterLinear::new().evaluate(Array2::ones((2, 10)).view()).unwrap();
        assert_relative_eq!(yy[0], 0.8, epsilon = 1e-15);
        assert_relative_eq!(yy[1], 0.8, epsilon = 1e-15);
    }

    #[test]
    fn test_dec_coeffs_on_ones() {
        let yy = LinkletterDecCoeffs::new()
            .evaluate(Array2::ones((1, 10)).view())
            .unwrap();
        // 0.2 * (1 - 2^-8) / (1 - 1/2)
        assert_relative_eq!(yy[0], 0.4 * (1.0 - 1.0 / 256.0), epsilon = 1e-14);
    }

    #[test]
    fn test_inactive_columns() {
        let mut xx = Array2::from_elem((1, 10), 0.5);
        let linear = LinkletterLinear::new().evaluate(xx.view()).unwrap()[0];
        let dec = LinkletterDecCoeffs::new().evaluate(xx.view()).unwrap()[0];
        xx[[0, 8]] = 0.0;
        xx[[0, 9]] = 1.0;
        assert_eq!(LinkletterLinear::new().evaluate(xx.view()).unwrap()[0], linear);
        assert_eq!(LinkletterDecCoeffs::new().evaluate(xx.view()).unwrap()[0], dec);
    }
}

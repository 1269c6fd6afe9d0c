//! Twenty-dimensional screening function from Welch et al. (1992).

use crate::input_spec::{MarginalSpec, ProbInputSpec};
use crate::traits::{impl_display_via_summary, TestFunction};
use ndarray::{Array1, ArrayView2, Zip};

const AVAILABLE_INPUTS: &[&str] = &["Welch1992"];
const DIMENSION: usize = 20;

/// Coefficients of the terms linear in a single input.
const LINEAR_COEFFS: [f64; DIMENSION] = [
    0.0, 0.05, 0.08, 0.0, 1.0, -0.03, 0.03, 0.0, -0.09, -0.01,
    -0.07, 0.0, 0.0, -0.04, 0.06, 0.0, -0.01, -0.03, -5.0, 0.0,
];

/// Welch et al. (1992) screening function.
///
/// Twenty inputs on `[-0.5, 0.5]`; `x8` and `x16` are inert, several others
/// enter only through small linear terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Welch1992;

impl Welch1992 {
    /// Create the function with its default input.
    pub fn new() -> Self {
        Self
    }
}

impl TestFunction for Welch1992 {
    fn name(&self) -> &'static str {
        "Welch1992"
    }

    fn description(&self) -> &'static str {
        "20-Dimensional function from Welch et al. (1992)"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["metamodeling", "sensitivity", "integration"]
    }

    fn available_inputs(&self) -> &'static [&'static str] {
        AVAILABLE_INPUTS
    }

    fn input_selection(&self) -> &'static str {
        AVAILABLE_INPUTS[0]
    }

    fn input_spec(&self) -> ProbInputSpec {
        ProbInputSpec::new(
            "Welch1992",
            "Input specification for the test function from Welch et al. (1992)",
            (1..=DIMENSION)
                .map(|i| MarginalSpec::uniform(format!("x{}", i), -0.5, 0.5))
                .collect(),
        )
    }

    fn spatial_dimension(&self) -> usize {
        DIMENSION
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        let mut yy = xx.dot(&Array1::from(LINEAR_COEFFS.to_vec()));
        Zip::from(&mut yy)
            .and(xx.column(0))
            .and(xx.column(11))
            .and(xx.column(3))
            .and(xx.column(19))
            .for_each(|y, &x1, &x12, &x4, &x20| {
                *y += 5.0 * x12 / (1.0 + x1) + 5.0 * (x4 - x20).powi(2);
            });
        Zip::from(&mut yy)
            .and(xx.column(18))
            .and(xx.column(12))
            .for_each(|y, &x19, &x13| *y += 40.0 * x19.powi(3) + 0.25 * x13.powi(2));
        yy
    }
}

impl_display_via_summary!(Welch1992);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    #[test]
    fn test_origin_is_zero() {
        let yy = Welch1992::new().evaluate(Array2::zeros((1, 20)).view()).unwrap();
        assert_eq!(yy[0], 0.0);
    }

    #[test]
    fn test_single_terms() {
        let mut xx = Array2::zeros((3, 20));
        xx[[0, 11]] = 0.5;
        xx[[1, 18]] = 0.5;
        xx[[2, 3]] = 0.5;
        xx[[2, 19]] = -0.5;
        let yy = Welch1992::new().evaluate(xx.view()).unwrap();
        assert_relative_eq!(yy[0], 2.5, epsilon = 1e-15);
        assert_relative_eq!(yy[1], 40.0 * 0.125 - 2.5, epsilon = 1e-15);
        assert_relative_eq!(yy[2], 5.0, epsilon = 1e-15);
    }

    #[test]
    fn test_inert_columns() {
        let mut xx = Array2::from_elem((1, 20), 0.1);
        let base = Welch1992::new().evaluate(xx.view()).unwrap()[0];
        xx[[0, 7]] = -0.4;
        xx[[0, 15]] = 0.4;
        assert_eq!(Welch1992::new().evaluate(xx.view()).unwrap()[0], base);
    }
}

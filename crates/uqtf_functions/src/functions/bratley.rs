//! Integration test function from Bratley et al. (1992).

use crate::error::FunctionError;
use crate::input_spec::{uniform_marginals, ProbInputSpec};
use crate::traits::{impl_display_via_summary, TestFunction};
use ndarray::{Array1, ArrayView2};

const AVAILABLE_INPUTS: &[&str] = &["Bratley1992"];

/// Dimension used when none is requested.
pub const DEFAULT_DIMENSION: usize = 2;

/// `f(x) = Σ_{i=1}^{d} (-1)^i Π_{k=1}^{i} x_k` on `[0, 1]^d`.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use uqtf_functions::functions::Bratley1992d;
/// use uqtf_functions::TestFunction;
///
/// let f = Bratley1992d::new(1).unwrap();
/// assert_eq!(f.evaluate(array![[0.5]].view()).unwrap()[0], -0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bratley1992d {
    dimension: usize,
}

impl Bratley1992d {
    /// Create the function in `dimension` variables.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `dimension` is zero.
    pub fn new(dimension: usize) -> Result<Self, FunctionError> {
        if dimension == 0 {
            return Err(FunctionError::InvalidDimension {
                function: "Bratley1992d".to_string(),
                reason: "dimension must be at least 1".to_string(),
            });
        }
        Ok(Self { dimension })
    }
}

impl Default for Bratley1992d {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }
}

impl TestFunction for Bratley1992d {
    fn name(&self) -> &'static str {
        "Bratley1992d"
    }

    fn description(&self) -> &'static str {
        "Integration test function from Bratley et al. (1992)"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["integration", "sensitivity"]
    }

    fn available_inputs(&self) -> &'static [&'static str] {
        AVAILABLE_INPUTS
    }

    fn input_selection(&self) -> &'static str {
        AVAILABLE_INPUTS[0]
    }

    fn input_spec(&self) -> ProbInputSpec {
        ProbInputSpec::new(
            "Bratley1992",
            "Integration domain of the functions from Bratley et al. (1992)",
            uniform_marginals(self.dimension, 0.0, 1.0),
        )
    }

    fn spatial_dimension(&self) -> usize {
        self.dimension
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        let mut product = Array1::<f64>::ones(xx.nrows());
        let mut yy = Array1::<f64>::zeros(xx.nrows());
        for (j, column) in xx.columns().into_iter().enumerate() {
            product *= &column;
            let sign = if j % 2 == 0 { -1.0 } else { 1.0 };
            yy.scaled_add(sign, &product);
        }
        yy
    }
}

impl_display_via_summary!(Bratley1992d);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array2};

    #[test]
    fn test_alternating_products() {
        let f = Bratley1992d::new(3).unwrap();
        let yy = f.evaluate(array![[0.5, 0.5, 0.5], [1.0, 1.0, 1.0]].view()).unwrap();
        assert_relative_eq!(yy[0], -0.5 + 0.25 - 0.125, epsilon = 1e-15);
        assert_eq!(yy[1], -1.0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Bratley1992d::new(0),
            Err(FunctionError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_default_dimension() {
        let f = Bratley1992d::default();
        assert_eq!(f.spatial_dimension(), 2);
        assert_eq!(f.prob_input(None).unwrap().spatial_dimension(), 2);
    }

    #[test]
    fn test_column_check_uses_dimension() {
        let f = Bratley1992d::new(5).unwrap();
        assert!(f.evaluate(Array2::zeros((2, 4)).view()).is_err());
        assert_eq!(f.evaluate(Array2::zeros((2, 5)).view()).unwrap(), array![0.0, 0.0]);
    }
}

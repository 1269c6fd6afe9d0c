//! One-dimensional damped sine from Holsclaw et al. (2013).

use crate::input_spec::{MarginalSpec, ProbInputSpec};
use crate::traits::{impl_display_via_summary, TestFunction};
use ndarray::{Array1, ArrayView2};

const AVAILABLE_INPUTS: &[&str] = &["Holsclaw2013"];

/// `f(x) = x sin(x) / 10` on `[0, 10]`.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use uqtf_functions::functions::HolsclawSine;
/// use uqtf_functions::TestFunction;
///
/// let yy = HolsclawSine::new().evaluate(array![[0.0], [10.0]].view()).unwrap();
/// assert_eq!(yy[0], 0.0);
/// assert!((yy[1] - 10.0_f64.sin()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HolsclawSine;

impl HolsclawSine {
    /// Create the function with its default input.
    pub fn new() -> Self {
        Self
    }
}

impl TestFunction for HolsclawSine {
    fn name(&self) -> &'static str {
        "HolsclawSine"
    }

    fn description(&self) -> &'static str {
        "Sine function from Holsclaw et al. (2013)"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["metamodeling"]
    }

    fn available_inputs(&self) -> &'static [&'static str] {
        AVAILABLE_INPUTS
    }

    fn input_selection(&self) -> &'static str {
        AVAILABLE_INPUTS[0]
    }

    fn input_spec(&self) -> ProbInputSpec {
        ProbInputSpec::new(
            "Holsclaw2013",
            "Input specification for the sine function from Holsclaw et al. (2013)",
            vec![MarginalSpec::uniform("x", 0.0, 10.0)],
        )
    }

    fn spatial_dimension(&self) -> usize {
        1
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        xx.column(0).mapv(|x| x * x.sin() / 10.0)
    }
}

impl_display_via_summary!(HolsclawSine);

//! One-dimensional function from Forrester et al. (2008).

use crate::input_spec::{MarginalSpec, ProbInputSpec};
use crate::traits::{impl_display_via_summary, TestFunction};
use ndarray::{Array1, ArrayView2};

const AVAILABLE_INPUTS: &[&str] = &["Forrester2008"];

/// `f(x) = (6x - 2)² sin(12x - 4)` on `[0, 1]`.
///
/// Multimodal with one global minimum, one local minimum and a
/// zero-gradient inflection point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Forrester2008;

impl Forrester2008 {
    /// Create the function with its default input.
    pub fn new() -> Self {
        Self
    }
}

impl TestFunction for Forrester2008 {
    fn name(&self) -> &'static str {
        "Forrester2008"
    }

    fn description(&self) -> &'static str {
        "One-dimensional function from Forrester et al. (2008)"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["optimization", "metamodeling"]
    }

    fn available_inputs(&self) -> &'static [&'static str] {
        AVAILABLE_INPUTS
    }

    fn input_selection(&self) -> &'static str {
        AVAILABLE_INPUTS[0]
    }

    fn input_spec(&self) -> ProbInputSpec {
        ProbInputSpec::new(
            "Forrester2008",
            "Input specification for the 1D test function from Forrester et al. (2008)",
            vec![MarginalSpec::uniform("x", 0.0, 1.0)],
        )
    }

    fn spatial_dimension(&self) -> usize {
        1
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        xx.column(0)
            .mapv(|x| (6.0 * x - 2.0).powi(2) * (12.0 * x - 4.0).sin())
    }
}

impl_display_via_summary!(Forrester2008);

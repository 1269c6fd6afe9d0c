//! The second and third test functions from Franke (1979).

use crate::input_spec::{uniform_marginals, ProbInputSpec};
use crate::traits::{impl_display_via_summary, TestFunction};
use ndarray::{Array1, ArrayView2, Zip};

const AVAILABLE_INPUTS: &[&str] = &["Franke1979"];

fn franke_input(which: &str) -> ProbInputSpec {
    ProbInputSpec::new(
        "Franke1979",
        format!(
            "Input specification for the ({}) Franke function from Franke (1979)",
            which
        ),
        uniform_marginals(2, 0.0, 1.0),
    )
}

/// Second Franke function: a cliff, adapted from McLain S5.
///
/// `f(x1, x2) = (tanh(9 (x2 - x1)) + 1) / 9`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Franke2;

impl Franke2 {
    /// Create the function with its default input.
    pub fn new() -> Self {
        Self
    }
}

impl TestFunction for Franke2 {
    fn name(&self) -> &'static str {
        "Franke2"
    }

    fn description(&self) -> &'static str {
        "(Second) Franke function from Franke (1979)"
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
        franke_input("second")
    }

    fn spatial_dimension(&self) -> usize {
        2
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        Zip::from(xx.column(0))
            .and(xx.column(1))
            .map_collect(|&x1, &x2| ((9.0 * (x2 - x1)).tanh() + 1.0) / 9.0)
    }
}

/// Third Franke function: a saddle.
///
/// `f(x1, x2) = (1.25 + cos(5.4 x2)) / (6 (1 + (3 x1 - 1)²))`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Franke3;

impl Franke3 {
    /// Create the function with its default input.
    pub fn new() -> Self {
        Self
    }
}

impl TestFunction for Franke3 {
    fn name(&self) -> &'static str {
        "Franke3"
    }

    fn description(&self) -> &'static str {
        "(Third) Franke function from Franke (1979)"
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
        franke_input("third")
    }

    fn spatial_dimension(&self) -> usize {
        2
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        Zip::from(xx.column(0))
            .and(xx.column(1))
            .map_collect(|&x1, &x2| {
                (1.25 + (5.4 * x2).cos()) / (6.0 * (1.0 + (3.0 * x1 - 1.0).powi(2)))
            })
    }
}

impl_display_via_summary!(Franke2, Franke3);

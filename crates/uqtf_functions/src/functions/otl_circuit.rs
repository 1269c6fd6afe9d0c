//! Output transformerless (OTL) push-pull circuit.
//!
//! Six inputs for metamodeling (Ben-Ari and Steinberg, 2007); Moon (2010)
//! appends fourteen inert inputs for screening.

use crate::error::FunctionError;
use crate::input_spec::{inert_marginals, resolve_selection, MarginalSpec, ProbInputSpec};
use crate::traits::{impl_display_via_summary, TestFunction};
use ndarray::{Array1, ArrayView2, Zip};

const AVAILABLE_INPUTS: &[&str] = &["BenAri2007", "Moon2010"];

fn circuit_marginals() -> Vec<MarginalSpec> {
    vec![
        MarginalSpec::uniform("Rb1", 50.0, 150.0).with_description("Resistance b1 [kOhm]"),
        MarginalSpec::uniform("Rb2", 25.0, 70.0).with_description("Resistance b2 [kOhm]"),
        MarginalSpec::uniform("Rf", 0.5, 3.0).with_description("Resistance f [kOhm]"),
        MarginalSpec::uniform("Rc1", 1.2, 2.5).with_description("Resistance c1 [kOhm]"),
        MarginalSpec::uniform("Rc2", 0.25, 1.2).with_description("Resistance c2 [kOhm]"),
        MarginalSpec::uniform("beta", 50.0, 300.0).with_description("Current gain [A]"),
    ]
}

/// Mid-point voltage of an OTL push-pull circuit, in volt.
///
/// # Example
///
/// ```
/// use uqtf_functions::functions::OTLCircuit;
/// use uqtf_functions::TestFunction;
///
/// let screening = OTLCircuit::with_input("Moon2010").unwrap();
/// assert_eq!(screening.spatial_dimension(), 20);
/// assert_eq!(OTLCircuit::new().spatial_dimension(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OTLCircuit {
    selection: &'static str,
}

impl OTLCircuit {
    /// Create the function with the six-dimensional input.
    pub fn new() -> Self {
        Self {
            selection: AVAILABLE_INPUTS[0],
        }
    }

    /// Create the function with a named input selection.
    ///
    /// # Errors
    ///
    /// `UnknownInput` if `selection` is neither `BenAri2007` nor `Moon2010`.
    pub fn with_input(selection: &str) -> Result<Self, FunctionError> {
        Ok(Self {
            selection: resolve_selection("OTLCircuit", Some(selection), AVAILABLE_INPUTS)?,
        })
    }
}

impl Default for OTLCircuit {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFunction for OTLCircuit {
    fn name(&self) -> &'static str {
        "OTLCircuit"
    }

    fn description(&self) -> &'static str {
        "Output transformerless (OTL) circuit model from Ben-Ari and Steinberg (2007)"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["metamodeling", "sensitivity"]
    }

    fn available_inputs(&self) -> &'static [&'static str] {
        AVAILABLE_INPUTS
    }

    fn input_selection(&self) -> &'static str {
        self.selection
    }

    fn input_spec(&self) -> ProbInputSpec {
        if self.selection == "Moon2010" {
            ProbInputSpec::new(
                "Moon2010",
                "Input specification for the OTL circuit with 14 inert inputs from Moon (2010)",
                circuit_marginals().into_iter().chain(inert_marginals(14)).collect(),
            )
        } else {
            ProbInputSpec::new(
                "BenAri2007",
                "Input specification for the OTL circuit from Ben-Ari and Steinberg (2007)",
                circuit_marginals(),
            )
        }
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        let vb1 = Zip::from(xx.column(0))
            .and(xx.column(1))
            .map_collect(|&rb1, &rb2| 12.0 * rb1 / (rb1 + rb2));
        Zip::from(&vb1)
            .and(xx.column(2))
            .and(xx.column(3))
            .and(xx.column(4))
            .and(xx.column(5))
            .map_collect(|&vb1, &rf, &rc1, &rc2, &beta| {
                let gain = beta * (rc2 + 9.0);
                let denom = gain + rf;
                (vb1 + 0.74) * gain / denom + 11.35 * rf / denom + 0.74 * rf * gain / (rc1 * denom)
            })
    }
}

impl_display_via_summary!(OTLCircuit);

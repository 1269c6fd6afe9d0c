//! Piston simulation: cycle time of a piston moving within a cylinder.

use crate::error::FunctionError;
use crate::input_spec::{inert_marginals, resolve_selection, MarginalSpec, ProbInputSpec};
use crate::traits::{impl_display_via_summary, TestFunction};
use ndarray::{Array1, ArrayView2, Zip};
use std::f64::consts::PI;

const AVAILABLE_INPUTS: &[&str] = &["BenAri2007", "Moon2010"];

fn piston_marginals() -> Vec<MarginalSpec> {
    vec![
        MarginalSpec::uniform("M", 30.0, 60.0).with_description("Piston weight [kg]"),
        MarginalSpec::uniform("S", 0.005, 0.020).with_description("Piston surface area [m^2]"),
        MarginalSpec::uniform("V0", 0.002, 0.010).with_description("Initial gas volume [m^3]"),
        MarginalSpec::uniform("k", 1000.0, 5000.0).with_description("Spring coefficient [N/m]"),
        MarginalSpec::uniform("P0", 90000.0, 110000.0)
            .with_description("Atmospheric pressure [N/m^2]"),
        MarginalSpec::uniform("Ta", 290.0, 296.0).with_description("Ambient temperature [K]"),
        MarginalSpec::uniform("T0", 340.0, 360.0).with_description("Filling gas temperature [K]"),
    ]
}

/// Piston cycle time, in seconds.
///
/// Seven physical inputs (Ben-Ari and Steinberg, 2007); the `Moon2010`
/// selection appends thirteen inert inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piston {
    selection: &'static str,
}

impl Piston {
    /// Create the function with the seven-dimensional input.
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
            selection: resolve_selection("Piston", Some(selection), AVAILABLE_INPUTS)?,
        })
    }
}

impl Default for Piston {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFunction for Piston {
    fn name(&self) -> &'static str {
        "Piston"
    }

    fn description(&self) -> &'static str {
        "Piston simulation model from Ben-Ari and Steinberg (2007)"
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
                "Input specification for the piston simulation with 13 inert inputs from Moon (2010)",
                piston_marginals().into_iter().chain(inert_marginals(13)).collect(),
            )
        } else {
            ProbInputSpec::new(
                "BenAri2007",
                "Input specification for the piston simulation from Ben-Ari and Steinberg (2007)",
                piston_marginals(),
            )
        }
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        let (m, s, v0, k, p0) = (
            xx.column(0),
            xx.column(1),
            xx.column(2),
            xx.column(3),
            xx.column(4),
        );
        // P0 V0 Ta / T0
        let pv = Zip::from(p0)
            .and(v0)
            .and(xx.column(5))
            .and(xx.column(6))
            .map_collect(|&p0, &v0, &ta, &t0| p0 * v0 * ta / t0);
        let force = Zip::from(p0)
            .and(s)
            .and(m)
            .and(k)
            .and(v0)
            .map_collect(|&p0, &s, &m, &k, &v0| p0 * s + 19.62 * m - k * v0 / s);
        Zip::from(&force)
            .and(&pv)
            .and(m)
            .and(s)
            .and(k)
            .map_collect(|&force, &pv, &m, &s, &k| {
                let force_diff = (force * force + 4.0 * k * pv).sqrt() - force;
                let volume = s / (2.0 * k) * force_diff;
                2.0 * PI * (m / (s * s * pv / (volume * volume))).sqrt()
            })
    }
}

impl_display_via_summary!(Piston);

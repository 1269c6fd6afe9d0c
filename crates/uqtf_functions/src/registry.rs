//! Lookup of test functions by name.
//!
//! [`AnyTestFunction`] is a closed enum over every shipped function, so
//! registry lookups dispatch statically like the concrete types do.

use crate::error::FunctionError;
use crate::functions::*;
use crate::input_spec::ProbInputSpec;
use crate::traits::TestFunction;
use ndarray::{Array1, ArrayView2};
use std::fmt;
use tracing::debug;

const FUNCTION_NAMES: &[&str] = &[
    "Bratley1992d",
    "DampedOscillator",
    "Forrester2008",
    "Franke2",
    "Franke3",
    "HolsclawSine",
    "LinkletterDecCoeffs",
    "LinkletterLinear",
    "McLainS1",
    "McLainS2",
    "McLainS3",
    "McLainS4",
    "McLainS5",
    "OTLCircuit",
    "Piston",
    "Welch1992",
];

/// Canonical names of all registered test functions, sorted.
pub fn list_functions() -> &'static [&'static str] {
    FUNCTION_NAMES
}

/// Any registered test function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum AnyTestFunction {
    Bratley1992d(Bratley1992d),
    DampedOscillator(DampedOscillator),
    Forrester2008(Forrester2008),
    Franke2(Franke2),
    Franke3(Franke3),
    HolsclawSine(HolsclawSine),
    LinkletterDecCoeffs(LinkletterDecCoeffs),
    LinkletterLinear(LinkletterLinear),
    McLainS1(McLainS1),
    McLainS2(McLainS2),
    McLainS3(McLainS3),
    McLainS4(McLainS4),
    McLainS5(McLainS5),
    OTLCircuit(OTLCircuit),
    Piston(Piston),
    Welch1992(Welch1992),
}

macro_rules! dispatch {
    ($self:expr, $f:ident => $body:expr) => {
        match $self {
            AnyTestFunction::Bratley1992d($f) => $body,
            AnyTestFunction::DampedOscillator($f) => $body,
            AnyTestFunction::Forrester2008($f) => $body,
            AnyTestFunction::Franke2($f) => $body,
            AnyTestFunction::Franke3($f) => $body,
            AnyTestFunction::HolsclawSine($f) => $body,
            AnyTestFunction::LinkletterDecCoeffs($f) => $body,
            AnyTestFunction::LinkletterLinear($f) => $body,
            AnyTestFunction::McLainS1($f) => $body,
            AnyTestFunction::McLainS2($f) => $body,
            AnyTestFunction::McLainS3($f) => $body,
            AnyTestFunction::McLainS4($f) => $body,
            AnyTestFunction::McLainS5($f) => $body,
            AnyTestFunction::OTLCircuit($f) => $body,
            AnyTestFunction::Piston($f) => $body,
            AnyTestFunction::Welch1992($f) => $body,
        }
    };
}

impl TestFunction for AnyTestFunction {
    fn name(&self) -> &'static str {
        dispatch!(self, f => f.name())
    }

    fn description(&self) -> &'static str {
        dispatch!(self, f => f.description())
    }

    fn tags(&self) -> &'static [&'static str] {
        dispatch!(self, f => f.tags())
    }

    fn available_inputs(&self) -> &'static [&'static str] {
        dispatch!(self, f => f.available_inputs())
    }

    fn input_selection(&self) -> &'static str {
        dispatch!(self, f => f.input_selection())
    }

    fn input_spec(&self) -> ProbInputSpec {
        dispatch!(self, f => f.input_spec())
    }

    fn spatial_dimension(&self) -> usize {
        dispatch!(self, f => f.spatial_dimension())
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        dispatch!(self, f => f.compute(xx))
    }
}

impl fmt::Display for AnyTestFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// Instantiate a test function by name.
///
/// Names match case-insensitively. `dimension` is required to agree with
/// fixed-dimension functions and sets the dimension of variable ones;
/// `input` picks an input selection, defaulting to the first available.
///
/// # Errors
///
/// - `UnknownTestFunction` for an unregistered name
/// - `InvalidDimension` if `dimension` cannot be honoured
/// - `UnknownInput` for a selection the function does not ship
///
/// # Example
///
/// ```
/// use uqtf_functions::{create_function, TestFunction};
///
/// let piston = create_function("piston", None, Some("Moon2010")).unwrap();
/// assert_eq!(piston.spatial_dimension(), 20);
///
/// let bratley = create_function("Bratley1992d", Some(6), None).unwrap();
/// assert_eq!(bratley.spatial_dimension(), 6);
/// ```
pub fn create_function(
    name: &str,
    dimension: Option<usize>,
    input: Option<&str>,
) -> Result<AnyTestFunction, FunctionError> {
    let canonical = FUNCTION_NAMES
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| FunctionError::UnknownTestFunction(name.to_string()))?;

    let function = match canonical {
        "Bratley1992d" => AnyTestFunction::Bratley1992d(Bratley1992d::new(
            dimension.unwrap_or(BRATLEY_DEFAULT_DIMENSION),
        )?),
        "DampedOscillator" => AnyTestFunction::DampedOscillator(DampedOscillator::new()),
        "Forrester2008" => AnyTestFunction::Forrester2008(Forrester2008::new()),
        "Franke2" => AnyTestFunction::Franke2(Franke2::new()),
        "Franke3" => AnyTestFunction::Franke3(Franke3::new()),
        "HolsclawSine" => AnyTestFunction::HolsclawSine(HolsclawSine::new()),
        "LinkletterDecCoeffs" => AnyTestFunction::LinkletterDecCoeffs(LinkletterDecCoeffs::new()),
        "LinkletterLinear" => AnyTestFunction::LinkletterLinear(LinkletterLinear::new()),
        "McLainS1" => AnyTestFunction::McLainS1(McLainS1::new()),
        "McLainS2" => AnyTestFunction::McLainS2(McLainS2::new()),
        "McLainS3" => AnyTestFunction::McLainS3(McLainS3::new()),
        "McLainS4" => AnyTestFunction::McLainS4(McLainS4::new()),
        "McLainS5" => AnyTestFunction::McLainS5(McLainS5::new()),
        "OTLCircuit" => AnyTestFunction::OTLCircuit(match input {
            Some(selection) => OTLCircuit::with_input(selection)?,
            None => OTLCircuit::new(),
        }),
        "Piston" => AnyTestFunction::Piston(match input {
            Some(selection) => Piston::with_input(selection)?,
            None => Piston::new(),
        }),
        "Welch1992" => AnyTestFunction::Welch1992(Welch1992::new()),
        _ => return Err(FunctionError::UnknownTestFunction(name.to_string())),
    };

    if let Some(selection) = input {
        if !function
            .available_inputs()
            .iter()
            .any(|available| available.eq_ignore_ascii_case(selection.trim()))
        {
            return Err(FunctionError::UnknownInput {
                function: canonical.to_string(),
                selection: selection.to_string(),
                available: function.available_inputs().join(", "),
            });
        }
    }

    if let Some(requested) = dimension {
        if requested != function.spatial_dimension() {
            return Err(FunctionError::InvalidDimension {
                function: canonical.to_string(),
                reason: format!(
                    "fixed dimension {}, requested {}",
                    function.spatial_dimension(),
                    requested
                ),
            });
        }
    }

    debug!(
        function = canonical,
        dimension = function.spatial_dimension(),
        input = function.input_selection(),
        "created test function"
    );
    Ok(function)
}

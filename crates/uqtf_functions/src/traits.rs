//! The test function contract.
//!
//! This module provides the [`TestFunction`] trait implemented by every
//! function in [`crate::functions`]. Implementors supply metadata, their
//! input declaration and the closed-form formula; shape checking, parallel
//! evaluation and the printable summary are provided.

use crate::error::FunctionError;
use crate::input_spec::ProbInputSpec;
use ndarray::parallel::prelude::*;
use ndarray::{Array1, ArrayView2, Axis};
use uqtf_core::prob_input::ProbInput;
use uqtf_core::types::UqError;

/// Rows handed to one worker by [`TestFunction::evaluate_parallel`].
pub const PARALLEL_CHUNK_ROWS: usize = 4096;

/// A deterministic mapping `R^{n×d} -> R^n` with a declared input model.
///
/// # Required Methods
///
/// - [`name`](TestFunction::name), [`description`](TestFunction::description),
///   [`tags`](TestFunction::tags): metadata
/// - [`available_inputs`](TestFunction::available_inputs),
///   [`input_selection`](TestFunction::input_selection),
///   [`input_spec`](TestFunction::input_spec): input declaration
/// - [`compute`](TestFunction::compute): the formula, on a matrix already
///   known to have `d` columns
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use uqtf_functions::functions::McLainS1;
/// use uqtf_functions::TestFunction;
///
/// let f = McLainS1::new();
/// let yy = f.evaluate(array![[5.5, 5.5]].view()).unwrap();
/// assert_eq!(yy[0], 8.0);
/// ```
pub trait TestFunction: Send + Sync {
    /// Canonical registry name.
    fn name(&self) -> &'static str;

    /// One-line description with provenance.
    fn description(&self) -> &'static str;

    /// Application tags, e.g. `"metamodeling"`.
    fn tags(&self) -> &'static [&'static str];

    /// Input selections the function ships with; the first is the default.
    fn available_inputs(&self) -> &'static [&'static str];

    /// Input selection this instance was built with.
    fn input_selection(&self) -> &'static str;

    /// Declaration of the selected input.
    fn input_spec(&self) -> ProbInputSpec;

    /// Evaluate the formula on a matrix with exactly
    /// [`spatial_dimension`](TestFunction::spatial_dimension) columns.
    ///
    /// Inputs outside the mathematical domain yield NaN.
    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64>;

    /// Default input selection.
    fn default_input(&self) -> &'static str {
        self.available_inputs()[0]
    }

    /// Number of input columns.
    fn spatial_dimension(&self) -> usize {
        self.input_spec().dimension()
    }

    /// Build the selected input, seeding its generator if `seed` is given.
    fn prob_input(&self, seed: Option<u64>) -> Result<ProbInput, FunctionError> {
        Ok(self.input_spec().build(seed)?)
    }

    /// Evaluate on an `n × d` matrix.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the column count differs from the declared
    /// dimension.
    fn evaluate(&self, xx: ArrayView2<'_, f64>) -> Result<Array1<f64>, UqError> {
        check_columns(self.spatial_dimension(), xx)?;
        Ok(self.compute(xx))
    }

    /// Evaluate on an `n × d` matrix, splitting rows across worker threads.
    ///
    /// Rows are independent, so the result equals [`evaluate`](TestFunction::evaluate).
    fn evaluate_parallel(&self, xx: ArrayView2<'_, f64>) -> Result<Array1<f64>, UqError> {
        check_columns(self.spatial_dimension(), xx)?;
        let parts: Vec<Array1<f64>> = xx
            .axis_chunks_iter(Axis(0), PARALLEL_CHUNK_ROWS)
            .into_par_iter()
            .map(|chunk| self.compute(chunk))
            .collect();
        Ok(parts.iter().flat_map(|part| part.iter().copied()).collect())
    }

    /// Printable summary: name, dimension, input and description.
    fn summary(&self) -> String {
        format!(
            "Name              : {}\n\
             Spatial dimension : {}\n\
             Input selection   : {}\n\
             Description       : {}",
            self.name(),
            self.spatial_dimension(),
            self.input_selection(),
            self.description()
        )
    }
}

fn check_columns(expected: usize, xx: ArrayView2<'_, f64>) -> Result<(), UqError> {
    if xx.ncols() == expected {
        Ok(())
    } else {
        Err(UqError::DimensionMismatch {
            expected,
            got: xx.ncols(),
        })
    }
}

/// Implement `Display` through [`TestFunction::summary`].
macro_rules! impl_display_via_summary {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", $crate::traits::TestFunction::summary(self))
                }
            }
        )*
    };
}

pub(crate) use impl_display_via_summary;

//! Error types for test function lookup and evaluation.

use thiserror::Error;
use uqtf_core::types::UqError;

/// Test function errors.
///
/// # Variants
/// - `UnknownTestFunction`: No registered function with that name
/// - `UnknownInput`: The function has no input selection with that name
/// - `InvalidDimension`: Requested dimension not supported by the function
/// - `Core`: Error raised by the input model or evaluation
///
/// # Examples
/// ```
/// use uqtf_functions::FunctionError;
///
/// let err = FunctionError::UnknownTestFunction("Ishigami".to_string());
/// assert_eq!(format!("{}", err), "Unknown test function: 'Ishigami'");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    /// No registered test function with this name.
    #[error("Unknown test function: '{0}'")]
    UnknownTestFunction(String),

    /// Input selection not available for the function.
    #[error("Unknown input selection '{selection}' for {function} (available: {available})")]
    UnknownInput {
        /// Test function name
        function: String,
        /// Requested selection
        selection: String,
        /// Comma separated list of valid selections
        available: String,
    },

    /// Requested dimension not supported.
    #[error("Invalid dimension for {function}: {reason}")]
    InvalidDimension {
        /// Test function name
        function: String,
        /// Why the dimension was rejected
        reason: String,
    },

    /// Error from the probabilistic input engine.
    #[error(transparent)]
    Core(#[from] UqError),
}

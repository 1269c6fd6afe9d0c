//! Error types for structured error handling.
//!
//! This module provides:
//! - `UqError`: Errors raised by distributions, marginals and input models
//! - `SolverError`: Errors from the numerical inversion solver
//!
//! All errors are raised at the point of violation. Nothing in the core
//! retries or silently coerces an invalid request.

use thiserror::Error;

/// Categorised errors of the probabilistic input engine.
///
/// # Variants
/// - `InvalidParameter`: Distribution parameters violate a family constraint
/// - `Domain`: Probability argument to an inverse CDF outside `[0, 1]`
/// - `DimensionMismatch`: Shape does not match the declared dimensionality
/// - `UnknownDistribution`: Unrecognised distribution family name
/// - `Convergence`: Numerical inversion exceeded its iteration budget
/// - `InvalidArgument`: Malformed argument (e.g. non-numeric text value)
///
/// # Examples
/// ```
/// use uqtf_core::types::UqError;
///
/// let err = UqError::invalid_parameter("exponential", "rate must be > 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter for 'exponential': rate must be > 0"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UqError {
    /// Parameters violate a family-specific constraint.
    #[error("Invalid parameter for '{distribution}': {reason}")]
    InvalidParameter {
        /// Distribution family identifier
        distribution: String,
        /// The violated constraint
        reason: String,
    },

    /// Argument outside the mathematical domain of the operation.
    #[error("Domain error: {value} {reason}")]
    Domain {
        /// The offending value
        value: f64,
        /// Description of the valid domain
        reason: String,
    },

    /// Shape mismatch between an input and the declared dimensionality.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Declared dimensionality
        expected: usize,
        /// Supplied dimensionality
        got: usize,
    },

    /// Unrecognised distribution family name.
    #[error("Unknown distribution: '{0}'")]
    UnknownDistribution(String),

    /// Numerical inversion did not converge.
    #[error("Failed to converge after {iterations} iterations (residual: {residual:.3e})")]
    Convergence {
        /// Number of iterations attempted
        iterations: usize,
        /// Final absolute residual
        residual: f64,
    },

    /// Malformed argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl UqError {
    /// Create an `InvalidParameter` error.
    ///
    /// # Arguments
    /// * `distribution` - Family identifier
    /// * `reason` - Description of the violated constraint
    pub fn invalid_parameter(distribution: impl Into<String>, reason: impl Into<String>) -> Self {
        UqError::InvalidParameter {
            distribution: distribution.into(),
            reason: reason.into(),
        }
    }

    /// Create a `Domain` error for a probability outside `[0, 1]`.
    pub fn probability_out_of_range(p: f64) -> Self {
        UqError::Domain {
            value: p,
            reason: "is not a probability in [0, 1]".to_string(),
        }
    }
}

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `NoBracket`: Function values at bracket endpoints have same sign
///
/// # Examples
/// ```
/// use uqtf_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100, residual: 1e-3 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
        /// Residual at the last iterate
        residual: f64,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },
}

impl From<SolverError> for UqError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::MaxIterationsExceeded {
                iterations,
                residual,
            } => UqError::Convergence {
                iterations,
                residual,
            },
            SolverError::NoBracket { a, b } => UqError::Convergence {
                iterations: 0,
                residual: (b - a).abs(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = UqError::invalid_parameter("gumbel", "scale must be > 0");
        assert!(err.to_string().contains("gumbel"));
        assert!(err.to_string().contains("scale must be > 0"));
    }

    #[test]
    fn test_domain_display() {
        let err = UqError::probability_out_of_range(1.5);
        assert_eq!(err.to_string(), "Domain error: 1.5 is not a probability in [0, 1]");
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = UqError::DimensionMismatch { expected: 2, got: 3 };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 2, got 3");
    }

    #[test]
    fn test_unknown_distribution_display() {
        let err = UqError::UnknownDistribution("weibul".to_string());
        assert_eq!(err.to_string(), "Unknown distribution: 'weibul'");
    }

    #[test]
    fn test_solver_error_converts_to_convergence() {
        let err: UqError = SolverError::MaxIterationsExceeded {
            iterations: 200,
            residual: 1e-4,
        }
        .into();
        assert_eq!(
            err,
            UqError::Convergence {
                iterations: 200,
                residual: 1e-4
            }
        );
    }

    #[test]
    fn test_no_bracket_converts_to_convergence() {
        let err: UqError = SolverError::NoBracket { a: 0.0, b: 2.0 }.into();
        assert!(matches!(err, UqError::Convergence { iterations: 0, .. }));
    }
}

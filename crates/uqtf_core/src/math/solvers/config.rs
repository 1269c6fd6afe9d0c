//! Solver configuration types.

use crate::types::{Result, UqError};
use num_traits::Float;

/// Stopping rule for numerical inversion of a distribution function.
///
/// The solver stops when either the residual `|F(x) - p|` or the half-width
/// of the bracket (relative to the initial bracket) falls below `tolerance`,
/// and reports a convergence failure after `max_iterations` halvings.
///
/// # Example
///
/// ```
/// use uqtf_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance <= 1e-14);
/// assert_eq!(config.max_iterations, 1100);
///
/// let coarse = SolverConfig::new(1e-8, 40).unwrap();
/// assert_eq!(coarse.max_iterations, 40);
/// assert!(SolverConfig::new(-1.0, 40).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Residual and relative bracket-width tolerance.
    pub tolerance: T,

    /// Halvings allowed before reporting a convergence failure.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Tolerance 1e-14 (or machine epsilon if coarser), 1100 iterations.
    ///
    /// 1100 halvings collapse the unit bracket onto any `f64`, subnormals
    /// included.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap_or_else(T::epsilon),
            max_iterations: 1100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Validated configuration.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `tolerance` is not a positive finite number or
    /// `max_iterations` is zero.
    pub fn new(tolerance: T, max_iterations: usize) -> Result<Self> {
        if !(tolerance > T::zero() && tolerance.is_finite()) {
            return Err(UqError::InvalidArgument(format!(
                "solver tolerance must be positive and finite, got {}",
                tolerance.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if max_iterations == 0 {
            return Err(UqError::InvalidArgument(
                "solver needs at least one iteration".to_string(),
            ));
        }
        Ok(Self {
            tolerance,
            max_iterations,
        })
    }
}

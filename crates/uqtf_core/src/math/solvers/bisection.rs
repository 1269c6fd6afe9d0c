//! Bisection root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Bisection root finder.
///
/// Halves a sign-changing bracket until the residual is below tolerance or
/// the bracket can no longer be split in floating point. Slower than Brent-type methods but monotone and immune to
/// the flat tails of distribution functions, which is what quantile inversion
/// needs.
///
/// # Example
///
/// ```
/// use uqtf_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::default());
///
/// // Solve x² - 2 = 0 in bracket [0, 2]
/// let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Return the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` in the bracket [a, b].
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`, or the bracket end with the
    ///   smaller residual once no float lies strictly between `a` and `b`
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have same sign
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let (mut a, mut b) = if a <= b { (a, b) } else { (b, a) };
        let mut fa = f(a);
        let mut fb = f(b);

        if fa.abs() < self.config.tolerance {
            return Ok(a);
        }
        if fb.abs() < self.config.tolerance {
            return Ok(b);
        }
        if fa * fb > T::zero() {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let two = T::one() + T::one();
        let mut f_mid = fa;

        for _ in 0..self.config.max_iterations {
            let mid = a + (b - a) / two;
            if mid <= a || mid >= b {
                return Ok(if fa.abs() <= fb.abs() { a } else { b });
            }
            f_mid = f(mid);

            if f_mid.abs() < self.config.tolerance {
                return Ok(mid);
            }

            if fa * f_mid < T::zero() {
                b = mid;
                fb = f_mid;
            } else {
                a = mid;
                fa = f_mid;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
            residual: f_mid.abs().to_f64().unwrap_or(f64::NAN),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bisection_sqrt2() {
        let solver = BisectionSolver::new(SolverConfig::default());
        let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
        assert_relative_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_bisection_reversed_bracket() {
        let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();
        let root = solver.find_root(|x| x - 0.25, 1.0, 0.0).unwrap();
        assert_relative_eq!(root, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_bisection_root_at_endpoint() {
        let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();
        assert_eq!(solver.find_root(|x| x, 0.0, 1.0).unwrap(), 0.0);
        assert_eq!(solver.find_root(|x| x - 1.0, 0.0, 1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_bisection_no_bracket() {
        let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();
        let result = solver.find_root(|x| x * x + 1.0, -1.0, 1.0);
        assert!(matches!(result, Err(SolverError::NoBracket { .. })));
    }

    #[test]
    fn test_bisection_iteration_budget() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-15, 3).unwrap());
        let result = solver.find_root(|x: f64| x.powi(3) - 0.3, 0.0, 1.0);
        assert!(matches!(
            result,
            Err(SolverError::MaxIterationsExceeded { iterations: 3, .. })
        ));
    }

    #[test]
    fn test_bisection_resolves_root_near_bracket_end() {
        // Roots 1e-15 away from either end of the bracket
        let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();
        let target = 1e-15_f64.sqrt();
        let root = solver.find_root(|x: f64| x.sqrt() - target, 0.0, 1.0).unwrap();
        assert!((root.sqrt() - target).abs() < 1e-14);

        let upper = solver
            .find_root(|x: f64| target - (1.0 - x).sqrt(), 0.0, 1.0)
            .unwrap();
        assert!(upper < 1.0);
        assert!(((1.0 - upper).sqrt() - target).abs() < 2e-9);
    }

    #[test]
    fn test_bisection_collapsed_bracket_returns_closest_end() {
        let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();
        let step = |x: f64| if x < 0.3 { -1.0 } else { 1.0 };
        let root = solver.find_root(step, 0.0, 1.0).unwrap();
        assert!((root - 0.3).abs() <= f64::EPSILON);
    }

    #[test]
    fn test_bisection_monotone_step_function_like() {
        // Steep but continuous function
        let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();
        let root = solver
            .find_root(|x| (50.0 * (x - 0.3)).tanh(), 0.0, 1.0)
            .unwrap();
        assert_relative_eq!(root, 0.3, epsilon = 1e-12);
    }
}

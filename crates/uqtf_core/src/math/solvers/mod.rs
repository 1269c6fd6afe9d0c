//! Root-finding solvers for numerical quantile inversion.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: Robust bracketing method, used as the inverse-CDF
//!   fallback for families without a closed-form quantile function
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-14)
//! - `max_iterations`: Maximum iteration count (default: 1100)

mod bisection;
mod config;

pub use bisection::BisectionSolver;
pub use config::SolverConfig;

//! # uqtf_core: Probabilistic Input Engine for UQ Test Functions
//!
//! ## Layer 1 (Foundation) Role
//!
//! uqtf_core is the bottom layer of the workspace, providing:
//! - Distribution kernels with PDF, CDF and inverse CDF (`distributions`)
//! - Marginals and the joint input model `ProbInput` (`prob_input`)
//! - A seeded, explicitly owned generator `RandomState` (`rng`)
//! - Special functions and a bisection solver (`math`)
//! - Error types: `UqError`, `SolverError` (`types::error`)
//!
//! ## Dependencies
//!
//! Layer 1 depends on no other workspace crate:
//! - num-traits: generic float bounds for the solver
//! - statrs: error function and incomplete beta function
//! - ndarray: sample matrices
//! - rand: `StdRng` behind `RandomState`
//! - serde: serialisation of family tags (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use uqtf_core::prob_input::{Marginal, ProbInput};
//!
//! let marginal = Marginal::new("exponential", &[2.0]).unwrap();
//! assert_eq!(marginal.pdf(0.0), 2.0);
//!
//! let mut input = ProbInput::new(vec![marginal]).unwrap().with_seed(1);
//! let xx = input.get_sample(5).unwrap();
//! assert_eq!(xx.dim(), (5, 1));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `DistributionFamily`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod math;
pub mod prob_input;
pub mod rng;
pub mod types;

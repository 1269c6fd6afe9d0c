//! # Probabilistic Inputs
//!
//! Marginals and the joint input model they compose.
//!
//! ## Sampling
//!
//! Every sample is produced by inverse transform: uniform draws from a
//! [`RandomState`](crate::rng::RandomState) are pushed through the marginal
//! quantile function. A [`ProbInput`] fills its sample matrix column by
//! column from one shared generator, so equal seeds give equal matrices.
//!
//! ## Usage Example
//!
//! ```rust
//! use uqtf_core::prob_input::{Marginal, ProbInput};
//!
//! let mut input = ProbInput::new(vec![
//!     Marginal::new("gumbel", &[0.0, 1.0]).unwrap(),
//!     Marginal::new("normal", &[0.0, 1.0]).unwrap(),
//! ])
//! .unwrap()
//! .with_seed(7);
//!
//! let xx = input.get_sample(10).unwrap();
//! let density = input.pdf_rows(xx.view()).unwrap();
//! assert_eq!(density.len(), 10);
//! ```

mod joint;
mod marginal;
mod vectorised;

pub use joint::{create_canonical_uniform_input, ProbInput};
pub use marginal::Marginal;
pub use vectorised::{parse_values, Pointwise};

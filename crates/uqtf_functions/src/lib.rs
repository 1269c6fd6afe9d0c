//! # uqtf_functions: Analytical Test Functions
//!
//! Closed-form functions from the uncertainty quantification literature,
//! each packaged with the probabilistic input it is studied under.
//!
//! ## Modules
//!
//! - [`traits`]: the [`TestFunction`] contract (checked and parallel evaluation)
//! - [`functions`]: concrete functions (McLain, Franke, OTL circuit, piston, ...)
//! - [`input_spec`]: declarative input descriptions built into
//!   [`uqtf_core::prob_input::ProbInput`]
//! - [`registry`]: lookup by name
//! - [`meta`]: random test functions drawn from a metafunction
//! - [`error`]: [`FunctionError`]
//!
//! ## Example
//!
//! ```
//! use uqtf_functions::{create_function, TestFunction};
//!
//! let otl = create_function("OTLCircuit", None, None).unwrap();
//! let mut input = otl.prob_input(Some(42)).unwrap();
//! let xx = input.get_sample(1000).unwrap();
//! let yy = otl.evaluate(xx.view()).unwrap();
//! assert_eq!(yy.len(), 1000);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod functions;
pub mod input_spec;
pub mod meta;
pub mod registry;
pub mod traits;
pub mod utils;

pub use error::FunctionError;
pub use registry::{create_function, list_functions, AnyTestFunction};
pub use traits::TestFunction;

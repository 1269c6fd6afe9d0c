//! # Metafunction
//!
//! Generator of random test functions for benchmarking sensitivity analysis
//! methods, after Becker (2020). Each draw from a [`MetaFunction`] is a
//! [`MetaFunctionRealization`], an ordinary
//! [`TestFunction`](crate::TestFunction) with its own probabilistic input.

mod basis;
mod metafunction;

pub use basis::BasisFunction;
pub use metafunction::{
    CoefficientMixture, EffectOrder, EffectTerm, MetaFunction, MetaFunctionRealization,
    MIXED_INPUT_ID,
};

//! Core types for the probabilistic input engine.
//!
//! This module provides:
//! - [`UqError`]: error taxonomy of the engine
//! - [`SolverError`]: errors of the numerical inversion solver

pub mod error;

pub use error::{SolverError, UqError};

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, UqError>;

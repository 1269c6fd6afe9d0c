//! Concrete test functions.

mod bratley;
mod damped_oscillator;
mod forrester;
mod franke;
mod holsclaw;
mod linkletter;
mod mclain;
mod otl_circuit;
mod piston;
mod welch;

pub use bratley::{Bratley1992d, DEFAULT_DIMENSION as BRATLEY_DEFAULT_DIMENSION};
pub use damped_oscillator::DampedOscillator;
pub use forrester::Forrester2008;
pub use franke::{Franke2, Franke3};
pub use holsclaw::HolsclawSine;
pub use linkletter::{LinkletterDecCoeffs, LinkletterLinear};
pub use mclain::{McLainS1, McLainS2, McLainS3, McLainS4, McLainS5};
pub use otl_circuit::OTLCircuit;
pub use piston::Piston;
pub use welch::Welch1992;

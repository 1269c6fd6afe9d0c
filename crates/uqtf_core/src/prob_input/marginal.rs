//! One-dimensional marginal of a probabilistic input.

use super::Pointwise;
use crate::distributions::{Distribution, DistributionFamily, UnivariateDistribution};
use crate::rng::RandomState;
use crate::types::Result;
use ndarray::Array1;
use std::fmt;
use tracing::debug;

/// A univariate random variable: a validated distribution plus metadata.
///
/// The distribution is fixed at construction. A marginal sampled on its own
/// uses a [`RandomState`] it owns, created on the first
/// [`Marginal::get_sample`] unless seeded earlier; inside a
/// [`ProbInput`](super::ProbInput) the joint model's generator is passed to
/// [`Marginal::sample`] instead and no own generator is ever created.
///
/// # Example
///
/// ```
/// use uqtf_core::prob_input::Marginal;
///
/// let marginal = Marginal::new("exponential", &[2.0]).unwrap();
/// assert_eq!(marginal.pdf(0.0), 2.0);
/// assert_eq!(marginal.cdf(vec![0.0, f64::INFINITY].as_slice()), vec![0.0, 1.0]);
/// assert!((marginal.icdf(0.5).unwrap() - 0.3466).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct Marginal {
    distribution: Distribution,
    support: (f64, f64),
    name: Option<String>,
    description: Option<String>,
    rng: Option<RandomState>,
}

impl Marginal {
    /// Create a marginal from a family name and its ordered parameters.
    ///
    /// # Errors
    ///
    /// - `UnknownDistribution` if `family` is not a recognised name
    /// - `InvalidParameter` for wrong arity or a violated constraint
    pub fn new(family: &str, parameters: &[f64]) -> Result<Self> {
        let distribution = Distribution::from_name(family, parameters)?;
        debug!(distribution = %distribution, "constructed marginal");
        Ok(Self::from_distribution(distribution))
    }

    /// Wrap an already validated distribution.
    pub fn from_distribution(distribution: impl Into<Distribution>) -> Self {
        let distribution = distribution.into();
        Self {
            support: distribution.support(),
            distribution,
            name: None,
            description: None,
            rng: None,
        }
    }

    /// Set the name of the variable.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Seed the marginal's own generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(RandomState::from_seed(seed));
        self
    }

    /// Underlying distribution.
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// Distribution family.
    pub fn family(&self) -> DistributionFamily {
        self.distribution.family()
    }

    /// Parameters in construction order.
    pub fn parameters(&self) -> Vec<f64> {
        self.distribution.parameters()
    }

    /// Support interval `[lo, hi]`.
    pub fn support(&self) -> (f64, f64) {
        self.support
    }

    /// Variable name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Description, if set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Probability density at a scalar or along a sequence.
    pub fn pdf<X: Pointwise>(&self, x: X) -> X::Output {
        x.map_values(|v| self.distribution.pdf(v))
    }

    /// Cumulative distribution at a scalar or along a sequence.
    pub fn cdf<X: Pointwise>(&self, x: X) -> X::Output {
        x.map_values(|v| self.distribution.cdf(v))
    }

    /// Quantile at a scalar or along a sequence of probabilities.
    ///
    /// # Errors
    ///
    /// `Domain` if any probability lies outside `[0, 1]`, `Convergence` if a
    /// numerical inversion fails.
    pub fn icdf<X: Pointwise>(&self, p: X) -> Result<X::Output> {
        p.try_map_values(|v| self.distribution.icdf(v))
    }

    /// Draw `n` realisations by inverse-transform sampling from `rng`.
    ///
    /// Consumes exactly `n` uniform draws, in order.
    pub fn sample(&self, n: usize, rng: &mut RandomState) -> Result<Array1<f64>> {
        inverse_transform(&self.distribution, n, rng)
    }

    /// Draw `n` realisations from the marginal's own generator.
    ///
    /// An unseeded marginal draws its generator from entropy on first use.
    pub fn get_sample(&mut self, n: usize) -> Result<Array1<f64>> {
        let rng = self.rng.get_or_insert_with(RandomState::from_entropy);
        inverse_transform(&self.distribution, n, rng)
    }

    /// Replace the marginal's generator.
    ///
    /// `Some(seed)` starts a fresh reproducible stream; `None` draws a new
    /// seed from entropy.
    pub fn reset_rng(&mut self, seed: Option<u64>) {
        self.rng = Some(RandomState::new(seed));
    }

    /// Map values distributed as `other` onto this marginal.
    ///
    /// Each value is pushed through `other.cdf` and then `self.icdf`.
    pub fn transform_sample<X: Pointwise>(&self, xx: X, other: &Marginal) -> Result<X::Output> {
        xx.try_map_values(|x| self.distribution.icdf(other.distribution.cdf(x)))
    }
}

fn inverse_transform(
    distribution: &Distribution,
    n: usize,
    rng: &mut RandomState,
) -> Result<Array1<f64>> {
    let mut uniforms = vec![0.0; n];
    rng.fill_uniform(&mut uniforms);
    uniforms
        .into_iter()
        .map(|u| distribution.icdf(u))
        .collect::<Result<Vec<f64>>>()
        .map(Array1::from)
}

impl fmt::Display for Marginal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{} ~ ", name)?;
        }
        write!(
            f,
            "{} on [{}, {}]",
            self.distribution, self.support.0, self.support.1
        )?;
        if let Some(description) = &self.description {
            write!(f, " ({})", description)?;
        }
        Ok(())
    }
}

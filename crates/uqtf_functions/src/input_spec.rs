//! Declarative descriptions of the inputs a test function ships with.
//!
//! A [`ProbInputSpec`] is plain data; [`ProbInputSpec::build`] validates it
//! into a sampling-ready [`ProbInput`].

use crate::error::FunctionError;
use uqtf_core::distributions::{Distribution, DistributionFamily};
use uqtf_core::prob_input::{Marginal, ProbInput};
use uqtf_core::types::Result;

/// Declaration of one marginal.
#[derive(Debug, Clone, PartialEq)]
pub struct MarginalSpec {
    /// Variable name
    pub name: String,
    /// Distribution family
    pub distribution: DistributionFamily,
    /// Ordered family parameters
    pub parameters: Vec<f64>,
    /// Physical meaning of the variable
    pub description: Option<String>,
}

impl MarginalSpec {
    /// Declare a marginal of any family.
    pub fn new(
        name: impl Into<String>,
        distribution: DistributionFamily,
        parameters: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            distribution,
            parameters,
            description: None,
        }
    }

    /// Declare a `U[lower, upper]` marginal.
    pub fn uniform(name: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self::new(name, DistributionFamily::Uniform, vec![lower, upper])
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate into a [`Marginal`].
    pub fn build(&self) -> Result<Marginal> {
        let distribution = Distribution::new(self.distribution, &self.parameters)?;
        let marginal = Marginal::from_distribution(distribution).with_name(self.name.clone());
        Ok(match &self.description {
            Some(description) => marginal.with_description(description.clone()),
            None => marginal,
        })
    }
}

/// Declaration of a complete probabilistic input.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbInputSpec {
    /// Selection name, e.g. `"McLain1974"`
    pub name: String,
    /// Provenance of the input
    pub description: String,
    /// Marginals in column order
    pub marginals: Vec<MarginalSpec>,
}

impl ProbInputSpec {
    /// Declare an input.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        marginals: Vec<MarginalSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            marginals,
        }
    }

    /// Number of marginals.
    pub fn dimension(&self) -> usize {
        self.marginals.len()
    }

    /// Validate into a [`ProbInput`], seeding its generator if `seed` is given.
    ///
    /// # Example
    ///
    /// ```
    /// use uqtf_functions::input_spec::{MarginalSpec, ProbInputSpec};
    ///
    /// let spec = ProbInputSpec::new(
    ///     "Square",
    ///     "Unit square",
    ///     vec![MarginalSpec::uniform("X1", 0.0, 1.0), MarginalSpec::uniform("X2", 0.0, 1.0)],
    /// );
    /// let mut input = spec.build(Some(3)).unwrap();
    /// assert_eq!(input.get_sample(4).unwrap().dim(), (4, 2));
    /// ```
    pub fn build(&self, seed: Option<u64>) -> Result<ProbInput> {
        let marginals = self
            .marginals
            .iter()
            .map(MarginalSpec::build)
            .collect::<Result<Vec<_>>>()?;
        let input = ProbInput::new(marginals)?
            .with_name(self.name.clone())
            .with_description(self.description.clone());
        Ok(match seed {
            Some(seed) => input.with_seed(seed),
            None => input,
        })
    }
}

/// `d` independent `U[lower, upper]` marginals named `X1..Xd`.
pub(crate) fn uniform_marginals(d: usize, lower: f64, upper: f64) -> Vec<MarginalSpec> {
    (1..=d)
        .map(|i| MarginalSpec::uniform(format!("X{}", i), lower, upper))
        .collect()
}

/// `count` inert `U[100, 200]` marginals named `Inert 1..Inert count`.
pub(crate) fn inert_marginals(count: usize) -> impl Iterator<Item = MarginalSpec> {
    (1..=count).map(|i| {
        MarginalSpec::uniform(format!("Inert {}", i), 100.0, 200.0)
            .with_description("Inert input [-]")
    })
}

/// Resolve a requested input selection against the available ones.
///
/// Matching is case-insensitive; `None` picks the first (default) entry.
pub(crate) fn resolve_selection(
    function: &str,
    requested: Option<&str>,
    available: &'static [&'static str],
) -> std::result::Result<&'static str, FunctionError> {
    let Some(requested) = requested else {
        return Ok(available[0]);
    };
    available
        .iter()
        .copied()
        .find(|name| name.eq_ignore_ascii_case(requested.trim()))
        .ok_or_else(|| FunctionError::UnknownInput {
            function: function.to_string(),
            selection: requested.to_string(),
            available: available.join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uqtf_core::types::UqError;

    #[test]
    fn test_marginal_spec_build_keeps_metadata() {
        let spec = MarginalSpec::uniform("Rb1", 50.0, 150.0).with_description("Resistance b1");
        let marginal = spec.build().unwrap();
        assert_eq!(marginal.name(), Some("Rb1"));
        assert_eq!(marginal.description(), Some("Resistance b1"));
        assert_eq!(marginal.support(), (50.0, 150.0));
    }

    #[test]
    fn test_invalid_marginal_spec_is_reported() {
        let spec = MarginalSpec::new("X", DistributionFamily::Exponential, vec![-1.0]);
        assert!(matches!(spec.build(), Err(UqError::InvalidParameter { .. })));
    }

    #[test]
    fn test_seeded_builds_agree() {
        let spec = ProbInputSpec::new("Cube", "Unit cube", uniform_marginals(3, 0.0, 1.0));
        let a = spec.build(Some(8)).unwrap().get_sample(10).unwrap();
        let b = spec.build(Some(8)).unwrap().get_sample(10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_selection() {
        const AVAILABLE: &[&str] = &["BenAri2007", "Moon2010"];
        assert_eq!(resolve_selection("f", None, AVAILABLE).unwrap(), "BenAri2007");
        assert_eq!(resolve_selection("f", Some("moon2010"), AVAILABLE).unwrap(), "Moon2010");
        assert!(matches!(
            resolve_selection("f", Some("Other"), AVAILABLE),
            Err(FunctionError::UnknownInput { .. })
        ));
    }
}

//! Joint probabilistic input built from independent marginals.

use super::Marginal;
use crate::distributions::Uniform;
use crate::rng::RandomState;
use crate::types::{Result, UqError};
use ndarray::{Array1, Array2, ArrayView2, Axis};
use std::fmt;
use tracing::debug;

/// Multivariate input model: an ordered list of independent marginals and
/// one generator shared by all of them.
///
/// Column `j` of every sample matrix belongs to marginal `j`.
///
/// # Example
///
/// ```
/// use uqtf_core::prob_input::{Marginal, ProbInput};
///
/// let marginals = vec![
///     Marginal::new("uniform", &[1.0, 10.0]).unwrap(),
///     Marginal::new("exponential", &[2.0]).unwrap(),
/// ];
/// let mut input = ProbInput::new(marginals).unwrap().with_seed(42);
///
/// let xx = input.get_sample(100).unwrap();
/// assert_eq!(xx.dim(), (100, 2));
/// assert_eq!(input.get_sample(0).unwrap().dim(), (0, 2));
/// ```
#[derive(Debug, Clone)]
pub struct ProbInput {
    marginals: Vec<Marginal>,
    rng: RandomState,
    name: Option<String>,
    description: Option<String>,
}

impl ProbInput {
    /// Create an input model from its marginals, with an entropy-seeded
    /// generator.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `marginals` is empty.
    pub fn new(marginals: Vec<Marginal>) -> Result<Self> {
        if marginals.is_empty() {
            return Err(UqError::InvalidArgument(
                "a probabilistic input needs at least one marginal".to_string(),
            ));
        }
        Ok(Self {
            marginals,
            rng: RandomState::from_entropy(),
            name: None,
            description: None,
        })
    }

    /// Seed the shared generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = RandomState::from_seed(seed);
        self
    }

    /// Set the name of the input model.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Number of input dimensions.
    #[inline]
    pub fn spatial_dimension(&self) -> usize {
        self.marginals.len()
    }

    /// Marginals in column order.
    pub fn marginals(&self) -> &[Marginal] {
        &self.marginals
    }

    /// Name of the input model, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Description, if set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Seed of the shared generator, `None` if drawn from entropy.
    pub fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }

    /// Draw an `n × d` sample from the model's own generator.
    ///
    /// Column 0 consumes the generator first, then column 1, and so on.
    pub fn get_sample(&mut self, n: usize) -> Result<Array2<f64>> {
        draw_columns(&self.marginals, n, &mut self.rng)
    }

    /// Draw an `n × d` sample from an external generator.
    pub fn sample_with(&self, n: usize, rng: &mut RandomState) -> Result<Array2<f64>> {
        draw_columns(&self.marginals, n, rng)
    }

    /// Replace the shared generator.
    ///
    /// Subsequent samples depend only on `seed`, not on prior sampling.
    pub fn reset_rng(&mut self, seed: Option<u64>) {
        debug!(?seed, "resetting input generator");
        self.rng = RandomState::new(seed);
    }

    /// Joint density at one full-dimension point: the product of the
    /// marginal densities.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `point.len() != d`.
    pub fn pdf(&self, point: &[f64]) -> Result<f64> {
        self.check_dimension(point.len())?;
        Ok(self
            .marginals
            .iter()
            .zip(point)
            .map(|(m, &x)| m.pdf(x))
            .product())
    }

    /// Joint density for every row of an `n × d` matrix.
    pub fn pdf_rows(&self, xx: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        self.check_dimension(xx.ncols())?;
        let mut out: Array1<f64> = Array1::ones(xx.nrows());
        for (marginal, column) in self.marginals.iter().zip(xx.axis_iter(Axis(1))) {
            out *= &marginal.pdf(column);
        }
        Ok(out)
    }

    /// Joint distribution function at one point under independence.
    pub fn cdf(&self, point: &[f64]) -> Result<f64> {
        self.check_dimension(point.len())?;
        Ok(self
            .marginals
            .iter()
            .zip(point)
            .map(|(m, &x)| m.cdf(x))
            .product())
    }

    /// Map a sample drawn from `other` onto this model, column by column.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the models or the sample disagree on `d`.
    pub fn transform_sample(
        &self,
        xx: ArrayView2<'_, f64>,
        other: &ProbInput,
    ) -> Result<Array2<f64>> {
        self.check_dimension(other.spatial_dimension())?;
        self.check_dimension(xx.ncols())?;

        let mut out = Array2::zeros(xx.raw_dim());
        for (j, column) in xx.axis_iter(Axis(1)).enumerate() {
            let mapped = self.marginals[j].transform_sample(column, &other.marginals[j])?;
            out.column_mut(j).assign(&mapped);
        }
        Ok(out)
    }

    fn check_dimension(&self, got: usize) -> Result<()> {
        let expected = self.spatial_dimension();
        if got == expected {
            Ok(())
        } else {
            Err(UqError::DimensionMismatch { expected, got })
        }
    }
}

fn draw_columns(marginals: &[Marginal], n: usize, rng: &mut RandomState) -> Result<Array2<f64>> {
    debug!(n, dimension = marginals.len(), "sampling input");
    let mut xx = Array2::zeros((n, marginals.len()));
    for (j, marginal) in marginals.iter().enumerate() {
        let column = marginal.sample(n, rng)?;
        xx.column_mut(j).assign(&column);
    }
    Ok(xx)
}

impl fmt::Display for ProbInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name         : {}", self.name.as_deref().unwrap_or("-"))?;
        writeln!(f, "Spatial Dim. : {}", self.spatial_dimension())?;
        writeln!(
            f,
            "Description  : {}",
            self.description.as_deref().unwrap_or("-")
        )?;
        writeln!(f, "Marginals    :")?;
        for (i, marginal) in self.marginals.iter().enumerate() {
            write!(f, "  [{}] {}", i + 1, marginal)?;
            if i + 1 < self.marginals.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Build a `d`-dimensional input of independent `U[lower, upper]` marginals.
///
/// # Errors
///
/// `InvalidArgument` if `d == 0`; `InvalidParameter` unless `lower < upper`.
///
/// # Example
///
/// ```
/// use uqtf_core::prob_input::create_canonical_uniform_input;
///
/// let input = create_canonical_uniform_input(3, -1.0, 1.0).unwrap();
/// assert_eq!(input.spatial_dimension(), 3);
/// assert_eq!(input.pdf(&[0.0, 0.0, 0.0]).unwrap(), 0.125);
/// ```
pub fn create_canonical_uniform_input(d: usize, lower: f64, upper: f64) -> Result<ProbInput> {
    let uniform = Uniform::new(lower, upper)?;
    let marginals = (1..=d)
        .map(|i| Marginal::from_distribution(uniform).with_name(format!("X{}", i)))
        .collect();
    ProbInput::new(marginals)
}

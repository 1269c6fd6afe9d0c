//! Random test-function generator after Becker (2020).
//!
//! A realisation picks one basis function and one marginal per input, then
//! sums main effects and randomly chosen two- and three-way products of the
//! transformed inputs, each weighted by a coefficient drawn from a Gaussian
//! mixture.

use super::BasisFunction;
use crate::error::FunctionError;
use crate::input_spec::{MarginalSpec, ProbInputSpec};
use crate::traits::{impl_display_via_summary, TestFunction};
use ndarray::{Array1, Array2, ArrayView2, Zip};
use tracing::debug;
use uqtf_core::distributions::{Distribution, DistributionFamily, UnivariateDistribution};
use uqtf_core::math::special::norm_ppf;
use uqtf_core::rng::RandomState;
use uqtf_core::types::UqError;

const METAFUNCTION: &str = "MetaFunction";
const REALIZATION_INPUT: &str = "Becker2020";
const REALIZATION_INPUTS: &[&str] = &[REALIZATION_INPUT];
const TAGS: &[&str] = &["sensitivity"];

/// Selection that draws every input's marginal from the whole default pool.
pub const MIXED_INPUT_ID: usize = 7;

/// How many `order`-way product terms a realisation carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectOrder {
    /// Number of inputs in each product
    pub order: usize,
    /// Terms drawn without replacement; `None` keeps every combination
    pub terms: Option<usize>,
}

/// Gaussian mixture `phi N(0, sigma_1^2) + (1 - phi) N(0, sigma_2^2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientMixture {
    /// Weight of the first component
    pub phi: f64,
    /// Standard deviation of the first component
    pub sigma_1: f64,
    /// Standard deviation of the second component
    pub sigma_2: f64,
}

impl Default for CoefficientMixture {
    /// `phi = 0.7`, `sigma_1 = sqrt(0.5)`, `sigma_2 = sqrt(5)`.
    fn default() -> Self {
        Self {
            phi: 0.7,
            sigma_1: 0.5_f64.sqrt(),
            sigma_2: 5.0_f64.sqrt(),
        }
    }
}

impl CoefficientMixture {
    /// Draw `n` coefficients: a component choice, then a normal quantile.
    pub fn sample(&self, n: usize, rng: &mut RandomState) -> Vec<f64> {
        (0..n)
            .map(|_| {
                let sigma = if rng.gen_uniform() < self.phi {
                    self.sigma_1
                } else {
                    self.sigma_2
                };
                sigma * norm_ppf(rng.gen_open_uniform())
            })
            .collect()
    }
}

/// One weighted product of basis-transformed inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectTerm {
    /// Zero-based input columns in the product, increasing
    pub indices: Vec<usize>,
    /// Weight of the product
    pub coefficient: f64,
}

/// The seven marginals of the default pool, indexed by input id.
fn default_marginal_pool() -> Result<Vec<Distribution>, UqError> {
    let pool: [(DistributionFamily, &[f64]); 7] = [
        (DistributionFamily::Uniform, &[0.0, 1.0]),
        (DistributionFamily::TruncNormal, &[0.5, 0.15, 0.0, 1.0]),
        (DistributionFamily::Beta, &[8.0, 2.0, 0.0, 1.0]),
        (DistributionFamily::Beta, &[2.0, 8.0, 0.0, 1.0]),
        (DistributionFamily::Beta, &[2.0, 0.8, 0.0, 1.0]),
        (DistributionFamily::Beta, &[0.8, 2.0, 0.0, 1.0]),
        (DistributionFamily::LogitNormal, &[0.0, 3.16]),
    ];
    pool.iter()
        .map(|(family, params)| Distribution::new(*family, params))
        .collect()
}

/// All increasing `k`-subsets of `0..d`, in lexicographic order.
fn combinations(d: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 || k > d {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut current: Vec<usize> = (0..k).collect();
    loop {
        out.push(current.clone());
        // Rightmost position that can still advance
        let Some(i) = (0..k).rev().find(|&i| current[i] < d - k + i) else {
            return out;
        };
        current[i] += 1;
        for j in i + 1..k {
            current[j] = current[j - 1] + 1;
        }
    }
}

/// Generator of random test functions.
///
/// # Example
///
/// ```
/// use uqtf_functions::meta::MetaFunction;
/// use uqtf_functions::TestFunction;
///
/// let mut meta = MetaFunction::from_default(4, Some(0), Some(11)).unwrap();
/// let realizations = meta.get_sample(2).unwrap();
/// assert_eq!(realizations.len(), 2);
///
/// let f = &realizations[0];
/// let xx = f.prob_input(Some(1)).unwrap().get_sample(10).unwrap();
/// assert_eq!(f.evaluate(xx.view()).unwrap().len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct MetaFunction {
    input_dimension: usize,
    basis_functions: Vec<BasisFunction>,
    effects: Vec<EffectOrder>,
    input_marginals: Vec<Distribution>,
    coefficients: CoefficientMixture,
    rng: Option<RandomState>,
}

impl MetaFunction {
    /// Create an unseeded generator; it draws an entropy seed on first use.
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` if `input_dimension` is zero
    /// - `Core(InvalidArgument)` if the basis or marginal pools are empty, or
    ///   an effect order is zero
    pub fn new(
        input_dimension: usize,
        basis_functions: Vec<BasisFunction>,
        effects: Vec<EffectOrder>,
        input_marginals: Vec<Distribution>,
        coefficients: CoefficientMixture,
    ) -> Result<Self, FunctionError> {
        if input_dimension == 0 {
            return Err(FunctionError::InvalidDimension {
                function: METAFUNCTION.to_string(),
                reason: "dimension must be at least 1".to_string(),
            });
        }
        if basis_functions.is_empty() || input_marginals.is_empty() {
            return Err(UqError::InvalidArgument(
                "a metafunction needs at least one basis function and one marginal".to_string(),
            )
            .into());
        }
        if effects.iter().any(|effect| effect.order == 0) {
            return Err(UqError::InvalidArgument("effect order must be at least 1".to_string()).into());
        }
        Ok(Self {
            input_dimension,
            basis_functions,
            effects,
            input_marginals,
            coefficients,
            rng: None,
        })
    }

    /// Generator with the published defaults.
    ///
    /// All main effects, `floor(d / 2)` two-way and `floor(d / 5)` three-way
    /// terms; every basis function; coefficients from
    /// [`CoefficientMixture::default`]. `input_id` in `0..7` gives every input
    /// the same marginal from the pool (uniform, truncated normal, four betas,
    /// logit-normal); [`MIXED_INPUT_ID`] draws one per input; `None` picks an
    /// id at random.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` for `d = 0`, `UnknownInput` for an id above 7.
    pub fn from_default(
        input_dimension: usize,
        input_id: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Self, FunctionError> {
        let mut rng = seed.map(RandomState::from_seed);
        let input_id = input_id.unwrap_or_else(|| {
            rng.get_or_insert_with(RandomState::from_entropy)
                .gen_index(MIXED_INPUT_ID + 1)
        });
        let mut pool = default_marginal_pool()?;
        let input_marginals = match input_id {
            MIXED_INPUT_ID => pool,
            id if id < MIXED_INPUT_ID => vec![pool.swap_remove(id)],
            id => {
                return Err(FunctionError::UnknownInput {
                    function: METAFUNCTION.to_string(),
                    selection: id.to_string(),
                    available: format!("0..={}", MIXED_INPUT_ID),
                })
            }
        };
        let effects = vec![
            EffectOrder {
                order: 1,
                terms: None,
            },
            EffectOrder {
                order: 2,
                terms: Some(input_dimension / 2),
            },
            EffectOrder {
                order: 3,
                terms: Some(input_dimension / 5),
            },
        ];
        debug!(input_dimension, input_id, "constructed default metafunction");
        let mut meta = Self::new(
            input_dimension,
            BasisFunction::ALL.to_vec(),
            effects,
            input_marginals,
            CoefficientMixture::default(),
        )?;
        meta.rng = rng;
        Ok(meta)
    }

    /// Seed the generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(RandomState::from_seed(seed));
        self
    }

    /// Replace the generator; `None` draws a new seed from entropy.
    pub fn reset_rng(&mut self, seed: Option<u64>) {
        self.rng = Some(RandomState::new(seed));
    }

    /// Dimension of every realisation.
    pub fn input_dimension(&self) -> usize {
        self.input_dimension
    }

    /// Basis functions realisations choose from.
    pub fn basis_functions(&self) -> &[BasisFunction] {
        &self.basis_functions
    }

    /// Interaction orders and term counts.
    pub fn effects(&self) -> &[EffectOrder] {
        &self.effects
    }

    /// Marginals realisations choose from.
    pub fn input_marginals(&self) -> &[Distribution] {
        &self.input_marginals
    }

    /// Draw `n` independent test functions. `n = 0` yields none.
    pub fn get_sample(&mut self, n: usize) -> Result<Vec<MetaFunctionRealization>, FunctionError> {
        debug!(n, dimension = self.input_dimension, "sampling metafunction");
        (0..n).map(|_| self.realize()).collect()
    }

    fn realize(&mut self) -> Result<MetaFunctionRealization, FunctionError> {
        let d = self.input_dimension;
        let rng = self.rng.get_or_insert_with(RandomState::from_entropy);

        let basis = (0..d)
            .map(|_| self.basis_functions[rng.gen_index(self.basis_functions.len())])
            .collect();
        let marginals = (0..d)
            .map(|_| match self.input_marginals.len() {
                1 => self.input_marginals[0].clone(),
                len => self.input_marginals[rng.gen_index(len)].clone(),
            })
            .collect();

        let mut terms = Vec::new();
        for effect in &self.effects {
            let mut candidates = combinations(d, effect.order);
            let chosen: Vec<Vec<usize>> = match effect.terms {
                None => candidates,
                Some(count) => {
                    let count = count.min(candidates.len());
                    rng.sample_indices(candidates.len(), count)
                        .into_iter()
                        .map(|i| std::mem::take(&mut candidates[i]))
                        .collect()
                }
            };
            let coefficients = self.coefficients.sample(chosen.len(), rng);
            terms.extend(
                chosen
                    .into_iter()
                    .zip(coefficients)
                    .map(|(indices, coefficient)| EffectTerm {
                        indices,
                        coefficient,
                    }),
            );
        }

        MetaFunctionRealization::new(basis, marginals, terms)
    }
}

/// One test function drawn from a [`MetaFunction`].
#[derive(Debug, Clone, PartialEq)]
pub struct MetaFunctionRealization {
    basis: Vec<BasisFunction>,
    marginals: Vec<Distribution>,
    terms: Vec<EffectTerm>,
}

impl MetaFunctionRealization {
    /// Assemble a realisation from per-input basis functions and marginals.
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` if there are no inputs or the basis and marginal
    ///   counts differ
    /// - `Core(InvalidArgument)` if a term is empty or references a missing
    ///   input
    pub fn new(
        basis: Vec<BasisFunction>,
        marginals: Vec<Distribution>,
        terms: Vec<EffectTerm>,
    ) -> Result<Self, FunctionError> {
        if basis.is_empty() || basis.len() != marginals.len() {
            return Err(FunctionError::InvalidDimension {
                function: METAFUNCTION.to_string(),
                reason: format!(
                    "{} basis functions for {} marginals",
                    basis.len(),
                    marginals.len()
                ),
            });
        }
        let d = basis.len();
        if let Some(term) = terms
            .iter()
            .find(|term| term.indices.is_empty() || term.indices.iter().any(|&j| j >= d))
        {
            return Err(UqError::InvalidArgument(format!(
                "effect term {:?} is not a product of inputs 0..{}",
                term.indices, d
            ))
            .into());
        }
        Ok(Self {
            basis,
            marginals,
            terms,
        })
    }

    /// Basis function applied to each input.
    pub fn basis(&self) -> &[BasisFunction] {
        &self.basis
    }

    /// Marginal of each input.
    pub fn marginals(&self) -> &[Distribution] {
        &self.marginals
    }

    /// Weighted product terms.
    pub fn terms(&self) -> &[EffectTerm] {
        &self.terms
    }
}

impl TestFunction for MetaFunctionRealization {
    fn name(&self) -> &'static str {
        "MetaFunctionRealization"
    }

    fn description(&self) -> &'static str {
        "Realization of the sensitivity analysis metafunction from Becker (2020)"
    }

    fn tags(&self) -> &'static [&'static str] {
        TAGS
    }

    fn available_inputs(&self) -> &'static [&'static str] {
        REALIZATION_INPUTS
    }

    fn input_selection(&self) -> &'static str {
        REALIZATION_INPUT
    }

    fn input_spec(&self) -> ProbInputSpec {
        ProbInputSpec::new(
            REALIZATION_INPUT,
            "Marginals drawn for a metafunction realization after Becker (2020)",
            self.marginals
                .iter()
                .enumerate()
                .map(|(i, dist)| {
                    MarginalSpec::new(format!("X{}", i + 1), dist.family(), dist.parameters())
                })
                .collect(),
        )
    }

    fn spatial_dimension(&self) -> usize {
        self.basis.len()
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        let mut transformed = Array2::zeros(xx.raw_dim());
        for (j, basis) in self.basis.iter().enumerate() {
            Zip::from(transformed.column_mut(j))
                .and(xx.column(j))
                .for_each(|t, &x| *t = basis.apply(x));
        }

        let mut yy = Array1::<f64>::zeros(xx.nrows());
        for term in &self.terms {
            let mut product = Array1::from_elem(xx.nrows(), term.coefficient);
            for &j in &term.indices {
                product *= &transformed.column(j);
            }
            yy += &product;
        }
        yy
    }
}

impl_display_via_summary!(MetaFunctionRealization);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn unit_uniform() -> Distribution {
        Distribution::new(DistributionFamily::Uniform, &[0.0, 1.0]).unwrap()
    }

    #[test]
    fn test_combinations() {
        assert_eq!(
            combinations(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(combinations(5, 3).len(), 10);
        assert_eq!(combinations(3, 3), vec![vec![0, 1, 2]]);
        assert!(combinations(2, 3).is_empty());
    }

    #[test]
    fn test_hand_built_realization() {
        // y = 2 x1 - x1 x2^2
        let f = MetaFunctionRealization::new(
            vec![BasisFunction::Linear, BasisFunction::Quadratic],
            vec![unit_uniform(), unit_uniform()],
            vec![
                EffectTerm {
                    indices: vec![0],
                    coefficient: 2.0,
                },
                EffectTerm {
                    indices: vec![0, 1],
                    coefficient: -1.0,
                },
            ],
        )
        .unwrap();
        let yy = f.evaluate(array![[0.5, 2.0], [1.0, 0.0], [0.0, 0.3]].view()).unwrap();
        assert_relative_eq!(yy[0], -1.0, epsilon = 1e-15);
        assert_relative_eq!(yy[1], 2.0, epsilon = 1e-15);
        assert_eq!(yy[2], 0.0);
    }

    #[test]
    fn test_realization_rejects_bad_terms() {
        let result = MetaFunctionRealization::new(
            vec![BasisFunction::Linear],
            vec![unit_uniform()],
            vec![EffectTerm {
                indices: vec![1],
                coefficient: 1.0,
            }],
        );
        assert!(matches!(result, Err(FunctionError::Core(UqError::InvalidArgument(_)))));

        let mismatched = MetaFunctionRealization::new(vec![BasisFunction::Linear], vec![], vec![]);
        assert!(matches!(mismatched, Err(FunctionError::InvalidDimension { .. })));
    }

    #[test]
    fn test_default_term_counts() {
        let mut meta = MetaFunction::from_default(10, Some(0), Some(5)).unwrap();
        for f in meta.get_sample(3).unwrap() {
            assert_eq!(f.spatial_dimension(), 10);
            let count = |order: usize| f.terms().iter().filter(|t| t.indices.len() == order).count();
            assert_eq!(count(1), 10);
            assert_eq!(count(2), 5);
            assert_eq!(count(3), 2);
            assert!(f.marginals().iter().all(|m| *m == unit_uniform()));
        }
    }

    #[test]
    fn test_sampled_interactions_are_distinct() {
        let mut meta = MetaFunction::from_default(12, Some(1), Some(8)).unwrap();
        let f = meta.get_sample(1).unwrap().remove(0);
        let mut pairs: Vec<&Vec<usize>> =
            f.terms().iter().filter(|t| t.indices.len() == 2).map(|t| &t.indices).collect();
        let before = pairs.len();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), before);
        assert!(pairs.iter().all(|p| p[0] < p[1] && p[1] < 12));
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = MetaFunction::from_default(6, None, Some(21)).unwrap().get_sample(2);
        let b = MetaFunction::from_default(6, None, Some(21)).unwrap().get_sample(2);
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn test_generator_created_on_first_draw() {
        let mut meta = MetaFunction::from_default(4, Some(0), None).unwrap();
        assert!(meta.rng.is_none());
        assert_eq!(meta.get_sample(1).unwrap().len(), 1);
        assert!(meta.rng.is_some());
        assert!(MetaFunction::from_default(4, None, None).unwrap().rng.is_some());
    }

    #[test]
    fn test_mixed_pool_uses_several_families() {
        let mut meta = MetaFunction::from_default(40, Some(MIXED_INPUT_ID), Some(2)).unwrap();
        assert_eq!(meta.input_marginals().len(), 7);
        let f = meta.get_sample(1).unwrap().remove(0);
        let first = f.marginals()[0].clone();
        assert!(f.marginals().iter().any(|m| *m != first));

        let xx = f.prob_input(Some(4)).unwrap().get_sample(200).unwrap();
        let yy = f.evaluate(xx.view()).unwrap();
        assert!(yy.iter().all(|y| y.is_finite()));
    }

    #[test]
    fn test_zero_sample_and_invalid_construction() {
        let mut meta = MetaFunction::from_default(3, Some(2), Some(1)).unwrap();
        assert!(meta.get_sample(0).unwrap().is_empty());

        assert!(matches!(
            MetaFunction::from_default(0, Some(0), None),
            Err(FunctionError::InvalidDimension { .. })
        ));
        assert!(matches!(
            MetaFunction::from_default(3, Some(8), None),
            Err(FunctionError::UnknownInput { .. })
        ));
    }

    #[test]
    fn test_coefficient_mixture_spread() {
        let mut rng = RandomState::from_seed(99);
        let draws = CoefficientMixture::default().sample(100_000, &mut rng);
        let variance = draws.iter().map(|c| c * c).sum::<f64>() / draws.len() as f64;
        // 0.7 * 0.5 + 0.3 * 5
        assert!((variance - 1.85).abs() < 0.1, "variance = {}", variance);
    }
}

//! Two-degree-of-freedom damped oscillator (Der Kiureghian and De Stefano, 1991).

use crate::input_spec::{MarginalSpec, ProbInputSpec};
use crate::traits::{impl_display_via_summary, TestFunction};
use crate::utils::{lognormal_mu_from_moments, lognormal_sigma_from_moments};
use ndarray::{Array1, ArrayView2, Zip};
use std::f64::consts::PI;
use uqtf_core::distributions::DistributionFamily;

const AVAILABLE_INPUTS: &[&str] = &["DerKiureghian1991"];

/// (name, mean, coefficient of variation, description)
const MARGINALS: [(&str, f64, f64, &str); 7] = [
    ("Mp", 1.5, 0.1, "Primary mass"),
    ("Ms", 0.01, 0.1, "Secondary mass"),
    ("Kp", 1.0, 0.2, "Primary spring stiffness"),
    ("Ks", 0.01, 0.2, "Secondary spring stiffness"),
    ("Zeta_p", 0.05, 0.4, "Primary damping ratio"),
    ("Zeta_s", 0.02, 0.5, "Secondary damping ratio"),
    ("S0", 100.0, 0.1, "White noise base acceleration"),
];

fn lognormal_marginal(name: &str, mean: f64, cov: f64, description: &str) -> MarginalSpec {
    let std = cov * mean;
    MarginalSpec::new(
        name,
        DistributionFamily::LogNormal,
        vec![
            lognormal_mu_from_moments(mean, std),
            lognormal_sigma_from_moments(mean, std),
        ],
    )
    .with_description(description)
}

/// Mean-square relative displacement of the secondary spring of a
/// primary/secondary oscillator under white-noise base acceleration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DampedOscillator;

impl DampedOscillator {
    /// Create the function with its default input.
    pub fn new() -> Self {
        Self
    }
}

impl TestFunction for DampedOscillator {
    fn name(&self) -> &'static str {
        "DampedOscillator"
    }

    fn description(&self) -> &'static str {
        "Damped oscillator model from Der Kiureghian and De Stefano (1991)"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["metamodeling", "sensitivity"]
    }

    fn available_inputs(&self) -> &'static [&'static str] {
        AVAILABLE_INPUTS
    }

    fn input_selection(&self) -> &'static str {
        AVAILABLE_INPUTS[0]
    }

    fn input_spec(&self) -> ProbInputSpec {
        ProbInputSpec::new(
            "DerKiureghian1991",
            "Input specification for the damped oscillator from Der Kiureghian and De Stefano (1991)",
            MARGINALS
                .iter()
                .map(|&(name, mean, cov, description)| {
                    lognormal_marginal(name, mean, cov, description)
                })
                .collect(),
        )
    }

    fn spatial_dimension(&self) -> usize {
        MARGINALS.len()
    }

    fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
        let (mass_p, mass_s) = (xx.column(0), xx.column(1));
        let omega_p = Zip::from(xx.column(2))
            .and(mass_p)
            .map_collect(|&k, &m| (k / m).sqrt());
        let omega_s = Zip::from(xx.column(3))
            .and(mass_s)
            .map_collect(|&k, &m| (k / m).sqrt());
        let gamma = Zip::from(mass_s).and(mass_p).map_collect(|&ms, &mp| ms / mp);

        let mut yy = Zip::from(&omega_p)
            .and(&omega_s)
            .and(&gamma)
            .and(xx.column(4))
            .and(xx.column(5))
            .map_collect(|&wp, &ws, &gamma, &zp, &zs| {
                let omega_a = 0.5 * (wp + ws);
                let zeta_a = 0.5 * (zp + zs);
                let theta = (wp - ws) / omega_a;
                let coupling = zeta_a * zs
                    / (zp * zs * (4.0 * zeta_a * zeta_a + theta * theta) + gamma * zeta_a * zeta_a);
                let response =
                    (zp * wp.powi(3) + zs * ws.powi(3)) * wp / (4.0 * zeta_a * omega_a.powi(4));
                coupling * response
            });

        Zip::from(&mut yy)
            .and(xx.column(6))
            .and(xx.column(5))
            .and(&omega_s)
            .for_each(|y, &s0, &zs, &ws| *y *= PI * s0 / (4.0 * zs * ws.powi(3)));
        yy
    }
}

impl_display_via_summary!(DampedOscillator);

//! Small helpers shared by the input declarations.

/// Log-space scale `σ` of a lognormal with the given mean and standard deviation.
///
/// `σ = sqrt(ln(1 + (std / mean)²))`
pub fn lognormal_sigma_from_moments(mean: f64, std: f64) -> f64 {
    (std / mean).powi(2).ln_1p().sqrt()
}

/// Log-space location `μ` of a lognormal with the given mean and standard deviation.
///
/// `μ = ln(mean) - σ² / 2`
pub fn lognormal_mu_from_moments(mean: f64, std: f64) -> f64 {
    let sigma = lognormal_sigma_from_moments(mean, std);
    mean.ln() - 0.5 * sigma * sigma
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use uqtf_core::distributions::LogNormal;

    #[test]
    fn test_moments_round_trip() {
        let (mean, std) = (1.5, 0.15);
        let mu = lognormal_mu_from_moments(mean, std);
        let sigma = lognormal_sigma_from_moments(mean, std);
        let dist = LogNormal::new(mu, sigma).unwrap();
        assert_relative_eq!(dist.mean(), mean, epsilon = 1e-12);

        let variance = (sigma * sigma).exp_m1() * (2.0 * mu + sigma * sigma).exp();
        assert_relative_eq!(variance.sqrt(), std, epsilon = 1e-12);
    }
}

//! Property tests for the PDF/CDF/ICDF consistency of every family.

use proptest::prelude::*;
use uqtf_core::distributions::{Distribution, DistributionFamily, UnivariateDistribution};

/// Valid parameters for family `index` built from four unit draws.
///
/// Beta bounds are `[0, 2^k]` so that rescaling to the unit interval is exact.
fn random_distribution(index: usize, u: [f64; 4]) -> Distribution {
    let (family, params) = match index {
        0 => {
            let lower = -10.0 + 20.0 * u[0];
            (DistributionFamily::Uniform, vec![lower, lower + 0.5 + 10.0 * u[1]])
        }
        1 => (DistributionFamily::Normal, vec![-5.0 + 10.0 * u[0], 0.1 + 5.0 * u[1]]),
        2 => {
            let (mu, sigma) = (-5.0 + 10.0 * u[0], 0.2 + 3.0 * u[1]);
            (
                DistributionFamily::TruncNormal,
                vec![mu, sigma, mu - sigma * (0.1 + 3.0 * u[2]), mu + sigma * (0.1 + 3.0 * u[3])],
            )
        }
        3 => (DistributionFamily::LogNormal, vec![-2.0 + 4.0 * u[0], 0.1 + 1.9 * u[1]]),
        4 => (DistributionFamily::LogitNormal, vec![-2.0 + 4.0 * u[0], 0.3 + 1.7 * u[1]]),
        5 => (DistributionFamily::Exponential, vec![0.05 + 20.0 * u[0]]),
        6 => {
            let lower = 5.0 * u[1];
            (
                DistributionFamily::TruncExponential,
                vec![0.05 + 10.0 * u[0], lower, lower + 0.5 + 5.0 * u[2]],
            )
        }
        7 => (DistributionFamily::Gumbel, vec![-5.0 + 10.0 * u[0], 0.1 + 5.0 * u[1]]),
        8 => {
            let (mu, beta) = (-5.0 + 10.0 * u[0], 0.2 + 3.0 * u[1]);
            (
                DistributionFamily::TruncGumbel,
                vec![mu, beta, mu - beta * (0.1 + 3.0 * u[2]), mu + beta * (0.1 + 5.0 * u[3])],
            )
        }
        9 => {
            let upper = 2.0_f64.powi((4.0 * u[2]).floor() as i32 - 1);
            (
                DistributionFamily::Beta,
                vec![0.2 + 4.8 * u[0], 0.2 + 4.8 * u[1], 0.0, upper],
            )
        }
        _ => {
            let lower = -5.0 + 10.0 * u[0];
            let upper = lower + 0.5 + 5.0 * u[1];
            (
                DistributionFamily::Triangular,
                vec![lower, upper, lower + (upper - lower) * u[2]],
            )
        }
    };
    Distribution::new(family, &params).unwrap()
}

/// A point `offset` away from one end of the support, in relative terms
/// where the end is finite and as `1 / offset` where it is not.
fn edge_point(dist: &Distribution, offset: f64, upper_side: bool) -> f64 {
    let (lo, hi) = dist.support();
    match (lo.is_finite(), hi.is_finite(), upper_side) {
        (true, true, false) => lo + offset * (hi - lo),
        (true, true, true) => hi - offset * (hi - lo),
        (true, false, false) => lo + offset,
        (true, false, true) => lo + 1.0 / offset,
        (false, _, false) => -1.0 / offset,
        (false, _, true) => 1.0 / offset,
    }
}

fn reference_distributions() -> Vec<Distribution> {
    let cases: [(DistributionFamily, &[f64]); 11] = [
        (DistributionFamily::Uniform, &[1.0, 10.0]),
        (DistributionFamily::Normal, &[2.0, 0.5]),
        (DistributionFamily::TruncNormal, &[0.0, 1.0, -2.0, 3.0]),
        (DistributionFamily::LogNormal, &[0.5, 0.25]),
        (DistributionFamily::LogitNormal, &[-0.5, 1.2]),
        (DistributionFamily::Exponential, &[2.0]),
        (DistributionFamily::TruncExponential, &[0.7, 1.0, 5.0]),
        (DistributionFamily::Gumbel, &[1.0, 2.0]),
        (DistributionFamily::TruncGumbel, &[0.0, 1.0, -1.0, 4.0]),
        (DistributionFamily::Beta, &[2.0, 5.0, 0.0, 2.0]),
        (DistributionFamily::Triangular, &[0.0, 3.0, 1.0]),
    ];
    cases
        .iter()
        .map(|(family, params)| Distribution::new(*family, params).unwrap())
        .collect()
}

#[test]
fn test_icdf_endpoints_equal_support() {
    for dist in reference_distributions() {
        let (lo, hi) = dist.support();
        assert_eq!(dist.icdf(0.0).unwrap(), lo, "{}", dist);
        assert_eq!(dist.icdf(1.0).unwrap(), hi, "{}", dist);
    }
}

#[test]
fn test_cdf_saturates_outside_support() {
    for dist in reference_distributions() {
        let (lo, hi) = dist.support();
        assert_eq!(dist.cdf(lo), 0.0, "{}", dist);
        assert_eq!(dist.cdf(hi), 1.0, "{}", dist);
        if lo.is_finite() {
            assert_eq!(dist.pdf(lo - 1.0), 0.0, "{}", dist);
            assert_eq!(dist.cdf(lo - 1.0), 0.0, "{}", dist);
        }
        if hi.is_finite() {
            assert_eq!(dist.pdf(hi + 1.0), 0.0, "{}", dist);
            assert_eq!(dist.cdf(hi + 1.0), 1.0, "{}", dist);
        }
        assert_eq!(dist.pdf(f64::NEG_INFINITY), 0.0, "{}", dist);
        assert_eq!(dist.pdf(f64::INFINITY), 0.0, "{}", dist);
    }
}

#[test]
fn test_icdf_rejects_non_probabilities() {
    for dist in reference_distributions() {
        for p in [-1e-12, 1.0 + 1e-12, f64::NAN, f64::INFINITY] {
            assert!(dist.icdf(p).is_err(), "{} accepted {}", dist, p);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_cdf_icdf_round_trip(p in 1e-6_f64..(1.0 - 1e-6)) {
        for dist in reference_distributions() {
            let x = dist.icdf(p).unwrap();
            let q = dist.cdf(x);
            prop_assert!((0.0..=1.0).contains(&q));
            prop_assert!((q - p).abs() < 1e-9, "{}: p={} cdf(icdf(p))={}", dist, p, q);

            let again = dist.cdf(dist.icdf(q).unwrap());
            prop_assert!((again - q).abs() < 1e-9, "{}: cdf(x)={} round trip={}", dist, q, again);
        }
    }

    #[test]
    fn test_round_trip_near_support_edges(
        index in 0usize..11,
        u in prop::array::uniform4(0.0_f64..1.0),
        log_offset in -15.0_f64..-0.5,
        upper_side in any::<bool>(),
    ) {
        let dist = random_distribution(index, u);
        let x = edge_point(&dist, 10.0_f64.powf(log_offset), upper_side);
        let p = dist.cdf(x);
        prop_assert!((0.0..=1.0).contains(&p), "{}: cdf({})={}", dist, x, p);

        let back = dist.icdf(p).unwrap();
        let again = dist.cdf(back);
        prop_assert!(
            (again - p).abs() < 1e-9,
            "{}: x={} cdf={} icdf={} cdf again={}", dist, x, p, back, again
        );
    }

    #[test]
    fn test_cdf_is_nondecreasing(a in 0.0_f64..1.0, b in 0.0_f64..1.0) {
        let (p_lo, p_hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assume!(p_hi - p_lo > 1e-9);
        for dist in reference_distributions() {
            let x_lo = dist.icdf(p_lo).unwrap();
            let x_hi = dist.icdf(p_hi).unwrap();
            prop_assert!(x_lo <= x_hi, "{}: icdf not monotone", dist);
            prop_assert!(dist.cdf(x_lo) <= dist.cdf(x_hi), "{}: cdf not monotone", dist);
        }
    }

    #[test]
    fn test_pdf_nonnegative_and_finite_inside(p in 1e-6_f64..(1.0 - 1e-6)) {
        for dist in reference_distributions() {
            let x = dist.icdf(p).unwrap();
            let density = dist.pdf(x);
            prop_assert!(density.is_finite() && density >= 0.0, "{}: pdf({})={}", dist, x, density);
        }
    }

    #[test]
    fn test_exponential_any_rate(rate in 0.01_f64..100.0, p in 1e-6_f64..(1.0 - 1e-6)) {
        let dist = Distribution::new(DistributionFamily::Exponential, &[rate]).unwrap();
        let x = dist.icdf(p).unwrap();
        prop_assert!((dist.cdf(x) - p).abs() < 1e-9);
        prop_assert_eq!(dist.pdf(0.0), rate);
    }

    #[test]
    fn test_gumbel_any_parameters(
        mu in -50.0_f64..50.0,
        beta in 0.05_f64..20.0,
        p in 1e-6_f64..(1.0 - 1e-6),
    ) {
        let dist = Distribution::new(DistributionFamily::Gumbel, &[mu, beta]).unwrap();
        let x = dist.icdf(p).unwrap();
        prop_assert!((dist.cdf(x) - p).abs() < 1e-9);
    }
}

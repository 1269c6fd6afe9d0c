//! Unit tests for the RNG module.
//!
//! - Seed reproducibility
//! - Uniform range
//! - Batch fill equivalence with scalar draws
//! - Clone continues the same stream
//! - Index and open-interval draws

use super::*;
use proptest::prelude::*;

#[test]
fn test_seed_reproducibility() {
    let mut rng1 = RandomState::from_seed(12345);
    let mut rng2 = RandomState::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    }
}

#[test]
fn test_different_seeds_differ() {
    let mut rng1 = RandomState::from_seed(1);
    let mut rng2 = RandomState::from_seed(2);

    let a: Vec<f64> = (0..10).map(|_| rng1.gen_uniform()).collect();
    let b: Vec<f64> = (0..10).map(|_| rng2.gen_uniform()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_uniform_range() {
    let mut rng = RandomState::from_seed(42);

    for _ in 0..10_000 {
        let value = rng.gen_uniform();
        assert!(value >= 0.0, "Uniform value {} is below 0", value);
        assert!(value < 1.0, "Uniform value {} is >= 1", value);
    }
}

#[test]
fn test_fill_uniform_matches_scalar_draws() {
    let mut batch = RandomState::from_seed(7);
    let mut scalar = RandomState::from_seed(7);

    let mut buffer = vec![0.0; 64];
    batch.fill_uniform(&mut buffer);

    for &value in &buffer {
        assert_eq!(value, scalar.gen_uniform());
    }
    // Both generators are now at the same position
    assert_eq!(batch.gen_uniform(), scalar.gen_uniform());
}

#[test]
fn test_empty_buffer() {
    let mut rng = RandomState::from_seed(42);
    let mut reference = RandomState::from_seed(42);
    let mut empty: Vec<f64> = vec![];

    rng.fill_uniform(&mut empty);
    assert_eq!(rng.gen_uniform(), reference.gen_uniform());
}

#[test]
fn test_clone_continues_same_stream() {
    let mut rng = RandomState::from_seed(99);
    rng.gen_uniform();
    let mut copy = rng.clone();

    for _ in 0..10 {
        assert_eq!(rng.gen_uniform(), copy.gen_uniform());
    }
    assert_eq!(copy.seed(), Some(99));
}

#[test]
fn test_optional_seed_constructor() {
    assert_eq!(RandomState::new(Some(5)).seed(), Some(5));
    assert_eq!(RandomState::new(None).seed(), None);
}

#[test]
fn test_uniform_mean_is_one_half() {
    let mut rng = RandomState::from_seed(2024);
    let n = 100_000;
    let mean = (0..n).map(|_| rng.gen_uniform()).sum::<f64>() / n as f64;
    assert!((mean - 0.5).abs() < 0.01, "mean = {}", mean);
}

#[test]
fn test_open_uniform_and_index_draws() {
    let mut rng = RandomState::from_seed(17);
    for _ in 0..1000 {
        let u = rng.gen_open_uniform();
        assert!(u > 0.0 && u < 1.0);
        assert!(rng.gen_index(7) < 7);
    }
}

#[test]
fn test_sample_indices_are_distinct() {
    let mut rng = RandomState::from_seed(3);
    let mut picked = rng.sample_indices(20, 8);
    assert_eq!(picked.len(), 8);
    picked.sort_unstable();
    picked.dedup();
    assert_eq!(picked.len(), 8);
    assert!(picked.iter().all(|&i| i < 20));

    let mut all = rng.sample_indices(5, 5);
    all.sort_unstable();
    assert_eq!(all, vec![0, 1, 2, 3, 4]);
    assert!(rng.sample_indices(5, 0).is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_any_seed_is_reproducible(seed in any::<u64>()) {
        let mut rng1 = RandomState::from_seed(seed);
        let mut rng2 = RandomState::from_seed(seed);
        for _ in 0..8 {
            prop_assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
        }
    }
}

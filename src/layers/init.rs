//! Weight initialization.
//!
//! Layer parameters are drawn once at construction from a non-negative
//! uniform range scaled by a fan-in/fan-out heuristic (Glorot & Bengio,
//! 2010), then stay read-only for the lifetime of the layer.
//!
//! Note the sampling range is the half-open `[0, limit)`, not the
//! textbook symmetric `[-limit, limit]`. The non-negative range is part
//! of this crate's initialization contract; downstream numeric
//! expectations (all-non-negative pre-activations for non-negative
//! inputs) depend on it.
//!
//! # References
//!
//! - Glorot, X., & Bengio, Y. (2010). Understanding the difficulty of
//!   training deep feedforward neural networks. AISTATS.

use crate::primitives::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fan-in/fan-out limit: `sqrt(6 / (fan_in + fan_out))`.
#[must_use]
pub fn xavier_limit(fan_in: usize, fan_out: usize) -> f32 {
    (6.0 / (fan_in + fan_out) as f32).sqrt()
}

/// Builds a seeded generator, falling back to OS entropy when no seed
/// is given.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Fills a `rows x cols` matrix with draws from `[0, limit)` using the
/// given generator. A non-positive limit yields zeros.
pub(crate) fn uniform_nonneg_with(rng: &mut StdRng, rows: usize, cols: usize, limit: f32) -> Matrix<f32> {
    if limit <= 0.0 {
        return Matrix::zeros(rows, cols);
    }
    let data: Vec<f32> = (0..rows * cols).map(|_| rng.gen_range(0.0..limit)).collect();
    Matrix::from_vec(rows, cols, data).expect("length is rows * cols by construction")
}

/// Samples a `rows x cols` matrix from `[0, limit)`.
///
/// # Arguments
///
/// * `seed` - Optional seed for reproducibility; `None` uses OS entropy.
#[must_use]
pub fn uniform_nonneg(rows: usize, cols: usize, limit: f32, seed: Option<u64>) -> Matrix<f32> {
    let mut rng = rng_from_seed(seed);
    uniform_nonneg_with(&mut rng, rows, cols, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xavier_limit() {
        let limit = xavier_limit(2, 4);
        assert!((limit - (6.0_f32 / 6.0).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_nonneg_range() {
        let m = uniform_nonneg(8, 8, 0.5, Some(1));
        assert!(m.as_slice().iter().all(|&w| (0.0..0.5).contains(&w)));
    }

    #[test]
    fn test_uniform_nonneg_seeded_reproducible() {
        let a = uniform_nonneg(4, 4, 1.0, Some(99));
        let b = uniform_nonneg(4, 4, 1.0, Some(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_uniform_nonneg_different_seeds_differ() {
        let a = uniform_nonneg(4, 4, 1.0, Some(1));
        let b = uniform_nonneg(4, 4, 1.0, Some(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_limit_yields_zeros() {
        let m = uniform_nonneg(3, 3, 0.0, Some(1));
        assert!(m.as_slice().iter().all(|&w| w == 0.0));
    }
}

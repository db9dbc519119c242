//! Synthetic sequence generation for tests and `demos/`.
//!
//! The core operators (`distance`, `coarsen`, `window`, `solver`, `driver`)
//! are deterministic and take no randomness. This module is the one place
//! pseudo-randomness is allowed, and it is not part of the alignment core —
//! it exists purely to hand `demos/` and integration tests Gaussian-ish
//! feature sequences to align.

use crate::sequence::Sequence;
use rand::Rng as _;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// A seeded, reproducible generator for synthesizing test/demo sequences.
pub type Rng = ChaCha8Rng;

/// Generates a length-`n`, dimension-`l` sequence of independent Gaussian
/// feature vectors.
pub fn gaussian_sequence(rng: &mut Rng, n: usize, l: usize) -> Sequence {
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|_| (0..l).map(|_| rng.sample(StandardNormal)).collect())
        .collect();
    Sequence::from_rows(&rows)
}

/// Generates `base` perturbed by independent Gaussian noise of standard
/// deviation `sigma` — useful for building a "noisy copy" of a sequence to
/// align against the original.
pub fn perturbed_copy(rng: &mut Rng, base: &Sequence, sigma: f64) -> Sequence {
    let rows: Vec<Vec<f64>> = (0..base.len())
        .map(|i| {
            base.row(i)
                .iter()
                .map(|&v| v + sigma * rng.sample::<f64, _>(StandardNormal))
                .collect()
        })
        .collect();
    Sequence::from_rows(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn gaussian_sequence_has_requested_shape() {
        let mut rng = Rng::seed_from_u64(42);
        let seq = gaussian_sequence(&mut rng, 10, 3);
        assert_eq!(seq.len(), 10);
        assert_eq!(seq.dim(), 3);
    }

    #[test]
    fn same_seed_is_reproducible() {
        let seq_a = gaussian_sequence(&mut Rng::seed_from_u64(7), 5, 2);
        let seq_b = gaussian_sequence(&mut Rng::seed_from_u64(7), 5, 2);
        assert_eq!(seq_a, seq_b);
    }
}

//! Approximate dynamic time warping with boundary-drop semantics (DTW-BD),
//! and its hierarchical accelerator Fast-DTW-BD.
//!
//! Given two sequences of equal-dimensional real feature vectors, this crate
//! computes a monotonic alignment path minimizing the sum of pairwise
//! Euclidean distances plus a per-step skip penalty for unaligned prefixes
//! and suffixes of either sequence. Unlike classical DTW, the optimal path
//! is not required to reach the corners: arbitrary-length prefixes and
//! suffixes of either sequence may be left unaligned.
//!
//! Public invariants (must not change):
//! - The core algorithm (`distance`, `coarsen`, `window`, `solver`,
//!   `driver`) is deterministic: no RNG, no I/O, no shared mutable state.
//! - Candidate tie-breaking in the solver is fixed (skip-in, diagonal,
//!   insert-S, insert-T) and is part of the public contract.
//! - `align_fast` is an approximation of `align_exact`; it does not
//!   guarantee a globally optimal path.

pub mod coarsen;
pub mod distance;
pub mod driver;
pub mod error;
pub mod generate;
pub mod path;
pub mod sequence;
pub mod solver;
pub mod stats;
pub mod window;

pub use driver::{align_exact, align_exact_with_stats, align_fast, align_fast_with_stats};
pub use error::{AlignError, Result};
pub use path::Path;
pub use sequence::Sequence;
pub use stats::AlignStats;
pub use window::Window;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_root_reexports_the_public_api() {
        let s = Sequence::from_rows(&[vec![0.0], vec![1.0]]);
        let t = s.clone();
        let path = align_exact(&s, &t, 1.0).unwrap();
        assert_eq!(path.cells(), &[(0, 0), (1, 1)]);
    }
}

//! Run diagnostics for an alignment call: a plain accumulator struct
//! populated alongside the algorithm and timed with the wasm-friendly
//! `instant::Instant`, small enough that a collaborator can opt into it
//! without touching the hot path.

use instant::Instant;
use std::time::Duration;

/// Diagnostics collected while running [`crate::align_fast_with_stats`] or
/// [`crate::align_exact_with_stats`].
#[derive(Debug, Clone, Default)]
pub struct AlignStats {
    /// Length of `S`.
    pub len_s: usize,
    /// Length of `T`.
    pub len_t: usize,
    /// Number of cells on the recovered path.
    pub path_len: usize,
    /// Total alignment cost (or the implicit all-skip cost for an empty
    /// path).
    pub cost: f64,
    /// Total DP cells written across every recursion level.
    pub cells_written: usize,
    /// Number of Fast-DTW-BD recursion levels entered (0 for a direct exact
    /// solve).
    pub recursion_depth: usize,
    /// Wall-clock time spent in the call.
    pub elapsed: Duration,
}

pub(crate) struct Timer(Instant);

impl Timer {
    pub(crate) fn start() -> Self {
        Timer(Instant::now())
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

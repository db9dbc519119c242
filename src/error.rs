//! Error type for the alignment core: one variant per class of failure,
//! paired with a `Result` alias.

use thiserror::Error;

/// Failure modes of the DTW-BD / Fast-DTW-BD core.
///
/// Degenerate input (either sequence empty) is *not* an error — callers get
/// an empty [`crate::path::Path`] back instead. The two failure kinds below
/// are allocation failure of a DP buffer, and a caller handing in two
/// sequences whose feature dimension disagrees.
#[derive(Error, Debug)]
pub enum AlignError {
    /// The DP table or a temporary buffer could not be acquired.
    #[error("failed to allocate alignment buffers")]
    Allocation(#[from] std::collections::TryReserveError),

    /// The two sequences passed to the same call have different feature
    /// dimension `l`.
    #[error("sequences have mismatched feature dimension: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Convenience result type for this crate.
pub type Result<T> = std::result::Result<T, AlignError>;

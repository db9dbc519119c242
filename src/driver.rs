//! The Fast-DTW-BD driver: coarsen, recurse, project a window from the
//! coarse path, refine. Falls back to the exact solver once either sequence
//! is small enough that a window wouldn't help.

use crate::coarsen::coarsen;
use crate::error::{AlignError, Result};
use crate::path::Path;
use crate::sequence::Sequence;
use crate::solver::solve_counted;
use crate::stats::{AlignStats, Timer};
use crate::window::build_window;

/// Below this length (in either sequence), windowing has no benefit and the
/// driver solves exactly instead: a band of the given radius around any
/// coarse path would already cover the whole grid.
fn base_case_threshold(radius: usize) -> usize {
    2 * (radius + 1) + 1
}

/// Exact DTW-BD: the solver with no window restriction.
pub fn align_exact(s: &Sequence, t: &Sequence, skip_penalty: f64) -> Result<Path> {
    if s.dim() != t.dim() {
        return Err(AlignError::DimensionMismatch {
            expected: s.dim(),
            found: t.dim(),
        });
    }
    solve_counted(s, t, skip_penalty, None).map(|(path, _)| path)
}

/// Exact DTW-BD, with collected [`AlignStats`].
pub fn align_exact_with_stats(
    s: &Sequence,
    t: &Sequence,
    skip_penalty: f64,
) -> Result<(Path, AlignStats)> {
    let timer = Timer::start();
    let (path, cells_written) = solve_counted(s, t, skip_penalty, None)?;
    let stats = AlignStats {
        len_s: s.len(),
        len_t: t.len(),
        path_len: path.len(),
        cost: resolved_cost(&path, skip_penalty, s.len(), t.len()),
        cells_written,
        recursion_depth: 0,
        elapsed: timer.elapsed(),
    };
    Ok((path, stats))
}

/// Fast-DTW-BD: recursively coarsens both sequences, solves the coarse pair,
/// projects the recovered coarse path onto a radius-dilated fine-grid
/// window, then solves the fine pair inside that window.
///
/// Correctness depends on the approximation that the optimal fine-grid path
/// lies within a radius-`r` band around the un-coarsened coarse-optimal path
/// — Fast-DTW-BD does not guarantee a global optimum.
pub fn align_fast(s: &Sequence, t: &Sequence, skip_penalty: f64, radius: usize) -> Result<Path> {
    if s.dim() != t.dim() {
        return Err(AlignError::DimensionMismatch {
            expected: s.dim(),
            found: t.dim(),
        });
    }
    align_fast_level(s, t, skip_penalty, radius, 0, &mut None)
}

/// Fast-DTW-BD, with collected [`AlignStats`] (total cells written across
/// every recursion level, and the number of levels entered).
pub fn align_fast_with_stats(
    s: &Sequence,
    t: &Sequence,
    skip_penalty: f64,
    radius: usize,
) -> Result<(Path, AlignStats)> {
    if s.dim() != t.dim() {
        return Err(AlignError::DimensionMismatch {
            expected: s.dim(),
            found: t.dim(),
        });
    }
    let timer = Timer::start();
    let mut acc = Some((0usize, 0usize)); // (cells_written, recursion_depth)
    let path = align_fast_level(s, t, skip_penalty, radius, 0, &mut acc)?;
    let (cells_written, recursion_depth) = acc.unwrap();
    let stats = AlignStats {
        len_s: s.len(),
        len_t: t.len(),
        path_len: path.len(),
        cost: resolved_cost(&path, skip_penalty, s.len(), t.len()),
        cells_written,
        recursion_depth,
        elapsed: timer.elapsed(),
    };
    Ok((path, stats))
}

fn resolved_cost(path: &Path, skip_penalty: f64, n: usize, m: usize) -> f64 {
    if path.is_empty() {
        Path::implicit_skip_cost(skip_penalty, n, m)
    } else {
        path.cost()
    }
}

/// `acc`, when `Some`, accumulates `(cells_written, max_recursion_depth)`
/// across the whole call tree; `level` tracks the current recursion depth.
fn align_fast_level(
    s: &Sequence,
    t: &Sequence,
    skip_penalty: f64,
    radius: usize,
    level: usize,
    acc: &mut Option<(usize, usize)>,
) -> Result<Path> {
    if let Some((_, depth)) = acc {
        *depth = (*depth).max(level);
    }

    let n = s.len();
    let m = t.len();
    if n == 0 || m == 0 {
        return Ok(Path::empty());
    }

    let threshold = base_case_threshold(radius);
    if n < threshold || m < threshold {
        let (path, written) = solve_counted(s, t, skip_penalty, None)?;
        if let Some((cells, _)) = acc {
            *cells += written;
        }
        return Ok(path);
    }

    let cs = coarsen(s);
    let ct = coarsen(t);
    let coarse_path = align_fast_level(&cs, &ct, skip_penalty, radius, level + 1, acc)?;

    let window = build_window(n, m, coarse_path.cells(), radius);
    let (path, written) = solve_counted(s, t, skip_penalty, Some(&window))?;
    if let Some((cells, _)) = acc {
        *cells += written;
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Sequence;
    use proptest::prelude::*;

    fn seq1(values: &[f64]) -> Sequence {
        Sequence::from_rows(&values.iter().map(|&v| vec![v]).collect::<Vec<_>>())
    }

    // n = m = 3, radius = 0: min_len (3) equals the base threshold, so the
    // driver falls through to the exact solver directly.
    #[test]
    fn small_inputs_fall_through_to_exact_solver() {
        let s = seq1(&[0.0, 1.0, 2.0]);
        let t = s.clone();
        let (path, stats) = align_fast_with_stats(&s, &t, 1.0, 0).unwrap();
        assert_eq!(path.cells(), &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(stats.recursion_depth, 0);
    }

    // Scaled down for test speed: with a generous radius and a large skip
    // penalty, Fast-DTW-BD matches exact DTW-BD.
    #[test]
    fn fast_matches_exact_on_identical_sequences() {
        let values: Vec<f64> = (0..64).map(|i| i as f64).collect();
        let s = seq1(&values);
        let t = s.clone();
        let exact = align_exact(&s, &t, 1e9).unwrap();
        let fast = align_fast(&s, &t, 1e9, 8).unwrap();
        assert!((exact.cost() - fast.cost()).abs() < 1e-6);
    }

    proptest! {
        // A radius >= max(n, m) makes Fast-DTW-BD equivalent to exact
        // DTW-BD (the base case is hit immediately).
        #[test]
        fn large_radius_matches_exact(
            xs in prop::collection::vec(-4.0f64..4.0, 1..20),
            ys in prop::collection::vec(-4.0f64..4.0, 1..20),
            skip in 0.01f64..2.0,
        ) {
            let s = seq1(&xs);
            let t = seq1(&ys);
            let radius = xs.len().max(ys.len());
            let exact = align_exact(&s, &t, skip).unwrap();
            let fast = align_fast(&s, &t, skip, radius).unwrap();
            prop_assert!((exact.cost() - fast.cost()).abs() < 1e-6);
            prop_assert_eq!(exact.is_empty(), fast.is_empty());
        }
    }

    #[test]
    fn empty_inputs_return_empty_path() {
        let s = Sequence::from_rows(&[]);
        let t = seq1(&[1.0, 2.0]);
        assert!(align_fast(&s, &t, 1.0, 2).unwrap().is_empty());
        assert!(align_exact(&s, &t, 1.0).unwrap().is_empty());
    }
}

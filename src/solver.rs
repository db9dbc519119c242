//! The exact windowed DTW-BD dynamic-programming recurrence, with
//! boundary-drop endpoint selection and backtrace.
//!
//! Candidates are evaluated in a fixed order — skip-in, diagonal, insert-S,
//! insert-T — and ties resolve to the earlier-listed candidate. This
//! ordering is part of the contract: downstream tests depend on it for
//! determinism.

use crate::distance::euclid;
use crate::error::{AlignError, Result};
use crate::path::Path;
use crate::sequence::Sequence;
use crate::window::Window;

/// `+∞` sentinel for out-of-window or out-of-bounds cells, realized as the
/// largest representable finite `f64` so ordinary arithmetic on it stays
/// finite instead of propagating `NaN`.
const INF: f64 = f64::MAX;

#[derive(Clone, Copy)]
struct Cell {
    cost: f64,
    prev: Option<(usize, usize)>,
}

fn row_range(window: Option<&Window>, i: usize, m: usize) -> (usize, usize) {
    match window {
        Some(w) => w.row(i),
        None => (0, m),
    }
}

/// Reads `table[i, j].cost`, returning `INF` for out-of-bounds or
/// out-of-window cells.
fn cell_cost(table: &[Cell], m: usize, i: isize, j: isize, window: Option<&Window>) -> f64 {
    if i < 0 || j < 0 {
        return INF;
    }
    let (iu, ju) = (i as usize, j as usize);
    let (lo, hi) = row_range(window, iu, m);
    if ju < lo || ju >= hi {
        return INF;
    }
    table[iu * m + ju].cost
}

/// Runs the exact DTW-BD recurrence over `s` and `t`, optionally restricted
/// to `window`. Returns the recovered path and the number of DP cells
/// actually written (used by [`crate::stats::AlignStats`]).
pub(crate) fn solve_counted(
    s: &Sequence,
    t: &Sequence,
    skip_penalty: f64,
    window: Option<&Window>,
) -> Result<(Path, usize)> {
    if s.dim() != t.dim() {
        return Err(AlignError::DimensionMismatch {
            expected: s.dim(),
            found: t.dim(),
        });
    }

    let n = s.len();
    let m = t.len();
    if n == 0 || m == 0 {
        // An empty input sequence is a valid "nothing to align" case, not
        // an error.
        return Ok((Path::empty(), 0));
    }

    let mut table: Vec<Cell> = Vec::new();
    table
        .try_reserve_exact(n * m)
        .map_err(AlignError::Allocation)?;
    table.resize(
        n * m,
        Cell {
            cost: INF,
            prev: None,
        },
    );

    // The cost of skipping everything; the implicit "no match" outcome.
    let mut best = skip_penalty * (n + m) as f64;
    let mut terminus: Option<(usize, usize)> = None;
    let mut written = 0usize;

    for i in 0..n {
        let (lo, hi) = row_range(window, i, m);
        for j in lo..hi {
            let d = euclid(s.row(i), t.row(j));

            // Skip-in: drop S[0..i) and T[0..j); always live, so the cell is
            // always finite inside the window.
            let mut cost = skip_penalty * (i + j) as f64 + d;
            let mut prev = None;

            let diag = cell_cost(&table, m, i as isize - 1, j as isize - 1, window) + d;
            if diag < cost {
                cost = diag;
                prev = Some((i - 1, j - 1));
            }
            let ins_s = cell_cost(&table, m, i as isize, j as isize - 1, window) + d;
            if ins_s < cost {
                cost = ins_s;
                prev = Some((i, j - 1));
            }
            let ins_t = cell_cost(&table, m, i as isize - 1, j as isize, window) + d;
            if ins_t < cost {
                cost = ins_t;
                prev = Some((i - 1, j));
            }

            table[i * m + j] = Cell { cost, prev };
            written += 1;

            // Boundary-drop endpoint: cost if the match ends here and the
            // remaining suffixes of both sequences are skipped.
            let end_cost = cost + skip_penalty * ((n - 1 - i) + (m - 1 - j)) as f64;
            if end_cost < best {
                best = end_cost;
                terminus = Some((i, j));
            }
        }
    }

    let Some(end) = terminus else {
        return Ok((Path::empty(), written));
    };

    let mut cells = vec![end];
    let mut cur = end;
    while let Some(p) = table[cur.0 * m + cur.1].prev {
        cells.push(p);
        cur = p;
    }
    cells.reverse();

    Ok((Path::new(cells, best), written))
}

/// Runs the exact DTW-BD recurrence and returns just the recovered path.
pub fn solve(
    s: &Sequence,
    t: &Sequence,
    skip_penalty: f64,
    window: Option<&Window>,
) -> Result<Path> {
    solve_counted(s, t, skip_penalty, window).map(|(path, _)| path)
}

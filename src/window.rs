//! The window builder: projects a coarse-grid path onto the fine grid and
//! dilates it by a radius, producing a per-row admissible column interval.
//! Pure index arithmetic, no distance evaluation.

/// Per-row half-open column intervals `[lo, hi)` admissible for the DTW-BD
/// solver. A row untouched by the projected coarse path carries the empty
/// interval `(m, 0)`, which the solver's row loop naturally skips.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    rows: Vec<(usize, usize)>,
}

impl Window {
    /// The admissible `[lo, hi)` interval for row `i`.
    pub fn row(&self, i: usize) -> (usize, usize) {
        self.rows[i]
    }

    /// Number of rows covered (`n`).
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Builds a fine-grid window from a coarse path and a dilation radius.
///
/// Every coarse cell `(i, j)` on `coarse_path` un-coarsens to the four fine
/// cells `{(2i, 2j), (2i+1, 2j), (2i, 2j+1), (2i+1, 2j+1)}`. For each such
/// fine cell `(fi, fj)` and every offset `x` in `[-radius, radius]`, the fine
/// rows `2*(i + x)` and `2*(i + x) + 1` are widened to include the columns
/// `[fj - radius, fj + radius + 1)`, clamped to `[0, m]`.
pub fn build_window(n: usize, m: usize, coarse_path: &[(usize, usize)], radius: usize) -> Window {
    // `lo[row] == usize::MAX` marks "not yet touched"; finalized to `(m, 0)`.
    let mut lo = vec![usize::MAX; n];
    let mut hi = vec![0usize; n];
    let r = radius as isize;

    for &(ci, cj) in coarse_path {
        let children = [
            (2 * ci, 2 * cj),
            (2 * ci + 1, 2 * cj),
            (2 * ci, 2 * cj + 1),
            (2 * ci + 1, 2 * cj + 1),
        ];
        for &(_fi, fj) in &children {
            for x in -r..=r {
                let ci_x = ci as isize + x;
                if ci_x < 0 {
                    continue;
                }
                let base = 2 * ci_x as usize;
                for row in [base, base + 1] {
                    if row >= n {
                        continue;
                    }
                    let col_lo = fj.saturating_sub(radius).min(m);
                    let col_hi = (fj + radius + 1).min(m);
                    if col_lo < lo[row] {
                        lo[row] = col_lo;
                    }
                    if col_hi > hi[row] {
                        hi[row] = col_hi;
                    }
                }
            }
        }
    }

    let rows = (0..n)
        .map(|row| {
            if lo[row] == usize::MAX {
                (m, 0)
            } else {
                (lo[row], hi[row])
            }
        })
        .collect();

    Window { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_rows_get_empty_interval() {
        let w = build_window(8, 8, &[(0, 0)], 0);
        // Row 5 is far from the projected path and should be untouched.
        assert_eq!(w.row(5), (8, 0));
    }

    #[test]
    fn projected_rows_contain_the_coarse_cells_fine_children() {
        let w = build_window(8, 8, &[(1, 1)], 0);
        // Coarse cell (1,1) -> fine children rows 2,3, columns around 2 and 3.
        let (lo, hi) = w.row(2);
        assert!(lo <= 2 && hi >= 3, "row 2 window was ({lo}, {hi})");
    }

    #[test]
    fn larger_radius_widens_the_band() {
        let narrow = build_window(16, 16, &[(2, 2)], 0);
        let wide = build_window(16, 16, &[(2, 2)], 3);
        let (lo_n, hi_n) = narrow.row(4);
        let (lo_w, hi_w) = wide.row(4);
        assert!(hi_w - lo_w >= hi_n - lo_n);
    }

    #[test]
    fn bounds_are_clamped_to_the_fine_grid() {
        let w = build_window(4, 4, &[(0, 0)], 10);
        let (lo, hi) = w.row(0);
        assert!(hi <= 4);
        assert!(lo <= 4);
    }
}

//! The `Sequence` data model: an ordered run of `n` equal-dimension feature
//! vectors, stored as a contiguous row-major matrix.

use ndarray::Array2;

/// An immutable sequence of `n` feature vectors of dimension `l`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    data: Array2<f64>,
}

impl Sequence {
    /// Builds a sequence from row vectors. All rows must share the same
    /// length; an empty slice of rows produces the length-0 sequence with
    /// `dim() == 0`.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let n = rows.len();
        let l = rows.first().map_or(0, |r| r.len());
        let mut data = Array2::zeros((n, l));
        for (i, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.len(), l, "all rows must share feature dimension");
            data.row_mut(i).assign(&ndarray::ArrayView1::from(row.as_slice()));
        }
        Sequence { data }
    }

    /// Wraps an already-built row-major matrix.
    pub fn from_array(data: Array2<f64>) -> Self {
        Sequence { data }
    }

    /// Number of feature vectors, `n`.
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// `true` iff the sequence holds no feature vectors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Feature dimension, `l`.
    pub fn dim(&self) -> usize {
        self.data.ncols()
    }

    /// The `i`-th feature vector.
    pub fn row(&self, i: usize) -> &[f64] {
        self.data
            .row(i)
            .to_slice()
            .expect("sequence rows are contiguous in a row-major matrix")
    }

    /// Borrows the underlying matrix.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }
}

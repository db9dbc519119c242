//! The coarsener: halves a sequence's length by pairwise averaging adjacent
//! feature vectors. The last element is dropped when the length is odd.

use crate::sequence::Sequence;
use ndarray::Array2;

/// Produces a freshly owned sequence of length `n / 2` whose `i`-th vector
/// is the componentwise mean of input vectors `2i` and `2i + 1`.
pub fn coarsen(seq: &Sequence) -> Sequence {
    let n = seq.len() / 2;
    let l = seq.dim();
    let mut data = Array2::zeros((n, l));
    for i in 0..n {
        let a = seq.row(2 * i);
        let b = seq.row(2 * i + 1);
        let mut out = data.row_mut(i);
        for k in 0..l {
            out[k] = 0.5 * (a[k] + b[k]);
        }
    }
    Sequence::from_array(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_adjacent_pairs() {
        let seq = Sequence::from_rows(&[vec![0.0], vec![2.0], vec![4.0], vec![10.0]]);
        let c = coarsen(&seq);
        assert_eq!(c.len(), 2);
        assert_eq!(c.row(0), &[1.0]);
        assert_eq!(c.row(1), &[7.0]);
    }

    #[test]
    fn drops_trailing_element_on_odd_length() {
        let seq = Sequence::from_rows(&[vec![0.0], vec![2.0], vec![100.0]]);
        let c = coarsen(&seq);
        assert_eq!(c.len(), 1);
        assert_eq!(c.row(0), &[1.0]);
    }

    #[test]
    fn coarsening_length_zero_or_one_yields_empty() {
        assert_eq!(coarsen(&Sequence::from_rows(&[])).len(), 0);
        assert_eq!(coarsen(&Sequence::from_rows(&[vec![1.0]])).len(), 0);
    }
}

//! Relatable demo: find the best shift between two sequences with DTW-BD.
//!
//! We create a base signal `x`, then a shifted copy `y`. We scan integer
//! shifts and compute the exact DTW-BD cost; the minimum should occur near
//! the true shift. A large skip penalty is used so boundary-drop can't
//! "cheat" by skipping the mismatched region instead of aligning it.

use dtwbd::{align_exact, Path, Sequence};

fn shift_circular(seq: &[f64], shift: isize) -> Vec<f64> {
    let n = seq.len() as isize;
    (0..n)
        .map(|i| {
            let j = (i - shift).rem_euclid(n);
            seq[j as usize]
        })
        .collect()
}

fn as_sequence(values: &[f64]) -> Sequence {
    Sequence::from_rows(&values.iter().map(|&v| vec![v]).collect::<Vec<_>>())
}

fn main() {
    let x: Vec<f64> = (0..24)
        .map(|i| {
            let t = i as f64 / 24.0;
            (2.0 * std::f64::consts::PI * t).sin()
        })
        .collect();

    let true_shift: isize = 3;
    let y = shift_circular(&x, true_shift);

    let skip_penalty = 5.0;
    println!("skip_penalty={skip_penalty}  true_shift={true_shift}");
    println!("shift  dtw_bd_cost");

    let sx = as_sequence(&x);
    let mut best = (0isize, f64::INFINITY);
    for s in -8..=8 {
        let ys = shift_circular(&y, s);
        let sy = as_sequence(&ys);
        let path = align_exact(&sx, &sy, skip_penalty).unwrap();
        let cost = if path.is_empty() {
            Path::implicit_skip_cost(skip_penalty, sx.len(), sy.len())
        } else {
            path.cost()
        };
        println!("{s:>5}  {cost:.6}");
        if cost < best.1 {
            best = (s, cost);
        }
    }
    println!();
    println!("best_shift={}  best_cost={:.6}", best.0, best.1);
}

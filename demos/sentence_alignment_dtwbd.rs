//! Sentence alignment demo (DTW-BD with boundary-drop).
//!
//! Realistic-ish use case:
//! - You have a clean sentence sequence (reference).
//! - You have a noisy OCR/scrape version with extra boilerplate sentences
//!   stuck on the front (a masthead before the real content starts).
//! - You want an **ordered alignment** (sequence-aware), not a bag-of-words,
//!   and you want the leading boilerplate to be dropped rather than forced
//!   into a bad match.
//!
//! This demo uses:
//! - cheap char n-gram hashing to embed sentences into feature vectors
//! - `dtwbd::align_fast` to recover the boundary-drop alignment

use dtwbd::{align_fast, Sequence};

fn embed(text: &str, dim: usize) -> Vec<f64> {
    let mut v = vec![0.0f64; dim];
    let s = text.to_lowercase();
    let chars: Vec<char> = s.chars().collect();
    if chars.len() >= 3 {
        for i in 0..chars.len() - 2 {
            let h = (chars[i] as usize * 31 * 31
                + chars[i + 1] as usize * 31
                + chars[i + 2] as usize)
                % dim;
            v[h] += 1.0;
        }
    } else {
        for c in chars {
            v[(c as usize) % dim] += 1.0;
        }
    }
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in &mut v {
            *x /= norm;
        }
    }
    v
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    for ch in text.chars() {
        cur.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let s = cur.trim().to_string();
            if !s.is_empty() {
                out.push(s);
            }
            cur.clear();
        }
    }
    let tail = cur.trim().to_string();
    if !tail.is_empty() {
        out.push(tail);
    }
    out
}

fn main() {
    let ref_text = "Quarterly earnings showed steady growth in all sectors. Revenue was up 12% year-over-year. Guidance remains unchanged.";
    let noisy_text = "CONFIDENTIAL - INTERNAL MEMO. DO NOT DISTRIBUTE. Quarterly earnings showed steady growth in all sectors. Revenue was up 12% year-over-year. Guidance remains unchanged.";

    let ref_sents = split_sentences(ref_text);
    let noisy_sents = split_sentences(noisy_text);

    println!("Reference sentences ({}):", ref_sents.len());
    for (i, s) in ref_sents.iter().enumerate() {
        println!("  {i}: {s}");
    }
    println!();
    println!("Noisy sentences ({}):", noisy_sents.len());
    for (i, s) in noisy_sents.iter().enumerate() {
        println!("  {i}: {s}");
    }
    println!();

    let dim = 128;
    let ref_rows: Vec<Vec<f64>> = ref_sents.iter().map(|s| embed(s, dim)).collect();
    let noisy_rows: Vec<Vec<f64>> = noisy_sents.iter().map(|s| embed(s, dim)).collect();

    let ref_seq = Sequence::from_rows(&ref_rows);
    let noisy_seq = Sequence::from_rows(&noisy_rows);

    // A moderate skip penalty: cheaper than matching an unrelated sentence,
    // more expensive than matching a near-identical one.
    let skip_penalty = 0.6;
    let path = align_fast(&ref_seq, &noisy_seq, skip_penalty, 2).unwrap();

    if path.is_empty() {
        println!("No alignment found; sequences were entirely skipped.");
        return;
    }

    let (start_i, start_j) = path.start().unwrap();
    println!(
        "Alignment starts at (ref {start_i}, noisy {start_j}) — {} leading noisy sentence(s) dropped as boilerplate.",
        start_j
    );
    println!("Aligned path (cost {:.4}):", path.cost());
    for &(i, j) in path.cells() {
        println!("  ref[{i}] <-> noisy[{j}]");
        println!("    ref  : {}", ref_sents[i]);
        println!("    noisy: {}", noisy_sents[j]);
    }
}

//! Population diversity as per-locus Shannon entropy.
//!
//! For each locus `i`, let `p_i` be the fraction of individuals with bit `i`
//! set. The locus contributes `-p·log2(p) - (1-p)·log2(1-p)` bits, with
//! `0·log2(0)` taken as 0. The population entropy is the sum over loci:
//! 0 for a fully converged population, at most `L` bits.

use super::types::{ensure_same_length, Individual};
use crate::error::Result;

/// Binary entropy of a single locus whose bit is set with frequency `p`.
pub fn locus_entropy(p: f64) -> f64 {
    let term = |q: f64| if q <= 0.0 { 0.0 } else { -q * q.log2() };
    term(p) + term(1.0 - p)
}

/// Total per-locus entropy of `population`, in bits.
///
/// An empty population has entropy 0.
///
/// # Errors
/// [`GaError::LengthMismatch`](crate::error::GaError::LengthMismatch) if the
/// individuals differ in length.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{entropy, Individual};
///
/// let pop: Vec<Individual> = ["0101", "1010"].iter().map(|s| s.parse().unwrap()).collect();
/// assert!((entropy(&pop).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn entropy(population: &[Individual]) -> Result<f64> {
    let Some(first) = population.first() else {
        return Ok(0.0);
    };

    let mut ones = vec![0usize; first.len()];
    for ind in population {
        ensure_same_length(first, ind)?;
        for (count, &bit) in ones.iter_mut().zip(ind.bits()) {
            *count += usize::from(bit);
        }
    }

    let n = population.len() as f64;
    Ok(ones
        .into_iter()
        .map(|count| locus_entropy(count as f64 / n))
        .sum())
}

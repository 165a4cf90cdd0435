//! Variation operators for bit strings.
//!
//! - [`crossover`]: single-point recombination, applied with probability `c`
//! - [`mutate`]: independent per-bit flips with probability `m`
//! - [`reproduce`]: crossover followed by mutation of both children
//!
//! Loci keep their positions under recombination: the children swap the
//! parents' segments on either side of the cut point.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Spears & De Jong (1991), "An Analysis of Multi-Point Crossover"

use super::types::{ensure_same_length, Individual};
use crate::error::Result;
use rand::Rng;

/// Single-point crossover.
///
/// Draws `u` uniform in [0, 1). If `u < rate`, draws a cut point `p` in
/// `[1, L-1]` and returns
///
/// - `child0 = parent1[..p] ++ parent0[p..]`
/// - `child1 = parent0[..p] ++ parent1[p..]`
///
/// Otherwise (or when `L < 2`, where no cut point exists) the children are
/// copies of their respective parents.
///
/// # Errors
/// [`GaError::LengthMismatch`](crate::error::GaError::LengthMismatch) if the
/// parents differ in length.
pub fn crossover<R: Rng>(
    parent0: &Individual,
    parent1: &Individual,
    rate: f64,
    rng: &mut R,
) -> Result<(Individual, Individual)> {
    ensure_same_length(parent0, parent1)?;
    let n = parent0.len();

    if rng.random::<f64>() >= rate || n < 2 {
        return Ok((parent0.clone(), parent1.clone()));
    }

    let point = rng.random_range(1..n);
    Ok(splice(parent0, parent1, point))
}

/// Recombines two equal-length parents at `point`.
fn splice(parent0: &Individual, parent1: &Individual, point: usize) -> (Individual, Individual) {
    let (head0, tail0) = parent0.bits().split_at(point);
    let (head1, tail1) = parent1.bits().split_at(point);
    let child0 = [head1, tail0].concat();
    let child1 = [head0, tail1].concat();
    (Individual::new(child0), Individual::new(child1))
}

/// Flips every bit independently with probability `rate`.
///
/// `rate = 0` returns an identical copy; `rate = 1` flips every bit.
pub fn mutate<R: Rng>(individual: &Individual, rate: f64, rng: &mut R) -> Individual {
    individual
        .bits()
        .iter()
        .map(|&bit| if rng.random::<f64>() < rate { !bit } else { bit })
        .collect::<Vec<_>>()
        .into()
}

/// Produces two children: [`crossover`] then [`mutate`] on each child.
pub fn reproduce<R: Rng>(
    parent0: &Individual,
    parent1: &Individual,
    crossover_rate: f64,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<(Individual, Individual)> {
    let (child0, child1) = crossover(parent0, parent1, crossover_rate, rng)?;
    Ok((
        mutate(&child0, mutation_rate, rng),
        mutate(&child1, mutation_rate, rng),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GaError;
    use crate::random::create_rng;

    fn ind(s: &str) -> Individual {
        s.parse().unwrap()
    }

    #[test]
    fn test_splice() {
        let (c0, c1) = splice(&ind("000000"), &ind("111111"), 2);
        assert_eq!(c0, ind("110000"));
        assert_eq!(c1, ind("001111"));
    }

    #[test]
    fn test_crossover_rate_zero_copies_parents() {
        let p0 = ind("10101010");
        let p1 = ind("01010101");
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let (c0, c1) = crossover(&p0, &p1, 0.0, &mut rng).unwrap();
            assert_eq!(c0, p0);
            assert_eq!(c1, p1);
        }
    }

    #[test]
    fn test_crossover_rate_one_is_single_point() {
        let p0 = ind("00000000");
        let p1 = ind("11111111");
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let (c0, c1) = crossover(&p0, &p1, 1.0, &mut rng).unwrap();
            let point = c0.bits().iter().position(|&b| !b).unwrap();
            assert!((1..8).contains(&point), "cut point {point} out of range");
            assert_eq!(c0, splice(&p0, &p1, point).0);
            assert_eq!(c1, splice(&p0, &p1, point).1);
        }
    }

    #[test]
    fn test_crossover_preserves_loci() {
        // Where the parents agree, every child agrees too.
        let p0 = ind("1100110011");
        let p1 = ind("1010101010");
        let mut rng = create_rng(7);
        for _ in 0..50 {
            let (c0, c1) = crossover(&p0, &p1, 1.0, &mut rng).unwrap();
            for i in 0..p0.len() {
                if p0.bits()[i] == p1.bits()[i] {
                    assert_eq!(c0.bits()[i], p0.bits()[i]);
                    assert_eq!(c1.bits()[i], p0.bits()[i]);
                }
            }
        }
    }

    #[test]
    fn test_crossover_single_bit_copies() {
        let mut rng = create_rng(42);
        let (c0, c1) = crossover(&ind("0"), &ind("1"), 1.0, &mut rng).unwrap();
        assert_eq!((c0, c1), (ind("0"), ind("1")));
    }

    #[test]
    fn test_crossover_length_mismatch() {
        let mut rng = create_rng(42);
        let err = crossover(&ind("101"), &ind("1010"), 0.5, &mut rng).unwrap_err();
        assert_eq!(err, GaError::LengthMismatch { left: 3, right: 4 });
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let p = ind("1011001110");
        let mut rng = create_rng(42);
        assert_eq!(mutate(&p, 0.0, &mut rng), p);
    }

    #[test]
    fn test_mutation_rate_one_flips_everything() {
        let mut rng = create_rng(42);
        assert_eq!(mutate(&ind("1011001110"), 1.0, &mut rng), ind("0100110001"));
    }

    #[test]
    fn test_mutation_is_per_bit() {
        let p = Individual::new(vec![false; 10_000]);
        let mut rng = create_rng(42);
        let flipped = mutate(&p, 0.1, &mut rng).count_ones();
        assert!(
            (850..1_150).contains(&flipped),
            "expected about 1000 flips, got {flipped}"
        );
    }

    #[test]
    fn test_reproduce_rate_zero_returns_parents() {
        let p0 = ind("1110");
        let p1 = ind("0001");
        let mut rng = create_rng(42);
        let (c0, c1) = reproduce(&p0, &p1, 0.0, 0.0, &mut rng).unwrap();
        assert_eq!((c0, c1), (p0, p1));
    }

    #[test]
    fn test_reproduce_full_mutation_without_crossover() {
        let mut rng = create_rng(42);
        let (c0, c1) = reproduce(&ind("1110"), &ind("0001"), 0.0, 1.0, &mut rng).unwrap();
        assert_eq!((c0, c1), (ind("0001"), ind("1110")));
    }

    #[test]
    fn test_reproduce_length_mismatch() {
        let mut rng = create_rng(42);
        assert!(matches!(
            reproduce(&ind("111"), &ind("0000"), 0.7, 0.1, &mut rng),
            Err(GaError::LengthMismatch { left: 3, right: 4 })
        ));
    }
}

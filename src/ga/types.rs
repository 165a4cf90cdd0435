//! Core data types: the bit-string [`Individual`] and the optimization
//! [`Direction`].
//!
//! Individuals are immutable values. Equality and hashing look only at the
//! bits, so two individuals with the same pattern are interchangeable no
//! matter where they came from; the fitness cache and crowding rely on this.

use crate::error::{GaError, Result};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fixed-length bit string.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::Individual;
///
/// let ind: Individual = "1011".parse().unwrap();
/// assert_eq!(ind.len(), 4);
/// assert_eq!(ind.count_ones(), 3);
/// assert_eq!(ind.to_u64().unwrap(), 0b1011);
/// assert_eq!(ind.to_string(), "1011");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Individual {
    bits: Vec<bool>,
}

impl Individual {
    /// Wraps a bit vector.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates an individual whose bits are drawn uniformly from {0, 1}.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self::new((0..len).map(|_| rng.random_bool(0.5)).collect())
    }

    /// The bits, most significant first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Number of loci at which `self` and `other` differ.
    ///
    /// # Errors
    /// [`GaError::LengthMismatch`] if the lengths differ.
    pub fn hamming_distance(&self, other: &Individual) -> Result<usize> {
        ensure_same_length(self, other)?;
        Ok(self
            .bits
            .iter()
            .zip(&other.bits)
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Interprets the bits as a big-endian unsigned integer.
    ///
    /// # Errors
    /// [`GaError::TooWide`] when the individual is longer than 64 bits.
    pub fn to_u64(&self) -> Result<u64> {
        if self.len() > 64 {
            return Err(GaError::TooWide(self.len()));
        }
        Ok(self
            .bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit)))
    }
}

impl From<Vec<bool>> for Individual {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl FromStr for Individual {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GaError::InvalidBit(other)),
            })
            .collect::<Result<Vec<bool>>>()
            .map(Self::new)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Fails with [`GaError::LengthMismatch`] unless both individuals have the
/// same length.
pub(crate) fn ensure_same_length(a: &Individual, b: &Individual) -> Result<()> {
    if a.len() != b.len() {
        return Err(GaError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Whether larger or smaller scores are better.
///
/// Every ranking and comparison in the engine goes through this type so the
/// direction is applied consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Higher scores are better.
    #[default]
    Maximize,
    /// Lower scores are better.
    Minimize,
}

impl Direction {
    /// `true` if `a` is strictly better than `b`.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Direction::Maximize => a > b,
            Direction::Minimize => a < b,
        }
    }

    /// `true` if `score` meets or beats `target`.
    pub fn reaches(self, score: f64, target: f64) -> bool {
        match self {
            Direction::Maximize => score >= target,
            Direction::Minimize => score <= target,
        }
    }

    /// Orders scores best-first. Incomparable values (NaN) compare equal.
    pub fn best_first(self, a: f64, b: f64) -> Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            Direction::Maximize => ord.reverse(),
            Direction::Minimize => ord,
        }
    }
}

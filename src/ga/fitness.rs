//! Fitness evaluation and memoization.
//!
//! The fitness function is assumed pure and deterministic, so a score
//! computed once for a bit pattern is valid for the rest of the run.
//! [`FitnessCache`] is owned by the caller (or the runner) and passed
//! explicitly; independent runs never share memoized scores.

use super::types::Individual;
use std::collections::HashMap;

/// A scoring function for individuals.
///
/// Implemented for any `Fn(&Individual) -> f64`, so closures work directly:
///
/// ```
/// use u_bitga::ga::{FitnessFunction, Individual};
///
/// let ones = |ind: &Individual| ind.count_ones() as f64;
/// assert_eq!(ones.score(&"1101".parse().unwrap()), 3.0);
/// ```
pub trait FitnessFunction {
    /// Scores one individual. Must be deterministic.
    fn score(&self, individual: &Individual) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Individual) -> f64,
{
    fn score(&self, individual: &Individual) -> f64 {
        self(individual)
    }
}

/// Memoizing wrapper around a [`FitnessFunction`].
///
/// Append-only: entries are never invalidated.
#[derive(Debug, Clone)]
pub struct FitnessCache<F> {
    function: F,
    scores: HashMap<Individual, f64>,
    hits: usize,
    misses: usize,
}

impl<F: FitnessFunction> FitnessCache<F> {
    pub fn new(function: F) -> Self {
        Self {
            function,
            scores: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached score, computing and storing it on a miss.
    pub fn score(&mut self, individual: &Individual) -> f64 {
        if let Some(&score) = self.scores.get(individual) {
            self.hits += 1;
            return score;
        }
        self.misses += 1;
        let score = self.function.score(individual);
        self.scores.insert(individual.clone(), score);
        score
    }

    /// Scores every individual, in order.
    pub fn score_all(&mut self, population: &[Individual]) -> Vec<f64> {
        population.iter().map(|ind| self.score(ind)).collect()
    }

    /// Number of distinct individuals scored so far.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    /// The wrapped fitness function.
    pub fn function(&self) -> &F {
        &self.function
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_cache_computes_once_per_pattern() {
        let calls = Cell::new(0usize);
        let f = |ind: &Individual| {
            calls.set(calls.get() + 1);
            ind.count_ones() as f64
        };
        let mut cache = FitnessCache::new(f);

        let a: Individual = "1100".parse().unwrap();
        let b: Individual = "1110".parse().unwrap();

        assert_eq!(cache.score(&a), 2.0);
        assert_eq!(cache.score(&a), 2.0);
        assert_eq!(cache.score(&b), 3.0);
        // Same bits, different value: still a hit.
        assert_eq!(cache.score(&"1100".parse().unwrap()), 2.0);

        assert_eq!(calls.get(), 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.hits(), 2);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_score_all_preserves_order() {
        let mut cache = FitnessCache::new(|ind: &Individual| ind.count_ones() as f64);
        let pop: Vec<Individual> = ["000", "111", "010"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(cache.score_all(&pop), vec![0.0, 3.0, 1.0]);
    }

    #[test]
    fn test_independent_caches_do_not_share() {
        let a: Individual = "1".parse().unwrap();
        let mut first = FitnessCache::new(|_: &Individual| 1.0);
        let mut second = FitnessCache::new(|_: &Individual| 2.0);
        assert_eq!(first.score(&a), 1.0);
        assert_eq!(second.score(&a), 2.0);
        assert!(!first.is_empty());
    }
}

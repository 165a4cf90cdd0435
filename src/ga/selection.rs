//! Parent selection strategies.
//!
//! Selection decides which individuals get to reproduce. Two strategies are
//! provided, chosen through the [`ParentSelection`] enum:
//!
//! - [`roulette_wheel`]: fitness-proportionate sampling with replacement
//! - [`tournament`]: best-of-k among a random subset, repeated per slot
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::fitness::{FitnessCache, FitnessFunction};
use super::types::{Direction, Individual};
use crate::error::{GaError, Result};
use rand::seq::{index, SliceRandom};
use rand::Rng;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Redraws allowed per slot in unique roulette mode before giving up.
pub const UNIQUE_DRAW_ATTEMPTS: usize = 1_000;

/// Transform applied to raw scores before roulette sampling.
///
/// Roulette sampling needs non-negative weights where larger means "pick
/// more often". Use [`Scaler::Inverse`] or [`Scaler::InverseSquare`] to turn
/// a lower-is-better score into such a weight. A score of zero becomes an
/// infinite weight and is rejected.
///
/// [`GaConfig::validate`](super::GaConfig::validate) requires `Identity` when
/// maximizing and one of the inverse scalers when minimizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scaler {
    /// `w = s`
    #[default]
    Identity,
    /// `w = 1 / s`
    Inverse,
    /// `w = 1 / s²`
    InverseSquare,
}

impl Scaler {
    pub fn apply(self, score: f64) -> f64 {
        match self {
            Scaler::Identity => score,
            Scaler::Inverse => 1.0 / score,
            Scaler::InverseSquare => 1.0 / (score * score),
        }
    }
}

/// Parent selection strategy.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{ParentSelection, Scaler};
///
/// // Tournament of 3 (moderate selection pressure)
/// let sel = ParentSelection::Tournament { size: 3 };
///
/// // Roulette wheel on inverted error, no duplicate parents
/// let sel = ParentSelection::RouletteWheel { scaler: Scaler::Inverse, unique: true };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParentSelection {
    /// Fitness-proportionate selection on `scaler(score)`.
    ///
    /// With `unique`, no two selected parents share a bit pattern.
    ///
    /// # Complexity
    /// O(n) to build the cumulative weights, O(log n) per draw
    RouletteWheel { scaler: Scaler, unique: bool },

    /// Tournament selection: sample `size` distinct individuals, keep the best.
    ///
    /// - size=2: light pressure
    /// - size=3-5: moderate pressure (typical default)
    /// - larger: strong pressure, risk of premature convergence
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament { size: usize },
}

impl Default for ParentSelection {
    fn default() -> Self {
        ParentSelection::Tournament { size: 3 }
    }
}

impl ParentSelection {
    /// Selects `count` parents from `population`.
    ///
    /// Roulette weights are taken as given (after scaling): the direction
    /// only matters for tournaments. Runs driven by a validated
    /// [`GaConfig`](super::GaConfig) always pair the scaler with a matching
    /// direction.
    pub fn select<F: FitnessFunction, R: Rng>(
        &self,
        population: &[Individual],
        count: usize,
        cache: &mut FitnessCache<F>,
        direction: Direction,
        rng: &mut R,
    ) -> Result<Vec<Individual>> {
        match *self {
            ParentSelection::RouletteWheel { scaler, unique } => {
                roulette_wheel(population, count, cache, scaler, unique, rng)
            }
            ParentSelection::Tournament { size } => {
                tournament(population, count, cache, size, direction, rng)
            }
        }
    }
}

/// Fitness-proportionate selection.
///
/// Each draw picks the first individual whose running cumulative weight is
/// at least `u * total`, with `u` uniform in [0, 1). Draws are with
/// replacement unless `unique` is set, in which case a draw repeating an
/// already chosen bit pattern is retried up to [`UNIQUE_DRAW_ATTEMPTS`]
/// times. The pool is shuffled before it is returned so its order carries
/// no trace of the cumulative layout.
///
/// If every weight is zero the draws fall back to uniform.
///
/// # Errors
/// - [`GaError::EmptyPopulation`] if `population` is empty and `count > 0`
/// - [`GaError::InvalidWeight`] if a scaled weight is negative, NaN or infinite
/// - [`GaError::UniqueDrawExhausted`] if `unique` and a slot cannot be filled
pub fn roulette_wheel<F: FitnessFunction, R: Rng>(
    population: &[Individual],
    count: usize,
    cache: &mut FitnessCache<F>,
    scaler: Scaler,
    unique: bool,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if population.is_empty() {
        return Err(GaError::EmptyPopulation);
    }

    let mut cumulative = Vec::with_capacity(population.len());
    let mut total = 0.0;
    for (index, ind) in population.iter().enumerate() {
        let weight = scaler.apply(cache.score(ind));
        if !weight.is_finite() || weight < 0.0 {
            return Err(GaError::InvalidWeight { index, weight });
        }
        total += weight;
        cumulative.push(total);
    }

    let draw = |rng: &mut R| -> usize {
        if total <= 0.0 {
            return rng.random_range(0..population.len());
        }
        let threshold = rng.random::<f64>() * total;
        cumulative
            .partition_point(|&c| c < threshold)
            .min(population.len() - 1) // floating-point fallback
    };

    let mut pool = Vec::with_capacity(count);
    if unique {
        let mut chosen: HashSet<&Individual> = HashSet::with_capacity(count);
        for slot in 0..count {
            let picked = retry_bounded(UNIQUE_DRAW_ATTEMPTS, || {
                let ind = &population[draw(&mut *rng)];
                (!chosen.contains(ind)).then_some(ind)
            });
            let Some(ind) = picked else {
                log::warn!(
                    "unique roulette draw gave up on slot {slot} of {count} after {UNIQUE_DRAW_ATTEMPTS} attempts"
                );
                return Err(GaError::UniqueDrawExhausted {
                    requested: count,
                    slot,
                    attempts: UNIQUE_DRAW_ATTEMPTS,
                });
            };
            chosen.insert(ind);
            pool.push(ind.clone());
        }
    } else {
        for _ in 0..count {
            pool.push(population[draw(&mut *rng)].clone());
        }
    }

    pool.shuffle(rng);
    Ok(pool)
}

/// Tournament selection.
///
/// For every slot, samples `size` distinct individuals without replacement
/// and keeps the one with the best score. Ties go to the competitor sampled
/// first.
///
/// # Errors
/// - [`GaError::InvalidTournamentSize`] if `size == 0`
/// - [`GaError::SampleTooLarge`] if `size` exceeds the population size
pub fn tournament<F: FitnessFunction, R: Rng>(
    population: &[Individual],
    count: usize,
    cache: &mut FitnessCache<F>,
    size: usize,
    direction: Direction,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    if size == 0 {
        return Err(GaError::InvalidTournamentSize);
    }
    if size > population.len() {
        return Err(GaError::SampleTooLarge {
            requested: size,
            available: population.len(),
        });
    }

    let mut winners = Vec::with_capacity(count);
    for _ in 0..count {
        let mut best: Option<(usize, f64)> = None;
        let competitors = index::sample(rng, population.len(), size);
        for idx in competitors.iter() {
            let score = cache.score(&population[idx]);
            match best {
                Some((_, best_score)) if !direction.is_better(score, best_score) => {}
                _ => best = Some((idx, score)),
            }
        }
        if let Some((idx, _)) = best {
            winners.push(population[idx].clone());
        }
    }
    Ok(winners)
}

/// Calls `attempt` until it yields a value, at most `max_attempts` times.
fn retry_bounded<T>(max_attempts: usize, mut attempt: impl FnMut() -> Option<T>) -> Option<T> {
    (0..max_attempts).find_map(|_| attempt())
}

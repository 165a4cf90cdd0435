//! Survivor selection: building the next generation from parents and
//! offspring.
//!
//! Exactly one [`SurvivorSelection`] strategy is used per run.
//!
//! # References
//!
//! - De Jong (1975), *An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems* (generational replacement)
//! - Mahfoud (1995), *Niching Methods for Genetic Algorithms* (deterministic crowding)

use super::fitness::{FitnessCache, FitnessFunction};
use super::types::{Direction, Individual};
use crate::error::{GaError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Survivor selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SurvivorSelection {
    /// Offspring replace the parents wholesale.
    #[default]
    Generational,
    /// Parents and offspring compete; the best `N` by score survive.
    Truncation,
    /// Each offspring competes only with the parent it most resembles.
    Crowding,
}

/// Generational replacement: the offspring become the next population.
///
/// # Errors
/// [`GaError::OffspringCountMismatch`] unless exactly `population_size`
/// offspring were produced.
pub fn generational(population_size: usize, offspring: Vec<Individual>) -> Result<Vec<Individual>> {
    if offspring.len() != population_size {
        return Err(GaError::OffspringCountMismatch {
            expected: population_size,
            actual: offspring.len(),
        });
    }
    Ok(offspring)
}

/// Fitness truncation.
///
/// Concatenates `parents` and `offspring`, sorts by score (best first per
/// `direction`) and keeps the first `population_size`. The sort is stable,
/// so ties keep concatenation order.
pub fn truncation<F: FitnessFunction>(
    parents: &[Individual],
    offspring: &[Individual],
    population_size: usize,
    cache: &mut FitnessCache<F>,
    direction: Direction,
) -> Vec<Individual> {
    let mut scored: Vec<(f64, &Individual)> = parents
        .iter()
        .chain(offspring)
        .map(|ind| (cache.score(ind), ind))
        .collect();
    scored.sort_by(|a, b| direction.best_first(a.0, b.0));
    scored
        .into_iter()
        .take(population_size)
        .map(|(_, ind)| ind.clone())
        .collect()
}

/// Deterministic crowding for one parent pair and its two children.
///
/// Each child, in order, is matched against the parent it is strictly
/// closer to by Hamming distance (distances are measured to the original
/// parents). It takes that parent's slot only if it is strictly fitter than
/// the slot's current occupant. Equal distances never replace anything.
///
/// Returns the surviving pair, in parent slot order.
///
/// # Errors
/// [`GaError::LengthMismatch`] if the individuals differ in length.
pub fn crowding<F: FitnessFunction>(
    parents: (&Individual, &Individual),
    children: (Individual, Individual),
    cache: &mut FitnessCache<F>,
    direction: Direction,
) -> Result<(Individual, Individual)> {
    let (p1, p2) = parents;
    let mut slots = [p1.clone(), p2.clone()];

    for child in [children.0, children.1] {
        let d1 = child.hamming_distance(p1)?;
        let d2 = child.hamming_distance(p2)?;
        let slot = match d1.cmp(&d2) {
            std::cmp::Ordering::Less => 0,
            std::cmp::Ordering::Greater => 1,
            std::cmp::Ordering::Equal => continue,
        };
        if direction.is_better(cache.score(&child), cache.score(&slots[slot])) {
            slots[slot] = child;
        }
    }

    let [s1, s2] = slots;
    Ok((s1, s2))
}

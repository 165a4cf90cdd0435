//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → parent selection → crossover/mutation → survivor
//! selection → entropy → repeat.

use super::config::GaConfig;
use super::entropy::entropy;
use super::fitness::{FitnessCache, FitnessFunction};
use super::operators::reproduce;
use super::survivor::{crowding, generational, truncation, SurvivorSelection};
use super::types::{Direction, Individual};
use crate::error::{GaError, Result};
use crate::random::rng_from_seed;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Receives the population once per generation, including generation 0.
///
/// Implemented for `()` (does nothing) and for any
/// `FnMut(&[Individual], usize)` closure.
pub trait Observer {
    fn on_generation(&mut self, population: &[Individual], generation: usize);
}

impl Observer for () {
    fn on_generation(&mut self, _population: &[Individual], _generation: usize) {}
}

impl<F> Observer for F
where
    F: FnMut(&[Individual], usize),
{
    fn on_generation(&mut self, population: &[Individual], generation: usize) {
        self(population, generation)
    }
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunResult {
    /// Best individual of the final population.
    pub best: Individual,

    /// Score of `best`.
    pub best_score: f64,

    /// Population entropy after each generation, starting with generation 0.
    ///
    /// Always `generations + 1` entries long.
    pub entropies: Vec<f64>,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped early on `target_score`.
    pub target_reached: bool,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaRunner};
/// use u_bitga::ga::problems::OneMax;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_individual_length(16)
///     .with_max_generations(30)
///     .with_seed(42);
/// let result = GaRunner::run(OneMax, &config).unwrap();
/// assert_eq!(result.entropies.len(), result.generations + 1);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a fresh fitness cache and a generator seeded from
    /// `config.seed`.
    pub fn run<F: FitnessFunction>(fitness: F, config: &GaConfig) -> Result<RunResult> {
        Self::run_with_observer(fitness, config, &mut ())
    }

    /// Like [`run`](Self::run), notifying `observer` every generation.
    pub fn run_with_observer<F: FitnessFunction, O: Observer>(
        fitness: F,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<RunResult> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        let mut cache = FitnessCache::new(fitness);
        let population = initial_population(
            config.population_size,
            config.individual_length,
            &mut rng,
        );
        Self::evolve(population, config, &mut cache, &mut rng, observer)
    }

    /// Evolves a caller-supplied initial population.
    ///
    /// The cache and generator are explicit so callers control memoization
    /// and reproducibility. `config.seed` is ignored here, as are
    /// `population_size` and `individual_length` where the population
    /// itself provides them.
    ///
    /// # Errors
    /// - [`GaError::EmptyPopulation`] if `population` is empty
    /// - [`GaError::Config`] if the configuration (with the population's
    ///   actual size) is invalid
    /// - any operator error raised during the run
    pub fn evolve<F, R, O>(
        population: Vec<Individual>,
        config: &GaConfig,
        cache: &mut FitnessCache<F>,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<RunResult>
    where
        F: FitnessFunction,
        R: Rng,
        O: Observer,
    {
        let first_len = population.first().ok_or(GaError::EmptyPopulation)?.len();
        let config = GaConfig {
            population_size: population.len(),
            individual_length: first_len,
            ..config.clone()
        };
        config.validate()?;

        log::info!(
            "starting GA: N={} L={} G={} selection={:?} survivors={:?}",
            config.population_size,
            config.individual_length,
            config.max_generations,
            config.parent_selection,
            config.survivor_selection
        );

        let mut population = population;
        let mut entropies = Vec::with_capacity(config.max_generations + 1);
        let mut generations = 0;

        entropies.push(entropy(&population)?);
        observer.on_generation(&population, 0);
        let mut target_reached = reached_target(&population, &config, cache);

        while !target_reached && generations < config.max_generations {
            population = next_generation(&population, &config, cache, rng)?;
            generations += 1;

            let h = entropy(&population)?;
            entropies.push(h);
            observer.on_generation(&population, generations);
            target_reached = reached_target(&population, &config, cache);

            if log::log_enabled!(log::Level::Debug) {
                let (_, best_score) = find_best(&population, config.direction, cache);
                log::debug!("generation {generations}: best={best_score} entropy={h:.4}");
            }
        }

        let (best, best_score) = find_best(&population, config.direction, cache);
        let best = best.clone();
        log::info!(
            "GA finished after {generations} generations: best={best_score} ({best}){}",
            if target_reached { ", target reached" } else { "" }
        );

        Ok(RunResult {
            best,
            best_score,
            entropies,
            generations,
            target_reached,
        })
    }
}

/// Creates `size` random individuals of `length` bits.
pub fn initial_population<R: Rng>(size: usize, length: usize, rng: &mut R) -> Vec<Individual> {
    (0..size).map(|_| Individual::random(length, rng)).collect()
}

/// Produces the next population according to the configured strategies.
fn next_generation<F: FitnessFunction, R: Rng>(
    population: &[Individual],
    config: &GaConfig,
    cache: &mut FitnessCache<F>,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    let n = config.population_size;
    let selection = config.parent_selection;

    match config.survivor_selection {
        SurvivorSelection::Generational => {
            let parents = selection.select(population, n, cache, config.direction, rng)?;
            let offspring = breed(&parents, n, config, rng)?;
            generational(n, offspring)
        }
        SurvivorSelection::Truncation => {
            let parents = selection.select(population, n, cache, config.direction, rng)?;
            let offspring = breed(&parents, n, config, rng)?;
            Ok(truncation(population, &offspring, n, cache, config.direction))
        }
        SurvivorSelection::Crowding => {
            let mut next = Vec::with_capacity(n);
            for _ in 0..n / 2 {
                let pair = selection.select(population, 2, cache, config.direction, rng)?;
                let (p1, p2) = (&pair[0], &pair[1]);
                let children = reproduce(
                    p1,
                    p2,
                    config.crossover_rate,
                    config.mutation_rate,
                    rng,
                )?;
                let (s1, s2) = crowding((p1, p2), children, cache, config.direction)?;
                next.push(s1);
                next.push(s2);
            }
            Ok(next)
        }
    }
}

/// Breeds exactly `count` offspring from consecutive parent pairs.
///
/// With an odd parent count the last parent is paired with the first and
/// only the first child is kept.
fn breed<R: Rng>(
    parents: &[Individual],
    count: usize,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    let mut offspring = Vec::with_capacity(count + 1);
    let mut i = 0;
    while offspring.len() < count && !parents.is_empty() {
        let p1 = &parents[i % parents.len()];
        let p2 = &parents[(i + 1) % parents.len()];
        let (c1, c2) = reproduce(p1, p2, config.crossover_rate, config.mutation_rate, rng)?;
        offspring.push(c1);
        offspring.push(c2);
        i += 2;
    }
    offspring.truncate(count);
    Ok(offspring)
}

/// The best individual and its score. Ties go to the earliest.
///
/// `population` must not be empty.
fn find_best<'a, F: FitnessFunction>(
    population: &'a [Individual],
    direction: Direction,
    cache: &mut FitnessCache<F>,
) -> (&'a Individual, f64) {
    let mut best = (&population[0], cache.score(&population[0]));
    for ind in &population[1..] {
        let score = cache.score(ind);
        if direction.is_better(score, best.1) {
            best = (ind, score);
        }
    }
    best
}

fn reached_target<F: FitnessFunction>(
    population: &[Individual],
    config: &GaConfig,
    cache: &mut FitnessCache<F>,
) -> bool {
    match config.target_score {
        Some(target) => {
            let (_, best) = find_best(population, config.direction, cache);
            config.direction.reaches(best, target)
        }
        None => false,
    }
}

// ============================================================================
// Tests
// ============================================================================

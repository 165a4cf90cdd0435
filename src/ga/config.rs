//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! The fitness function and the per-generation observer are not part of
//! the configuration; they are passed to the [`GaRunner`](super::GaRunner).

use super::selection::{ParentSelection, Scaler};
use super::survivor::SurvivorSelection;
use super::types::Direction;
use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a bit-string GA run.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::{Direction, GaConfig, ParentSelection, SurvivorSelection};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_individual_length(16)
///     .with_parent_selection(ParentSelection::Tournament { size: 4 })
///     .with_survivor_selection(SurvivorSelection::Crowding)
///     .with_direction(Direction::Minimize)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of individuals in the population (`N`).
    pub population_size: usize,

    /// Number of bits per individual (`L`).
    pub individual_length: usize,

    /// Number of generations to run (`G`).
    pub max_generations: usize,

    /// Probability of recombining a parent pair (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of flipping each bit of an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// How parents are chosen.
    pub parent_selection: ParentSelection,

    /// How the next generation is built.
    pub survivor_selection: SurvivorSelection,

    /// Whether higher or lower scores are better.
    pub direction: Direction,

    /// Stop as soon as the population's best score reaches this value.
    ///
    /// `None` always runs `max_generations` generations.
    pub target_score: Option<f64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            individual_length: 32,
            max_generations: 100,
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            parent_selection: ParentSelection::default(),
            survivor_selection: SurvivorSelection::default(),
            direction: Direction::default(),
            target_score: None,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of bits per individual.
    pub fn with_individual_length(mut self, n: usize) -> Self {
        self.individual_length = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the parent selection strategy.
    pub fn with_parent_selection(mut self, selection: ParentSelection) -> Self {
        self.parent_selection = selection;
        self
    }

    /// Convenience builder for tournament selection.
    ///
    /// Equivalent to `.with_parent_selection(ParentSelection::Tournament { size: k })`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_parent_selection(ParentSelection::Tournament { size: k })
    }

    /// Sets the survivor selection strategy.
    pub fn with_survivor_selection(mut self, survivor: SurvivorSelection) -> Self {
        self.survivor_selection = survivor;
        self
    }

    /// Sets the optimization direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Stops the run early once this score is reached.
    pub fn with_target_score(mut self, target: f64) -> Self {
        self.target_score = Some(target);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.individual_length == 0 {
            return Err(ConfigError::EmptyIndividual);
        }
        if let ParentSelection::Tournament { size } = self.parent_selection {
            if size == 0 || size > self.population_size {
                return Err(ConfigError::TournamentSize {
                    size,
                    population: self.population_size,
                });
            }
        }
        if let ParentSelection::RouletteWheel { scaler, .. } = self.parent_selection {
            let agrees = match self.direction {
                Direction::Maximize => scaler == Scaler::Identity,
                Direction::Minimize => scaler != Scaler::Identity,
            };
            if !agrees {
                return Err(ConfigError::ScalerDirectionMismatch {
                    scaler,
                    direction: self.direction,
                });
            }
        }
        if self.survivor_selection == SurvivorSelection::Crowding
            && self.population_size % 2 != 0
        {
            return Err(ConfigError::OddCrowdingPopulation(self.population_size));
        }
        if let Some(target) = self.target_score {
            if !target.is_finite() {
                return Err(ConfigError::NonFiniteTarget(target));
            }
        }
        Ok(())
    }
}

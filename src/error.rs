//! Error types for the GA engine.
//!
//! Every failure is fatal for the run that raised it; callers decide whether
//! to retry the whole run (e.g. with a different seed).

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("individual_length must be at least 1")]
    EmptyIndividual,
    #[error("tournament size {size} must be between 1 and the population size {population}")]
    TournamentSize { size: usize, population: usize },
    #[error("deterministic crowding needs an even population size, got {0}")]
    OddCrowdingPopulation(usize),
    #[error("target_score must be finite, got {0}")]
    NonFiniteTarget(f64),
    #[error("roulette scaler {scaler:?} weights the wrong end when the direction is {direction:?}")]
    ScalerDirectionMismatch {
        scaler: crate::ga::Scaler,
        direction: crate::ga::Direction,
    },
}

/// Errors raised while running the GA.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("individuals must have equal length, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("selection weight at index {index} is {weight}; weights must be finite and non-negative")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("cannot sample {requested} individuals without replacement from {available}")]
    SampleTooLarge { requested: usize, available: usize },

    #[error("tournament size must be at least 1")]
    InvalidTournamentSize,

    #[error("could not draw {requested} unique parents: slot {slot} failed after {attempts} attempts")]
    UniqueDrawExhausted {
        requested: usize,
        slot: usize,
        attempts: usize,
    },

    #[error("generational replacement needs exactly {expected} offspring, got {actual}")]
    OffspringCountMismatch { expected: usize, actual: usize },

    #[error("population is empty")]
    EmptyPopulation,

    #[error("individual of length {0} does not fit in a 64-bit integer")]
    TooWide(usize),

    #[error("invalid bit character {0:?}, expected '0' or '1'")]
    InvalidBit(char),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;

//! Bit-string genetic algorithm engine.
//!
//! Provides a small, deterministic-when-seeded GA over fixed-length binary
//! strings:
//!
//! - **Parent selection**: roulette wheel (fitness-proportionate, with an
//!   optional weight transform) and tournament selection.
//! - **Variation**: single-point crossover and independent per-bit mutation.
//! - **Survivor selection**: generational replacement, fitness truncation,
//!   and deterministic crowding.
//! - **Diversity**: per-locus Shannon entropy tracked every generation.
//!
//! # Architecture
//!
//! The engine is single-threaded and has no ambient state: the random
//! generator and the fitness cache are passed explicitly through every
//! operator, so a seeded run with a deterministic fitness function is fully
//! reproducible. Domain concerns (what the bits mean, how they are scored,
//! how progress is displayed) belong to the caller.
//!
//! ```
//! use u_bitga::ga::{GaConfig, GaRunner, SurvivorSelection};
//! use u_bitga::ga::problems::OneMax;
//!
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_individual_length(16)
//!     .with_max_generations(50)
//!     .with_survivor_selection(SurvivorSelection::Truncation)
//!     .with_seed(42);
//! let result = GaRunner::run(OneMax, &config).unwrap();
//! assert!(result.best_score >= 14.0);
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::{ConfigError, GaError, Result};

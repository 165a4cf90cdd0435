//! Bit-string Genetic Algorithm engine.
//!
//! Individuals are fixed-length bit strings scored by a caller-supplied,
//! deterministic [`FitnessFunction`]. One run composes:
//!
//! 1. random initialization of `N` individuals of `L` bits
//! 2. parent selection ([`ParentSelection`]: roulette wheel or tournament)
//! 3. single-point crossover and per-bit mutation ([`operators`])
//! 4. survivor selection ([`SurvivorSelection`]: generational, truncation
//!    or deterministic crowding)
//! 5. per-locus Shannon [`entropy`] of every generation
//!
//! # Key Types
//!
//! - [`Individual`]: immutable bit string, compared and hashed by value
//! - [`FitnessCache`]: memoizes scores for the lifetime of a run
//! - [`GaConfig`]: algorithm parameters and strategy choices
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`RunResult`]: best individual and entropy history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Mahfoud (1995), *Niching Methods for Genetic Algorithms*

mod config;
pub mod entropy;
mod fitness;
pub mod operators;
pub mod problems;
mod runner;
pub mod selection;
pub mod survivor;
mod types;

pub use config::GaConfig;
pub use entropy::entropy;
pub use fitness::{FitnessCache, FitnessFunction};
pub use runner::{initial_population, GaRunner, Observer, RunResult};
pub use selection::{ParentSelection, Scaler};
pub use survivor::SurvivorSelection;
pub use types::{Direction, Individual};

//! Random source helpers.
//!
//! All operators take the generator as an explicit `&mut R` so a run is
//! reproducible whenever the seed and the fitness function are fixed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded generator.
///
/// ```
/// use rand::Rng;
/// use u_bitga::random::create_rng;
///
/// let a: u64 = create_rng(7).random();
/// let b: u64 = create_rng(7).random();
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from `seed`, or from OS entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

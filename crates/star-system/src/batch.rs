//! Many systems at once, one thread-independent RNG stream per star.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use rayon::prelude::*;
use stellar::Star;

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::system::{StellarSystem, generate_system};

/// Generates a system for every star in parallel.
///
/// The system for `stars[i]` is seeded with `base_seed + i`, so results do
/// not depend on thread scheduling. Each star gets its own `Result`; one
/// failure does not stop the others.
pub fn generate_systems(
    stars: &[Star],
    config: &GenerationConfig,
    base_seed: u64,
) -> Vec<Result<StellarSystem, GenerationError>> {
    stars
        .par_iter()
        .enumerate()
        .map(|(i, star)| {
            let mut rng = ChaChaRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            generate_system(star, config, &mut rng)
        })
        .collect()
}

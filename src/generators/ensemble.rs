use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::generators::GraphGenerator;
use crate::graph::Graph;
use crate::Result;

/// Generates `count` independent graphs from the same model in parallel.
///
/// Graph `k` draws from its own `StdRng` seeded with `seed + k` (wrapping), so
/// the output depends only on `seed` and not on how rayon schedules the work.
/// Results are returned in `k` order; the first failure is reported.
pub fn ensemble<G>(generator: &G, count: usize, seed: u64) -> Result<Vec<Graph>>
where
    G: GraphGenerator + Sync,
{
    generator.validate()?;
    log::debug!(
        "Generating ensemble of {} {} graphs from seed {}",
        count,
        generator.name(),
        seed
    );

    (0..count)
        .into_par_iter()
        .map(|k| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(k as u64));
            generator.generate(&mut rng)
        })
        .collect()
}

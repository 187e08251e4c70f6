//! Seeded random number generation.
//!
//! Every sampling call takes its generator explicitly. This module only
//! provides the one place where a seed is turned into a generator, so two
//! runs with the same seed consume identical random streams.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Resolves an optional seed, drawing a fresh one from the thread-local
/// generator when `None`.
///
/// The resolved seed is returned so callers can record it and reproduce
/// the run later.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

//! Seed handling for table fills and gradient permutations.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for a seed.
///
/// The returned RNG produces an identical sequence for the same seed,
/// regardless of thread or platform.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draw a fresh seed from the thread-local entropy source.
pub fn entropy_seed() -> u64 {
    rand::rng().next_u64()
}

/// Fold a 64-bit seed into the 32 bits a simplex permutation takes.
///
/// Both halves contribute, so seeds differing only in the high word still
/// produce different permutations.
#[inline]
pub fn fold_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}

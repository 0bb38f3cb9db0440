use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The single random stream a pipeline draws from.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draws a seed from the OS for runs that did not ask for one. Callers record
/// it so the run can be replayed.
pub fn fresh_seed() -> u64 {
    rand::rng().random()
}

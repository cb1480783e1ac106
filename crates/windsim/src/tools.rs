use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

pub type WindRng = ChaCha8Rng;

pub fn generate_seed() -> u64 {
    rand::rng().random()
}

/// Builds the simulation RNG. Without a seed one is drawn from entropy and
/// logged so a run can be replayed.
pub fn seeded_rng(seed: Option<u64>) -> WindRng {
    let seed = seed.unwrap_or_else(|| {
        let seed = generate_seed();
        log::info!("Wind RNG seeded with {}", seed);
        seed
    });
    ChaCha8Rng::seed_from_u64(seed)
}

/// Uniform draw between the bounds of `range`, both of which are valid values.
///
/// A degenerate range returns its start exactly, and an inverted range does not
/// panic (it yields values between the two bounds).
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<f32>) -> f32 {
    let (min, max) = range.into_inner();
    (max - min) * rng.random::<f32>() + min
}

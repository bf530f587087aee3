use rand::{SeedableRng, rngs::SmallRng};

/// A reproducible generator when `seed` is set, an OS-seeded one otherwise.
pub fn create_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

use rand::{Rng, SeedableRng};
use rand::isaac::Isaac64Rng;
use rand::os::OsRng;

pub type MyRng = Isaac64Rng;

/// Build a generator from a fixed seed, so a run can be reproduced.
pub fn rng_from_seed(seed: u64) -> MyRng {
    SeedableRng::from_seed(&[seed][..])
}

/// Build a generator from the operating system's entropy source.  Each
/// call yields an independently seeded generator.
pub fn rng_from_entropy() -> MyRng {
    let mut osrng = OsRng::new().unwrap_or_else(|e| {
        panic!("could not open the system entropy source: {}", e)
    });
    let seed: Vec<u64> = osrng.gen_iter().take(4).collect();
    SeedableRng::from_seed(&seed[..])
}

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// Seed-carrying RNG so every shuffle in a session is reproducible.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Uniform index in [0, bound], inclusive.
    pub fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..=bound)
    }
}

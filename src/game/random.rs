//! Random source used for food placement and food type selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the randomness the engine needs: bounded indices and unit floats.
///
/// Engines take this as a type parameter so tests can script exact draws.
pub trait RandomSource {
    /// Uniform integer in `0..upper`. `upper` is never zero.
    fn index(&mut self, upper: usize) -> usize;

    /// Uniform float in `[0, 1)`
    fn unit(&mut self) -> f64;
}

/// Production source backed by a seeded `StdRng`
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen_range(0..u64::MAX);
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    fn unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;

    use super::RandomSource;

    /// Replays queued draws; falls back to 0 / 0.99 once a queue runs dry
    #[derive(Default)]
    pub struct ScriptedRandom {
        indices: VecDeque<usize>,
        units: VecDeque<f64>,
    }

    impl ScriptedRandom {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_indices(mut self, indices: &[usize]) -> Self {
            self.indices.extend(indices.iter().copied());
            self
        }

        pub fn with_units(mut self, units: &[f64]) -> Self {
            self.units.extend(units.iter().copied());
            self
        }

        /// Queue an (x, y) cell as two index draws
        pub fn with_cell(self, x: usize, y: usize) -> Self {
            self.with_indices(&[x, y])
        }
    }

    impl RandomSource for ScriptedRandom {
        fn index(&mut self, upper: usize) -> usize {
            self.indices.pop_front().unwrap_or(0) % upper
        }

        fn unit(&mut self) -> f64 {
            self.units.pop_front().unwrap_or(0.99)
        }
    }
}

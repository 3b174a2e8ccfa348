//! Short code generation.
//!
//! Codes are fixed-length alphanumeric strings sampled uniformly from
//! `[a-zA-Z0-9]`. Uniqueness is a best-effort property of the code space, not
//! a guarantee; collision handling lives in the service layer.

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 8;

/// Random short code generator.
///
/// Owns its RNG instead of reaching for a global one, so tests can inject a
/// fixed seed via [`CodeGenerator::from_seed`]. The RNG sits behind a mutex;
/// a single instance is shared across request tasks.
pub struct CodeGenerator {
    rng: Mutex<StdRng>,
}

impl CodeGenerator {
    /// Creates a generator seeded once from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a deterministic generator for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Generates a random string of exactly `length` characters over
    /// `[a-zA-Z0-9]`, each sampled independently and uniformly.
    ///
    /// # Panics
    ///
    /// Panics if the RNG mutex is poisoned.
    pub fn generate(&self, length: usize) -> String {
        let mut rng = self.rng.lock().expect("code generator rng poisoned");
        (&mut *rng)
            .sample_iter(Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

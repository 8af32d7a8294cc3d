//! Concrete random sources

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

use super::{GrowthSource, IdSource};

/// Seedable PRNG usable for both growth draws and pseudonyms
///
/// Same seed = same sequence, which makes whole games reproducible.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for SeededSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl GrowthSource for SeededSource {
    #[inline]
    fn growth_rate(&mut self, min: f64, max: f64) -> f64 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }
}

impl IdSource for SeededSource {
    fn hex_token(&mut self, bytes: usize) -> String {
        let mut buf = vec![0u8; bytes];
        self.rng.fill_bytes(&mut buf);
        hex::encode(buf)
    }
}

/// Pseudonym source backed by the operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureIdSource;

impl IdSource for SecureIdSource {
    fn hex_token(&mut self, bytes: usize) -> String {
        let mut buf = vec![0u8; bytes];
        OsRng.fill_bytes(&mut buf);
        hex::encode(buf)
    }
}

/// Growth source that always yields the same multiplier
///
/// The value is clamped into the requested range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedGrowth(pub f64);

impl GrowthSource for FixedGrowth {
    fn growth_rate(&mut self, min: f64, max: f64) -> f64 {
        self.0.clamp(min, max)
    }
}

/// Replays a fixed list of tokens in order, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedIds {
    tokens: Vec<String>,
    next: usize,
}

impl ScriptedIds {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

impl IdSource for ScriptedIds {
    fn hex_token(&mut self, bytes: usize) -> String {
        if self.tokens.is_empty() {
            return "0".repeat(bytes * 2);
        }
        let token = self.tokens[self.next % self.tokens.len()].clone();
        self.next += 1;
        token
    }
}

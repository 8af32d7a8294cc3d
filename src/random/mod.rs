//! Random sources for growth draws and pseudonym generation
//!
//! Both the pond and the anonymizer take their randomness through the
//! traits here so games can be replayed from a seed and tests can pin
//! outcomes.

mod sources;

pub use sources::*;

/// Source of growth multipliers for a pond
pub trait GrowthSource {
    /// Draw a multiplier uniformly from `[min, max)`.
    /// Must return `min` when `min == max`.
    fn growth_rate(&mut self, min: f64, max: f64) -> f64;
}

/// Source of random hex tokens for pseudonyms
pub trait IdSource {
    /// Produce `2 * bytes` lowercase hex characters
    fn hex_token(&mut self, bytes: usize) -> String;
}

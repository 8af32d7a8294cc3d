//! Configuration module for game session parameters
//!
//! The configuration is supplied by an external loader, either built
//! directly or parsed from JSON, and is read-only once a pond holds it.

mod game;

pub use game::*;

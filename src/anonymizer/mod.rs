//! Player anonymization module
//!
//! Substitutes opaque `Player_xxxxxxxx` pseudonyms for real names so that
//! participants cannot tell who their partner is from visible names.

mod history;
mod mapping;


pub use history::*;
pub use mapping::*;

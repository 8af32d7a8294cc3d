//! Commons Pond Core - simulation core for a two-player fishing game
//!
//! Two players share one pond. Each turn both name a catch; if together they
//! take no more than the pond holds, the rest regrows by a random factor,
//! otherwise the pond collapses and neither gets anything. A separate
//! anonymizer hides player names behind pseudonyms before reports are shown.
//!
//! ```
//! use commons_pond_core::{FixedGrowth, GameConfig, Pond};
//!
//! let config = GameConfig::new(100, 40, 1.0, 1.0).unwrap();
//! let mut pond = Pond::with_source(config, FixedGrowth(1.0)).unwrap();
//!
//! let turn = pond.execute_turn(30, 30);
//! assert!(turn.success);
//! assert_eq!(turn.pond_fish_after, 40);
//!
//! let turn = pond.execute_turn(25, 25);
//! assert!(!turn.success);
//! assert!(pond.is_depleted());
//! ```

pub mod anonymizer;
pub mod config;
pub mod error;
pub mod pond;
pub mod random;

#[cfg(feature = "python")]
mod python;

pub use anonymizer::{PlayerAnonymizer, PlayerHistory, PSEUDONYM_PREFIX};
pub use config::GameConfig;
pub use error::{CommonsError, Result};
pub use pond::{Pond, PondStatus, TurnResult};
pub use random::{FixedGrowth, GrowthSource, IdSource, ScriptedIds, SecureIdSource, SeededSource};

//! Pond state machine

use tracing::{debug, info, warn};

use super::TurnResult;
use crate::config::GameConfig;
use crate::error::Result;
use crate::random::{GrowthSource, SeededSource};

/// Lifecycle of a pond. `Depleted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PondStatus {
    #[default]
    Active,
    Depleted,
}

/// Shared, depletable, regrowing fish stock
#[derive(Debug, Clone)]
pub struct Pond<G = SeededSource> {
    config: GameConfig,
    fish: u64,
    status: PondStatus,
    turns_played: u32,
    growth: G,
}

impl Pond<SeededSource> {
    /// Create a pond with an entropy-seeded growth source
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_source(config, SeededSource::from_entropy())
    }
}

impl<G: GrowthSource> Pond<G> {
    /// Create a pond drawing growth multipliers from `growth`
    pub fn with_source(config: GameConfig, growth: G) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fish: config.initial_fish,
            config,
            status: PondStatus::Active,
            turns_played: 0,
            growth,
        })
    }

    #[inline]
    pub fn fish(&self) -> u64 {
        self.fish
    }

    #[inline]
    pub fn status(&self) -> PondStatus {
        self.status
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.status == PondStatus::Depleted
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Resolve one turn.
    ///
    /// Requests are clamped to `[0, max_catch_per_turn]`. If the combined
    /// catch fits in the pond, it is removed and the remainder regrows by a
    /// random multiplier. Otherwise both players get nothing and the pond
    /// is depleted for good.
    pub fn execute_turn(&mut self, player1_catch: i64, player2_catch: i64) -> TurnResult {
        let p1_catch = self.clamp_catch(player1_catch);
        let p2_catch = self.clamp_catch(player2_catch);

        let pond_before = self.fish;
        let total_catch = p1_catch.saturating_add(p2_catch);
        self.turns_played = self.turns_played.saturating_add(1);

        if total_catch <= self.fish {
            let remaining = self.fish - total_catch;
            let growth_rate = self
                .growth
                .growth_rate(self.config.min_growth_rate, self.config.max_growth_rate);
            // `as` saturates on overflow
            self.fish = (remaining as f64 * growth_rate).floor() as u64;

            debug!(
                turn = self.turns_played,
                pond_before,
                p1_catch,
                p2_catch,
                growth_rate,
                pond_after = self.fish,
                "turn resolved"
            );

            TurnResult {
                pond_fish_before: pond_before,
                player1_catch: p1_catch,
                player2_catch: p2_catch,
                success: true,
                pond_fish_after: self.fish,
                growth_rate_applied: growth_rate,
            }
        } else {
            self.fish = 0;
            if self.status == PondStatus::Active {
                info!(
                    turn = self.turns_played,
                    pond_before, total_catch, "pond overfished and depleted"
                );
            }
            self.status = PondStatus::Depleted;

            TurnResult {
                pond_fish_before: pond_before,
                player1_catch: p1_catch,
                player2_catch: p2_catch,
                success: false,
                pond_fish_after: 0,
                growth_rate_applied: 0.0,
            }
        }
    }

    #[inline]
    fn clamp_catch(&self, requested: i64) -> u64 {
        let max = self.config.max_catch_per_turn;
        let clamped = if requested <= 0 {
            0
        } else {
            (requested as u64).min(max)
        };
        if clamped as i128 != requested as i128 {
            warn!(requested, clamped, max, "catch request clamped");
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommonsError;
    use crate::random::FixedGrowth;

    fn flat_pond() -> Pond<FixedGrowth> {
        let config = GameConfig::new(100, 40, 1.0, 1.0).unwrap();
        Pond::with_source(config, FixedGrowth(1.0)).unwrap()
    }

    #[test]
    fn test_new_pond() {
        let pond = Pond::new(GameConfig::default()).unwrap();
        assert_eq!(pond.fish(), 100);
        assert_eq!(pond.status(), PondStatus::Active);
        assert!(!pond.is_depleted());
        assert_eq!(pond.turns_played(), 0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GameConfig {
            min_growth_rate: 2.0,
            max_growth_rate: 1.0,
            ..GameConfig::default()
        };
        let result = Pond::new(config);
        assert!(matches!(result, Err(CommonsError::InvalidConfig(_))));
    }

    #[test]
    fn test_sustainable_then_overfished() {
        let mut pond = flat_pond();

        let first = pond.execute_turn(30, 30);
        assert_eq!(
            first,
            TurnResult {
                pond_fish_before: 100,
                player1_catch: 30,
                player2_catch: 30,
                success: true,
                pond_fish_after: 40,
                growth_rate_applied: 1.0,
            }
        );
        assert!(!pond.is_depleted());

        let second = pond.execute_turn(25, 25);
        assert_eq!(second.pond_fish_before, 40);
        assert!(!second.success);
        assert_eq!(second.pond_fish_after, 0);
        assert_eq!(second.growth_rate_applied, 0.0);
        assert_eq!(second.awarded(), (0, 0));
        assert!(pond.is_depleted());
        assert_eq!(pond.fish(), 0);
        assert_eq!(pond.turns_played(), 2);
    }

    #[test]
    fn test_clamping() {
        let config = GameConfig::new(100, 10, 1.0, 1.0).unwrap();
        let mut clamped = Pond::with_source(config.clone(), FixedGrowth(1.0)).unwrap();
        let mut plain = Pond::with_source(config, FixedGrowth(1.0)).unwrap();

        let a = clamped.execute_turn(-5, 1_000_000);
        let b = plain.execute_turn(0, 10);
        assert_eq!(a, b);
        assert_eq!(a.player1_catch, 0);
        assert_eq!(a.player2_catch, 10);
        assert_eq!(clamped.fish(), plain.fish());
    }

    #[test]
    fn test_growth_floors() {
        let config = GameConfig::new(10, 10, 1.25, 1.25).unwrap();
        let mut pond = Pond::with_source(config, FixedGrowth(1.25)).unwrap();

        // (10 - 3) * 1.25 = 8.75
        let result = pond.execute_turn(2, 1);
        assert_eq!(result.pond_fish_after, 8);
        assert_eq!(pond.fish(), 8);
    }

    #[test]
    fn test_exact_stock_is_sustainable() {
        let config = GameConfig::new(20, 10, 1.5, 1.5).unwrap();
        let mut pond = Pond::with_source(config, FixedGrowth(1.5)).unwrap();

        let result = pond.execute_turn(10, 10);
        assert!(result.success);
        assert_eq!(result.pond_fish_after, 0);
        assert!(!pond.is_depleted());
    }

    #[test]
    fn test_depleted_is_terminal() {
        let mut pond = flat_pond();
        pond.execute_turn(40, 40);
        pond.execute_turn(40, 40);
        assert!(pond.is_depleted());

        for (a, b) in [(0, 0), (1, 0), (40, 40)] {
            let result = pond.execute_turn(a, b);
            assert_eq!(result.pond_fish_before, 0);
            assert_eq!(result.pond_fish_after, 0);
            assert_eq!(result.awarded(), (0, 0));
            assert!(pond.is_depleted());
        }
    }

    #[test]
    fn test_seeded_ponds_replay() {
        let config = GameConfig::default();
        let mut a = Pond::with_source(config.clone(), SeededSource::from_seed(9)).unwrap();
        let mut b = Pond::with_source(config, SeededSource::from_seed(9)).unwrap();

        for _ in 0..10 {
            assert_eq!(a.execute_turn(5, 5), b.execute_turn(5, 5));
        }
    }
}

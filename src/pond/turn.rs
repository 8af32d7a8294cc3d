//! Turn outcome record

use serde::{Deserialize, Serialize};

/// Outcome of one resolved turn
///
/// `player1_catch` / `player2_catch` are the clamped requests. On a failed
/// turn nobody is awarded anything; see [`TurnResult::awarded`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub pond_fish_before: u64,
    pub player1_catch: u64,
    pub player2_catch: u64,
    pub success: bool,
    pub pond_fish_after: u64,
    pub growth_rate_applied: f64,
}

impl TurnResult {
    /// Combined clamped request of both players
    #[inline]
    pub fn total_requested(&self) -> u64 {
        self.player1_catch.saturating_add(self.player2_catch)
    }

    /// Fish actually handed to (player1, player2)
    #[inline]
    pub fn awarded(&self) -> (u64, u64) {
        if self.success {
            (self.player1_catch, self.player2_catch)
        } else {
            (0, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(success: bool) -> TurnResult {
        TurnResult {
            pond_fish_before: 100,
            player1_catch: 30,
            player2_catch: 30,
            success,
            pond_fish_after: if success { 40 } else { 0 },
            growth_rate_applied: if success { 1.0 } else { 0.0 },
        }
    }

    #[test]
    fn test_awarded_on_success() {
        assert_eq!(sample(true).awarded(), (30, 30));
        assert_eq!(sample(true).total_requested(), 60);
    }

    #[test]
    fn test_nothing_awarded_on_failure() {
        let result = sample(false);
        assert_eq!(result.awarded(), (0, 0));
        assert_eq!(result.total_requested(), 60);
    }

    #[test]
    fn test_serializes_field_names() {
        let value = serde_json::to_value(sample(true)).unwrap();
        assert_eq!(value["pond_fish_before"], 100);
        assert_eq!(value["success"], true);
        assert_eq!(value["growth_rate_applied"], 1.0);
    }
}

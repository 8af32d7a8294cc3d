//! Player history records and their anonymization

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::PlayerAnonymizer;
use crate::error::Result;
use crate::random::IdSource;

/// Per-player record of past rounds
///
/// An empty string in `partners` means the player had no partner that round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerHistory {
    #[serde(default)]
    pub partners: Vec<String>,
    #[serde(default)]
    pub catches: Vec<i64>,
    #[serde(default)]
    pub scores: Vec<f64>,
}

impl PlayerHistory {
    /// Parse a `{player_name: PlayerHistory}` JSON object
    pub fn from_json_map(json: &str) -> Result<BTreeMap<String, PlayerHistory>> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<I: IdSource> PlayerAnonymizer<I> {
    /// Re-key a history map by pseudonym and anonymize every partner name.
    ///
    /// Catches and scores are copied unchanged; empty partner entries stay empty.
    pub fn anonymize_history(
        &mut self,
        history: &BTreeMap<String, PlayerHistory>,
    ) -> Result<BTreeMap<String, PlayerHistory>> {
        let mut anonymized = BTreeMap::new();

        for (real_name, player_history) in history {
            let anon_id = self.anonymize(real_name)?;

            let partners = player_history
                .partners
                .iter()
                .map(|partner| {
                    if partner.is_empty() {
                        Ok(String::new())
                    } else {
                        self.anonymize(partner)
                    }
                })
                .collect::<Result<Vec<_>>>()?;

            anonymized.insert(
                anon_id,
                PlayerHistory {
                    partners,
                    catches: player_history.catches.clone(),
                    scores: player_history.scores.clone(),
                },
            );
        }

        Ok(anonymized)
    }
}

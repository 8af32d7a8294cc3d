//! Bidirectional real-name / pseudonym mapping

use ahash::AHashMap;
use std::collections::BTreeMap;
use tracing::{debug, error, warn};

use crate::error::{CommonsError, Result};
use crate::random::{IdSource, SecureIdSource};

/// Prefix of every pseudonym
pub const PSEUDONYM_PREFIX: &str = "Player_";

/// Random bytes per pseudonym (8 hex characters)
pub const PSEUDONYM_BYTES: usize = 4;

/// Draws allowed before giving up on finding an unused pseudonym
pub const MAX_ID_ATTEMPTS: usize = 1024;

/// Assigns stable, collision-free pseudonyms to player names
///
/// Both maps are kept as exact inverses and only ever grow.
#[derive(Debug, Clone)]
pub struct PlayerAnonymizer<I = SecureIdSource> {
    real_to_anon: AHashMap<String, String>,
    anon_to_real: AHashMap<String, String>,
    ids: I,
}

impl PlayerAnonymizer<SecureIdSource> {
    pub fn new() -> Self {
        Self::with_source(SecureIdSource)
    }
}

impl Default for PlayerAnonymizer<SecureIdSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> PlayerAnonymizer<I> {
    pub fn with_source(ids: I) -> Self {
        Self {
            real_to_anon: AHashMap::new(),
            anon_to_real: AHashMap::new(),
            ids,
        }
    }

    /// Return the pseudonym for `real_name`, assigning a new one on first sight
    pub fn anonymize(&mut self, real_name: &str) -> Result<String> {
        if let Some(existing) = self.real_to_anon.get(real_name) {
            return Ok(existing.clone());
        }

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let anon_id = format!("{}{}", PSEUDONYM_PREFIX, self.ids.hex_token(PSEUDONYM_BYTES));

            if self.anon_to_real.contains_key(&anon_id) {
                warn!(attempt, %anon_id, "pseudonym collision, regenerating");
                continue;
            }

            self.real_to_anon.insert(real_name.to_string(), anon_id.clone());
            self.anon_to_real.insert(anon_id.clone(), real_name.to_string());
            debug!(%anon_id, total = self.anon_to_real.len(), "pseudonym assigned");
            return Ok(anon_id);
        }

        error!(attempts = MAX_ID_ATTEMPTS, "pseudonym space exhausted");
        Err(CommonsError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Look up the real name behind a pseudonym
    #[inline]
    pub fn deanonymize(&self, anon_id: &str) -> Option<&str> {
        self.anon_to_real.get(anon_id).map(String::as_str)
    }

    /// Look up an existing pseudonym without assigning one
    #[inline]
    pub fn pseudonym_of(&self, real_name: &str) -> Option<&str> {
        self.real_to_anon.get(real_name).map(String::as_str)
    }

    /// Anonymize every name, keeping order and duplicates
    pub fn anonymize_all<S: AsRef<str>>(&mut self, real_names: &[S]) -> Result<Vec<String>> {
        real_names
            .iter()
            .map(|name| self.anonymize(name.as_ref()))
            .collect()
    }

    /// Deanonymize every id; unknown ids are echoed back unchanged
    pub fn deanonymize_all<S: AsRef<str>>(&self, anon_ids: &[S]) -> Vec<String> {
        anon_ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                self.deanonymize(id).unwrap_or(id).to_string()
            })
            .collect()
    }

    /// Snapshot of pseudonym → real name, for report generation
    pub fn get_mappings(&self) -> BTreeMap<String, String> {
        self.anon_to_real
            .iter()
            .map(|(anon, real)| (anon.clone(), real.clone()))
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.anon_to_real.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.anon_to_real.is_empty()
    }
}

//! Python bindings via PyO3 (enabled with the `python` feature)
//!
//! Lets a Python game driver hold a pond and an anonymizer per session.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::collections::BTreeMap;

use crate::anonymizer::{PlayerAnonymizer, PlayerHistory};
use crate::config::GameConfig;
use crate::error::CommonsError;
use crate::pond::Pond;
use crate::random::SeededSource;

// ============================================================================
// Pond
// ============================================================================

/// Python handle to a pond
#[pyclass(name = "Pond")]
pub struct PyPond {
    inner: Pond,
}

#[pymethods]
impl PyPond {
    /// Create a pond from an optional JSON config and an optional seed
    #[new]
    #[pyo3(signature = (config_json=None, seed=None))]
    fn new(config_json: Option<&str>, seed: Option<u64>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(json)?,
            None => GameConfig::default(),
        };
        let source = seed
            .map(SeededSource::from_seed)
            .unwrap_or_else(SeededSource::from_entropy);
        Ok(Self {
            inner: Pond::with_source(config, source)?,
        })
    }

    /// Resolve one turn; returns the turn result as a dict
    fn execute_turn<'py>(
        &mut self,
        py: Python<'py>,
        player1_catch: i64,
        player2_catch: i64,
    ) -> PyResult<Bound<'py, PyDict>> {
        let result = self.inner.execute_turn(player1_catch, player2_catch);
        let dict = PyDict::new(py);
        dict.set_item("pond_fish_before", result.pond_fish_before)?;
        dict.set_item("player1_catch", result.player1_catch)?;
        dict.set_item("player2_catch", result.player2_catch)?;
        dict.set_item("success", result.success)?;
        dict.set_item("pond_fish_after", result.pond_fish_after)?;
        dict.set_item("growth_rate_applied", result.growth_rate_applied)?;
        Ok(dict)
    }

    #[getter]
    fn fish(&self) -> u64 {
        self.inner.fish()
    }

    fn depleted(&self) -> bool {
        self.inner.is_depleted()
    }
}

// ============================================================================
// PlayerAnonymizer
// ============================================================================

/// Python handle to a player anonymizer
#[pyclass(name = "PlayerAnonymizer")]
pub struct PyPlayerAnonymizer {
    inner: PlayerAnonymizer,
}

#[pymethods]
impl PyPlayerAnonymizer {
    #[new]
    fn new() -> Self {
        Self {
            inner: PlayerAnonymizer::new(),
        }
    }

    fn anonymize(&mut self, real_name: &str) -> PyResult<String> {
        Ok(self.inner.anonymize(real_name)?)
    }

    fn deanonymize(&self, anon_id: &str) -> Option<String> {
        self.inner.deanonymize(anon_id).map(str::to_string)
    }

    fn anonymize_all(&mut self, real_names: Vec<String>) -> PyResult<Vec<String>> {
        Ok(self.inner.anonymize_all(&real_names)?)
    }

    fn deanonymize_all(&self, anon_ids: Vec<String>) -> Vec<String> {
        self.inner.deanonymize_all(&anon_ids)
    }

    /// Anonymize a JSON-encoded `{name: history}` map, returning JSON
    fn anonymize_history_json(&mut self, history_json: &str) -> PyResult<String> {
        let history: BTreeMap<String, PlayerHistory> = PlayerHistory::from_json_map(history_json)?;
        let anonymized = self.inner.anonymize_history(&history)?;
        let json = serde_json::to_string(&anonymized).map_err(CommonsError::from)?;
        Ok(json)
    }

    fn get_mappings(&self) -> BTreeMap<String, String> {
        self.inner.get_mappings()
    }
}

// ============================================================================
// Python Module Definition
// ============================================================================

#[pymodule]
fn commons_pond_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPond>()?;
    m.add_class::<PyPlayerAnonymizer>()?;
    Ok(())
}

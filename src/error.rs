//! Error types for the commons pond core

#[cfg(feature = "python")]
use pyo3::exceptions::{PyRuntimeError, PyValueError};
#[cfg(feature = "python")]
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the commons pond core
#[derive(Error, Debug)]
pub enum CommonsError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("No unused pseudonym found after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },
}

impl From<serde_json::Error> for CommonsError {
    fn from(err: serde_json::Error) -> Self {
        CommonsError::Deserialization(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<CommonsError> for PyErr {
    fn from(err: CommonsError) -> PyErr {
        match err {
            CommonsError::InvalidConfig(msg) => {
                PyValueError::new_err(format!("Invalid config: {}", msg))
            }
            CommonsError::Deserialization(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
            err @ CommonsError::IdSpaceExhausted { .. } => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Result type alias for the commons pond core
pub type Result<T> = std::result::Result<T, CommonsError>;

//! Error types for the IO boundaries of the directory.
//!
//! Filtering, rendering and selection never fail; only loading the dataset,
//! reading configuration and touching the preference store can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the lab dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record {index} has an empty name")]
    EmptyName { index: usize },
}

/// Errors raised while loading the directory configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors raised by a preference store.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! Reelrank: a movie score mining tool
//!
//! This crate fetches a single movie-review listing page, extracts
//! (title, score) pairs from the HTML, ranks them best-score-first, and
//! persists the result as CSV and JSON. A terminal viewer pages through
//! the saved records with arrow-key navigation.

pub mod config;
pub mod miner;
pub mod record;
pub mod shell;
pub mod store;
pub mod viewer;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for reelrank operations
#[derive(Debug, Error)]
pub enum ReelError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("No saved data at {}", path.display())]
    NoData { path: PathBuf },

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for reelrank operations
pub type Result<T> = std::result::Result<T, ReelError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use record::Record;

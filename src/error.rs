//! Error types for the wordlens library
//!
//! Provider absences (no language, no score, no lemma, no model) are not
//! errors and never show up here. This type covers what can go wrong before
//! any analysis starts: reading configuration, loading embedding models and
//! building the word segmenter.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum WordLensError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Regular expression errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Configuration file does not exist
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file parsed but holds unusable values
    #[error("Invalid configuration in {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    /// Embedding directory does not exist
    #[error("Embeddings directory not found: {path}")]
    EmbeddingsNotFound { path: PathBuf },

    /// Embedding model file is malformed
    #[error("Invalid embedding model {path}: {reason}")]
    InvalidEmbedding { path: PathBuf, reason: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordLensError>;

impl WordLensError {
    /// Create a new configuration not found error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new embeddings directory not found error
    pub fn embeddings_not_found(path: impl Into<PathBuf>) -> Self {
        Self::EmbeddingsNotFound { path: path.into() }
    }

    /// Create a new invalid embedding model error
    pub fn invalid_embedding(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidEmbedding {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

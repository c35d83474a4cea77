//! YAML configuration file
//!
//! Every key is optional. Values here sit between the built-in defaults and
//! the command line: a flag always wins over the file.

use crate::core::Settings;
use crate::error::{Result, WordLensError};
use crate::provider::Gazetteer;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of a configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub maximum_alternatives: Option<usize>,
    pub far_away: Option<f64>,
    /// Directory of embedding models, relative to the file's directory
    pub embeddings: Option<PathBuf>,
    pub gazetteer: Gazetteer,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Read and validate a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(WordLensError::config_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        let mut config = Self::parse(&content, path)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration text; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        // An empty document deserializes as null, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| WordLensError::invalid_config(path, e.to_string()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.maximum_alternatives == Some(0) {
            return Err(WordLensError::invalid_config(
                path,
                "maximum_alternatives must be a positive integer",
            ));
        }
        if let Some(far_away) = self.far_away {
            if !far_away.is_finite() {
                return Err(WordLensError::invalid_config(
                    path,
                    "far_away must be a finite number",
                ));
            }
        }
        Ok(())
    }

    /// Settings from this file layered over the defaults
    pub fn settings(&self) -> Settings {
        Settings::default().with_overrides(self.maximum_alternatives, self.far_away)
    }

    /// Embeddings directory, resolved against the file's directory
    pub fn embeddings_dir(&self) -> Option<PathBuf> {
        let dir = self.embeddings.as_ref()?;
        match &self.base_dir {
            Some(base) if dir.is_relative() => Some(base.join(dir)),
            _ => Some(dir.clone()),
        }
    }
}

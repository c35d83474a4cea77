//! Embedding model discovery and loading
//!
//! A model is a JSON file of the form
//!
//! ```json
//! { "language": "en", "vectors": { "happy": [0.1, 0.7], "glad": [0.2, 0.6] } }
//! ```
//!
//! [`load_models`] walks a directory recursively and loads every `.json`
//! file it finds. Files are visited in path order; when two files declare
//! the same language the later one wins.

use crate::core::Language;
use crate::error::{Result, WordLensError};
use crate::provider::{EmbeddingStore, WordEmbedding};
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelFile {
    language: Language,
    vectors: HashMap<String, Vec<f32>>,
}

/// Whether a path looks like a model file
pub fn is_model_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Load a single model file
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<WordEmbedding> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let file: ModelFile = serde_json::from_str(&content)
        .map_err(|e| WordLensError::invalid_embedding(path, e.to_string()))?;

    if file.language.is_undetermined() {
        return Err(WordLensError::invalid_embedding(
            path,
            "model must declare a language",
        ));
    }

    WordEmbedding::new(file.language, file.vectors)
        .map_err(|e| WordLensError::invalid_embedding(path, e.to_string()))
}

/// Model files under `dir`, sorted by path
pub fn find_models<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(WordLensError::embeddings_not_found(dir));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_model_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Load every model under `dir`
pub fn load_models<P: AsRef<Path>>(dir: P) -> Result<EmbeddingStore> {
    let mut store = EmbeddingStore::new();

    for path in find_models(dir.as_ref())? {
        let model = load_model(&path)?;
        debug!(
            "Loaded {} model from {} ({} words, {} dimensions)",
            model.language(),
            path.display(),
            model.len(),
            model.dimension()
        );
        if let Some(previous) = store.insert(model) {
            warn!(
                "{} replaces an earlier {} model",
                path.display(),
                previous.language()
            );
        }
    }

    info!(
        "Loaded {} embedding model(s) from {}: {}",
        store.len(),
        dir.as_ref().display(),
        store
            .languages()
            .iter()
            .map(|l| l.code())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(store)
}

//! Word embeddings and nearest-neighbour queries

use crate::core::Language;
use log::warn;
use std::collections::HashMap;
use thiserror::Error;

/// A neighbouring word and its cosine similarity to the query word
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub word: String,
    pub similarity: f64,
}

/// Why a set of vectors cannot form an embedding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelShapeError {
    #[error("model has no vectors")]
    Empty,
    #[error("vector for '{word}' has {found} dimensions, expected {expected}")]
    DimensionMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("vector for '{word}' has no dimensions")]
    ZeroDimension { word: String },
    #[error("vector for '{word}' contains non-finite values")]
    NonFinite { word: String },
}

/// Vector-space model for one language
#[derive(Debug, Clone)]
pub struct WordEmbedding {
    language: Language,
    dimension: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl WordEmbedding {
    /// Build an embedding, checking that every vector has the same dimension
    ///
    /// Vocabulary keys are lowercased; when two keys collapse onto the same
    /// lowercase word the later one in iteration order wins.
    pub fn new(
        language: Language,
        vectors: HashMap<String, Vec<f32>>,
    ) -> Result<Self, ModelShapeError> {
        let mut words: Vec<_> = vectors.into_iter().collect();
        words.sort_by(|a, b| a.0.cmp(&b.0));

        let dimension = match words.first() {
            Some((word, vector)) if vector.is_empty() => {
                return Err(ModelShapeError::ZeroDimension { word: word.clone() })
            }
            Some((_, vector)) => vector.len(),
            None => return Err(ModelShapeError::Empty),
        };

        let mut normalized = HashMap::with_capacity(words.len());
        for (word, vector) in words {
            if vector.len() != dimension {
                return Err(ModelShapeError::DimensionMismatch {
                    word,
                    expected: dimension,
                    found: vector.len(),
                });
            }
            if vector.iter().any(|v| !v.is_finite()) {
                return Err(ModelShapeError::NonFinite { word });
            }
            let key = word.to_lowercase();
            if normalized.insert(key, vector).is_some() {
                warn!("Duplicate vocabulary entry '{}' in {} model", word, language);
            }
        }

        Ok(Self {
            language,
            dimension,
            vectors: normalized,
        })
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of words in the vocabulary
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    fn vector(&self, word: &str) -> Option<&Vec<f32>> {
        self.vectors
            .get(word)
            .or_else(|| self.vectors.get(&word.to_lowercase()))
    }

    /// Up to `maximum` nearest neighbours of `word`, most similar first
    ///
    /// The query word itself is never returned. Unknown words have no
    /// neighbours. Ties are broken alphabetically so results are stable.
    pub fn neighbors(&self, word: &str, maximum: usize) -> Vec<Neighbor> {
        let Some(query) = self.vector(word) else {
            return Vec::new();
        };
        let query_key = word.to_lowercase();

        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .iter()
            .filter(|(candidate, _)| **candidate != query_key)
            .filter_map(|(candidate, vector)| {
                cosine(query, vector).map(|similarity| Neighbor {
                    word: candidate.clone(),
                    similarity,
                })
            })
            .collect();

        neighbors.sort_by(|a, b| {
            b.similarity
                .total_cmp(&a.similarity)
                .then_with(|| a.word.cmp(&b.word))
        });
        neighbors.truncate(maximum);
        neighbors
    }
}

/// Cosine similarity; undefined for zero vectors
fn cosine(a: &[f32], b: &[f32]) -> Option<f64> {
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Embedding models keyed by language
#[derive(Debug, Clone, Default)]
pub struct EmbeddingStore {
    models: HashMap<Language, WordEmbedding>,
}

impl EmbeddingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model, returning the one it replaces
    pub fn insert(&mut self, model: WordEmbedding) -> Option<WordEmbedding> {
        self.models.insert(model.language().clone(), model)
    }

    pub fn get(&self, language: &Language) -> Option<&WordEmbedding> {
        self.models.get(language)
    }

    /// Languages with a model, sorted
    pub fn languages(&self) -> Vec<&Language> {
        let mut languages: Vec<_> = self.models.keys().collect();
        languages.sort();
        languages
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

//! NLP providers
//!
//! The analyzer never does linguistic work itself. Everything goes through
//! [`NlpProvider`], which exposes five capabilities: dominant-language
//! detection, paragraph-level sentiment, lemma tagging over word units,
//! per-language word embeddings and name-type tagging. Each capability may
//! come back empty; the analyzer maps absences to fixed defaults.
//!
//! [`BuiltinProvider`] is the implementation shipped with the crate.

pub mod builtin;
pub mod embedding;

pub use builtin::{BuiltinProvider, Gazetteer};
pub use embedding::{EmbeddingStore, ModelShapeError, Neighbor, WordEmbedding};

use crate::core::{Language, Segment, TaggedSpan};

/// A word unit and the lemma the provider found for it, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LemmaTag<'a> {
    pub segment: Segment<'a>,
    pub lemma: Option<String>,
}

/// The capabilities the analyzer consumes
pub trait NlpProvider {
    /// Dominant language of `text`, `None` when it cannot be determined
    fn dominant_language(&self, text: &str) -> Option<Language>;

    /// Sentiment of the whole text as one paragraph
    fn sentiment(&self, text: &str) -> Option<f64>;

    /// Word units of `text` in order, each with its lemma if known
    fn lemmas<'a>(&self, text: &'a str) -> Vec<LemmaTag<'a>>;

    /// Embedding model for a language
    fn embedding(&self, language: &Language) -> Option<&WordEmbedding>;

    /// Name spans of `text`, multi-word names joined into one span
    fn name_tags(&self, text: &str) -> Vec<TaggedSpan>;
}

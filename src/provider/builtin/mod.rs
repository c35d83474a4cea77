//! The NLP provider shipped with wordlens
//!
//! Everything here is lexicon- and rule-based: stop-word profiles for
//! language identification, a valence lexicon for sentiment, an English
//! lemmatizer and gazetteers for names. Embedding models are not bundled;
//! they are loaded from disk with [`crate::io::load_models`] and attached
//! with [`BuiltinProvider::with_embeddings`].

pub mod language;
pub mod lemma;
pub mod lexicon;
pub mod names;
pub mod sentiment;

pub use names::{Gazetteer, NameTagger};

use super::embedding::{EmbeddingStore, WordEmbedding};
use super::{LemmaTag, NlpProvider};
use crate::core::{Language, Segmenter, TaggedSpan};
use crate::error::Result;
use log::debug;

/// Languages the lemmatizer knows
const LEMMATIZED_LANGUAGES: &[&str] = &["en"];

/// Lexicon- and rule-based provider
#[derive(Debug, Clone)]
pub struct BuiltinProvider {
    segmenter: Segmenter,
    tagger: NameTagger,
    embeddings: EmbeddingStore,
}

impl BuiltinProvider {
    /// Provider with built-in lexicons and no embedding models
    pub fn new() -> Result<Self> {
        Ok(Self {
            segmenter: Segmenter::new()?,
            tagger: NameTagger::new(),
            embeddings: EmbeddingStore::new(),
        })
    }

    /// Attach embedding models
    pub fn with_embeddings(mut self, embeddings: EmbeddingStore) -> Self {
        self.embeddings = embeddings;
        self
    }

    /// Extend the name gazetteers
    pub fn with_gazetteer(mut self, gazetteer: &Gazetteer) -> Self {
        if !gazetteer.is_empty() {
            debug!(
                "Extending gazetteers: {} people, {} places, {} organizations",
                gazetteer.people.len(),
                gazetteer.places.len(),
                gazetteer.organizations.len()
            );
            self.tagger.extend(gazetteer);
        }
        self
    }
}

impl NlpProvider for BuiltinProvider {
    fn dominant_language(&self, text: &str) -> Option<Language> {
        language::detect(&self.segmenter.words(text))
    }

    fn sentiment(&self, text: &str) -> Option<f64> {
        sentiment::score(&self.segmenter.words(text))
    }

    fn lemmas<'a>(&self, text: &'a str) -> Vec<LemmaTag<'a>> {
        // Short inputs often have no stop words; only a detected non-English
        // language turns the lemmatizer off.
        let lemmatize = self
            .dominant_language(text)
            .map_or(true, |l| LEMMATIZED_LANGUAGES.contains(&l.code()));
        if !lemmatize {
            debug!("No lemmatizer for this text, keeping surface forms");
        }

        self.segmenter
            .words(text)
            .into_iter()
            .map(|segment| LemmaTag {
                lemma: if lemmatize {
                    lemma::lemmatize(segment.text)
                } else {
                    None
                },
                segment,
            })
            .collect()
    }

    fn embedding(&self, language: &Language) -> Option<&WordEmbedding> {
        self.embeddings.get(language)
    }

    fn name_tags(&self, text: &str) -> Vec<TaggedSpan> {
        self.tagger.tag(text, &self.segmenter.words(text))
    }
}

//! Runs the enabled capabilities against a provider and collects a report

use super::config::AnalysisConfig;
use super::fallback::Fallbacks;
use super::language::Language;
use super::report::{Alternatives, Entity, Report, WordAlternatives};
use super::text::InputText;
use crate::provider::NlpProvider;
use log::debug;

/// Drives one analysis run
///
/// Sections are computed in a fixed order (language, sentiment, lemmas,
/// alternatives, entities), each at most once and only when enabled.
pub struct Analyzer<'p, P: NlpProvider + ?Sized> {
    provider: &'p P,
    config: AnalysisConfig,
}

impl<'p, P: NlpProvider + ?Sized> Analyzer<'p, P> {
    pub fn new(provider: &'p P, config: AnalysisConfig) -> Self {
        Self { provider, config }
    }

    /// Build the full report for `text`
    pub fn analyze(&self, text: &InputText) -> Report {
        let caps = self.config.capabilities();
        let mut report = Report::new(text.as_str());

        if caps.detect_language {
            report.language = Some(self.detect_language(text));
        }
        if caps.sentiment_analysis {
            report.sentiment = Some(self.sentiment(text));
        }
        if caps.lemmatize {
            report.lemmas = Some(self.lemmatize(text));
        }
        if caps.alternatives {
            report.alternatives = Some(self.alternatives(text));
        }
        if caps.entity_recognition() {
            report.entities = Some(self.entities(text));
        }

        report
    }

    /// Dominant language, or the undetermined sentinel
    pub fn detect_language(&self, text: &InputText) -> Language {
        let language = Fallbacks::language(self.provider.dominant_language(text.as_str()));
        debug!("Dominant language: {}", language);
        language
    }

    /// Paragraph-level sentiment, zero when the provider has no score
    pub fn sentiment(&self, text: &InputText) -> f64 {
        Fallbacks::sentiment(self.provider.sentiment(text.as_str()))
    }

    /// Lemma for every word unit, in order, duplicates kept
    pub fn lemmatize(&self, text: &InputText) -> Vec<String> {
        self.provider
            .lemmas(text.as_str())
            .into_iter()
            .filter_map(|tag| Fallbacks::lemma(tag.lemma, tag.segment.text))
            .collect()
    }

    /// Nearest neighbours above the threshold for every lemma
    pub fn alternatives(&self, text: &InputText) -> Vec<WordAlternatives> {
        let settings = self.config.settings();

        self.lemmatize(text)
            .into_iter()
            .map(|word| {
                // The language comes from the whole text, not the word.
                let language = self.detect_language(text);
                let outcome = match self.provider.embedding(&language) {
                    None => Alternatives::Unavailable(Fallbacks::missing_embedding(&language)),
                    Some(model) => {
                        let candidates = model.neighbors(&word, settings.maximum_alternatives);
                        debug!(
                            "{} candidate neighbours for '{}' in {} model",
                            candidates.len(),
                            word,
                            language
                        );
                        Alternatives::Neighbors(
                            candidates
                                .into_iter()
                                .take(settings.maximum_alternatives)
                                .filter(|n| n.similarity > settings.far_away)
                                .collect(),
                        )
                    }
                };
                WordAlternatives { word, outcome }
            })
            .collect()
    }

    /// Tagged names whose category switch is on
    pub fn entities(&self, text: &InputText) -> Vec<Entity> {
        let caps = self.config.capabilities();

        self.provider
            .name_tags(text.as_str())
            .into_iter()
            .filter(|span| span.category.is_enabled(caps))
            .map(|span| Entity {
                category: span.category,
                text: span.text,
            })
            .collect()
    }
}

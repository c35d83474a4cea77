//! wordlens: a small text analyzer built around a pluggable NLP provider
//!
//! The library joins input words into one text and runs up to five
//! capabilities over it: dominant-language detection, paragraph sentiment,
//! lemmatization, word-embedding alternatives and named-entity recognition.
//! All linguistic work is delegated to an [`NlpProvider`]; the library only
//! resolves configuration, applies defaults for missing results and formats
//! the report.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordlens::{
//!     AnalysisConfig, Analyzer, BuiltinProvider, InputText, ReportFormatter, Result,
//!     Settings, Switches,
//! };
//!
//! fn main() -> Result<()> {
//!     let provider = BuiltinProvider::new()?;
//!     let switches = Switches {
//!         place: true,
//!         sentiment_analysis: true,
//!         ..Switches::default()
//!     };
//!     let config = AnalysisConfig::new(switches, Settings::default());
//!
//!     let text = InputText::from_words(["Paris", "is", "lovely"]);
//!     let report = Analyzer::new(&provider, config).analyze(&text);
//!     print!("{}", ReportFormatter::render(&report));
//!     Ok(())
//! }
//! ```
//!
//! ## Embedding models
//!
//! ```rust,no_run
//! use wordlens::{load_models, BuiltinProvider, Result};
//!
//! fn main() -> Result<()> {
//!     let models = load_models("models/")?;
//!     let provider = BuiltinProvider::new()?.with_embeddings(models);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`](crate::core): configuration resolution, text model, entity gating,
//!   absence defaults and the [`Analyzer`]
//! - [`provider`]: the [`NlpProvider`] trait and [`BuiltinProvider`]
//! - [`io`]: configuration files, embedding model loading, report rendering
//! - [`error`]: the crate error type

// Public API exports
pub use error::{Result, WordLensError};

// Core types
pub use crate::core::{
    format_list, AnalysisConfig, Analyzer, Capabilities, Entity, EntityCategory, Fallbacks,
    InputText, Language, Report, Settings, Switch, Switches, TaggedSpan,
};

// Provider types
pub use provider::{
    BuiltinProvider, EmbeddingStore, Gazetteer, LemmaTag, Neighbor, NlpProvider, WordEmbedding,
};

// IO types
pub use io::{load_models, ConfigFile, ReportFormatter};

pub mod core;
pub mod error;
pub mod io;
pub mod provider;

// CLI components are available only in the binary, not as part of the library API

/// Convenience functions for common operations
pub mod convenience {
    //! One-call helpers that wire the built-in provider, analyzer and
    //! formatter together.

    use crate::{
        AnalysisConfig, Analyzer, BuiltinProvider, InputText, NlpProvider, ReportFormatter,
        Result, Settings, Switches,
    };

    /// Analyze `words` with any provider and render the report
    pub fn analyze_with<P, I, S>(provider: &P, words: I, config: AnalysisConfig) -> String
    where
        P: NlpProvider + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = InputText::from_words(words);
        let report = Analyzer::new(provider, config).analyze(&text);
        ReportFormatter::render(&report)
    }

    /// Analyze `words` with the built-in provider and default settings
    pub fn analyze<I, S>(words: I, switches: Switches) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let provider = BuiltinProvider::new()?;
        let config = AnalysisConfig::new(switches, Settings::default());
        Ok(analyze_with(&provider, words, config))
    }
}

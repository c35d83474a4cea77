//! Analysis results for one run
//!
//! A section is `None` when its capability was not requested. The report is
//! built once and then rendered by [`crate::io::ReportFormatter`].

use super::entity::EntityCategory;
use super::language::Language;
use crate::provider::Neighbor;

/// Everything the run found, in output order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    /// The joined input text
    pub text: String,
    pub language: Option<Language>,
    pub sentiment: Option<f64>,
    pub lemmas: Option<Vec<String>>,
    pub alternatives: Option<Vec<WordAlternatives>>,
    pub entities: Option<Vec<Entity>>,
}

/// Alternatives for one lemma
#[derive(Debug, Clone, PartialEq)]
pub struct WordAlternatives {
    pub word: String,
    pub outcome: Alternatives,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Alternatives {
    /// No embedding model for the language; carries the placeholder text
    Unavailable(String),
    /// Neighbours above the similarity threshold, most similar first
    Neighbors(Vec<Neighbor>),
}

/// A recognized entity that passed its category gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub category: EntityCategory,
    pub text: String,
}

impl Report {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

//! Named-entity categories and the switches that gate them

use super::config::{Capabilities, Switch};
use std::fmt;
use std::ops::Range;

/// Category assigned to a tagged name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    Person,
    Place,
    Organization,
    Other,
}

/// Which switch gates each category
///
/// `Switch::Names` appears in no row: it enables the entity section but
/// does not by itself let any category through.
pub const ENTITY_GATES: [(EntityCategory, Option<Switch>); 4] = [
    (EntityCategory::Person, Some(Switch::Person)),
    (EntityCategory::Place, Some(Switch::Place)),
    (EntityCategory::Organization, Some(Switch::Organization)),
    (EntityCategory::Other, None),
];

impl EntityCategory {
    /// The switch gating this category, if any
    pub fn gate(self) -> Option<Switch> {
        ENTITY_GATES
            .iter()
            .find(|(category, _)| *category == self)
            .and_then(|(_, switch)| *switch)
    }

    /// Whether entities of this category are printed under `capabilities`
    pub fn is_enabled(self, capabilities: &Capabilities) -> bool {
        self.gate()
            .is_some_and(|switch| capabilities.is_enabled(switch))
    }

    /// Label used in the report
    pub fn label(self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Place => "Place",
            Self::Organization => "Organization",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A span of text the provider tagged as a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSpan {
    pub text: String,
    pub category: EntityCategory,
    pub range: Range<usize>,
}

impl TaggedSpan {
    pub fn new(text: impl Into<String>, category: EntityCategory, range: Range<usize>) -> Self {
        Self {
            text: text.into(),
            category,
            range,
        }
    }
}

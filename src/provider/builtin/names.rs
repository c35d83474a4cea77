//! Gazetteer-driven name tagging
//!
//! Runs of capitalized words (optionally bridged by lowercase connectors
//! such as `of` or `van`) form candidate names. A run is classified as an
//! organization, a place or a person by the gazetteers and a few closed
//! word lists; anything else capitalized mid-sentence is tagged `Other`.

use super::lexicon::{
    CONNECTORS, DETERMINERS, GIVEN_NAMES, ORGANIZATIONS, ORGANIZATION_HEADS,
    ORGANIZATION_SUFFIXES, PLACES, TITLES,
};
use crate::core::{EntityCategory, Segment, TaggedSpan};
use serde::Deserialize;
use std::collections::HashSet;

/// Extra names, usually from the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Gazetteer {
    pub people: Vec<String>,
    pub places: Vec<String>,
    pub organizations: Vec<String>,
}

impl Gazetteer {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.places.is_empty() && self.organizations.is_empty()
    }
}

/// Tags names in text
#[derive(Debug, Clone)]
pub struct NameTagger {
    people: HashSet<String>,
    places: HashSet<String>,
    organizations: HashSet<String>,
}

impl Default for NameTagger {
    fn default() -> Self {
        Self::new()
    }
}

fn to_set(entries: &[&str]) -> HashSet<String> {
    entries.iter().map(|e| e.to_string()).collect()
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_title(word: &str) -> bool {
    TITLES.contains(&word.to_lowercase().as_str())
}

/// Whether two words separated by `gap` can belong to one name
fn joinable(gap: &str, previous: &str) -> bool {
    if gap.is_empty() {
        return false;
    }
    if gap.chars().all(char::is_whitespace) {
        return true;
    }
    // "Dr. Smith"
    is_title(previous)
        && gap.starts_with('.')
        && gap.len() > 1
        && gap[1..].chars().all(char::is_whitespace)
}

impl NameTagger {
    /// Tagger backed by the built-in gazetteers
    pub fn new() -> Self {
        Self {
            people: to_set(GIVEN_NAMES),
            places: to_set(PLACES),
            organizations: to_set(ORGANIZATIONS),
        }
    }

    /// Add entries; matching is case-insensitive
    pub fn extend(&mut self, gazetteer: &Gazetteer) {
        self.people
            .extend(gazetteer.people.iter().map(|n| normalize(n)));
        self.places
            .extend(gazetteer.places.iter().map(|n| normalize(n)));
        self.organizations
            .extend(gazetteer.organizations.iter().map(|n| normalize(n)));
    }

    /// Name spans in `text`, given its word segments
    pub fn tag(&self, text: &str, segments: &[Segment<'_>]) -> Vec<TaggedSpan> {
        let mut spans = Vec::new();
        let mut i = 0;

        while i < segments.len() {
            if !segments[i].is_capitalized() {
                i += 1;
                continue;
            }

            let end = run_end(text, segments, i);
            let run = &segments[i..=end];
            let sentence_initial = starts_sentence(text, segments, i);

            if let Some(span) = self.classify(text, run, sentence_initial) {
                spans.push(span);
            }
            i = end + 1;
        }

        spans
    }

    fn classify(
        &self,
        text: &str,
        run: &[Segment<'_>],
        sentence_initial: bool,
    ) -> Option<TaggedSpan> {
        let mut run = run;
        let mut sentence_initial = sentence_initial;
        while run.len() > 1 && DETERMINERS.contains(&run[0].text.to_lowercase().as_str()) {
            run = &run[1..];
            sentence_initial = false;
        }

        let category = self.category(run, sentence_initial);
        match category {
            Some(EntityCategory::Other) | None if sentence_initial && run.len() > 1 => {
                // "Yesterday John left": retry without the sentence-initial word
                self.classify(text, &run[1..], false)
                    .or_else(|| category.map(|c| span(text, run, c)))
            }
            Some(EntityCategory::Person) if is_title(run[0].text) && run.len() > 1 => {
                Some(span(text, &run[1..], EntityCategory::Person))
            }
            Some(c) => Some(span(text, run, c)),
            None => None,
        }
    }

    fn category(&self, run: &[Segment<'_>], sentence_initial: bool) -> Option<EntityCategory> {
        let words: Vec<String> = run.iter().map(|s| s.text.to_lowercase()).collect();
        let key = words.join(" ");
        let first = words.first()?;
        let last = words.last()?;

        if words.len() == 1 && key == "i" {
            return None;
        }
        if self.organizations.contains(&key)
            || (words.len() > 1 && ORGANIZATION_SUFFIXES.contains(&last.as_str()))
            || (words.len() > 1 && ORGANIZATION_HEADS.contains(&first.as_str()))
        {
            return Some(EntityCategory::Organization);
        }
        if self.places.contains(&key) {
            return Some(EntityCategory::Place);
        }
        if self.people.contains(&key)
            || self.people.contains(first)
            || (words.len() > 1 && TITLES.contains(&first.as_str()))
        {
            return Some(EntityCategory::Person);
        }
        if sentence_initial && words.len() == 1 {
            return None;
        }
        Some(EntityCategory::Other)
    }
}

/// Text between two segments
fn gap<'t>(text: &'t str, a: &Segment<'_>, b: &Segment<'_>) -> &'t str {
    &text[a.range.end..b.range.start]
}

/// Index of the last segment in the name run starting at `start`
fn run_end(text: &str, segments: &[Segment<'_>], start: usize) -> usize {
    let mut end = start;

    loop {
        let Some(next) = segments.get(end + 1) else {
            break;
        };
        let current = &segments[end];
        if !joinable(gap(text, current, next), current.text) {
            break;
        }
        if next.is_capitalized() {
            end += 1;
            continue;
        }
        // "Bank of America", "Vincent van Gogh"
        let bridged = CONNECTORS.contains(&next.text)
            && segments.get(end + 2).is_some_and(|after| {
                after.is_capitalized() && joinable(gap(text, next, after), next.text)
            });
        if bridged {
            end += 2;
            continue;
        }
        break;
    }

    end
}

fn span(text: &str, run: &[Segment<'_>], category: EntityCategory) -> TaggedSpan {
    let start = run.first().map_or(0, |s| s.range.start);
    let end = run.last().map_or(start, |s| s.range.end);
    TaggedSpan::new(&text[start..end], category, start..end)
}

/// Whether segment `index` opens a sentence
fn starts_sentence(text: &str, segments: &[Segment<'_>], index: usize) -> bool {
    let Some(previous) = index.checked_sub(1).and_then(|p| segments.get(p)) else {
        return true;
    };
    let between = gap(text, previous, &segments[index]);
    if is_title(previous.text) && between.trim() == "." {
        return false;
    }
    between.contains(['.', '!', '?'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Segmenter;

    fn tag(text: &str) -> Vec<(String, EntityCategory)> {
        tag_with(&NameTagger::new(), text)
    }

    fn tag_with(tagger: &NameTagger, text: &str) -> Vec<(String, EntityCategory)> {
        let segmenter = Segmenter::new().unwrap();
        tagger
            .tag(text, &segmenter.words(text))
            .into_iter()
            .map(|s| (s.text, s.category))
            .collect()
    }

    #[test]
    fn test_single_place() {
        assert_eq!(
            tag("Paris is lovely"),
            vec![("Paris".to_string(), EntityCategory::Place)]
        );
    }

    #[test]
    fn test_multi_word_names_are_joined() {
        assert_eq!(
            tag("I flew from New York to Buenos Aires"),
            vec![
                ("New York".to_string(), EntityCategory::Place),
                ("Buenos Aires".to_string(), EntityCategory::Place),
            ]
        );
    }

    #[test]
    fn test_people_and_organizations() {
        assert_eq!(
            tag("Yesterday Tim Cook said Apple will hire more engineers"),
            vec![
                ("Tim Cook".to_string(), EntityCategory::Person),
                ("Apple".to_string(), EntityCategory::Organization),
            ]
        );
    }

    #[test]
    fn test_connectors_and_determiners() {
        assert_eq!(
            tag("She works at the University of Oxford"),
            vec![(
                "University of Oxford".to_string(),
                EntityCategory::Organization
            )]
        );
        assert_eq!(
            tag("The United Nations met in Geneva"),
            vec![
                ("United Nations".to_string(), EntityCategory::Organization),
                ("Geneva".to_string(), EntityCategory::Place),
            ]
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            tag("We met Dr. Watson there"),
            vec![("Watson".to_string(), EntityCategory::Person)]
        );
    }

    #[test]
    fn test_punctuation_splits_names() {
        assert_eq!(
            tag("We visited Paris, London and Rome"),
            vec![
                ("Paris".to_string(), EntityCategory::Place),
                ("London".to_string(), EntityCategory::Place),
                ("Rome".to_string(), EntityCategory::Place),
            ]
        );
    }

    #[test]
    fn test_unknown_names() {
        // sentence-initial single words are not names
        assert!(tag("Lovely weather").is_empty());
        assert!(tag("I love this").is_empty());
        assert_eq!(
            tag("we saw Zorblax today"),
            vec![("Zorblax".to_string(), EntityCategory::Other)]
        );
    }

    #[test]
    fn test_extend_gazetteer() {
        let mut tagger = NameTagger::new();
        tagger.extend(&Gazetteer {
            people: vec!["Zorblax".to_string()],
            places: vec!["Gotham  City".to_string()],
            organizations: vec!["Acme Widgets".to_string()],
        });
        assert_eq!(
            tag_with(&tagger, "we saw Zorblax in Gotham City at Acme Widgets"),
            vec![
                ("Zorblax".to_string(), EntityCategory::Person),
                ("Gotham City".to_string(), EntityCategory::Place),
                ("Acme Widgets".to_string(), EntityCategory::Organization),
            ]
        );
    }

    #[test]
    fn test_span_ranges_point_into_text() {
        let text = "Hello from Tokyo";
        let segmenter = Segmenter::new().unwrap();
        let spans = NameTagger::new().tag(text, &segmenter.words(text));
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].range.clone()], "Tokyo");
    }
}

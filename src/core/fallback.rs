//! Defaults for provider absences
//!
//! None of these cases is an error. Each has one fixed policy here so the
//! analyzer never carries inline fallbacks.

use super::language::Language;

/// Default value policy for every provider-absence case
pub struct Fallbacks;

impl Fallbacks {
    /// Score used when the provider returns no (or a non-finite) sentiment
    pub const SENTIMENT: f64 = 0.0;

    /// No dominant language: the undetermined sentinel
    pub fn language(detected: Option<Language>) -> Language {
        detected.unwrap_or_else(Language::undetermined)
    }

    /// No sentiment score: zero
    pub fn sentiment(score: Option<f64>) -> f64 {
        score
            .filter(|s| s.is_finite())
            .unwrap_or(Self::SENTIMENT)
    }

    /// No lemma: the segment itself, trimmed; empty results are dropped
    pub fn lemma(lemma: Option<String>, segment: &str) -> Option<String> {
        let word = lemma.unwrap_or_else(|| segment.trim().to_string());
        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }

    /// No embedding model for the language: a placeholder line
    pub fn missing_embedding(language: &Language) -> String {
        format!("No word embedding available for language {}", language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_fallback() {
        assert!(Fallbacks::language(None).is_undetermined());
        assert_eq!(Fallbacks::language(Some(Language::new("fr"))).code(), "fr");
    }

    #[test]
    fn test_sentiment_fallback() {
        assert_eq!(Fallbacks::sentiment(None), 0.0);
        assert_eq!(Fallbacks::sentiment(Some(f64::NAN)), 0.0);
        assert_eq!(Fallbacks::sentiment(Some(-0.25)), -0.25);
        // no clamping
        assert_eq!(Fallbacks::sentiment(Some(3.5)), 3.5);
    }

    #[test]
    fn test_lemma_fallback() {
        assert_eq!(
            Fallbacks::lemma(Some("be".to_string()), "is"),
            Some("be".to_string())
        );
        assert_eq!(Fallbacks::lemma(None, "  Paris "), Some("Paris".to_string()));
        assert_eq!(Fallbacks::lemma(None, "   "), None);
        assert_eq!(Fallbacks::lemma(Some(String::new()), "word"), None);
    }

    #[test]
    fn test_missing_embedding_placeholder() {
        assert_eq!(
            Fallbacks::missing_embedding(&Language::undetermined()),
            "No word embedding available for language und"
        );
    }
}

//! Stop-word based language identification

use crate::core::{Language, Segment};

/// A language and its most frequent function words
pub struct LanguageProfile {
    pub code: &'static str,
    pub stopwords: &'static [&'static str],
}

/// Profiles in tie-break order: on equal hits the earlier profile wins
pub const PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        code: "en",
        stopwords: &[
            "the", "and", "is", "are", "was", "were", "be", "to", "of", "in", "that", "it",
            "this", "i", "you", "he", "she", "we", "they", "with", "for", "on", "not", "have",
            "has", "my", "a", "an", "what", "but", "or", "at", "by", "from", "your", "very",
        ],
    },
    LanguageProfile {
        code: "fr",
        stopwords: &[
            "le", "la", "les", "et", "est", "un", "une", "des", "du", "je", "tu", "il", "elle",
            "nous", "vous", "ils", "ne", "pas", "que", "qui", "dans", "pour", "sur", "avec",
            "ce", "cette", "sont", "au", "aux", "mais", "très", "c'est", "j'ai",
        ],
    },
    LanguageProfile {
        code: "de",
        stopwords: &[
            "der", "die", "das", "und", "ist", "nicht", "ein", "eine", "ich", "du", "er", "sie",
            "wir", "ihr", "mit", "auf", "für", "von", "zu", "den", "dem", "des", "sind", "auch",
            "aber", "sich", "im", "sehr", "es", "war",
        ],
    },
    LanguageProfile {
        code: "es",
        stopwords: &[
            "el", "la", "los", "las", "y", "es", "un", "una", "que", "de", "en", "no", "yo",
            "tú", "él", "ella", "nosotros", "con", "por", "para", "está", "son", "pero", "muy",
            "del", "se", "lo", "mi", "como",
        ],
    },
    LanguageProfile {
        code: "it",
        stopwords: &[
            "il", "lo", "la", "gli", "le", "e", "è", "un", "una", "che", "di", "non", "io", "tu",
            "lui", "lei", "noi", "con", "per", "sono", "ma", "molto", "del", "della", "nel",
            "questo", "mi", "ho",
        ],
    },
    LanguageProfile {
        code: "pt",
        stopwords: &[
            "o", "a", "os", "as", "e", "é", "um", "uma", "que", "de", "não", "eu", "você", "ele",
            "ela", "nós", "com", "por", "para", "são", "mas", "muito", "do", "da", "no", "na",
            "isso", "em",
        ],
    },
    LanguageProfile {
        code: "nl",
        stopwords: &[
            "de", "het", "een", "en", "is", "niet", "ik", "jij", "hij", "zij", "wij", "met", "op",
            "voor", "van", "dat", "die", "zijn", "maar", "ook", "te", "er", "naar", "dit", "heel",
        ],
    },
];

/// Number of words that are stop words of `profile`
fn hits(profile: &LanguageProfile, words: &[String]) -> usize {
    words
        .iter()
        .filter(|w| profile.stopwords.contains(&w.as_str()))
        .count()
}

/// The profile with the most stop-word hits; `None` when nothing matches
pub fn detect(segments: &[Segment<'_>]) -> Option<Language> {
    let words: Vec<String> = segments.iter().map(|s| s.text.to_lowercase()).collect();

    let mut best: Option<(&LanguageProfile, usize)> = None;
    for profile in PROFILES {
        let count = hits(profile, &words);
        if count > best.map_or(0, |(_, c)| c) {
            best = Some((profile, count));
        }
    }

    best.map(|(profile, _)| Language::new(profile.code))
}

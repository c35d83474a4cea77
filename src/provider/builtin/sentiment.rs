//! Lexicon-based paragraph sentiment
//!
//! Word valences are summed over the whole paragraph and squashed into
//! (-1, 1) with `s / sqrt(s² + 15)`. A negator within the three preceding
//! words flips and dampens a valence; intensifiers push it away from zero.

use crate::core::Segment;

/// Normalization constant for the squashing function
const ALPHA: f64 = 15.0;

/// Scale applied to a negated valence
const NEGATION_SCALAR: f64 = -0.74;

/// Added to (or taken from) the magnitude of the next valenced word
const BOOST: f64 = 0.293;

/// How many preceding words a negator reaches
const NEGATION_WINDOW: usize = 3;

const VALENCES: &[(&str, f64)] = &[
    ("abandon", -2.0),
    ("abuse", -3.0),
    ("admire", 3.0),
    ("adore", 3.0),
    ("afraid", -2.0),
    ("agree", 1.0),
    ("amazing", 4.0),
    ("angry", -3.0),
    ("annoying", -2.0),
    ("anxious", -2.0),
    ("appreciate", 2.0),
    ("awesome", 4.0),
    ("awful", -3.0),
    ("bad", -3.0),
    ("beautiful", 3.0),
    ("best", 3.0),
    ("better", 2.0),
    ("bored", -2.0),
    ("boring", -3.0),
    ("brilliant", 4.0),
    ("broken", -1.0),
    ("calm", 2.0),
    ("care", 2.0),
    ("cheerful", 2.0),
    ("clean", 2.0),
    ("comfortable", 2.0),
    ("confused", -2.0),
    ("cool", 1.0),
    ("crap", -3.0),
    ("cruel", -3.0),
    ("cry", -1.0),
    ("damn", -4.0),
    ("dead", -3.0),
    ("delight", 3.0),
    ("delightful", 3.0),
    ("depressed", -2.0),
    ("disappointed", -2.0),
    ("disaster", -2.0),
    ("disgusting", -3.0),
    ("dislike", -2.0),
    ("easy", 1.0),
    ("enjoy", 2.0),
    ("evil", -3.0),
    ("excellent", 3.0),
    ("excited", 3.0),
    ("fail", -2.0),
    ("failure", -2.0),
    ("fantastic", 4.0),
    ("fear", -2.0),
    ("fine", 2.0),
    ("fun", 4.0),
    ("funny", 4.0),
    ("glad", 3.0),
    ("good", 3.0),
    ("great", 3.0),
    ("grief", -2.0),
    ("happy", 3.0),
    ("harm", -2.0),
    ("hate", -3.0),
    ("hated", -3.0),
    ("hope", 2.0),
    ("horrible", -3.0),
    ("hurt", -2.0),
    ("ill", -2.0),
    ("joy", 3.0),
    ("kill", -3.0),
    ("kind", 2.0),
    ("like", 2.0),
    ("lonely", -2.0),
    ("lose", -3.0),
    ("lost", -3.0),
    ("love", 3.0),
    ("loved", 3.0),
    ("lovely", 3.0),
    ("loves", 3.0),
    ("mad", -3.0),
    ("mess", -2.0),
    ("miserable", -3.0),
    ("nasty", -3.0),
    ("nice", 3.0),
    ("outstanding", 5.0),
    ("pain", -2.0),
    ("perfect", 3.0),
    ("pleasant", 3.0),
    ("pleased", 3.0),
    ("poor", -2.0),
    ("pretty", 1.0),
    ("problem", -2.0),
    ("proud", 2.0),
    ("sad", -2.0),
    ("safe", 1.0),
    ("scared", -2.0),
    ("smile", 2.0),
    ("sorry", -1.0),
    ("stupid", -2.0),
    ("success", 2.0),
    ("superb", 5.0),
    ("terrible", -3.0),
    ("terrific", 4.0),
    ("thank", 2.0),
    ("thanks", 2.0),
    ("tired", -2.0),
    ("ugly", -3.0),
    ("unhappy", -2.0),
    ("upset", -2.0),
    ("useful", 2.0),
    ("useless", -2.0),
    ("warm", 1.0),
    ("win", 4.0),
    ("wonderful", 4.0),
    ("worried", -3.0),
    ("worse", -3.0),
    ("worst", -3.0),
    ("wrong", -2.0),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "without", "cannot",
];

const INTENSIFIERS: &[&str] = &[
    "very", "really", "extremely", "so", "absolutely", "incredibly", "totally", "truly", "most",
];

const DAMPENERS: &[&str] = &["slightly", "somewhat", "barely", "hardly", "kind-of", "little"];

fn valence(word: &str) -> Option<f64> {
    VALENCES
        .iter()
        .find(|(entry, _)| *entry == word)
        .map(|(_, v)| *v)
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't") || word.ends_with("n’t")
}

/// Paragraph sentiment in (-1, 1); `None` when there are no words at all
pub fn score(segments: &[Segment<'_>]) -> Option<f64> {
    if segments.is_empty() {
        return None;
    }

    let words: Vec<String> = segments.iter().map(|s| s.text.to_lowercase()).collect();
    let mut sum = 0.0;

    for (i, word) in words.iter().enumerate() {
        let Some(mut value) = valence(word) else {
            continue;
        };

        if let Some(previous) = i.checked_sub(1).map(|j| words[j].as_str()) {
            let direction = value.signum();
            if INTENSIFIERS.contains(&previous) {
                value += BOOST * direction;
            } else if DAMPENERS.contains(&previous) {
                value -= BOOST * direction;
            }
        }

        let window_start = i.saturating_sub(NEGATION_WINDOW);
        if words[window_start..i].iter().any(|w| is_negator(w)) {
            value *= NEGATION_SCALAR;
        }

        sum += value;
    }

    Some(sum / (sum * sum + ALPHA).sqrt())
}

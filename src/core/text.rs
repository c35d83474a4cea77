//! Input text, word segmentation and list formatting

use crate::error::Result;
use regex::Regex;
use std::fmt;
use std::ops::Range;

/// Word units: letters, marks and digits, with inner apostrophes or hyphens
const WORD_PATTERN: &str = r"[\p{L}\p{M}\p{N}]+(?:['’\-][\p{L}\p{M}\p{N}]+)*";

/// The analysis subject: all positional words joined with single spaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText(String);

impl InputText {
    /// Join words with single spaces
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for InputText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A word unit borrowed from the text, with its byte range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub range: Range<usize>,
}

impl Segment<'_> {
    /// Whether the first character is uppercase
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

/// Splits text into word units
#[derive(Debug, Clone)]
pub struct Segmenter {
    word: Regex,
}

impl Segmenter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            word: Regex::new(WORD_PATTERN)?,
        })
    }

    /// All word units in order of appearance
    pub fn words<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        self.word
            .find_iter(text)
            .map(|m| Segment {
                text: m.as_str(),
                range: m.range(),
            })
            .collect()
    }
}

/// Format items as an English list: `a`, `a and b`, `a, b, and c`
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}, and {}", head, last.as_ref())
        }
    }
}

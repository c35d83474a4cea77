//! Language codes as reported by the NLP provider

use serde::Deserialize;
use std::fmt;

/// A language code (`en`, `fr`, `de`, ...) or the undetermined sentinel `und`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "String")]
pub struct Language(String);

impl Language {
    /// Code used when no dominant language could be determined
    pub const UNDETERMINED_CODE: &'static str = "und";

    /// Create a language from a code, normalized to lowercase
    pub fn new(code: impl AsRef<str>) -> Self {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Self::undetermined();
        }
        Self(code.to_ascii_lowercase())
    }

    /// The undetermined sentinel
    pub fn undetermined() -> Self {
        Self(Self::UNDETERMINED_CODE.to_string())
    }

    /// The language code
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Whether this is the undetermined sentinel
    pub fn is_undetermined(&self) -> bool {
        self.0 == Self::UNDETERMINED_CODE
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

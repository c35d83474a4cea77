//! Analysis configuration
//!
//! Command-line switches are collected into [`Switches`] and resolved exactly
//! once into [`Capabilities`]. The `everything` switch only exists on the
//! unresolved side: after resolution every capability is a plain boolean and
//! nothing toggles it again. Numeric options live in [`Settings`], layered
//! from built-in defaults, the configuration file and the command line.

use log::debug;

/// Default number of nearest neighbours requested per word
pub const DEFAULT_MAXIMUM_ALTERNATIVES: usize = 10;

/// Default similarity threshold a neighbour has to exceed
pub const DEFAULT_FAR_AWAY: f64 = 0.8;

/// Boolean switches as given on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Switches {
    pub detect_language: bool,
    pub sentiment_analysis: bool,
    pub lemmatize: bool,
    pub alternatives: bool,
    pub names: bool,
    pub person: bool,
    pub place: bool,
    pub organization: bool,
    pub everything: bool,
}

impl Switches {
    /// Switches with only `everything` set
    pub fn everything() -> Self {
        Self {
            everything: true,
            ..Self::default()
        }
    }

    /// Expand `everything` and freeze the result
    pub fn resolve(self) -> Capabilities {
        if self.everything {
            debug!("--everything given, enabling all capabilities");
            return Capabilities::all();
        }

        Capabilities {
            detect_language: self.detect_language,
            sentiment_analysis: self.sentiment_analysis,
            lemmatize: self.lemmatize,
            alternatives: self.alternatives,
            names: self.names,
            person: self.person,
            place: self.place,
            organization: self.organization,
        }
    }
}

/// A single resolved capability switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Switch {
    DetectLanguage,
    SentimentAnalysis,
    Lemmatize,
    Alternatives,
    Names,
    Person,
    Place,
    Organization,
}

/// Resolved, read-only set of enabled capabilities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub detect_language: bool,
    pub sentiment_analysis: bool,
    pub lemmatize: bool,
    pub alternatives: bool,
    pub names: bool,
    pub person: bool,
    pub place: bool,
    pub organization: bool,
}

impl Capabilities {
    /// Every capability enabled
    pub const fn all() -> Self {
        Self {
            detect_language: true,
            sentiment_analysis: true,
            lemmatize: true,
            alternatives: true,
            names: true,
            person: true,
            place: true,
            organization: true,
        }
    }

    /// Look up a single switch
    pub fn is_enabled(&self, switch: Switch) -> bool {
        match switch {
            Switch::DetectLanguage => self.detect_language,
            Switch::SentimentAnalysis => self.sentiment_analysis,
            Switch::Lemmatize => self.lemmatize,
            Switch::Alternatives => self.alternatives,
            Switch::Names => self.names,
            Switch::Person => self.person,
            Switch::Place => self.place,
            Switch::Organization => self.organization,
        }
    }

    /// Whether the entity section runs at all
    ///
    /// `names` turns the section on, but only the per-category switches
    /// decide which entities are printed.
    pub fn entity_recognition(&self) -> bool {
        self.names || self.person || self.place || self.organization
    }
}

/// Numeric options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Upper bound on neighbours requested per word
    pub maximum_alternatives: usize,
    /// Neighbours must score strictly above this similarity
    pub far_away: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            maximum_alternatives: DEFAULT_MAXIMUM_ALTERNATIVES,
            far_away: DEFAULT_FAR_AWAY,
        }
    }
}

impl Settings {
    /// Layer optional values over these settings; `None` keeps the current value
    pub fn with_overrides(self, maximum_alternatives: Option<usize>, far_away: Option<f64>) -> Self {
        Self {
            maximum_alternatives: maximum_alternatives.unwrap_or(self.maximum_alternatives),
            far_away: far_away.unwrap_or(self.far_away),
        }
    }
}

/// Final configuration for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    capabilities: Capabilities,
    settings: Settings,
}

impl AnalysisConfig {
    /// Resolve switches and combine them with settings
    pub fn new(switches: Switches, settings: Settings) -> Self {
        let capabilities = switches.resolve();
        debug!("Resolved capabilities: {:?}, settings: {:?}", capabilities, settings);
        Self {
            capabilities,
            settings,
        }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_individual_switches() -> Switches {
        Switches {
            detect_language: true,
            sentiment_analysis: true,
            lemmatize: true,
            alternatives: true,
            names: true,
            person: true,
            place: true,
            organization: true,
            everything: false,
        }
    }

    #[test]
    fn test_everything_equals_all_switches() {
        assert_eq!(
            Switches::everything().resolve(),
            all_individual_switches().resolve()
        );
        assert_eq!(Switches::everything().resolve(), Capabilities::all());
    }

    #[test]
    fn test_everything_overrides_partial_switches() {
        let switches = Switches {
            place: true,
            everything: true,
            ..Switches::default()
        };
        assert_eq!(switches.resolve(), Capabilities::all());
    }

    #[test]
    fn test_resolve_without_everything() {
        let switches = Switches {
            lemmatize: true,
            place: true,
            ..Switches::default()
        };
        let caps = switches.resolve();
        assert!(caps.lemmatize);
        assert!(caps.place);
        assert!(!caps.detect_language);
        assert!(!caps.person);
    }

    #[test]
    fn test_entity_recognition_gate() {
        assert!(!Capabilities::default().entity_recognition());

        let names_only = Switches {
            names: true,
            ..Switches::default()
        }
        .resolve();
        assert!(names_only.entity_recognition());

        let organization_only = Switches {
            organization: true,
            ..Switches::default()
        }
        .resolve();
        assert!(organization_only.entity_recognition());
        assert!(organization_only.is_enabled(Switch::Organization));
        assert!(!organization_only.is_enabled(Switch::Names));
    }

    #[test]
    fn test_settings_defaults_and_overrides() {
        let defaults = Settings::default();
        assert_eq!(defaults.maximum_alternatives, 10);
        assert_eq!(defaults.far_away, 0.8);

        let layered = defaults
            .with_overrides(Some(3), None)
            .with_overrides(None, Some(0.5));
        assert_eq!(layered.maximum_alternatives, 3);
        assert_eq!(layered.far_away, 0.5);
    }
}

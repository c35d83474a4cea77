//! Command-line argument definitions and parsing
//!
//! Parsing failures (no words, a non-numeric option value) are reported by
//! clap with usage text and a non-zero exit before anything is analyzed.

use clap::{Args, Parser};
use std::path::PathBuf;
use wordlens::Switches;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "wordlens",
    version,
    about = "Analyze text: language, sentiment, lemmas, word alternatives and named entities",
    long_about = "wordlens joins its positional words into one text and runs the requested \
                  analyses over it. The text itself is always printed first; each enabled \
                  analysis follows in a fixed order: language, sentiment, lemmas, \
                  alternatives, entities."
)]
pub struct Cli {
    /// Words to analyze; joined with single spaces
    #[arg(required = true, num_args = 1.., value_name = "WORDS")]
    pub words: Vec<String>,

    /// Maximum number of alternatives to consider per word [default: 10]
    #[arg(long, value_name = "COUNT", value_parser = parse_positive)]
    pub maximum_alternatives: Option<usize>,

    /// Similarity an alternative must exceed to be shown [default: 0.8]
    #[arg(
        long,
        value_name = "SIMILARITY",
        value_parser = parse_threshold,
        allow_negative_numbers = true
    )]
    pub far_away: Option<f64>,

    #[command(flatten)]
    pub switches: SwitchArgs,

    /// Read settings from this YAML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory of embedding models (JSON)
    #[arg(long, value_name = "DIR")]
    pub embeddings: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Analysis switches
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SwitchArgs {
    /// Detect the dominant language
    #[arg(short = 'd', long)]
    pub detect_language: bool,

    /// Score the sentiment of the whole text
    #[arg(short = 's', long)]
    pub sentiment_analysis: bool,

    /// List the lemma of every word
    #[arg(short = 'l', long)]
    pub lemmatize: bool,

    /// Suggest similar words from an embedding model
    #[arg(short = 'a', long)]
    pub alternatives: bool,

    /// Run entity recognition (categories are chosen with -m, -p and -o)
    #[arg(short = 'n', long)]
    pub names: bool,

    /// Report personal names
    #[arg(short = 'm', long, visible_alias = "person")]
    pub mame: bool,

    /// Report place names
    #[arg(short = 'p', long)]
    pub place: bool,

    /// Report organization names
    #[arg(short = 'o', long)]
    pub organization: bool,

    /// Enable every analysis
    #[arg(short = 'e', long)]
    pub everything: bool,
}

impl From<SwitchArgs> for Switches {
    fn from(args: SwitchArgs) -> Self {
        Self {
            detect_language: args.detect_language,
            sentiment_analysis: args.sentiment_analysis,
            lemmatize: args.lemmatize,
            alternatives: args.alternatives,
            names: args.names,
            person: args.mame,
            place: args.place,
            organization: args.organization,
            everything: args.everything,
        }
    }
}

fn parse_positive(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("not a positive integer: {e}")),
    }
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err("must be a finite number".to_string()),
        Err(e) => Err(format!("not a number: {e}")),
    }
}

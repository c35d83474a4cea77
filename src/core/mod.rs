//! Core types for one analysis run
//!
//! - [`AnalysisConfig`]: switches resolved once into read-only capabilities
//! - [`InputText`] and [`Segmenter`]: the joined input and its word units
//! - [`EntityCategory`]: name categories and the switches gating them
//! - [`Fallbacks`]: defaults for everything a provider may not return
//! - [`Analyzer`]: runs the enabled capabilities and builds a [`Report`]

pub mod analyzer;
pub mod config;
pub mod entity;
pub mod fallback;
pub mod language;
pub mod report;
pub mod text;

pub use analyzer::Analyzer;
pub use config::{AnalysisConfig, Capabilities, Settings, Switch, Switches};
pub use entity::{EntityCategory, TaggedSpan, ENTITY_GATES};
pub use fallback::Fallbacks;
pub use language::Language;
pub use report::{Alternatives, Entity, Report, WordAlternatives};
pub use text::{format_list, InputText, Segment, Segmenter};

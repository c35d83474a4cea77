//! Plain-text rendering of a [`Report`]

use crate::core::{format_list, Alternatives, Report};
use std::io::{self, Write};

/// Header printed before the entity lines
pub const ENTITIES_HEADER: &str = "Found the following entities:";

/// Render a score; whole numbers keep one decimal (`0.0`, `1.0`)
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.is_finite() {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}

/// Writes reports in the fixed section order
pub struct ReportFormatter;

impl ReportFormatter {
    /// Write `report` to `out`
    pub fn write<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", report.text)?;

        if let Some(language) = &report.language {
            writeln!(out, "Detected language: {}", language)?;
        }

        if let Some(score) = report.sentiment {
            writeln!(out, "Sentiment analysis: {}", format_score(score))?;
        }

        if let Some(lemmas) = &report.lemmas {
            writeln!(out, "Lemmas: {}", format_list(lemmas))?;
        }

        if let Some(alternatives) = &report.alternatives {
            for entry in alternatives {
                writeln!(out, "Alternatives for {}:", entry.word)?;
                match &entry.outcome {
                    Alternatives::Unavailable(placeholder) => writeln!(out, "{}", placeholder)?,
                    Alternatives::Neighbors(neighbors) => {
                        for neighbor in neighbors {
                            writeln!(
                                out,
                                "- {} (Similarity: {})",
                                neighbor.word,
                                format_score(neighbor.similarity)
                            )?;
                        }
                    }
                }
            }
        }

        if let Some(entities) = &report.entities {
            writeln!(out, "{}", ENTITIES_HEADER)?;
            for entity in entities {
                writeln!(out, "{}: {}", entity.category, entity.text)?;
            }
        }

        Ok(())
    }

    /// Render `report` into a string
    pub fn render(report: &Report) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = Self::write(report, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

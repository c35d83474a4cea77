//! Bridges parsed arguments to the library
//!
//! Everything that can fail (config file, embedding models) is resolved
//! before the report is written, so a failed run prints nothing to stdout.

use crate::cli_bin::args::Cli;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;
use wordlens::{
    load_models, AnalysisConfig, Analyzer, BuiltinProvider, ConfigFile, InputText,
    ReportFormatter, Switches,
};

/// Run one analysis and print the report to stdout
pub fn run(cli: Cli) -> Result<()> {
    debug!("Running with args: {:?}", cli);

    let file = match &cli.config {
        Some(path) => ConfigFile::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => ConfigFile::default(),
    };

    let settings = file
        .settings()
        .with_overrides(cli.maximum_alternatives, cli.far_away);
    let config = AnalysisConfig::new(Switches::from(cli.switches), settings);
    debug!("Resolved capabilities: {:?}", config.capabilities());

    let mut provider = BuiltinProvider::new()
        .context("Failed to initialize the built-in provider")?
        .with_gazetteer(&file.gazetteer);

    if config.capabilities().alternatives {
        if let Some(dir) = embeddings_dir(&cli, &file) {
            let models = load_models(&dir)
                .with_context(|| format!("Failed to load embedding models from {}", dir.display()))?;
            provider = provider.with_embeddings(models);
        } else {
            info!("No embeddings directory configured; alternatives will be unavailable");
        }
    }

    let text = InputText::from_words(&cli.words);
    let report = Analyzer::new(&provider, config).analyze(&text);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ReportFormatter::write(&report, &mut out).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;
    Ok(())
}

/// The command line wins over the config file
fn embeddings_dir(cli: &Cli, file: &ConfigFile) -> Option<PathBuf> {
    cli.embeddings.clone().or_else(|| file.embeddings_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_embeddings_dir_precedence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wordlens.yaml");
        fs::write(&path, "embeddings: models\n").unwrap();
        let file = ConfigFile::load(&path).unwrap();

        let cli = Cli::try_parse_from(["wordlens", "word"]).unwrap();
        assert_eq!(embeddings_dir(&cli, &file), Some(dir.path().join("models")));

        let cli = Cli::try_parse_from(["wordlens", "--embeddings", "/opt/vectors", "word"]).unwrap();
        assert_eq!(
            embeddings_dir(&cli, &file),
            Some(PathBuf::from("/opt/vectors"))
        );

        let cli = Cli::try_parse_from(["wordlens", "word"]).unwrap();
        assert_eq!(embeddings_dir(&cli, &ConfigFile::default()), None);
    }

    #[test]
    fn test_missing_config_fails() {
        let cli = Cli::try_parse_from(["wordlens", "-c", "/nonexistent/wordlens.yaml", "word"])
            .unwrap();
        let err = run(cli).unwrap_err();
        assert!(format!("{:#}", err).contains("Configuration file not found"));
    }

    #[test]
    fn test_missing_models_fail_only_with_alternatives() {
        let cli = Cli::try_parse_from(["wordlens", "--embeddings", "/nonexistent/models", "word"])
            .unwrap();
        assert!(run(cli).is_ok());

        let cli = Cli::try_parse_from([
            "wordlens",
            "-a",
            "--embeddings",
            "/nonexistent/models",
            "word",
        ])
        .unwrap();
        assert!(run(cli).is_err());
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use archive_dna_compare::{Strategy, compare, format_report};
use archive_dna_fingerprint::{DocumentCodec, FingerprintDocument, JsonCodec};
use archive_dna_fs::atomic_read;
use tracing::warn;

use crate::config::{Config, has_expected_extension};

#[derive(Debug, clap::Args)]
pub struct CompareArg {
    /// First fingerprint document
    #[arg(value_name = "JSON_1")]
    pub first: PathBuf,

    /// Second fingerprint document
    #[arg(value_name = "JSON_2")]
    pub second: PathBuf,

    /// Comparison strategy: `name` (per-file, with modification counts) or
    /// `identity` (name+size+crc tokens). Defaults to the configured mode
    #[arg(long, value_name = "MODE")]
    pub mode: Option<Strategy>,
}

impl CompareArg {
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let first = load_document(&self.first, config)?;
        let second = load_document(&self.second, config)?;

        let strategy = self.mode.unwrap_or(config.mode);
        let comparison = compare(&first, &second, strategy);

        print!(
            "{}",
            format_report(&comparison, &display_name(&self.first), &display_name(&self.second))
        );
        Ok(())
    }
}

fn load_document(path: &Path, config: &Config) -> anyhow::Result<FingerprintDocument> {
    if !has_expected_extension(path, &config.document_extensions) {
        warn!(
            document = %path.display(),
            expected = ?config.document_extensions,
            "document does not have the expected extension"
        );
    }
    let bytes = atomic_read(path)?;
    JsonCodec::new()
        .decode(&bytes)
        .with_context(|| format!("failed to load '{}'", path.display()))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

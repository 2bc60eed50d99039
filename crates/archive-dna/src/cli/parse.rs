use std::path::PathBuf;

use anyhow::Context;
use archive_dna_archive::{FingerprintOptions, fingerprint_file};
use archive_dna_fingerprint::{DocumentCodec, JsonCodec};
use archive_dna_fs::{AtomicWriteOptions, atomic_write};
use tracing::warn;

use crate::config::{Config, has_expected_extension};

#[derive(Debug, clap::Args)]
pub struct ParseArg {
    /// ZIP archive to fingerprint
    #[arg(value_name = "INPUT_ZIP")]
    pub input: PathBuf,

    /// Where to write the fingerprint document (JSON)
    #[arg(value_name = "OUTPUT_JSON")]
    pub output: PathBuf,

    /// Entry suffix to fingerprint; repeat to list several. Replaces the configured list
    #[arg(long = "suffix", value_name = "SUFFIX")]
    pub suffixes: Vec<String>,
}

impl ParseArg {
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        if !has_expected_extension(&self.input, &config.archive_extensions) {
            warn!(
                input = %self.input.display(),
                expected = ?config.archive_extensions,
                "input does not have an archive extension"
            );
        }

        let options = if self.suffixes.is_empty() {
            config.fingerprint_options()
        } else {
            FingerprintOptions::new().suffixes(self.suffixes)
        };

        let document = fingerprint_file(&self.input, &options)
            .with_context(|| format!("failed to parse '{}'", self.input.display()))?;
        let bytes = JsonCodec::pretty().encode(&document)?;
        atomic_write(&self.output, &bytes, AtomicWriteOptions::new())
            .with_context(|| format!("failed to save '{}'", self.output.display()))?;

        let shown = std::path::absolute(&self.output).unwrap_or(self.output);
        println!("Successfully parsed archive to {}", shown.display());
        println!("Total entries: {}", document.total_entries());
        Ok(())
    }
}

use std::path::{Path, PathBuf};

use archive_dna_archive::{DEFAULT_SOURCE_SUFFIXES, FingerprintOptions};
use archive_dna_compare::Strategy;
use archive_dna_fingerprint::ErrorKind;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file '{}' does not exist", path.display())]
    Missing { path: PathBuf },

    #[error("invalid configuration")]
    Invalid { source: Box<figment::Error> },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind { ErrorKind::InvalidInput }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Entry-name suffixes that are fingerprinted; empty admits every file.
    pub source_suffixes:     Vec<String>,
    /// Extensions expected on `parse` inputs; others only warn.
    pub archive_extensions:  Vec<String>,
    /// Extensions expected on `compare` inputs; others only warn.
    pub document_extensions: Vec<String>,
    pub mode:                Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_suffixes:     DEFAULT_SOURCE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            archive_extensions:  vec!["zip".to_string(), "jar".to_string()],
            document_extensions: vec!["json".to_string()],
            mode:                Strategy::default(),
        }
    }
}

impl Config {
    pub const DEFAULT_FILE: &'static str = "archive-dna.toml";
    pub const ENV_PREFIX: &'static str = "ARCHIVE_DNA_";

    /// Defaults, then the TOML file, then `ARCHIVE_DNA_*` variables.
    pub fn figment(file: Option<&Path>) -> Figment {
        let file = file.map_or_else(|| PathBuf::from(Self::DEFAULT_FILE), Path::to_path_buf);
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// An explicitly named file must exist; the default one is optional.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = file {
            if !path.is_file() {
                return Err(ConfigError::Missing {
                    path: path.to_path_buf(),
                });
            }
        }
        Self::figment(file)
            .extract()
            .map_err(|e| ConfigError::Invalid {
                source: Box::new(e),
            })
    }

    pub fn fingerprint_options(&self) -> FingerprintOptions {
        FingerprintOptions::new().suffixes(self.source_suffixes.iter().cloned())
    }
}

/// True when `path` carries one of `expected` (case-insensitive, leading dot
/// optional). An empty list accepts anything.
pub fn has_expected_extension(path: &Path, expected: &[String]) -> bool {
    if expected.is_empty() {
        return true;
    }
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    expected
        .iter()
        .any(|want| want.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = Config::load(None).expect("defaults load");
            assert_eq!(config, Config::default());
            assert_eq!(config.source_suffixes, vec![".java", ".kt"]);
            assert_eq!(config.mode, Strategy::Name);
            Ok(())
        });
    }

    #[test]
    fn default_file_in_working_dir_is_read() {
        Jail::expect_with(|jail| {
            jail.create_file(
                Config::DEFAULT_FILE,
                r#"
                source_suffixes = [".scala"]
                mode = "identity"
                "#,
            )?;
            let config = Config::load(None).expect("file loads");
            assert_eq!(config.source_suffixes, vec![".scala"]);
            assert_eq!(config.mode, Strategy::Identity);
            assert_eq!(config.document_extensions, vec!["json"]);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", r#"mode = "name""#)?;
            jail.set_env("ARCHIVE_DNA_MODE", "identity");
            let config = Config::load(Some(Path::new("custom.toml"))).expect("file loads");
            assert_eq!(config.mode, Strategy::Identity);
            Ok(())
        });
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let err = Config::load(Some(Path::new("absent.toml"))).unwrap_err();
            assert!(matches!(err, ConfigError::Missing { .. }));
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
            Ok(())
        });
    }

    #[test]
    fn unknown_mode_is_invalid() {
        Jail::expect_with(|jail| {
            jail.create_file(Config::DEFAULT_FILE, r#"mode = "fuzzy""#)?;
            assert!(matches!(Config::load(None), Err(ConfigError::Invalid { .. })));
            Ok(())
        });
    }

    #[test]
    fn fingerprint_options_follow_config() {
        let config = Config {
            source_suffixes: vec![".rs".to_string()],
            ..Config::default()
        };
        assert_eq!(config.fingerprint_options().get_suffixes(), &[".rs".to_string()]);
    }

    #[test]
    fn extension_check() {
        let zips = vec!["zip".to_string(), ".jar".to_string()];
        assert!(has_expected_extension(Path::new("plugin.zip"), &zips));
        assert!(has_expected_extension(Path::new("plugin.JAR"), &zips));
        assert!(!has_expected_extension(Path::new("plugin.tar"), &zips));
        assert!(!has_expected_extension(Path::new("plugin"), &zips));
        assert!(has_expected_extension(Path::new("plugin"), &[]));
    }
}

use crate::entry::RawEntry;

/// Suffixes of the source files fingerprinted when nothing else is configured.
pub const DEFAULT_SOURCE_SUFFIXES: &[&str] = &[".java", ".kt"];

/// Decides which container entries become fingerprint entries.
///
/// Directories never qualify. A file qualifies when its name ends with one of
/// the configured suffixes (case-sensitive); an empty allow-list admits every
/// file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FingerprintOptions {
    suffixes: Vec<String>,
}

impl Default for FingerprintOptions {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SOURCE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FingerprintOptions {
    pub fn new() -> Self { Self::default() }

    /// Admits every non-directory entry.
    pub fn all_files() -> Self { Self { suffixes: Vec::new() } }

    /// Replaces the allow-list.
    pub fn suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffixes.push(suffix.into());
        self
    }

    pub fn get_suffixes(&self) -> &[String] { &self.suffixes }

    pub fn qualifies(&self, entry: &RawEntry) -> bool {
        if entry.is_directory || entry.name.is_empty() {
            return false;
        }
        self.suffixes.is_empty() || self.suffixes.iter().any(|s| entry.name.ends_with(s.as_str()))
    }
}

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::{Error, Result};

/// The extracted state of one archive.
///
/// Built once from a container and immutable afterwards. `total_entries` is
/// always derived from `entries`; a decoded document whose declared total
/// disagrees is rejected by [`FingerprintDocument::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintDocument {
    archive_name: String,
    #[serde(rename = "archiveSize")]
    archive_size_bytes: u64,
    total_entries: usize,
    entries: Vec<Entry>,
}

impl FingerprintDocument {
    pub fn new(
        archive_name: impl Into<String>,
        archive_size_bytes: u64,
        entries: Vec<Entry>,
    ) -> Self {
        Self {
            archive_name: archive_name.into(),
            archive_size_bytes,
            total_entries: entries.len(),
            entries,
        }
    }

    pub fn archive_name(&self) -> &str { &self.archive_name }

    pub fn archive_size_bytes(&self) -> u64 { self.archive_size_bytes }

    pub fn total_entries(&self) -> usize { self.total_entries }

    /// Entries in container iteration order.
    pub fn entries(&self) -> &[Entry] { &self.entries }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Checks the invariants a decoded document cannot guarantee on its own.
    pub fn validate(&self) -> Result<()> {
        if self.total_entries != self.entries.len() {
            return Err(Error::TotalMismatch {
                declared: self.total_entries,
                actual:   self.entries.len(),
            });
        }
        if let Some(index) = self.entries.iter().position(|e| e.name.is_empty()) {
            return Err(Error::EmptyEntryName { index });
        }
        Ok(())
    }
}

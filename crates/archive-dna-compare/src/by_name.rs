use std::collections::HashMap;

use archive_dna_fingerprint::{Entry, FingerprintDocument};
use tracing::debug;

use crate::jaccard;

/// File-level statistics keyed by entry name.
///
/// `common_files` counts names present in both documents, modified or not;
/// `modified_files` is the subset of those whose checksum differs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NameComparison {
    pub jaccard_index:      f64,
    pub total_unique_files: usize,
    pub common_files:       usize,
    pub modified_files:     usize,
    pub unique_to_first:    usize,
    pub unique_to_second:   usize,
}

impl NameComparison {
    /// Common files whose checksum matches.
    pub fn identical_files(&self) -> usize { self.common_files - self.modified_files }
}

/// When a name repeats inside one document the last entry wins.
fn by_name(document: &FingerprintDocument) -> HashMap<&str, &Entry> {
    document
        .entries()
        .iter()
        .map(|entry| (entry.name.as_str(), entry))
        .collect()
}

/// Fine-grained comparison: Jaccard over file presence plus change detection
/// on the files both archives share.
pub fn compare_by_name(
    first: &FingerprintDocument,
    second: &FingerprintDocument,
) -> NameComparison {
    let first_files = by_name(first);
    let second_files = by_name(second);

    let mut common_files = 0;
    let mut modified_files = 0;
    for (name, entry) in &first_files {
        if let Some(other) = second_files.get(name) {
            common_files += 1;
            if entry.checksum != other.checksum {
                modified_files += 1;
            }
        }
    }
    let unique_to_first = first_files.len() - common_files;
    let unique_to_second = second_files.len() - common_files;
    let total_unique_files = common_files + unique_to_first + unique_to_second;

    debug!(
        first = first.archive_name(),
        second = second.archive_name(),
        total_unique_files,
        common_files,
        modified_files,
        "compared by name"
    );

    NameComparison {
        jaccard_index: jaccard(common_files, total_unique_files),
        total_unique_files,
        common_files,
        modified_files,
        unique_to_first,
        unique_to_second,
    }
}

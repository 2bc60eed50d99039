//! Similarity between two fingerprint documents.
//!
//! Two strategies are available and stay distinct:
//!
//! - [`Strategy::Identity`] treats each entry as an opaque identity token and
//!   computes the Jaccard index over the two token sets.
//! - [`Strategy::Name`] keys entries by name, computes the Jaccard index over
//!   file presence and separately counts common files whose checksum changed.
//!
//! Everything here is a pure function of its inputs. Rendering for people is in
//! [`format_report`].

pub use by_identity::{IdentityComparison, compare_by_identity};
pub use by_name::{NameComparison, compare_by_name};
pub use report::{format_report, INDEX_PRECISION, PERCENT_PRECISION};
pub use strategy::{Comparison, ParseStrategyError, Strategy, compare};

mod by_identity;
mod by_name;
mod report;
mod strategy;

/// `|intersection| / |union|`, defined as 0.0 when both sets are empty.
pub(crate) fn jaccard(intersection: usize, union: usize) -> f64 {
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use archive_dna_fingerprint::{Entry, FingerprintDocument};

    pub fn doc(name: &str, entries: &[(&str, u64, u32)]) -> FingerprintDocument {
        FingerprintDocument::new(
            name,
            0,
            entries
                .iter()
                .map(|&(n, size, crc)| Entry::new(n, size, crc))
                .collect(),
        )
    }

    pub fn empty(name: &str) -> FingerprintDocument { doc(name, &[]) }
}

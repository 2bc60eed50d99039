use std::collections::HashSet;

use archive_dna_fingerprint::{Entry, FingerprintDocument, IdentityToken};
use tracing::debug;

use crate::jaccard;

/// Set statistics over identity tokens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdentityComparison {
    pub jaccard_index:       f64,
    pub total_unique_hashes: usize,
    pub common_hashes:       usize,
    pub unique_in_first:     usize,
    pub unique_in_second:    usize,
}

fn token_set(document: &FingerprintDocument) -> HashSet<IdentityToken> {
    document.entries().iter().map(Entry::identity).collect()
}

/// Coarse comparison: two entries are the same only if name, size and crc all
/// match. Entries sharing a token collapse into one set member.
pub fn compare_by_identity(
    first: &FingerprintDocument,
    second: &FingerprintDocument,
) -> IdentityComparison {
    let first_tokens = token_set(first);
    let second_tokens = token_set(second);

    let total_unique_hashes = first_tokens.union(&second_tokens).count();
    let common_hashes = first_tokens.intersection(&second_tokens).count();
    let unique_in_first = first_tokens.difference(&second_tokens).count();
    let unique_in_second = second_tokens.difference(&first_tokens).count();

    debug!(
        first = first.archive_name(),
        second = second.archive_name(),
        total_unique_hashes,
        common_hashes,
        "compared by identity"
    );

    IdentityComparison {
        jaccard_index: jaccard(common_hashes, total_unique_hashes),
        total_unique_hashes,
        common_hashes,
        unique_in_first,
        unique_in_second,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::fixtures::{doc, empty};

    #[test]
    fn self_comparison_is_full_overlap() {
        let a = doc("a.zip", &[("a.kt", 10, 111), ("b.java", 20, 222), ("c.kt", 5, 333)]);
        let result = compare_by_identity(&a, &a);
        assert_eq!(result.jaccard_index, 1.0);
        assert_eq!(result.total_unique_hashes, 3);
        assert_eq!(result.common_hashes, 3);
        assert_eq!(result.unique_in_first, 0);
        assert_eq!(result.unique_in_second, 0);
    }

    #[test]
    fn empty_documents_are_zero_similar() {
        let result = compare_by_identity(&empty("x.zip"), &empty("y.zip"));
        assert_eq!(result.jaccard_index, 0.0);
        assert_eq!(result.total_unique_hashes, 0);
        assert_eq!(result.common_hashes, 0);
    }

    #[test]
    fn added_file() {
        let x = doc("x.zip", &[("a.kt", 10, 111)]);
        let y = doc("y.zip", &[("a.kt", 10, 111), ("b.java", 20, 222)]);
        let result = compare_by_identity(&x, &y);
        assert_eq!(result.jaccard_index, 0.5);
        assert_eq!(result.total_unique_hashes, 2);
        assert_eq!(result.common_hashes, 1);
        assert_eq!(result.unique_in_first, 0);
        assert_eq!(result.unique_in_second, 1);
    }

    #[test]
    fn changed_checksum_is_a_different_identity() {
        let x = doc("x.zip", &[("a.kt", 10, 111)]);
        let y = doc("y.zip", &[("a.kt", 10, 999), ("b.java", 20, 222)]);
        let result = compare_by_identity(&x, &y);
        assert_eq!(result.common_hashes, 0);
        assert_eq!(result.total_unique_hashes, 3);
        assert_eq!(result.unique_in_first, 1);
        assert_eq!(result.unique_in_second, 2);
        assert_eq!(result.jaccard_index, 0.0);
    }

    #[test]
    fn compressed_size_and_time_do_not_matter() {
        let x = doc("x.zip", &[("a.kt", 10, 111)]);
        let y = FingerprintDocument::new(
            "y.zip",
            0,
            vec![
                Entry::new("a.kt", 10, 111)
                    .with_compressed_size(3)
                    .with_modified_time(99),
            ],
        );
        assert_eq!(compare_by_identity(&x, &y).jaccard_index, 1.0);
    }

    #[test]
    fn repeated_identical_entries_collapse() {
        let x = doc("x.zip", &[("a.kt", 10, 111), ("a.kt", 10, 111)]);
        let y = doc("y.zip", &[("a.kt", 10, 111)]);
        let result = compare_by_identity(&x, &y);
        assert_eq!(result.total_unique_hashes, 1);
        assert_eq!(result.jaccard_index, 1.0);
    }

    proptest! {
        #[test]
        fn counts_partition_the_union(
            first in proptest::collection::vec(("[a-d]\\.kt", 0u64..3, 0u32..3), 0..12),
            second in proptest::collection::vec(("[a-d]\\.kt", 0u64..3, 0u32..3), 0..12),
        ) {
            let a = FingerprintDocument::new(
                "a.zip", 0, first.into_iter().map(|(n, s, c)| Entry::new(n, s, c)).collect());
            let b = FingerprintDocument::new(
                "b.zip", 0, second.into_iter().map(|(n, s, c)| Entry::new(n, s, c)).collect());
            let r = compare_by_identity(&a, &b);
            prop_assert_eq!(
                r.total_unique_hashes,
                r.common_hashes + r.unique_in_first + r.unique_in_second
            );
            prop_assert!((0.0..=1.0).contains(&r.jaccard_index));
            let swapped = compare_by_identity(&b, &a);
            prop_assert_eq!(swapped.jaccard_index, r.jaccard_index);
            prop_assert_eq!(swapped.unique_in_first, r.unique_in_second);
        }
    }
}

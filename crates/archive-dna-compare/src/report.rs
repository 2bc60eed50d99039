use std::fmt;

use crate::by_identity::IdentityComparison;
use crate::by_name::NameComparison;
use crate::strategy::Comparison;

/// Decimal places used for the Jaccard index.
pub const INDEX_PRECISION: usize = 4;
/// Decimal places used for percentages.
pub const PERCENT_PRECISION: usize = 2;

/// Renders a comparison for people. Every field of the result appears.
pub fn format_report(comparison: &Comparison, first_name: &str, second_name: &str) -> String {
    Report {
        comparison,
        first_name,
        second_name,
    }
    .to_string()
}

struct Report<'a> {
    comparison:  &'a Comparison,
    first_name:  &'a str,
    second_name: &'a str,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Archive Comparison ===")?;
        writeln!(f, "File 1: {}", self.first_name)?;
        writeln!(f, "File 2: {}", self.second_name)?;
        writeln!(f, "Mode: {}", self.comparison.strategy())?;
        writeln!(f)?;
        writeln!(
            f,
            "Jaccard Index: {:.prec$}",
            self.comparison.jaccard_index(),
            prec = INDEX_PRECISION
        )?;
        writeln!(f)?;

        match self.comparison {
            Comparison::Identity(r) => write_identity(f, r)?,
            Comparison::Name(r) => write_name(f, r)?,
        }

        writeln!(f)?;
        writeln!(
            f,
            "Compared archives have: {:.prec$}% overlap",
            self.comparison.overlap_percent(),
            prec = PERCENT_PRECISION
        )
    }
}

fn write_identity(f: &mut fmt::Formatter<'_>, r: &IdentityComparison) -> fmt::Result {
    writeln!(f, "  Total unique hashes: {}", r.total_unique_hashes)?;
    writeln!(f, "  Common hashes (identical entries): {}", r.common_hashes)?;
    writeln!(f, "  Hashes only in first: {}", r.unique_in_first)?;
    writeln!(f, "  Hashes only in second: {}", r.unique_in_second)
}

fn write_name(f: &mut fmt::Formatter<'_>, r: &NameComparison) -> fmt::Result {
    writeln!(f, "  Total unique files: {}", r.total_unique_files)?;
    writeln!(f, "  Common files: {}", r.common_files)?;
    writeln!(f, "    Identical files: {}", r.identical_files())?;
    writeln!(f, "    Modified files: {}", r.modified_files)?;
    writeln!(f, "  Files only in first: {}", r.unique_to_first)?;
    writeln!(f, "  Files only in second: {}", r.unique_to_second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_report_layout() {
        let comparison = Comparison::Name(NameComparison {
            jaccard_index:      0.5,
            total_unique_files: 2,
            common_files:       1,
            modified_files:     1,
            unique_to_first:    0,
            unique_to_second:   1,
        });
        let expected = "\
=== Archive Comparison ===
File 1: x.json
File 2: y.json
Mode: name

Jaccard Index: 0.5000

  Total unique files: 2
  Common files: 1
    Identical files: 0
    Modified files: 1
  Files only in first: 0
  Files only in second: 1

Compared archives have: 50.00% overlap
";
        assert_eq!(format_report(&comparison, "x.json", "y.json"), expected);
    }

    #[test]
    fn identity_report_lists_every_count() {
        let comparison = Comparison::Identity(IdentityComparison {
            jaccard_index:       1.0 / 3.0,
            total_unique_hashes: 3,
            common_hashes:       1,
            unique_in_first:     0,
            unique_in_second:    2,
        });
        let text = format_report(&comparison, "a", "b");
        assert!(text.contains("Mode: identity\n"));
        assert!(text.contains("Jaccard Index: 0.3333\n"));
        assert!(text.contains("  Total unique hashes: 3\n"));
        assert!(text.contains("  Common hashes (identical entries): 1\n"));
        assert!(text.contains("  Hashes only in first: 0\n"));
        assert!(text.contains("  Hashes only in second: 2\n"));
        assert!(text.ends_with("Compared archives have: 33.33% overlap\n"));
    }

    #[test]
    fn zero_similarity_prints_zero() {
        let comparison = Comparison::Identity(IdentityComparison {
            jaccard_index:       0.0,
            total_unique_hashes: 0,
            common_hashes:       0,
            unique_in_first:     0,
            unique_in_second:    0,
        });
        let text = format_report(&comparison, "a", "b");
        assert!(text.contains("Jaccard Index: 0.0000\n"));
        assert!(text.contains("0.00% overlap"));
    }
}

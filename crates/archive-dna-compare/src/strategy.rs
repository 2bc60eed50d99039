use std::fmt;
use std::str::FromStr;

use archive_dna_fingerprint::FingerprintDocument;
use serde::{Deserialize, Serialize};

use crate::by_identity::{IdentityComparison, compare_by_identity};
use crate::by_name::{NameComparison, compare_by_name};

/// How two documents are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Jaccard over `(name, size, crc)` identity tokens.
    Identity,
    /// Jaccard over file names, with checksum-based modification counts.
    #[default]
    Name,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Identity, Strategy::Name];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown comparison strategy '{0}' (expected 'identity' or 'name')")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

/// Result of either strategy, tagged by the strategy that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Comparison {
    Identity(IdentityComparison),
    Name(NameComparison),
}

impl Comparison {
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Identity(_) => Strategy::Identity,
            Self::Name(_) => Strategy::Name,
        }
    }

    pub fn jaccard_index(&self) -> f64 {
        match self {
            Self::Identity(r) => r.jaccard_index,
            Self::Name(r) => r.jaccard_index,
        }
    }

    /// The Jaccard index as a percentage.
    pub fn overlap_percent(&self) -> f64 { self.jaccard_index() * 100.0 }
}

pub fn compare(
    first: &FingerprintDocument,
    second: &FingerprintDocument,
    strategy: Strategy,
) -> Comparison {
    match strategy {
        Strategy::Identity => Comparison::Identity(compare_by_identity(first, second)),
        Strategy::Name => Comparison::Name(compare_by_name(first, second)),
    }
}

//! Fingerprint extraction from ZIP containers.
//!
//! # Architecture
//!
//! - `detect.rs` - Container signature sniffing
//! - `entry.rs` - Raw container entries
//! - `options.rs` - Source-suffix allow-list
//! - `source.rs` - Entry iteration over a ZIP container
//! - `extract.rs` - Raw entries to [`FingerprintDocument`]
//!
//! [`FingerprintDocument`]: archive_dna_fingerprint::FingerprintDocument

pub use detect::{is_zip_magic, sniff_zip};
pub use entry::RawEntry;
pub use error::{Error, Result};
pub use extract::{extract, fingerprint_file, fingerprint_reader};
pub use options::{DEFAULT_SOURCE_SUFFIXES, FingerprintOptions};
pub use source::{EntrySource, ZipSource, read_entries};

mod detect;
mod entry;
mod error;
mod extract;
mod options;
mod source;

//! Fingerprint documents for compressed archives.
//!
//! A fingerprint is the portable summary of one archive: its name, its size and
//! one [`Entry`] per qualifying source file. Documents are produced once by the
//! extractor in `archive-dna-archive`, persisted through a [`DocumentCodec`] and
//! later compared by `archive-dna-compare` without the original archives.
//!
//! # Architecture
//!
//! - `entry.rs` - Per-file record
//! - `document.rs` - Whole-archive document
//! - `identity.rs` - Stable identity token over `(name, size, crc)`
//! - `codec.rs` - Persisted JSON form
//! - `error.rs` - Error taxonomy shared by the workspace

pub use codec::{DocumentCodec, JsonCodec};
pub use document::FingerprintDocument;
pub use entry::Entry;
pub use error::{Error, ErrorKind, Result};
pub use identity::{IdentityToken, fnv1a64, identity};

mod codec;
mod document;
mod entry;
mod error;
mod identity;

//! Entry identity tokens.
//!
//! The token is 64-bit FNV-1a over the UTF-8 bytes of `"{name}|{size}|{crc}"`,
//! printed as 16 lowercase hex digits. Size and crc are decimal, so the key
//! splits unambiguously from the right even when the name contains `|`.
//! Compressed size and timestamp are not part of the key.

use std::fmt;

use crate::entry::Entry;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic 64-bit FNV-1a.
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(FNV_OFFSET_BASIS, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME))
}

/// Short, portable content identity of one entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityToken(String);

impl IdentityToken {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

pub fn identity(entry: &Entry) -> IdentityToken {
    let key = format!("{}|{}|{}", entry.name, entry.uncompressed_size, entry.checksum);
    IdentityToken(format!("{:016x}", fnv1a64(key.as_bytes())))
}

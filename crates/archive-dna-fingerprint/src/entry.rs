use serde::{Deserialize, Serialize};

use crate::identity::{IdentityToken, identity};

/// One qualifying file inside an archive.
///
/// Every field is copied verbatim from the container; nothing is recomputed.
/// The serialized keys follow the persisted document format
/// (`name`, `size`, `compressedSize`, `crc`, `time`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Archive-relative path.
    pub name: String,
    #[serde(rename = "size")]
    pub uncompressed_size: u64,
    pub compressed_size: u64,
    /// CRC-32 supplied by the container.
    #[serde(rename = "crc")]
    pub checksum: u32,
    /// Container-native timestamp, opaque.
    #[serde(rename = "time")]
    pub modified_time: i64,
}

impl Entry {
    pub fn new(name: impl Into<String>, uncompressed_size: u64, checksum: u32) -> Self {
        Self {
            name: name.into(),
            uncompressed_size,
            compressed_size: uncompressed_size,
            checksum,
            modified_time: 0,
        }
    }

    pub fn with_compressed_size(mut self, compressed_size: u64) -> Self {
        self.compressed_size = compressed_size;
        self
    }

    pub fn with_modified_time(mut self, modified_time: i64) -> Self {
        self.modified_time = modified_time;
        self
    }

    pub fn identity(&self) -> IdentityToken { identity(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_fields() {
        let entry = Entry::new("src/Main.kt", 1024, 0xdead_beef)
            .with_compressed_size(512)
            .with_modified_time(42);
        assert_eq!(entry.name, "src/Main.kt");
        assert_eq!(entry.uncompressed_size, 1024);
        assert_eq!(entry.compressed_size, 512);
        assert_eq!(entry.checksum, 0xdead_beef);
        assert_eq!(entry.modified_time, 42);
    }

    #[test]
    fn entry_serializes_with_document_keys() {
        let entry = Entry::new("a.kt", 10, 111)
            .with_compressed_size(8)
            .with_modified_time(7);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "a.kt",
                "size": 10,
                "compressedSize": 8,
                "crc": 111,
                "time": 7,
            })
        );
    }

    #[test]
    fn entry_ignores_unknown_keys() {
        let entry: Entry = serde_json::from_str(
            r#"{"name":"a.kt","size":10,"compressedSize":8,"crc":111,"time":7,"extra":true}"#,
        )
        .unwrap();
        let expected = Entry::new("a.kt", 10, 111)
            .with_compressed_size(8)
            .with_modified_time(7);
        assert_eq!(entry, expected);
    }

    #[test]
    fn entry_rejects_missing_crc() {
        let result = serde_json::from_str::<Entry>(
            r#"{"name":"a.kt","size":10,"compressedSize":8,"time":7}"#,
        );
        assert!(result.is_err());
    }
}

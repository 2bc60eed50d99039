use archive_dna_fingerprint::Entry;

/// One entry as the container reports it, before filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub is_directory: bool,
    pub uncompressed_size: u64,
    pub compressed_size: u64,
    pub crc32: u32,
    /// MS-DOS date and time packed as `(date << 16) | time`, 0 when absent.
    pub modified_time: i64,
}

impl RawEntry {
    pub fn file(name: impl Into<String>, uncompressed_size: u64, crc32: u32) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
            uncompressed_size,
            compressed_size: uncompressed_size,
            crc32,
            modified_time: 0,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
            uncompressed_size: 0,
            compressed_size: 0,
            crc32: 0,
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

    /// Projects the entry into its fingerprint record, field for field.
    pub fn into_entry(self) -> Entry {
        Entry {
            name: self.name,
            uncompressed_size: self.uncompressed_size,
            compressed_size: self.compressed_size,
            checksum: self.crc32,
            modified_time: self.modified_time,
        }
    }
}

use std::io::{Read, Seek};

use crate::entry::RawEntry;
use crate::error::Result;

/// Sequential access to the entries of an open container.
pub trait EntrySource {
    fn next_entry(&mut self) -> Option<Result<RawEntry>>;

    /// Number of entries the container declares, when known up front.
    fn len_hint(&self) -> Option<usize> { None }
}

pub struct ZipSource<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
    index:   usize,
}

impl<R: Read + Seek> ZipSource<R> {
    pub fn new(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader)?;
        Ok(Self { archive, index: 0 })
    }
}

impl<R: Read + Seek> EntrySource for ZipSource<R> {
    fn next_entry(&mut self) -> Option<Result<RawEntry>> {
        if self.index >= self.archive.len() {
            return None;
        }

        // Raw access reads the central directory record without decrypting or
        // decompressing, so protected entries still report their metadata.
        let file = match self.archive.by_index_raw(self.index) {
            Ok(f) => f,
            Err(e) => return Some(Err(e.into())),
        };
        self.index += 1;

        let modified_time = file.last_modified().map_or(0, |dt| {
            (i64::from(dt.datepart()) << 16) | i64::from(dt.timepart())
        });

        Some(Ok(RawEntry {
            name: file.name().to_string(),
            is_directory: file.is_dir(),
            uncompressed_size: file.size(),
            compressed_size: file.compressed_size(),
            crc32: file.crc32(),
            modified_time,
        }))
    }

    fn len_hint(&self) -> Option<usize> { Some(self.archive.len()) }
}

/// Drains a source, stopping at the first unreadable entry.
pub fn read_entries<S: EntrySource>(mut source: S) -> Result<Vec<RawEntry>> {
    let mut entries = Vec::with_capacity(source.len_hint().unwrap_or(0));
    while let Some(entry) = source.next_entry() {
        entries.push(entry?);
    }
    Ok(entries)
}

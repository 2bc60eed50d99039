use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;

use archive_dna_fingerprint::FingerprintDocument;
use tracing::{debug, info, trace};

use crate::detect::sniff_zip;
use crate::entry::RawEntry;
use crate::error::{Error, Result};
use crate::options::FingerprintOptions;
use crate::source::{ZipSource, read_entries};

/// Reduces raw container entries to a fingerprint document.
///
/// Pure transform: filters through `options`, keeps container order and copies
/// every surviving field verbatim. `totalEntries` is the number kept.
pub fn extract<I>(
    raw_entries: I,
    archive_name: impl Into<String>,
    archive_size_bytes: u64,
    options: &FingerprintOptions,
) -> FingerprintDocument
where
    I: IntoIterator<Item = RawEntry>,
{
    let archive_name = archive_name.into();
    let mut skipped = 0usize;
    let entries: Vec<_> = raw_entries
        .into_iter()
        .filter(|raw| {
            let keep = options.qualifies(raw);
            if !keep {
                trace!(entry = %raw.name, "skipping entry");
                skipped += 1;
            }
            keep
        })
        .map(RawEntry::into_entry)
        .collect();

    debug!(archive = %archive_name, kept = entries.len(), skipped, "filtered entries");
    FingerprintDocument::new(archive_name, archive_size_bytes, entries)
}

/// Fingerprints an already-open ZIP stream.
///
/// The central directory is located from the end of the stream, so archives
/// with a leading stub (launcher scripts, self-extractors) are accepted. When
/// the stream cannot be opened, a missing `PK` signature reports
/// [`Error::NotAnArchive`] and anything else [`Error::Corrupted`].
pub fn fingerprint_reader<R: Read + Seek>(
    mut reader: R,
    archive_name: impl Into<String>,
    archive_size_bytes: u64,
    options: &FingerprintOptions,
) -> Result<FingerprintDocument> {
    let archive_name = archive_name.into();
    let starts_with_signature = sniff_zip(&mut reader)?;
    let source = match ZipSource::new(reader) {
        Ok(source) => source,
        Err(Error::Corrupted { .. }) if !starts_with_signature => {
            return Err(Error::NotAnArchive {
                path: archive_name.into(),
            });
        }
        Err(e) => return Err(e),
    };
    if !starts_with_signature {
        debug!(archive = %archive_name, "archive has a leading stub");
    }
    let raw_entries = read_entries(source)?;
    Ok(extract(raw_entries, archive_name, archive_size_bytes, options))
}

/// Opens `path`, fingerprints it and closes the handle before returning,
/// on success and on error alike.
pub fn fingerprint_file(
    path: impl AsRef<Path>,
    options: &FingerprintOptions,
) -> Result<FingerprintDocument> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => Error::Unreadable {
            path:   path.to_path_buf(),
            source: e,
        },
        _ => Error::Io(e),
    })?;
    let metadata = file.metadata()?;
    if metadata.is_dir() {
        return Err(Error::NotAnArchive {
            path: path.to_path_buf(),
        });
    }
    let archive_size_bytes = metadata.len();
    let archive_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let reader = BufReader::new(file);
    let document = fingerprint_reader(reader, archive_name, archive_size_bytes, options)
        .map_err(|e| match e {
            Error::NotAnArchive { .. } => Error::NotAnArchive {
                path: path.to_path_buf(),
            },
            other => other,
        })?;

    info!(
        archive = %path.display(),
        size = archive_size_bytes,
        entries = document.total_entries(),
        "fingerprinted archive"
    );
    Ok(document)
}

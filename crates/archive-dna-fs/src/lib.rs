//! Atomic file primitives.
//!
//! Documents are written to a sibling temporary file and renamed into place,
//! so a reader never observes a truncated document and a failed write leaves
//! any previous file untouched.

mod error;

pub use error::{Error, Result};

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

#[derive(Clone, Copy, Debug)]
pub struct AtomicWriteOptions {
    prefix: &'static str,
    suffix: &'static str,
    sync:   bool,
}

impl Default for AtomicWriteOptions {
    fn default() -> Self { Self::new() }
}

impl AtomicWriteOptions {
    pub fn new() -> Self {
        Self {
            prefix: ".",
            suffix: ".tmp",
            sync:   true,
        }
    }

    pub fn prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    /// Flush file contents to disk before the rename.
    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    fn temp_path_for(&self, path: &Path) -> PathBuf {
        let parent = path.parent().unwrap_or(Path::new(""));
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();
        parent.join(format!("{}{}{}", self.prefix, file_name, self.suffix))
    }
}

pub fn atomic_write(
    path: impl AsRef<Path>,
    content: &[u8],
    options: AtomicWriteOptions,
) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = options.temp_path_for(path);

    let staged = write_staged(&tmp_path, content, options.sync);
    if let Err(e) = staged {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        Error::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(path = %path.display(), bytes = content.len(), "atomic write complete");
    Ok(())
}

fn write_staged(tmp_path: &Path, content: &[u8], sync: bool) -> Result<()> {
    let to_err = |source| Error::Write {
        path: tmp_path.to_path_buf(),
        source,
    };
    let mut file = File::create(tmp_path).map_err(to_err)?;
    file.write_all(content).map_err(to_err)?;
    if sync {
        file.sync_all().map_err(to_err)?;
    }
    Ok(())
}

pub fn atomic_read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

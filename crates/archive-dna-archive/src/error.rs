use std::io;
use std::path::PathBuf;

use archive_dna_fingerprint::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("'{}' is not a ZIP archive", path.display())]
    NotAnArchive { path: PathBuf },

    #[error("cannot read '{}'", path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("archive is corrupted")]
    Corrupted { source: zip::result::ZipError },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. }
            | Self::NotAnArchive { .. }
            | Self::Unreadable { .. }
            | Self::Corrupted { .. } => ErrorKind::InvalidInput,
            Self::Io(_) => ErrorKind::Internal,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        use zip::result::ZipError;

        match e {
            // Truncated or garbled bytes surface as I/O errors from the reader.
            ZipError::Io(source)
                if matches!(
                    source.kind(),
                    io::ErrorKind::UnexpectedEof | io::ErrorKind::InvalidData
                ) =>
            {
                Self::Corrupted {
                    source: ZipError::Io(source),
                }
            }
            ZipError::Io(source) => Self::Io(source),
            other => Self::Corrupted { source: other },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

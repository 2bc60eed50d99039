use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{}'", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}'", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }

    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source.kind(),
        }
    }

    /// The caller pointed at something that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { .. }) && self.io_kind() == io::ErrorKind::NotFound
    }

    /// A read failed because of the path the caller chose: missing, a
    /// directory, or not readable by this user.
    pub fn is_bad_input(&self) -> bool {
        matches!(self, Self::Read { .. })
            && matches!(
                self.io_kind(),
                io::ErrorKind::NotFound
                    | io::ErrorKind::IsADirectory
                    | io::ErrorKind::NotADirectory
                    | io::ErrorKind::PermissionDenied
            )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

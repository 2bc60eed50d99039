/// Coarse classification of a failure, shared by every crate in the workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing file, wrong format, malformed document or unreadable archive.
    InvalidInput,
    /// Unexpected failure while reading or writing.
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed fingerprint document")]
    Decode { source: serde_json::Error },

    #[error("failed to encode fingerprint document")]
    Encode { source: serde_json::Error },

    #[error("document declares {declared} entries but contains {actual}")]
    TotalMismatch { declared: usize, actual: usize },

    #[error("entry #{index} has an empty name")]
    EmptyEntryName { index: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Encode { .. } => ErrorKind::Internal,
            Self::Decode { .. } | Self::TotalMismatch { .. } | Self::EmptyEntryName { .. } => {
                ErrorKind::InvalidInput
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use tracing::debug;

use crate::document::FingerprintDocument;
use crate::error::{Error, Result};

/// Persisted form of a [`FingerprintDocument`].
pub trait DocumentCodec {
    fn encode(&self, document: &FingerprintDocument) -> Result<Vec<u8>>;

    /// Decodes and validates; unknown keys are ignored, missing keys fail.
    fn decode(&self, bytes: &[u8]) -> Result<FingerprintDocument>;
}

/// JSON with the `archiveName`/`archiveSize`/`totalEntries`/`entries` layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new() -> Self { Self::default() }

    /// Indented output, meant for documents people read.
    pub fn pretty() -> Self { Self { pretty: true } }
}

impl DocumentCodec for JsonCodec {
    fn encode(&self, document: &FingerprintDocument) -> Result<Vec<u8>> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(document)
        } else {
            serde_json::to_vec(document)
        };
        encoded.map_err(|source| Error::Encode { source })
    }

    fn decode(&self, bytes: &[u8]) -> Result<FingerprintDocument> {
        let document: FingerprintDocument =
            serde_json::from_slice(bytes).map_err(|source| Error::Decode { source })?;
        document.validate()?;
        debug!(
            archive = document.archive_name(),
            entries = document.total_entries(),
            "decoded fingerprint document"
        );
        Ok(document)
    }
}

use std::process::ExitCode;

use archive_dna_fingerprint::ErrorKind;

/// Classifies an error by the first typed cause in its chain.
/// Unclassified failures come from argument validation and count as input errors.
pub fn error_kind(err: &anyhow::Error) -> ErrorKind {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<archive_dna_archive::Error>() {
            return e.kind();
        }
        if let Some(e) = cause.downcast_ref::<archive_dna_fingerprint::Error>() {
            return e.kind();
        }
        if let Some(e) = cause.downcast_ref::<archive_dna_fs::Error>() {
            return if e.is_bad_input() {
                ErrorKind::InvalidInput
            } else {
                ErrorKind::Internal
            };
        }
        if let Some(e) = cause.downcast_ref::<crate::config::ConfigError>() {
            return e.kind();
        }
    }
    ErrorKind::InvalidInput
}

pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    match error_kind(err) {
        ErrorKind::InvalidInput => ExitCode::from(1),
        ErrorKind::Internal => ExitCode::from(3),
    }
}

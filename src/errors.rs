use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::export::ExportFailure;

/// Error type for index construction, cache persistence, export, and fetch failures.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset root '{path}' is not accessible: {source}")]
    RootNotAccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cache file '{path}' could not be written: {source}")]
    CacheWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Export(#[from] ExportFailure),
    #[error("failed to fetch archive '{url}': {reason}")]
    FetchFailed { url: String, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

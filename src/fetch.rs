//! Interface boundary for dataset archive retrieval.
//!
//! Downloading and extracting the collection archive is not part of the
//! indexing core; the trait below is the consumed interface only.

use std::path::Path;

use crate::errors::DatasetError;

/// Makes a dataset archive's contents available on local disk.
///
/// Implementations wrap whatever HTTP and archive tooling the embedding
/// application already uses. `ensure_available` must be a no-op when the
/// contents are already present under `dest_dir`; failures surface as
/// [`DatasetError::FetchFailed`] naming the URL, and are fatal with no
/// retry by default.
pub trait ArchiveFetcher {
    /// Download and extract the archive at `url` into `dest_dir` if absent.
    fn ensure_available(&self, url: &str, dest_dir: &Path) -> Result<(), DatasetError>;
}

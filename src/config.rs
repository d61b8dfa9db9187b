use std::path::{Path, PathBuf};

use crate::constants::cache::DEFAULT_CACHE_FILENAME;
use crate::constants::export::{TEST_EXPORT_SUBDIR, TRAIN_EXPORT_SUBDIR};
use crate::constants::scan::DEFAULT_EXTENSION;

/// Filesystem layout for one image collection.
///
/// Every path the indexer, cache, and exporter touch derives from this
/// value; there is no process-wide default location. The cache file and
/// the export destinations live inside the data directory, next to the
/// class directories they describe.
#[derive(Clone, Debug)]
pub struct DatasetLayout {
    data_dir: PathBuf,
    cache_filename: String,
    extensions: Vec<String>,
    archive_url: Option<String>,
}

impl DatasetLayout {
    /// Create a layout rooted at `data_dir`, accepting `.jpg` files and
    /// caching the index under the default filename.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache_filename: DEFAULT_CACHE_FILENAME.to_string(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            archive_url: None,
        }
    }

    /// Replace the accepted filename extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Use a different filename for the persisted index.
    pub fn with_cache_filename(mut self, filename: impl Into<String>) -> Self {
        self.cache_filename = filename.into();
        self
    }

    /// Record the archive URL the collection can be fetched from.
    pub fn with_archive_url(mut self, url: impl Into<String>) -> Self {
        self.archive_url = Some(url.into());
        self
    }

    /// Root directory holding one subdirectory per class.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the persisted index file.
    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join(&self.cache_filename)
    }

    /// Destination directory for the exported training split.
    pub fn train_dir(&self) -> PathBuf {
        self.data_dir.join(TRAIN_EXPORT_SUBDIR)
    }

    /// Destination directory for the exported test split.
    pub fn test_dir(&self) -> PathBuf {
        self.data_dir.join(TEST_EXPORT_SUBDIR)
    }

    /// Accepted filename extensions.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Archive URL, when the collection is fetchable.
    pub fn archive_url(&self) -> Option<&str> {
        self.archive_url.as_deref()
    }
}

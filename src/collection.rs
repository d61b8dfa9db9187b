//! High-level workflows that tie fetch, index, cache, and export together.

use tracing::info;

use crate::cache;
use crate::config::DatasetLayout;
use crate::errors::DatasetError;
use crate::export;
use crate::fetch::ArchiveFetcher;
use crate::index::DatasetIndex;

/// Build or reload the cached index for `layout`.
///
/// The first call scans the data directory and persists the result at the
/// layout's cache path; later calls deserialize that file without
/// touching the class directories, so file ordering and class numbering
/// stay pinned even when the OS would enumerate entries differently.
pub fn load_cached(layout: &DatasetLayout) -> Result<DatasetIndex, DatasetError> {
    info!(data_dir = %layout.data_dir().display(), "loading dataset index");
    cache::load_or_compute(&layout.cache_path(), || {
        DatasetIndex::build(layout.data_dir(), layout.extensions())
    })
}

/// Fetch the collection archive when the layout names one.
///
/// A layout without an archive URL is assumed to be locally provisioned
/// and this is a no-op.
pub fn ensure_fetched(
    layout: &DatasetLayout,
    fetcher: &dyn ArchiveFetcher,
) -> Result<(), DatasetError> {
    match layout.archive_url() {
        Some(url) => fetcher.ensure_available(url, layout.data_dir()),
        None => Ok(()),
    }
}

/// Export the collection into the layout's split-first directories.
///
/// Loads the index through the cache (building it on first use), then
/// copies every file into `train/<class>/` and `test/<class>/` under the
/// data directory. Returns the index so callers can keep using it.
pub fn export_split_layout(layout: &DatasetLayout) -> Result<DatasetIndex, DatasetError> {
    let index = load_cached(layout)?;
    export::copy_files(&index, &layout.train_dir(), &layout.test_dir())?;
    Ok(index)
}

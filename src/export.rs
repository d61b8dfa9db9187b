//! Copies indexed files into a split-first directory layout.
//!
//! The indexed tree nests the test split inside each class directory
//! (`root/<class>/test/`); some training APIs expect the transpose, a
//! top-level split directory with one subdirectory per class
//! (`train/<class>/`, `test/<class>/`). The exporter flattens one layout
//! into the other without moving or renaming the originals.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::errors::DatasetError;
use crate::index::{DatasetIndex, Split};

/// A single file copy that failed during an export pass.
#[derive(Debug)]
pub struct CopyFailure {
    /// Resolved source path inside the indexed tree.
    pub source: PathBuf,
    /// Destination path the copy was attempted to.
    pub dest: PathBuf,
    /// The underlying I/O error.
    pub error: io::Error,
}

/// Aggregate failure for an export pass.
///
/// Raised once after every copy has been attempted; individual failures
/// never abort the pass.
#[derive(Debug, Error)]
#[error("{} of {attempted} file copies failed during export", .failures.len())]
pub struct ExportFailure {
    /// Total number of copies attempted.
    pub attempted: usize,
    /// Every failed source/destination pair, in attempt order.
    pub failures: Vec<CopyFailure>,
}

/// Copy every indexed file into `train_dest/<class>/` and `test_dest/<class>/`.
///
/// Class subdirectories are created (with intermediates) in both
/// destinations, including for classes with zero files. Existing
/// destination files are overwritten, so re-running an export is
/// idempotent. Per-file copy failures are collected while the remaining
/// copies proceed; if any occurred, a single [`ExportFailure`] listing
/// all of them is returned after the pass. Copy order carries no
/// invariant.
pub fn copy_files(
    index: &DatasetIndex,
    train_dest: &Path,
    test_dest: &Path,
) -> Result<(), DatasetError> {
    let mut attempted = 0usize;
    let mut failures = Vec::new();
    for (split, dest) in [(Split::Train, train_dest), (Split::Test, test_dest)] {
        for class_name in index.class_names() {
            fs::create_dir_all(dest.join(class_name))?;
        }
        for record in index.records(split) {
            attempted += 1;
            let source = index.path_for(record);
            let dest = dest
                .join(&index.class_names()[record.class_number])
                .join(&record.filename);
            if let Err(error) = fs::copy(&source, &dest) {
                warn!(
                    source = %source.display(),
                    dest = %dest.display(),
                    error = %error,
                    "file copy failed; continuing export"
                );
                failures.push(CopyFailure {
                    source,
                    dest,
                    error,
                });
            }
        }
    }
    if failures.is_empty() {
        info!(
            attempted,
            train_dest = %train_dest.display(),
            test_dest = %test_dest.display(),
            "export complete"
        );
        Ok(())
    } else {
        Err(ExportFailure {
            attempted,
            failures,
        }
        .into())
    }
}

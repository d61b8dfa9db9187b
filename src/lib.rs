#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Cache-or-compute persistence for built indexes.
pub mod cache;
/// High-level collection workflows: fetch, load, export.
pub mod collection;
/// Explicit layout configuration for an image collection.
pub mod config;
/// Centralized constants used across scanning, caching, and export.
pub mod constants;
/// Split-first export of indexed files.
pub mod export;
/// Interface boundary for archive retrieval.
pub mod fetch;
/// Dataset index construction and label accessors.
pub mod index;
/// Directory scanning and class discovery.
pub mod scan;
/// Shared type aliases.
pub mod types;

mod errors;

pub use collection::{ensure_fetched, export_split_layout, load_cached};
pub use config::DatasetLayout;
pub use errors::DatasetError;
pub use export::{CopyFailure, ExportFailure};
pub use fetch::ArchiveFetcher;
pub use index::{one_hot_encoded, DatasetIndex, FileRecord, LabeledSplit, Split};
pub use types::{ClassName, ClassNumber, OneHotRow};

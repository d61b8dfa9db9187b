/// Constants used by directory scanning and class discovery.
pub mod scan {
    /// Subdirectory inside each class directory holding held-out samples.
    pub const TEST_SUBDIR: &str = "test";
    /// Filename extension accepted when a layout configures none.
    pub const DEFAULT_EXTENSION: &str = "jpg";
}

/// Constants used by cache payload framing and versioning.
pub mod cache {
    /// Prefix marker for bitcode-encoded cache payloads.
    pub const PAYLOAD_PREFIX: u8 = b'B';
    /// Version tag for cache payload compatibility checks.
    ///
    /// Bumped whenever the persisted schema changes so stale payloads
    /// trigger a rebuild instead of a misread.
    pub const PAYLOAD_VERSION: u8 = 1;
    /// Default filename for a persisted dataset index.
    pub const DEFAULT_CACHE_FILENAME: &str = "dataset-index.bin";
}

/// Constants used by the split-first export layout.
pub mod export {
    /// Destination subdirectory for exported training files.
    pub const TRAIN_EXPORT_SUBDIR: &str = "train";
    /// Destination subdirectory for exported test files.
    pub const TEST_EXPORT_SUBDIR: &str = "test";
}

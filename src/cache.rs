//! Cache-or-compute persistence for expensive-to-build values.
//!
//! The cache exists for reproducibility, not speed: a fresh filesystem
//! scan is not guaranteed to enumerate entries in the same order twice,
//! so the first built value is persisted and later runs deserialize it
//! instead of re-scanning. Payloads are framed with a prefix marker and a
//! version byte; anything that fails the framing or decode checks is
//! treated as a cache miss and overwritten.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bitcode::{Decode, Encode};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::constants::cache::{PAYLOAD_PREFIX, PAYLOAD_VERSION};
use crate::errors::DatasetError;

/// Return the value persisted at `cache_path`, or build, persist, and
/// return a fresh one.
///
/// On a hit the build closure is never invoked; this is what pins
/// class-numbering and file ordering across process runs. An unreadable
/// or stale payload is logged and rebuilt. A failed write is logged and
/// swallowed: the freshly built value is still returned and stays valid
/// for the current run.
pub fn load_or_compute<T, F>(cache_path: &Path, build: F) -> Result<T, DatasetError>
where
    T: Encode + for<'de> Decode<'de>,
    F: FnOnce() -> Result<T, DatasetError>,
{
    if let Some(value) = read_cached(cache_path) {
        debug!(path = %cache_path.display(), "reusing cached value");
        return Ok(value);
    }
    let value = build()?;
    if let Err(err) = store(cache_path, &value) {
        warn!(
            path = %cache_path.display(),
            error = %err,
            "cache write failed; continuing with in-memory value"
        );
    }
    Ok(value)
}

/// Persist `value` at `path` with an atomic replace.
///
/// The payload is written to a temporary file in the target directory and
/// renamed over `path`, so a concurrent reader never observes a
/// half-written cache file.
pub fn store<T: Encode>(path: &Path, value: &T) -> Result<(), DatasetError> {
    let parent = parent_dir(path);
    let map_err = |source: io::Error| DatasetError::CacheWriteFailed {
        path: path.to_path_buf(),
        source,
    };
    fs::create_dir_all(parent).map_err(map_err)?;
    let mut tmp = NamedTempFile::new_in(parent).map_err(map_err)?;
    tmp.write_all(&encode_payload(value)).map_err(map_err)?;
    tmp.persist(path).map_err(|err| map_err(err.error))?;
    Ok(())
}

/// Read and decode a persisted value, treating every failure as a miss.
fn read_cached<T: for<'de> Decode<'de>>(path: &Path) -> Option<T> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cache read failed; rebuilding");
            return None;
        }
    };
    match decode_payload(&bytes) {
        Ok(value) => Some(value),
        Err(reason) => {
            warn!(path = %path.display(), reason, "discarding unreadable cache payload");
            None
        }
    }
}

fn encode_payload<T: Encode>(value: &T) -> Vec<u8> {
    let body = bitcode::encode(value);
    let mut payload = Vec::with_capacity(body.len() + 2);
    payload.push(PAYLOAD_PREFIX);
    payload.push(PAYLOAD_VERSION);
    payload.extend_from_slice(&body);
    payload
}

fn decode_payload<T: for<'de> Decode<'de>>(bytes: &[u8]) -> Result<T, String> {
    let [prefix, version, body @ ..] = bytes else {
        return Err("payload shorter than framing header".to_string());
    };
    if *prefix != PAYLOAD_PREFIX {
        return Err(format!("unknown payload prefix {prefix:#04x}"));
    }
    if *version != PAYLOAD_VERSION {
        return Err(format!(
            "payload version mismatch (expected {PAYLOAD_VERSION}, found {version})"
        ));
    }
    bitcode::decode(body).map_err(|err| format!("payload decode failed: {err}"))
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

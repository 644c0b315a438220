//! Integration tests for path-level classification.
//!
//! These exercise `classify_path_with` against in-memory attribute
//! sources, so they run anywhere, not only on a GPFS-mounted host.

use hsmstate::{AttrSource, HsmError, HsmResult, MigrationState, classify_path_with};
use std::io::Write;
use std::os::unix::io::RawFd;
use std::path::Path;
use tempfile::NamedTempFile;

// Shaped like real DMAPI blobs: binary junk, 0x01-separated records,
// marker strings in the printable portion.
const RESIDENT_BLOB: &[u8] = b"\x00\x04IBMObj\x01gpfs\x012 493766\x00\x00";
const MIGRATED_BLOB: &[u8] = b"\x00\x04IBMObj\x01IBMTPS\x012 493766\x00\x00";
const PREMIGRATED_BLOB: &[u8] = b"\x00\x04IBMObj\x01IBMPMig\x01IBMTPS\x012 493766\x00";

/// Attribute source returning a canned blob for any descriptor.
struct StaticAttrs(&'static [u8]);

impl AttrSource for StaticAttrs {
    fn fetch_attrs(&self, _fd: RawFd, buf: &mut [u8]) -> HsmResult<usize> {
        let n = self.0.len().min(buf.len());
        buf[..n].copy_from_slice(&self.0[..n]);
        Ok(n)
    }
}

/// Attribute source that always fails, for error-path tests.
struct FailingAttrs;

impl AttrSource for FailingAttrs {
    fn fetch_attrs(&self, _fd: RawFd, _buf: &mut [u8]) -> HsmResult<usize> {
        Err(HsmError::AttributeFetch(
            "synthetic vendor failure".to_string(),
        ))
    }
}

fn temp_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"payload").unwrap();
    file
}

#[test]
fn test_resident_blob_classifies_resident() {
    let file = temp_file();
    let state = classify_path_with(file.path(), &StaticAttrs(RESIDENT_BLOB)).unwrap();
    assert_eq!(state, MigrationState::Resident);
}

#[test]
fn test_migrated_blob_classifies_migrated() {
    let file = temp_file();
    let state = classify_path_with(file.path(), &StaticAttrs(MIGRATED_BLOB)).unwrap();
    assert_eq!(state, MigrationState::Migrated);
}

#[test]
fn test_premigrated_blob_classifies_premigrated() {
    let file = temp_file();
    let state = classify_path_with(file.path(), &StaticAttrs(PREMIGRATED_BLOB)).unwrap();
    assert_eq!(state, MigrationState::Premigrated);
}

#[test]
fn test_empty_blob_classifies_resident() {
    let file = temp_file();
    let state = classify_path_with(file.path(), &StaticAttrs(b"")).unwrap();
    assert_eq!(state, MigrationState::Resident);
}

#[test]
fn test_marker_search_runs_on_sanitized_text() {
    // Non-printable bytes are dropped before the substring search, so a
    // marker interrupted by binary junk still matches.
    let file = temp_file();
    let state = classify_path_with(file.path(), &StaticAttrs(b"IBM\x00\x02TPS")).unwrap();
    assert_eq!(state, MigrationState::Migrated);
}

#[test]
fn test_missing_path_is_path_error() {
    let err = classify_path_with(
        Path::new("/nonexistent/hsmstate/integration"),
        &StaticAttrs(MIGRATED_BLOB),
    )
    .unwrap_err();
    assert!(matches!(err, HsmError::Path(_)));
}

#[test]
fn test_fetch_failure_propagates() {
    let file = temp_file();
    let err = classify_path_with(file.path(), &FailingAttrs).unwrap_err();
    assert!(matches!(err, HsmError::AttributeFetch(_)));

    // The classifier released its handle despite the error; the temp file
    // can still be removed.
    file.close().unwrap();
}

#[test]
fn test_classification_is_idempotent() {
    let file = temp_file();
    let source = StaticAttrs(PREMIGRATED_BLOB);
    let first = classify_path_with(file.path(), &source).unwrap();
    for _ in 0..10 {
        assert_eq!(classify_path_with(file.path(), &source).unwrap(), first);
    }
}

#[test]
fn test_descriptors_released_on_every_outcome() {
    // With the default nofile limit (1024) a leaked descriptor per call
    // would exhaust the table long before these loops finish.
    let file = temp_file();
    for _ in 0..2048 {
        classify_path_with(file.path(), &StaticAttrs(MIGRATED_BLOB)).unwrap();
    }
    for _ in 0..2048 {
        classify_path_with(file.path(), &FailingAttrs).unwrap_err();
    }
}

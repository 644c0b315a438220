//! Migration-state classification.
//!
//! A file on a GPFS filesystem under HSM control is in one of three
//! states: resident (data fully on disk), premigrated (a copy exists on
//! secondary storage while the primary copy is still local), or migrated
//! (only a stub remains locally). The state is recovered by fetching the
//! file's DMAPI attribute blob and searching its sanitized text for the
//! IBM HSM marker strings.

use crate::attrs::{ATTR_BUFFER_CAPACITY, AttrSource, GpfsAttrSource};
use crate::errors::{HsmError, HsmResult};
use crate::sanitize::sanitize_attrs;
use std::fmt;
use std::fs::File;
use std::os::unix::io::AsRawFd;
use std::path::Path;

/// Marker present whenever a copy of the file exists on secondary storage.
pub const MARKER_TPS: &str = "IBMTPS";

/// Marker present while the primary copy is still on disk.
pub const MARKER_PREMIG: &str = "IBMPMig";

/// HSM migration state of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MigrationState {
    /// Data is fully present on primary storage.
    Resident,
    /// Data exists both locally and on secondary storage.
    Premigrated,
    /// Data has been evacuated; only a stub remains locally.
    Migrated,
}

impl MigrationState {
    /// Numeric return code: 0 resident, 1 premigrated, 2 migrated.
    pub fn return_code(self) -> i32 {
        match self {
            MigrationState::Resident => 0,
            MigrationState::Premigrated => 1,
            MigrationState::Migrated => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MigrationState::Resident => "Resident",
            MigrationState::Premigrated => "Premigrated",
            MigrationState::Migrated => "Migrated",
        }
    }

    /// One-line description of the state, for the CLI hints legend.
    pub fn hint(self) -> &'static str {
        match self {
            MigrationState::Resident => "Indicates a file that is resident on disk",
            MigrationState::Premigrated => {
                "Indicates a file that has been premigrated (e.g. resident on both tape and disk)"
            }
            MigrationState::Migrated => "Indicates a file that has been migrated to tape",
        }
    }
}

impl fmt::Display for MigrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify sanitized attribute text by its HSM markers.
///
/// Total over all inputs: text without [`MARKER_TPS`] is resident, with
/// both markers premigrated, with only [`MARKER_TPS`] migrated.
pub fn classify_attr_text(text: &str) -> MigrationState {
    if !text.contains(MARKER_TPS) {
        return MigrationState::Resident;
    }
    if text.contains(MARKER_PREMIG) {
        MigrationState::Premigrated
    } else {
        MigrationState::Migrated
    }
}

/// Classify the file at `path` using the given attribute source.
///
/// The descriptor is scoped to this call and released on every exit path,
/// success or error.
pub fn classify_path_with(path: &Path, source: &impl AttrSource) -> HsmResult<MigrationState> {
    let file = File::open(path)
        .map_err(|e| HsmError::Path(format!("cannot open {}: {e}", path.display())))?;

    let mut buf = [0u8; ATTR_BUFFER_CAPACITY];
    let attr_size = source.fetch_attrs(file.as_raw_fd(), &mut buf)?;

    let text = sanitize_attrs(&buf[..attr_size]);
    log::debug!("sanitized attributes for {}: {text:?}", path.display());

    Ok(classify_attr_text(&text))
}

/// Classify the file at `path` through the native GPFS attribute call.
pub fn classify_path(path: &Path) -> HsmResult<MigrationState> {
    classify_path_with(path, &GpfsAttrSource)
}

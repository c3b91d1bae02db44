//! QDataStream protocol version gate.

use crate::error::{Result, StreamError};

/// `QDataStream::Qt_5_13`, also written by Qt 5.14 and 5.15.
pub const QT_5_13: u32 = 19;

/// `QDataStream::Qt_6_0`.
pub const QT_6_0: u32 = 20;

/// Stream versions this crate knows how to read.
pub const SUPPORTED_VERSIONS: [u32; 2] = [QT_5_13, QT_6_0];

/// Version used when the caller does not pick one.
pub const DEFAULT_VERSION: u32 = QT_5_13;

/// Checks `version` against [`SUPPORTED_VERSIONS`].
///
/// Both revisions share the same layout for every type decoded here. This is
/// the single place where a version-dependent layout would be selected.
pub fn check_version(version: u32) -> Result<u32> {
    if SUPPORTED_VERSIONS.contains(&version) {
        Ok(version)
    } else {
        Err(StreamError::UnsupportedVersion {
            version,
            supported: &SUPPORTED_VERSIONS,
        })
    }
}

//! Snapshot error types.

use thiserror::Error;

/// Errors raised while encoding or decoding a [`SessionSnapshot`].
///
/// [`SessionSnapshot`]: super::SessionSnapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid binary snapshot: {0}")]
    Binary(#[from] bincode::Error),

    /// The snapshot was written by an incompatible format version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

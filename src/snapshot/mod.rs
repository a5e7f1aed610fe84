//! Serializable snapshots of a calculator session.
//!
//! A snapshot is a read-model for collaborators that render the session
//! somewhere else (a web view, another process). It carries everything a
//! display needs and is never fed back into a session.

use crate::core::{AngleMode, HistoryEntry, InputState};
use crate::format::NumberFormat;
use crate::session::CalculatorSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Point-in-time view of a session.
///
/// # Example
///
/// ```rust
/// use scicalc::session::CalculatorSession;
/// use scicalc::snapshot::SessionSnapshot;
///
/// let mut session = CalculatorSession::new();
/// session.input_digit('7');
///
/// let json = SessionSnapshot::capture(&session).to_json().unwrap();
/// let restored = SessionSnapshot::from_json(&json).unwrap();
/// assert_eq!(restored.current_input, "7");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    pub state: InputState,
    pub current_input: String,
    pub current_expression: String,

    /// Text of the main display line
    pub display: String,

    pub memory: f64,
    pub last_result: f64,
    pub angle_mode: AngleMode,
    pub format: NumberFormat,

    /// Most recent first
    pub history: Vec<HistoryEntry>,
}

impl SessionSnapshot {
    /// Take a snapshot of `session` as it is right now.
    pub fn capture(session: &CalculatorSession) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: session.state(),
            current_input: session.current_input().to_string(),
            current_expression: session.current_expression().to_string(),
            display: session.display_text(),
            memory: session.memory(),
            last_result: session.last_result(),
            angle_mode: session.angle_mode(),
            format: session.number_format(),
            history: session.history().entries().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.check_version()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}

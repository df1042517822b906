//! Snapshot decoding errors.

use super::error_code::{self, CascadeErrorCode};

/// Errors raised while decoding stored assessment snapshots.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Assessment level {value} for {skill_id} is outside 0..=3")]
    LevelOutOfRange { skill_id: String, value: i64 },

    #[error("Assessment value for {skill_id} is not an integer: {value}")]
    NotAnInteger { skill_id: String, value: String },

    #[error("Snapshot parse error: {message}")]
    Parse { message: String },
}

impl CascadeErrorCode for SnapshotError {
    fn error_code(&self) -> &'static str {
        error_code::SNAPSHOT_ERROR
    }
}

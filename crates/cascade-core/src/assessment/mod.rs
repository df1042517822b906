//! Assessment values: levels, snapshots, and snapshot history.

pub mod level;
pub mod snapshot;

pub use level::{is_assessed, AssessmentLevel};
pub use snapshot::{AssessmentSnapshot, Snapshot, SnapshotHistory};

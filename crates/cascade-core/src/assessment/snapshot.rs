//! Assessment snapshots and ordered snapshot history.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::level::AssessmentLevel;
use crate::constants::METADATA_PREFIX;
use crate::errors::SnapshotError;
use crate::types::SkillId;

/// One learner's ratings at a point in time.
///
/// Stored as a flat JSON object mapping skill ids to levels. Keys starting
/// with `_` carry metadata and are kept apart so no scoring loop sees them.
/// The engine treats snapshots as immutable values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct AssessmentSnapshot {
    levels: BTreeMap<SkillId, AssessmentLevel>,
    metadata: BTreeMap<String, Value>,
}

impl AssessmentSnapshot {
    /// An empty snapshot: nothing assessed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_level(mut self, skill_id: impl Into<SkillId>, level: AssessmentLevel) -> Self {
        self.insert(skill_id, level);
        self
    }

    /// Record a rating, replacing any previous one.
    pub fn insert(&mut self, skill_id: impl Into<SkillId>, level: AssessmentLevel) {
        self.levels.insert(skill_id.into(), level);
    }

    /// Clear a rating back to "not assessed".
    pub fn remove(&mut self, skill_id: &str) -> Option<AssessmentLevel> {
        self.levels.remove(skill_id)
    }

    /// The rating for a skill, `None` when not assessed.
    pub fn level(&self, skill_id: &str) -> Option<AssessmentLevel> {
        self.levels.get(skill_id).copied()
    }

    /// Whether the skill carries a rating (level 0 counts).
    pub fn is_assessed(&self, skill_id: &str) -> bool {
        self.levels.contains_key(skill_id)
    }

    /// Iterate ratings in skill-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&SkillId, AssessmentLevel)> {
        self.levels.iter().map(|(id, level)| (id, *level))
    }

    /// Number of assessed skills.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Metadata entries (`_`-prefixed keys).
    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }

    /// Attach a metadata entry. The key is prefixed with `_` if needed.
    pub fn set_metadata(&mut self, key: &str, value: Value) {
        let key = if key.starts_with(METADATA_PREFIX) {
            key.to_string()
        } else {
            format!("{METADATA_PREFIX}{key}")
        };
        self.metadata.insert(key, value);
    }

    /// Parse the stored flat JSON shape.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Parse {
            message: e.to_string(),
        })
    }

    /// Serialize back to the stored flat JSON shape.
    pub fn to_json_string(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::Parse {
            message: e.to_string(),
        })
    }
}

impl TryFrom<Map<String, Value>> for AssessmentSnapshot {
    type Error = SnapshotError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut snapshot = Self::new();
        for (key, value) in map {
            if key.starts_with(METADATA_PREFIX) {
                snapshot.metadata.insert(key, value);
                continue;
            }
            if let Some(level) = decode_level(&key, &value)? {
                snapshot.levels.insert(SkillId::new(key), level);
            }
        }
        Ok(snapshot)
    }
}

impl From<AssessmentSnapshot> for Map<String, Value> {
    fn from(snapshot: AssessmentSnapshot) -> Self {
        let mut map = Map::new();
        for (key, value) in snapshot.metadata {
            map.insert(key, value);
        }
        for (id, level) in snapshot.levels {
            map.insert(id.as_str().to_string(), Value::from(level.value()));
        }
        map
    }
}

fn decode_level(skill_id: &str, value: &Value) -> Result<Option<AssessmentLevel>, SnapshotError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            let raw = match n.as_i64() {
                Some(raw) => raw,
                None => match n.as_f64() {
                    Some(f) if f.fract() == 0.0 => f as i64,
                    _ => {
                        return Err(SnapshotError::NotAnInteger {
                            skill_id: skill_id.to_string(),
                            value: n.to_string(),
                        })
                    }
                },
            };
            AssessmentLevel::from_raw(skill_id, raw)
        }
        other => Err(SnapshotError::NotAnInteger {
            skill_id: skill_id.to_string(),
            value: other.to_string(),
        }),
    }
}

/// A timestamped snapshot from the assessment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    pub assessments: AssessmentSnapshot,
}

impl Snapshot {
    pub fn new(timestamp: DateTime<Utc>, assessments: AssessmentSnapshot) -> Self {
        Self {
            timestamp,
            assessments,
        }
    }
}

/// Read-only view over a history ordered oldest first.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotHistory<'a> {
    snapshots: &'a [Snapshot],
}

impl<'a> SnapshotHistory<'a> {
    pub fn new(snapshots: &'a [Snapshot]) -> Self {
        Self { snapshots }
    }

    /// The most recent prior snapshot.
    pub fn latest(&self) -> Option<&'a Snapshot> {
        self.snapshots.last()
    }

    /// Up to the last `n` snapshots, oldest first.
    pub fn last_n(&self, n: usize) -> &'a [Snapshot] {
        let start = self.snapshots.len().saturating_sub(n);
        &self.snapshots[start..]
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_keys_are_kept_apart() {
        let snapshot = AssessmentSnapshot::from_json_str(
            r#"{"d1/a/g/s1": 2, "_updatedAt": "2024-01-01", "d1/a/g/s2": null, "d1/a/g/s3": -1}"#,
        )
        .unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.level("d1/a/g/s1"), Some(AssessmentLevel::DEVELOPING));
        assert!(!snapshot.is_assessed("d1/a/g/s2"));
        assert!(!snapshot.is_assessed("d1/a/g/s3"));
        assert!(snapshot.metadata().contains_key("_updatedAt"));
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        let err = AssessmentSnapshot::from_json_str(r#"{"s": 7}"#).unwrap_err();
        assert!(err.to_string().contains("outside 0..=3"));
        assert!(AssessmentSnapshot::from_json_str(r#"{"s": 1.5}"#).is_err());
        assert!(AssessmentSnapshot::from_json_str(r#"{"s": "2"}"#).is_err());
    }

    #[test]
    fn round_trips_through_flat_json() {
        let mut snapshot = AssessmentSnapshot::new().with_level("x/y/z/s", AssessmentLevel::SOLID);
        snapshot.set_metadata("source", Value::from("import"));
        let json = snapshot.to_json_string().unwrap();
        assert!(json.contains("\"_source\""));
        assert_eq!(AssessmentSnapshot::from_json_str(&json).unwrap(), snapshot);
    }

    #[test]
    fn history_last_n_keeps_order() {
        let snaps: Vec<Snapshot> = (0..5)
            .map(|i| {
                Snapshot::new(
                    DateTime::from_timestamp(i * 60, 0).unwrap(),
                    AssessmentSnapshot::new(),
                )
            })
            .collect();
        let history = SnapshotHistory::new(&snaps);
        let window = history.last_n(3);
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].timestamp.timestamp(), 120);
        assert_eq!(history.latest().unwrap().timestamp.timestamp(), 240);
        assert_eq!(history.last_n(10).len(), 5);
    }
}

//! Assessment level: an integer rating 0–3, distinct from "not assessed".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_LEVEL, NOT_ASSESSED};
use crate::errors::SnapshotError;

/// A rating of one skill. "Not assessed" is modelled as `Option::None`,
/// never as level 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AssessmentLevel(u8);

impl AssessmentLevel {
    /// Rated, skill absent.
    pub const ABSENT: Self = Self(0);
    /// Skill is emerging.
    pub const EMERGING: Self = Self(1);
    /// Skill is developing.
    pub const DEVELOPING: Self = Self(2);
    /// Skill is solid.
    pub const SOLID: Self = Self(3);

    /// Create a level, returning `None` when out of range.
    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_LEVEL).then_some(Self(value))
    }

    /// Clamp any integer into the valid range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, i64::from(MAX_LEVEL)) as u8)
    }

    /// Decode a stored raw value. The `NOT_ASSESSED` sentinel decodes to `None`.
    pub fn from_raw(skill_id: &str, value: i64) -> Result<Option<Self>, SnapshotError> {
        if value == NOT_ASSESSED {
            return Ok(None);
        }
        if !(0..=i64::from(MAX_LEVEL)).contains(&value) {
            return Err(SnapshotError::LevelOutOfRange {
                skill_id: skill_id.to_string(),
                value,
            });
        }
        Ok(Some(Self(value as u8)))
    }

    /// The numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The numeric value as `f64` for averaging.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u8> for AssessmentLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("assessment level {value} is outside 0..=3"))
    }
}

impl From<AssessmentLevel> for u8 {
    fn from(level: AssessmentLevel) -> Self {
        level.0
    }
}

impl fmt::Display for AssessmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a looked-up level represents a rating (including level 0).
pub fn is_assessed(level: Option<AssessmentLevel>) -> bool {
    level.is_some()
}

//! Health types for domains and sub-areas.

use serde::Serialize;

use cascade_core::{DomainId, SubAreaId};

/// Lifecycle state derived from average level and gating prerequisites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthState {
    /// Nothing assessed yet.
    Locked,
    /// A `requires` prerequisite is unmet and the average is below 2.0.
    Blocked,
    NeedsWork,
    Developing,
    Mastered,
}

impl HealthState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Blocked => "blocked",
            Self::NeedsWork => "needs-work",
            Self::Developing => "developing",
            Self::Mastered => "mastered",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate score of one domain for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainHealth {
    pub domain_id: DomainId,
    /// Mean level over assessed skills; 0 when none are assessed.
    pub avg: f64,
    pub assessed: usize,
    pub total: usize,
    /// `avg / 3` plus the supports adjustment, clamped to `[0, 1]`.
    pub health_pct: f64,
    /// `avg / 3` before any adjustment.
    pub raw_health_pct: f64,
    pub state: HealthState,
}

/// Aggregate score of one sub-area for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAreaHealth {
    pub sub_area_id: SubAreaId,
    pub domain_id: DomainId,
    pub avg: f64,
    pub assessed: usize,
    pub total: usize,
    pub health_pct: f64,
    pub raw_health_pct: f64,
    pub state: HealthState,
}

/// Health of every catalog domain, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DomainHealthReport {
    domains: Vec<DomainHealth>,
}

impl DomainHealthReport {
    pub(crate) fn new(domains: Vec<DomainHealth>) -> Self {
        Self { domains }
    }

    pub fn get(&self, domain_id: &str) -> Option<&DomainHealth> {
        self.domains.iter().find(|h| h.domain_id.as_str() == domain_id)
    }

    /// Health by catalog position.
    pub fn at(&self, pos: usize) -> Option<&DomainHealth> {
        self.domains.get(pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DomainHealth> {
        self.domains.iter()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn as_slice(&self) -> &[DomainHealth] {
        &self.domains
    }
}

impl std::ops::Index<usize> for DomainHealthReport {
    type Output = DomainHealth;

    fn index(&self, pos: usize) -> &DomainHealth {
        &self.domains[pos]
    }
}

impl<'a> IntoIterator for &'a DomainHealthReport {
    type Item = &'a DomainHealth;
    type IntoIter = std::slice::Iter<'a, DomainHealth>;

    fn into_iter(self) -> Self::IntoIter {
        self.domains.iter()
    }
}

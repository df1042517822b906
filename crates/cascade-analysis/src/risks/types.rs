//! Cascade risk types.

use serde::Serialize;

use cascade_core::DomainId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskKind {
    /// A dependent outscores its prerequisite.
    Inversion,
    /// A foundation domain dropped since the previous snapshot.
    Regression,
    /// A weak domain gating several dependents.
    Bottleneck,
}

impl RiskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inversion => "inversion",
            Self::Regression => "regression",
            Self::Bottleneck => "bottleneck",
        }
    }
}

/// A structural anomaly in the dependency graph for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    #[serde(rename = "type")]
    pub kind: RiskKind,
    pub severity: f64,
    pub description: String,
    pub affected_domains: Vec<DomainId>,
    /// The domain to work on to resolve the risk.
    pub action_domain_id: DomainId,
}

/// Stable sort, highest severity first.
pub(crate) fn sort_by_severity(risks: &mut [Risk]) {
    risks.sort_by(|a, b| b.severity.total_cmp(&a.severity));
}

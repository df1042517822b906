//! Learning barrier types.

use serde::Serialize;

use cascade_core::DomainId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarrierKind {
    /// Higher-tier skills outscore the tier below them within a domain.
    ScoreInversion,
    /// A dependent is far ahead of a direct prerequisite.
    PrerequisiteGap,
    /// Assessed levels within a domain are widely spread.
    UnevenProfile,
    /// A domain average has not moved across recent snapshots.
    Plateau,
}

impl BarrierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScoreInversion => "score-inversion",
            Self::PrerequisiteGap => "prerequisite-gap",
            Self::UnevenProfile => "uneven-profile",
            Self::Plateau => "plateau",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Barrier {
    #[serde(rename = "type")]
    pub kind: BarrierKind,
    pub severity: f64,
    pub affected_domains: Vec<DomainId>,
    pub description: String,
}

pub(crate) fn sort_by_severity(barriers: &mut [Barrier]) {
    barriers.sort_by(|a, b| b.severity.total_cmp(&a.severity));
}

//! Impact ranker: which domains give the most leverage if strengthened.

use serde::Serialize;

use cascade_core::{Catalog, DomainId};

use crate::health::DomainHealthReport;
use crate::index::DependencyIndex;

/// Ranking entry for one domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRanking {
    pub domain_id: DomainId,
    /// Transitive dependents, excluding the domain itself, in catalog order.
    pub downstream_domains: Vec<DomainId>,
    /// Leaf skills across `downstream_domains`.
    pub downstream_skills: usize,
    pub health_pct: f64,
    /// `downstream_skills * (1 - health_pct)`.
    pub leverage_score: f64,
}

/// Rank every domain by leverage, highest first. Ties keep catalog order.
pub fn compute_impact_ranking(
    catalog: &Catalog,
    index: &DependencyIndex,
    health: &DomainHealthReport,
) -> Vec<ImpactRanking> {
    let mut ranking: Vec<ImpactRanking> = catalog
        .domains()
        .iter()
        .enumerate()
        .map(|(pos, domain)| {
            let downstream = index.transitive_dependents(pos);
            let downstream_skills: usize = downstream
                .iter()
                .map(|&d| index.domain_skill_count(d))
                .sum();
            let health_pct = health.at(pos).map(|h| h.health_pct).unwrap_or(0.0);
            ImpactRanking {
                domain_id: domain.id.clone(),
                downstream_domains: downstream
                    .iter()
                    .map(|&d| catalog.domains()[d].id.clone())
                    .collect(),
                downstream_skills,
                health_pct,
                leverage_score: downstream_skills as f64 * (1.0 - health_pct),
            }
        })
        .collect();

    ranking.sort_by(|a, b| b.leverage_score.total_cmp(&a.leverage_score));
    ranking
}

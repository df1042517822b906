//! Cascade propagator: weighted BFS outward from a source domain.

use std::collections::VecDeque;

use serde::Serialize;

use cascade_core::constants::REQUIRES_PROPAGATION_WEIGHT;
use cascade_core::{Catalog, DependencyKind, DomainId, Thresholds};

use crate::events;
use crate::health::DomainHealthReport;
use crate::index::DependencyIndex;

/// How strongly weakness in the source reaches one downstream domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeImpact {
    pub domain_id: DomainId,
    /// BFS depth from the source; the source itself is tier 0.
    pub tier: u32,
    pub impact_strength: f64,
    /// Source first, this domain last.
    pub path_from_source: Vec<DomainId>,
}

/// Propagate a source domain's weakness to its dependents.
///
/// `base = 1 - health_pct(source)`; a domain first discovered at tier `t`
/// through an edge of weight `w` gets `base * decay^t * w`. First discovery
/// wins; later, stronger paths do not relax it. An unknown source yields an
/// empty result.
pub fn propagate_cascade(
    catalog: &Catalog,
    index: &DependencyIndex,
    health: &DomainHealthReport,
    source: &str,
    thresholds: &Thresholds,
) -> Vec<CascadeImpact> {
    let Some(start) = catalog.domain_position(source) else {
        events::unknown_id("domain", source);
        return Vec::new();
    };
    let base_impact = 1.0 - health.at(start).map(|h| h.health_pct).unwrap_or(0.0);

    let mut paths: Vec<Option<Vec<usize>>> = vec![None; catalog.domain_count()];
    paths[start] = Some(vec![start]);

    let mut impacts = vec![CascadeImpact {
        domain_id: catalog.domains()[start].id.clone(),
        tier: 0,
        impact_strength: base_impact,
        path_from_source: vec![catalog.domains()[start].id.clone()],
    }];

    let mut queue = VecDeque::new();
    queue.push_back((start, 0u32));
    let mut max_tier = 0;

    while let Some((current, tier)) = queue.pop_front() {
        for edge in index.domain_dependents(current) {
            if paths[edge.dependent].is_some() {
                continue;
            }
            let next_tier = tier + 1;
            let type_weight = match edge.kind {
                DependencyKind::Supports => thresholds.supports_propagation_weight,
                DependencyKind::Requires => REQUIRES_PROPAGATION_WEIGHT,
            };

            let mut path = paths[current].clone().unwrap_or_default();
            path.push(edge.dependent);

            impacts.push(CascadeImpact {
                domain_id: catalog.domains()[edge.dependent].id.clone(),
                tier: next_tier,
                impact_strength: base_impact
                    * thresholds.cascade_decay.powi(next_tier as i32)
                    * type_weight,
                path_from_source: path
                    .iter()
                    .map(|&pos| catalog.domains()[pos].id.clone())
                    .collect(),
            });
            paths[edge.dependent] = Some(path);
            max_tier = max_tier.max(next_tier);
            queue.push_back((edge.dependent, next_tier));
        }
    }

    events::cascade_propagated(source, impacts.len() - 1, max_tier);
    impacts
}

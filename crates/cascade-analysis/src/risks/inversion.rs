//! Inversion: a dependent averages well above one of its direct prerequisites.

use cascade_core::{Catalog, Thresholds};

use super::types::{Risk, RiskKind};
use crate::health::DomainHealthReport;

pub fn detect_inversions(
    catalog: &Catalog,
    health: &DomainHealthReport,
    thresholds: &Thresholds,
) -> Vec<Risk> {
    let graph = catalog.domain_graph();
    let mut risks = Vec::new();

    for (pos, domain) in health.iter().enumerate() {
        if domain.assessed == 0 {
            continue;
        }
        for edge in graph.prerequisites(pos) {
            let dep = &health[edge.target];
            if dep.assessed == 0 {
                continue;
            }
            if domain.avg > dep.avg + thresholds.inversion_threshold {
                risks.push(Risk {
                    kind: RiskKind::Inversion,
                    severity: domain.avg - dep.avg,
                    description: format!(
                        "{} ({:.1}) is ahead of its prerequisite {} ({:.1})",
                        name_of(catalog, pos),
                        domain.avg,
                        name_of(catalog, edge.target),
                        dep.avg
                    ),
                    affected_domains: vec![domain.domain_id.clone(), dep.domain_id.clone()],
                    action_domain_id: dep.domain_id.clone(),
                });
            }
        }
    }
    risks
}

pub(crate) fn name_of(catalog: &Catalog, pos: usize) -> &str {
    &catalog.domains()[pos].name
}

//! Cross-domain prerequisite gap: the inversion rule with a wider margin.

use cascade_core::{Catalog, Thresholds};

use super::types::{Barrier, BarrierKind};
use crate::health::DomainHealthReport;

pub fn detect_prerequisite_gaps(
    catalog: &Catalog,
    health: &DomainHealthReport,
    thresholds: &Thresholds,
) -> Vec<Barrier> {
    let graph = catalog.domain_graph();
    let mut barriers = Vec::new();

    for (pos, domain) in health.iter().enumerate() {
        if domain.assessed == 0 {
            continue;
        }
        for edge in graph.prerequisites(pos) {
            let dep = &health[edge.target];
            if dep.assessed == 0 || domain.avg <= dep.avg + thresholds.prerequisite_gap_threshold {
                continue;
            }
            barriers.push(Barrier {
                kind: BarrierKind::PrerequisiteGap,
                severity: domain.avg - dep.avg,
                affected_domains: vec![domain.domain_id.clone(), dep.domain_id.clone()],
                description: format!(
                    "{} ({:.1}) has outpaced prerequisite {} ({:.1})",
                    catalog.domains()[pos].name,
                    domain.avg,
                    catalog.domains()[edge.target].name,
                    dep.avg
                ),
            });
        }
    }
    barriers
}

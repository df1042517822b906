//! Bottleneck: a weak domain with several direct dependents.

use cascade_core::{Catalog, Thresholds};

use super::inversion::name_of;
use super::types::{Risk, RiskKind};
use crate::health::DomainHealthReport;
use crate::index::DependencyIndex;

pub fn detect_bottlenecks(
    catalog: &Catalog,
    index: &DependencyIndex,
    health: &DomainHealthReport,
    thresholds: &Thresholds,
) -> Vec<Risk> {
    let mut risks = Vec::new();
    for (pos, domain) in health.iter().enumerate() {
        if domain.assessed == 0 || domain.avg >= thresholds.bottleneck_avg {
            continue;
        }
        let dependents = index.domain_dependents(pos);
        if dependents.len() < thresholds.bottleneck_min_dependents {
            continue;
        }

        let mut affected = vec![domain.domain_id.clone()];
        affected.extend(
            dependents
                .iter()
                .map(|e| catalog.domains()[e.dependent].id.clone()),
        );
        risks.push(Risk {
            kind: RiskKind::Bottleneck,
            severity: (thresholds.bottleneck_avg - domain.avg) * dependents.len() as f64,
            description: format!(
                "{} ({:.1}) gates {} dependent domains",
                name_of(catalog, pos),
                domain.avg,
                dependents.len()
            ),
            affected_domains: affected,
            action_domain_id: domain.domain_id.clone(),
        });
    }
    risks
}

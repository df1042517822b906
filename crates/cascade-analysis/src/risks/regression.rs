//! Regression: a foundation domain lost ground since the previous snapshot.

use cascade_core::{Catalog, Thresholds};

use super::inversion::name_of;
use super::types::{Risk, RiskKind};
use crate::health::DomainHealthReport;
use crate::index::DependencyIndex;

/// Compare current foundation-domain health against the previous snapshot.
/// Without a previous snapshot nothing is reported.
pub fn detect_regressions(
    catalog: &Catalog,
    index: &DependencyIndex,
    current: &DomainHealthReport,
    previous: Option<&DomainHealthReport>,
    thresholds: &Thresholds,
) -> Vec<Risk> {
    let Some(previous) = previous else {
        return Vec::new();
    };

    let mut risks = Vec::new();
    for &pos in catalog.foundation_domains() {
        let (Some(now), Some(before)) = (current.at(pos), previous.at(pos)) else {
            continue;
        };
        if now.assessed == 0 || before.assessed == 0 {
            continue;
        }
        let drop = before.avg - now.avg;
        if drop > thresholds.regression_threshold {
            let mut affected = vec![now.domain_id.clone()];
            affected.extend(
                index
                    .transitive_dependents(pos)
                    .iter()
                    .map(|&d| catalog.domains()[d].id.clone()),
            );
            risks.push(Risk {
                kind: RiskKind::Regression,
                severity: drop,
                description: format!(
                    "{} fell from {:.1} to {:.1}",
                    name_of(catalog, pos),
                    before.avg,
                    now.avg
                ),
                affected_domains: affected,
                action_domain_id: now.domain_id.clone(),
            });
        }
    }
    risks
}

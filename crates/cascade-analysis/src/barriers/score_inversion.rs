//! Tiered score inversion within a domain.

use statrs::statistics::Statistics;

use cascade_core::{AssessmentSnapshot, Catalog, Thresholds};

use super::types::{Barrier, BarrierKind};
use crate::index::DependencyIndex;

/// Compare the mean of each pair of adjacent present tiers.
///
/// Only assessed skills with a declared tier take part; a tier with no
/// assessed skill is not present.
pub fn detect_score_inversions(
    catalog: &Catalog,
    index: &DependencyIndex,
    snapshot: &AssessmentSnapshot,
    thresholds: &Thresholds,
) -> Vec<Barrier> {
    let skills = catalog.skills();
    let mut barriers = Vec::new();

    for (pos, domain) in catalog.domains().iter().enumerate() {
        let Some(tiers) = index.domain_tiers(pos) else {
            continue;
        };

        let means: Vec<(u32, f64)> = tiers
            .iter()
            .filter_map(|(&tier, members)| {
                let levels: Vec<f64> = members
                    .iter()
                    .filter_map(|&s| snapshot.level(skills[s].id.as_str()))
                    .map(|l| l.as_f64())
                    .collect();
                if levels.is_empty() {
                    None
                } else {
                    Some((tier, levels.iter().mean()))
                }
            })
            .collect();

        for pair in means.windows(2) {
            let (lower_tier, lower_mean) = pair[0];
            let (higher_tier, higher_mean) = pair[1];
            let gap = higher_mean - lower_mean;
            if gap > thresholds.score_inversion_threshold {
                barriers.push(Barrier {
                    kind: BarrierKind::ScoreInversion,
                    severity: gap,
                    affected_domains: vec![domain.id.clone()],
                    description: format!(
                        "{}: tier {} skills ({:.1}) outscore tier {} skills ({:.1})",
                        domain.name, higher_tier, higher_mean, lower_tier, lower_mean
                    ),
                });
            }
        }
    }
    barriers
}

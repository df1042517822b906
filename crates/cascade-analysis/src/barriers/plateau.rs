//! Plateau: a domain average stuck below mastery across recent snapshots.

use cascade_core::assessment::SnapshotHistory;
use cascade_core::{AssessmentSnapshot, Catalog, Snapshot, Thresholds};

use super::types::{Barrier, BarrierKind};
use crate::health::domain_average;

/// Look at up to `plateau_window` prior snapshots plus the current one.
/// Every point must have an assessed average above zero.
pub fn detect_plateaus(
    catalog: &Catalog,
    snapshot: &AssessmentSnapshot,
    history: &[Snapshot],
    thresholds: &Thresholds,
) -> Vec<Barrier> {
    let history = SnapshotHistory::new(history);
    if history.is_empty() {
        return Vec::new();
    }
    let window = history.last_n(thresholds.plateau_window);

    let mut barriers = Vec::new();
    for (pos, domain) in catalog.domains().iter().enumerate() {
        let points: Vec<f64> = window
            .iter()
            .map(|s| &s.assessments)
            .chain(std::iter::once(snapshot))
            .map(|s| domain_average(catalog, pos, s).avg())
            .collect();
        if points.iter().any(|&avg| avg <= 0.0) {
            continue;
        }

        let max = points.iter().copied().fold(f64::MIN, f64::max);
        let min = points.iter().copied().fold(f64::MAX, f64::min);
        let (earliest, latest) = (points[0], points[points.len() - 1]);
        if max - min < thresholds.plateau_range && earliest < thresholds.plateau_ceiling {
            barriers.push(Barrier {
                kind: BarrierKind::Plateau,
                severity: thresholds.plateau_ceiling - latest,
                affected_domains: vec![domain.id.clone()],
                description: format!(
                    "{} has held near {:.1} for {} assessments",
                    domain.name,
                    latest,
                    points.len()
                ),
            });
        }
    }
    barriers
}

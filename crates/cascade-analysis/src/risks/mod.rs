//! Cascade risk detector: inversion, regression, and bottleneck rules.
//!
//! Each rule looks at direct edges only and is independent of the others.

pub mod bottleneck;
pub mod inversion;
pub mod regression;
pub mod types;

use cascade_core::assessment::SnapshotHistory;
use cascade_core::{AssessmentSnapshot, Catalog, Snapshot, Thresholds};

use crate::events;
use crate::health::compute_domain_health;
use crate::index::DependencyIndex;

pub use bottleneck::detect_bottlenecks;
pub use inversion::detect_inversions;
pub use regression::detect_regressions;
pub use types::{Risk, RiskKind};

/// Run every risk rule and merge the results, highest severity first.
///
/// `history` holds prior snapshots, oldest first; regression compares
/// against the latest of them.
pub fn detect_cascade_risks(
    catalog: &Catalog,
    index: &DependencyIndex,
    snapshot: &AssessmentSnapshot,
    history: &[Snapshot],
    thresholds: &Thresholds,
) -> Vec<Risk> {
    let health = compute_domain_health(catalog, snapshot, thresholds);
    let previous = SnapshotHistory::new(history)
        .latest()
        .map(|s| compute_domain_health(catalog, &s.assessments, thresholds));

    let inversions = detect_inversions(catalog, &health, thresholds);
    let regressions = detect_regressions(catalog, index, &health, previous.as_ref(), thresholds);
    let bottlenecks = detect_bottlenecks(catalog, index, &health, thresholds);
    events::risks_detected(inversions.len(), regressions.len(), bottlenecks.len());

    let mut risks = inversions;
    risks.extend(regressions);
    risks.extend(bottlenecks);
    types::sort_by_severity(&mut risks);
    risks
}

//! Learning barrier detector: score-inversion, prerequisite-gap,
//! uneven-profile, and plateau rules.

pub mod plateau;
pub mod prerequisite_gap;
pub mod score_inversion;
pub mod types;
pub mod uneven_profile;

use cascade_core::{AssessmentSnapshot, Catalog, Snapshot, Thresholds};

use crate::events;
use crate::health::compute_domain_health;
use crate::index::DependencyIndex;

pub use plateau::detect_plateaus;
pub use prerequisite_gap::detect_prerequisite_gaps;
pub use score_inversion::detect_score_inversions;
pub use types::{Barrier, BarrierKind};
pub use uneven_profile::detect_uneven_profiles;

/// Run every barrier rule and merge the results, highest severity first.
pub fn detect_learning_barriers(
    catalog: &Catalog,
    index: &DependencyIndex,
    snapshot: &AssessmentSnapshot,
    history: &[Snapshot],
    thresholds: &Thresholds,
) -> Vec<Barrier> {
    let health = compute_domain_health(catalog, snapshot, thresholds);

    let mut barriers = detect_score_inversions(catalog, index, snapshot, thresholds);
    barriers.extend(detect_prerequisite_gaps(catalog, &health, thresholds));
    barriers.extend(detect_uneven_profiles(catalog, snapshot, thresholds));
    barriers.extend(detect_plateaus(catalog, snapshot, history, thresholds));
    types::sort_by_severity(&mut barriers);

    events::barriers_detected(barriers.len(), history.len());
    barriers
}

//! Health scorer: per-domain and per-sub-area score, coverage, and state.
//!
//! Both levels run the same algorithm over their own dependency graph in
//! explicit topological order.

pub mod scorer;
pub mod types;

use cascade_core::{AssessmentSnapshot, Catalog, Thresholds};

use crate::events;

pub use scorer::Tally;
pub use types::{DomainHealth, DomainHealthReport, HealthState, SubAreaHealth};

/// One [`DomainHealth`] per catalog domain, in catalog order.
pub fn compute_domain_health(
    catalog: &Catalog,
    snapshot: &AssessmentSnapshot,
    thresholds: &Thresholds,
) -> DomainHealthReport {
    let scores = scorer::score_graph(
        catalog.domain_graph(),
        |pos| catalog.skills_in_domain(pos),
        snapshot,
        thresholds.supports_weight,
    );

    let domains: Vec<DomainHealth> = catalog
        .domains()
        .iter()
        .zip(scores)
        .map(|(domain, s)| DomainHealth {
            domain_id: domain.id.clone(),
            avg: s.avg,
            assessed: s.assessed,
            total: s.total,
            health_pct: s.health_pct,
            raw_health_pct: s.raw_health_pct,
            state: s.state,
        })
        .collect();

    events::health_computed(
        "domain",
        domains.len(),
        domains.iter().filter(|h| h.assessed > 0).count(),
    );
    DomainHealthReport::new(domains)
}

/// One [`SubAreaHealth`] per catalog sub-area, in catalog order.
pub fn compute_sub_area_health(
    catalog: &Catalog,
    snapshot: &AssessmentSnapshot,
    thresholds: &Thresholds,
) -> Vec<SubAreaHealth> {
    let scores = scorer::score_graph(
        catalog.sub_area_graph(),
        |pos| catalog.skills_in_sub_area(pos),
        snapshot,
        thresholds.supports_weight,
    );

    let sub_areas: Vec<SubAreaHealth> = catalog
        .sub_areas()
        .iter()
        .zip(scores)
        .map(|(sub_area, s)| SubAreaHealth {
            sub_area_id: sub_area.id.clone(),
            domain_id: catalog.domains()[sub_area.domain].id.clone(),
            avg: s.avg,
            assessed: s.assessed,
            total: s.total,
            health_pct: s.health_pct,
            raw_health_pct: s.raw_health_pct,
            state: s.state,
        })
        .collect();

    events::health_computed(
        "sub-area",
        sub_areas.len(),
        sub_areas.iter().filter(|h| h.assessed > 0).count(),
    );
    sub_areas
}

/// Average level of one domain, without gating or adjustments.
pub fn domain_average(catalog: &Catalog, pos: usize, snapshot: &AssessmentSnapshot) -> Tally {
    Tally::over(catalog.skills_in_domain(pos), snapshot)
}

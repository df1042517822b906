//! What-if simulator: counterfactual snapshots from domain-level targets.

use std::collections::BTreeMap;

use serde::Serialize;

use cascade_core::constants::MAX_LEVEL;
use cascade_core::{AssessmentLevel, AssessmentSnapshot, Catalog, DomainId, Thresholds};

use crate::events;
use crate::health::{compute_domain_health, HealthState};

/// Overwrite every leaf skill of each overridden domain with one level.
///
/// Targets are rounded to the nearest integer and clamped to `0..=3`.
/// Unknown domains and non-finite targets are skipped. Skills outside the
/// overridden domains, and metadata, pass through unchanged.
pub fn simulate_cascade(
    catalog: &Catalog,
    base: &AssessmentSnapshot,
    overrides: &BTreeMap<DomainId, f64>,
) -> AssessmentSnapshot {
    let mut simulated = base.clone();
    for (domain_id, &target) in overrides {
        if !target.is_finite() {
            events::override_ignored(domain_id.as_str(), "non-finite target");
            continue;
        }
        let Some(pos) = catalog.domain_position(domain_id.as_str()) else {
            events::override_ignored(domain_id.as_str(), "unknown domain");
            continue;
        };

        let level = AssessmentLevel::clamped(target.round().clamp(0.0, MAX_LEVEL as f64) as i64);
        for skill in catalog.skills_in_domain(pos) {
            simulated.insert(skill.id.clone(), level);
        }
    }
    simulated
}

/// Per-domain change between a baseline and a simulated snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDelta {
    pub domain_id: DomainId,
    pub baseline_avg: f64,
    pub simulated_avg: f64,
    pub avg_delta: f64,
    pub health_pct_delta: f64,
    pub baseline_state: HealthState,
    pub simulated_state: HealthState,
}

impl DomainDelta {
    pub fn state_changed(&self) -> bool {
        self.baseline_state != self.simulated_state
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfComparison {
    pub simulated: AssessmentSnapshot,
    /// One entry per catalog domain, in catalog order.
    pub domains: Vec<DomainDelta>,
}

impl WhatIfComparison {
    /// Domains whose state differs between baseline and simulation.
    pub fn changed(&self) -> impl Iterator<Item = &DomainDelta> {
        self.domains.iter().filter(|d| d.state_changed())
    }
}

/// Simulate the overrides and score both snapshots side by side.
pub fn compare_what_if(
    catalog: &Catalog,
    thresholds: &Thresholds,
    base: &AssessmentSnapshot,
    overrides: &BTreeMap<DomainId, f64>,
) -> WhatIfComparison {
    let simulated = simulate_cascade(catalog, base, overrides);
    let before = compute_domain_health(catalog, base, thresholds);
    let after = compute_domain_health(catalog, &simulated, thresholds);

    let domains = before
        .iter()
        .zip(after.iter())
        .map(|(b, a)| DomainDelta {
            domain_id: b.domain_id.clone(),
            baseline_avg: b.avg,
            simulated_avg: a.avg,
            avg_delta: a.avg - b.avg,
            health_pct_delta: a.health_pct - b.health_pct,
            baseline_state: b.state,
            simulated_state: a.state,
        })
        .collect();

    WhatIfComparison { simulated, domains }
}

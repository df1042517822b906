//! `CascadeEngine`: the catalog, its dependency index, and resolved
//! thresholds bundled behind one immutable facade.
//!
//! The engine holds no per-call state; every method takes a snapshot by
//! reference and returns a freshly built result. Share it across threads
//! behind an `Arc`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use cascade_core::constants;
use cascade_core::{
    AssessmentSnapshot, CascadeConfig, CascadeError, Catalog, DomainId, SkillId, Snapshot,
    Thresholds,
};

use crate::barriers::{self, Barrier};
use crate::health::{self, DomainHealthReport, SubAreaHealth};
use crate::index::{ChordMatrix, DependencyIndex};
use crate::path::{self, PathStep, PathSummary};
use crate::propagation::{self, CascadeImpact};
use crate::ranking::{self, ImpactRanking};
use crate::readiness::{self, LearnableSkill, SkillReadiness, SubAreaReadiness};
use crate::risks::{self, Risk};
use crate::simulation::{self, WhatIfComparison};

#[derive(Debug, Clone)]
pub struct CascadeEngine {
    catalog: Arc<Catalog>,
    index: Arc<DependencyIndex>,
    thresholds: Thresholds,
}

impl CascadeEngine {
    /// Engine with the compiled-in thresholds.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_thresholds(catalog, Thresholds::default())
    }

    pub fn with_thresholds(catalog: Arc<Catalog>, thresholds: Thresholds) -> Self {
        let index = Arc::new(DependencyIndex::build(&catalog));
        Self {
            catalog,
            index,
            thresholds,
        }
    }

    /// Resolve configuration for `root`, load the configured catalog, and
    /// apply any configured foundation domains.
    pub fn from_config(root: &Path) -> Result<Self, CascadeError> {
        let config = CascadeConfig::load(root)?;
        let mut catalog = Catalog::from_path(&config.catalog_path(root)?)?;
        let foundation = config.catalog.foundation_domains.as_slice();
        if !foundation.is_empty() {
            catalog = catalog.with_foundation_domains(foundation)?;
        }
        tracing::info!(
            version = constants::VERSION,
            root = %root.display(),
            domains = catalog.domain_count(),
            skills = catalog.skill_count(),
            "cascade engine initialized"
        );
        Ok(Self::with_thresholds(
            Arc::new(catalog),
            config.analysis.thresholds(),
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &DependencyIndex {
        &self.index
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    // --- Health ---

    pub fn domain_health(&self, snapshot: &AssessmentSnapshot) -> DomainHealthReport {
        health::compute_domain_health(&self.catalog, snapshot, &self.thresholds)
    }

    pub fn sub_area_health(&self, snapshot: &AssessmentSnapshot) -> Vec<SubAreaHealth> {
        health::compute_sub_area_health(&self.catalog, snapshot, &self.thresholds)
    }

    // --- Propagation & ranking ---

    pub fn propagate(&self, source: &str, snapshot: &AssessmentSnapshot) -> Vec<CascadeImpact> {
        let health = self.domain_health(snapshot);
        propagation::propagate_cascade(
            &self.catalog,
            &self.index,
            &health,
            source,
            &self.thresholds,
        )
    }

    pub fn impact_ranking(&self, snapshot: &AssessmentSnapshot) -> Vec<ImpactRanking> {
        let health = self.domain_health(snapshot);
        ranking::compute_impact_ranking(&self.catalog, &self.index, &health)
    }

    // --- Risks & barriers ---

    pub fn cascade_risks(&self, snapshot: &AssessmentSnapshot, history: &[Snapshot]) -> Vec<Risk> {
        risks::detect_cascade_risks(&self.catalog, &self.index, snapshot, history, &self.thresholds)
    }

    pub fn learning_barriers(
        &self,
        snapshot: &AssessmentSnapshot,
        history: &[Snapshot],
    ) -> Vec<Barrier> {
        barriers::detect_learning_barriers(
            &self.catalog,
            &self.index,
            snapshot,
            history,
            &self.thresholds,
        )
    }

    // --- Paths ---

    pub fn prerequisite_chain(&self, goal: &str) -> Vec<DomainId> {
        path::find_prerequisite_chain(&self.catalog, goal)
    }

    /// Chain to `goal` with per-step readiness.
    pub fn path_readiness(&self, goal: &str, snapshot: &AssessmentSnapshot) -> Vec<PathStep> {
        let chain = self.prerequisite_chain(goal);
        let health = self.domain_health(snapshot);
        path::compute_path_readiness(&self.catalog, &chain, &health)
    }

    pub fn path_summary(&self, goal: &str, snapshot: &AssessmentSnapshot) -> PathSummary {
        path::summarize_path(&self.path_readiness(goal, snapshot))
    }

    // --- Readiness ---

    pub fn sub_area_readiness(
        &self,
        sub_area_id: &str,
        snapshot: &AssessmentSnapshot,
    ) -> SubAreaReadiness {
        readiness::compute_sub_area_readiness(&self.catalog, &self.index, sub_area_id, snapshot)
    }

    pub fn all_sub_area_readiness(&self, snapshot: &AssessmentSnapshot) -> Vec<SubAreaReadiness> {
        readiness::compute_all_sub_area_readiness(&self.catalog, &self.index, snapshot)
    }

    pub fn skill_readiness(&self, skill_id: &str, snapshot: &AssessmentSnapshot) -> SkillReadiness {
        readiness::compute_skill_readiness(&self.catalog, &self.index, skill_id, snapshot)
    }

    pub fn ready_to_learn(&self, snapshot: &AssessmentSnapshot) -> Vec<LearnableSkill> {
        readiness::ready_to_learn(&self.catalog, snapshot)
    }

    // --- Simulation ---

    pub fn simulate(
        &self,
        base: &AssessmentSnapshot,
        overrides: &BTreeMap<DomainId, f64>,
    ) -> AssessmentSnapshot {
        simulation::simulate_cascade(&self.catalog, base, overrides)
    }

    pub fn compare_what_if(
        &self,
        base: &AssessmentSnapshot,
        overrides: &BTreeMap<DomainId, f64>,
    ) -> WhatIfComparison {
        simulation::compare_what_if(&self.catalog, &self.thresholds, base, overrides)
    }

    pub fn interpolate(
        &self,
        a: &AssessmentSnapshot,
        b: &AssessmentSnapshot,
        t: f64,
    ) -> BTreeMap<SkillId, f64> {
        simulation::interpolate_assessments(a, b, t)
    }

    pub fn chord_matrix(&self) -> &ChordMatrix {
        self.index.chord_matrix()
    }
}

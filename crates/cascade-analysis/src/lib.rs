//! # cascade-analysis
//!
//! The Cascade analytics engine. Every operation is a pure function over
//! the read-only [`Catalog`](cascade_core::Catalog), its derived
//! [`DependencyIndex`](index::DependencyIndex), and caller-supplied
//! assessment snapshots. [`CascadeEngine`](engine::CascadeEngine) bundles
//! the shared inputs behind one `Send + Sync` facade.

pub mod barriers;
pub mod engine;
pub mod events;
pub mod health;
pub mod index;
pub mod path;
pub mod propagation;
pub mod ranking;
pub mod readiness;
pub mod risks;
pub mod simulation;

pub use barriers::{detect_learning_barriers, Barrier, BarrierKind};
pub use engine::CascadeEngine;
pub use health::{
    compute_domain_health, compute_sub_area_health, DomainHealth, DomainHealthReport, HealthState,
    SubAreaHealth,
};
pub use index::{ChordMatrix, DependencyIndex};
pub use path::{
    compute_path_readiness, find_prerequisite_chain, summarize_path, PathStep, PathSummary,
    StepStatus,
};
pub use propagation::{propagate_cascade, CascadeImpact};
pub use ranking::{compute_impact_ranking, ImpactRanking};
pub use readiness::{
    compute_all_sub_area_readiness, compute_skill_readiness, compute_sub_area_readiness,
    ready_to_learn, LearnableSkill, SkillReadiness, SubAreaReadiness, UnmetPrerequisite,
};
pub use risks::{detect_cascade_risks, Risk, RiskKind};
pub use simulation::{
    compare_what_if, interpolate_assessments, simulate_cascade, DomainDelta, WhatIfComparison,
};

//! Health scoring over a dependency graph in topological order.

use cascade_core::catalog::{DependencyGraph, SkillEntry};
use cascade_core::constants::{
    BLOCKED_AVG, DEVELOPING_AVG, MAX_LEVEL, NEEDS_WORK_AVG, REQUIRED_MET_AVG,
    SUPPORTS_BASELINE_AVG,
};
use cascade_core::{AssessmentSnapshot, DependencyKind};

use super::types::HealthState;

/// Running totals over a set of leaf skills.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    pub sum: f64,
    pub assessed: usize,
    pub total: usize,
}

impl Tally {
    pub fn over(skills: &[SkillEntry], snapshot: &AssessmentSnapshot) -> Self {
        let mut tally = Self::default();
        for skill in skills {
            tally.total += 1;
            if let Some(level) = snapshot.level(skill.id.as_str()) {
                tally.assessed += 1;
                tally.sum += level.as_f64();
            }
        }
        tally
    }

    /// Mean over assessed skills, 0 when nothing is assessed.
    pub fn avg(&self) -> f64 {
        if self.assessed > 0 {
            self.sum / self.assessed as f64
        } else {
            0.0
        }
    }
}

/// Scored node, before it is labelled with its id.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeScore {
    pub avg: f64,
    pub assessed: usize,
    pub total: usize,
    pub health_pct: f64,
    pub raw_health_pct: f64,
    pub state: HealthState,
}

/// Score every node of `graph`. Prerequisites are scored before dependents so
/// `supports` adjustments always see a computed average.
pub(crate) fn score_graph<'c>(
    graph: &DependencyGraph,
    skills_of: impl Fn(usize) -> &'c [SkillEntry],
    snapshot: &AssessmentSnapshot,
    supports_weight: f64,
) -> Vec<NodeScore> {
    let mut scores: Vec<Option<NodeScore>> = vec![None; graph.node_count()];

    for &pos in graph.topological_order() {
        let tally = Tally::over(skills_of(pos), snapshot);
        let avg = tally.avg();
        let raw_health_pct = avg / MAX_LEVEL as f64;

        let mut required_met = true;
        let mut supports_adjustment = 0.0;
        for edge in graph.prerequisites(pos) {
            let Some(dep) = scores[edge.target] else {
                continue;
            };
            match edge.kind {
                DependencyKind::Requires => {
                    if !(dep.assessed > 0 && dep.avg >= REQUIRED_MET_AVG) {
                        required_met = false;
                    }
                }
                DependencyKind::Supports => {
                    supports_adjustment += (dep.avg - SUPPORTS_BASELINE_AVG) * supports_weight;
                }
            }
        }

        scores[pos] = Some(NodeScore {
            avg,
            assessed: tally.assessed,
            total: tally.total,
            health_pct: (raw_health_pct + supports_adjustment).clamp(0.0, 1.0),
            raw_health_pct,
            state: classify(tally.assessed, avg, required_met),
        });
    }

    scores.into_iter().map(|s| s.unwrap_or_else(NodeScore::empty)).collect()
}

impl NodeScore {
    fn empty() -> Self {
        Self {
            avg: 0.0,
            assessed: 0,
            total: 0,
            health_pct: 0.0,
            raw_health_pct: 0.0,
            state: HealthState::Locked,
        }
    }
}

pub(crate) fn classify(assessed: usize, avg: f64, required_met: bool) -> HealthState {
    if assessed == 0 {
        HealthState::Locked
    } else if !required_met && avg < BLOCKED_AVG {
        HealthState::Blocked
    } else if avg < NEEDS_WORK_AVG {
        HealthState::NeedsWork
    } else if avg < DEVELOPING_AVG {
        HealthState::Developing
    } else {
        HealthState::Mastered
    }
}

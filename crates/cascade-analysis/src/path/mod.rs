//! Path tracer: ordered prerequisite chain to a goal domain, with readiness
//! per step.

use serde::Serialize;

use cascade_core::catalog::DependencyGraph;
use cascade_core::constants::{PATH_CLOSE_AVG, PATH_MET_AVG};
use cascade_core::{Catalog, DomainId};

use crate::events;
use crate::health::{DomainHealthReport, HealthState};

/// How close a path step is to being met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Met,
    Close,
    Far,
}

impl StepStatus {
    pub fn from_avg(avg: f64) -> Self {
        if avg >= PATH_MET_AVG {
            Self::Met
        } else if avg >= PATH_CLOSE_AVG {
            Self::Close
        } else {
            Self::Far
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStep {
    /// 1-based position in the chain.
    pub step: usize,
    pub domain_id: DomainId,
    pub avg: f64,
    pub assessed: usize,
    pub total: usize,
    pub health_pct: f64,
    pub state: HealthState,
    pub status: StepStatus,
    /// Distance to the met threshold, never negative.
    pub gap: f64,
}

/// Counts over a traced path and the first step still to work on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSummary {
    pub total_steps: usize,
    pub met: usize,
    pub close: usize,
    pub far: usize,
    /// `met / total_steps`, 1 for an empty path.
    pub fraction_met: f64,
    pub next_focus: Option<DomainId>,
}

/// Every transitive prerequisite of `goal`, each before anything that
/// depends on it, ending with `goal`. Unknown goal → empty chain.
pub fn find_prerequisite_chain(catalog: &Catalog, goal: &str) -> Vec<DomainId> {
    let Some(start) = catalog.domain_position(goal) else {
        events::unknown_id("domain", goal);
        return Vec::new();
    };

    let graph = catalog.domain_graph();
    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::new();
    post_order(graph, start, &mut visited, &mut order);

    order
        .into_iter()
        .map(|pos| catalog.domains()[pos].id.clone())
        .collect()
}

/// Iterative DFS post-order over prerequisites, in declaration order.
fn post_order(graph: &DependencyGraph, start: usize, visited: &mut [bool], out: &mut Vec<usize>) {
    let mut stack = vec![(start, 0usize)];
    visited[start] = true;

    while let Some((node, next)) = stack.last_mut() {
        let prerequisites = graph.prerequisites(*node);
        if let Some(edge) = prerequisites.get(*next) {
            *next += 1;
            if !visited[edge.target] {
                visited[edge.target] = true;
                stack.push((edge.target, 0));
            }
        } else {
            out.push(*node);
            stack.pop();
        }
    }
}

/// Attach health and met/close/far status to each chain step.
pub fn compute_path_readiness(
    catalog: &Catalog,
    chain: &[DomainId],
    health: &DomainHealthReport,
) -> Vec<PathStep> {
    chain
        .iter()
        .filter_map(|id| {
            let pos = catalog.domain_position(id.as_str());
            if pos.is_none() {
                events::unknown_id("domain", id.as_str());
            }
            pos.and_then(|p| health.at(p))
        })
        .enumerate()
        .map(|(i, h)| PathStep {
            step: i + 1,
            domain_id: h.domain_id.clone(),
            avg: h.avg,
            assessed: h.assessed,
            total: h.total,
            health_pct: h.health_pct,
            state: h.state,
            status: StepStatus::from_avg(h.avg),
            gap: (PATH_MET_AVG - h.avg).max(0.0),
        })
        .collect()
}

pub fn summarize_path(steps: &[PathStep]) -> PathSummary {
    let count = |status| steps.iter().filter(|s| s.status == status).count();
    let met = count(StepStatus::Met);
    PathSummary {
        total_steps: steps.len(),
        met,
        close: count(StepStatus::Close),
        far: count(StepStatus::Far),
        fraction_met: if steps.is_empty() {
            1.0
        } else {
            met as f64 / steps.len() as f64
        },
        next_focus: steps
            .iter()
            .find(|s| s.status != StepStatus::Met)
            .map(|s| s.domain_id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_thresholds() {
        assert_eq!(StepStatus::from_avg(2.0), StepStatus::Met);
        assert_eq!(StepStatus::from_avg(1.5), StepStatus::Close);
        assert_eq!(StepStatus::from_avg(1.49), StepStatus::Far);
        assert_eq!(StepStatus::from_avg(0.0), StepStatus::Far);
    }

    #[test]
    fn empty_path_summary() {
        let summary = summarize_path(&[]);
        assert_eq!(summary.total_steps, 0);
        assert_eq!(summary.fraction_met, 1.0);
        assert!(summary.next_focus.is_none());
    }
}

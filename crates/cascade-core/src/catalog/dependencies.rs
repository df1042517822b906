//! Static dependency declarations at domain, sub-area, and skill level.
//!
//! Nodes are addressed by catalog position. Prerequisite lists keep
//! declaration order; the backing `petgraph` graph (prerequisite → dependent)
//! is used for DAG validation, topological order, and reachability.

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;
use crate::types::collections::SmallVec4;

/// Edge type: hard gate or soft numeric influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// The prerequisite gates the dependent.
    #[default]
    Requires,
    /// The prerequisite only nudges the dependent's health.
    Supports,
}

impl DependencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requires => "requires",
            Self::Supports => "supports",
        }
    }
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed edge to another node, by catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub target: usize,
    pub kind: DependencyKind,
}

/// One of the three dependency graphs.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    name: &'static str,
    prerequisites: Vec<SmallVec4<DependencyEdge>>,
    graph: DiGraph<usize, DependencyKind>,
    order: Vec<usize>,
}

impl DependencyGraph {
    /// Build and validate a graph over `labels.len()` nodes.
    ///
    /// `prerequisites[i]` lists the edges of node `i` in declaration order.
    /// Rejects self-loops and cycles; duplicate edges keep the first kind.
    pub fn build(
        name: &'static str,
        labels: &[&str],
        prerequisites: Vec<Vec<DependencyEdge>>,
    ) -> Result<Self, CatalogError> {
        let mut graph = DiGraph::with_capacity(labels.len(), 0);
        for pos in 0..labels.len() {
            graph.add_node(pos);
        }

        let mut deduped: Vec<SmallVec4<DependencyEdge>> = Vec::with_capacity(labels.len());
        for (dependent, edges) in prerequisites.into_iter().enumerate() {
            let mut kept: SmallVec4<DependencyEdge> = SmallVec4::new();
            for edge in edges {
                if edge.target == dependent {
                    return Err(CatalogError::CycleDetected {
                        graph: name,
                        members: vec![labels[dependent].to_string(), labels[dependent].to_string()],
                    });
                }
                if kept.iter().any(|e| e.target == edge.target) {
                    continue;
                }
                graph.add_edge(NodeIndex::new(edge.target), NodeIndex::new(dependent), edge.kind);
                kept.push(edge);
            }
            deduped.push(kept);
        }
        deduped.resize_with(labels.len(), SmallVec4::new);

        let order = match toposort(&graph, None) {
            Ok(order) => order.into_iter().map(|idx| graph[idx]).collect(),
            Err(_) => {
                let members = find_cycles(&graph)
                    .into_iter()
                    .next()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|pos| labels[pos].to_string())
                    .collect();
                return Err(CatalogError::CycleDetected { graph: name, members });
            }
        };

        Ok(Self {
            name,
            prerequisites: deduped,
            graph,
            order,
        })
    }

    /// Graph label ("domain", "sub-area", "skill").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared prerequisites of a node, in declaration order.
    pub fn prerequisites(&self, pos: usize) -> &[DependencyEdge] {
        self.prerequisites.get(pos).map(|e| e.as_slice()).unwrap_or(&[])
    }

    /// Every edge as `(dependent, edge)`, grouped by dependent in node order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, DependencyEdge)> + '_ {
        self.prerequisites
            .iter()
            .enumerate()
            .flat_map(|(dependent, edges)| edges.iter().map(move |e| (dependent, *e)))
    }

    /// Nodes ordered so every prerequisite precedes its dependents.
    pub fn topological_order(&self) -> &[usize] {
        &self.order
    }

    /// All nodes reachable through dependent edges, excluding `pos` itself.
    /// Returned in position order.
    pub fn transitive_dependents(&self, pos: usize) -> Vec<usize> {
        if pos >= self.graph.node_count() {
            return Vec::new();
        }
        let start = NodeIndex::new(pos);
        let mut bfs = Bfs::new(&self.graph, start);
        let mut reached = Vec::new();
        while let Some(node) = bfs.next(&self.graph) {
            if node != start {
                reached.push(self.graph[node]);
            }
        }
        reached.sort_unstable();
        reached
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Strongly connected components with more than one node (i.e. cycles).
fn find_cycles(graph: &DiGraph<usize, DependencyKind>) -> Vec<Vec<usize>> {
    tarjan_scc(graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| {
            let mut members: Vec<usize> = scc.into_iter().map(|idx| graph[idx]).collect();
            members.sort_unstable();
            members
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(target: usize) -> DependencyEdge {
        DependencyEdge {
            target,
            kind: DependencyKind::Requires,
        }
    }

    #[test]
    fn topological_order_puts_prerequisites_first() {
        // 0 requires 2, 1 requires 0.
        let graph = DependencyGraph::build(
            "domain",
            &["a", "b", "c"],
            vec![vec![req(2)], vec![req(0)], vec![]],
        )
        .unwrap();
        let order = graph.topological_order();
        let pos = |n: usize| order.iter().position(|&x| x == n).unwrap();
        assert!(pos(2) < pos(0));
        assert!(pos(0) < pos(1));
        assert_eq!(graph.transitive_dependents(2), vec![0, 1]);
    }

    #[test]
    fn cycles_are_rejected_with_members() {
        let err = DependencyGraph::build("domain", &["a", "b"], vec![vec![req(1)], vec![req(0)]])
            .unwrap_err();
        match err {
            CatalogError::CycleDetected { graph, members } => {
                assert_eq!(graph, "domain");
                assert_eq!(members, vec!["a".to_string(), "b".to_string()]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let err = DependencyGraph::build("skill", &["a"], vec![vec![req(0)]]).unwrap_err();
        assert!(matches!(err, CatalogError::CycleDetected { .. }));
    }

    #[test]
    fn duplicate_edges_keep_first_kind() {
        let graph = DependencyGraph::build(
            "domain",
            &["a", "b"],
            vec![
                vec![],
                vec![
                    req(0),
                    DependencyEdge {
                        target: 0,
                        kind: DependencyKind::Supports,
                    },
                ],
            ],
        )
        .unwrap();
        assert_eq!(graph.prerequisites(1), &[req(0)]);
        assert_eq!(graph.edge_count(), 1);
    }
}

//! Reverse-dependency index built once from the static catalog graphs.
//!
//! The catalog stores prerequisite lists (dependent → prerequisite). Most
//! analysis walks the other way, so this index inverts the three graphs and
//! precomputes transitive closures, skill counts, and tier groups.

pub mod chord;

use std::collections::BTreeMap;

use cascade_core::catalog::DependencyGraph;
use cascade_core::{Catalog, DependencyKind};

use crate::events;

pub use chord::ChordMatrix;

/// An inverted edge: `dependent` declares a prerequisite on the indexed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseEdge {
    pub dependent: usize,
    pub kind: DependencyKind,
}

/// Derived lookup structures, immutable and shareable across threads.
#[derive(Debug, Clone)]
pub struct DependencyIndex {
    domain_dependents: Vec<Vec<ReverseEdge>>,
    domain_transitive: Vec<Vec<usize>>,
    domain_skill_counts: Vec<usize>,
    domain_tiers: Vec<BTreeMap<u32, Vec<usize>>>,
    sub_area_dependents: Vec<Vec<ReverseEdge>>,
    sub_area_prerequisites: Vec<Vec<usize>>,
    skill_dependents: Vec<Vec<ReverseEdge>>,
    chord: ChordMatrix,
}

impl DependencyIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let domain_graph = catalog.domain_graph();
        let domain_count = catalog.domain_count();

        let domain_transitive = (0..domain_count)
            .map(|pos| domain_graph.transitive_dependents(pos))
            .collect();
        let domain_skill_counts = (0..domain_count)
            .map(|pos| catalog.skills_in_domain(pos).len())
            .collect();

        let mut domain_tiers = vec![BTreeMap::new(); domain_count];
        for skill in catalog.skills() {
            if let Some(tier) = catalog.skill_tier(skill.position) {
                domain_tiers[skill.domain]
                    .entry(tier)
                    .or_insert_with(Vec::new)
                    .push(skill.position);
            }
        }

        let sub_areas = catalog.sub_areas();
        let sub_area_graph = catalog.sub_area_graph();
        let sub_area_prerequisites = (0..sub_areas.len())
            .map(|pos| {
                sub_area_graph
                    .prerequisites(pos)
                    .iter()
                    .map(|edge| edge.target)
                    .collect()
            })
            .collect();

        let chord = ChordMatrix::build(catalog);
        events::index_built(
            domain_count,
            sub_areas.len(),
            catalog.skill_count(),
            chord.total(),
        );

        Self {
            domain_dependents: invert(domain_graph),
            domain_transitive,
            domain_skill_counts,
            domain_tiers,
            sub_area_dependents: invert(sub_area_graph),
            sub_area_prerequisites,
            skill_dependents: invert(catalog.skill_graph()),
            chord,
        }
    }

    /// Direct dependents of a domain with the edge kind, in catalog order.
    pub fn domain_dependents(&self, pos: usize) -> &[ReverseEdge] {
        slice_at(&self.domain_dependents, pos)
    }

    /// Every domain reachable through dependent edges, excluding `pos`.
    pub fn transitive_dependents(&self, pos: usize) -> &[usize] {
        slice_at(&self.domain_transitive, pos)
    }

    /// Number of leaf skills in a domain.
    pub fn domain_skill_count(&self, pos: usize) -> usize {
        self.domain_skill_counts.get(pos).copied().unwrap_or(0)
    }

    /// Tiered skills of a domain, grouped by ascending tier.
    pub fn domain_tiers(&self, pos: usize) -> Option<&BTreeMap<u32, Vec<usize>>> {
        self.domain_tiers.get(pos)
    }

    pub fn sub_area_dependents(&self, pos: usize) -> &[ReverseEdge] {
        slice_at(&self.sub_area_dependents, pos)
    }

    /// Declared prerequisite sub-areas of either edge kind, in declaration
    /// order. Same-domain declarations count; health gates on them too.
    pub fn sub_area_prerequisites(&self, sub_area: usize) -> &[usize] {
        slice_at(&self.sub_area_prerequisites, sub_area)
    }

    /// Skills that declare `pos` as a prerequisite.
    pub fn skill_dependents(&self, pos: usize) -> &[ReverseEdge] {
        slice_at(&self.skill_dependents, pos)
    }

    pub fn chord_matrix(&self) -> &ChordMatrix {
        &self.chord
    }
}

fn invert(graph: &DependencyGraph) -> Vec<Vec<ReverseEdge>> {
    let mut dependents = vec![Vec::new(); graph.node_count()];
    // `edges` is grouped by ascending dependent, so each list ends up in catalog order.
    for (dependent, edge) in graph.edges() {
        dependents[edge.target].push(ReverseEdge {
            dependent,
            kind: edge.kind,
        });
    }
    dependents
}

fn slice_at<T>(lists: &[Vec<T>], pos: usize) -> &[T] {
    lists.get(pos).map(Vec::as_slice).unwrap_or(&[])
}

//! Domain × domain adjacency summarizing edges across all three graph levels.

use serde::Serialize;

use cascade_core::catalog::DependencyGraph;
use cascade_core::{Catalog, DomainId};

/// `weights[i][j]` counts declared edges whose dependent lies in domain `i`
/// and whose prerequisite lies in domain `j`. The diagonal is always zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordMatrix {
    pub domains: Vec<DomainId>,
    pub weights: Vec<Vec<u32>>,
}

impl ChordMatrix {
    pub fn build(catalog: &Catalog) -> Self {
        let n = catalog.domain_count();
        let mut weights = vec![vec![0u32; n]; n];

        let sub_areas = catalog.sub_areas();
        let skills = catalog.skills();
        accumulate(&mut weights, catalog.domain_graph(), |pos| pos);
        accumulate(&mut weights, catalog.sub_area_graph(), |pos| sub_areas[pos].domain);
        accumulate(&mut weights, catalog.skill_graph(), |pos| skills[pos].domain);

        Self {
            domains: catalog.domains().iter().map(|d| d.id.clone()).collect(),
            weights,
        }
    }

    pub fn weight(&self, dependent: usize, prerequisite: usize) -> u32 {
        self.weights
            .get(dependent)
            .and_then(|row| row.get(prerequisite))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all cells.
    pub fn total(&self) -> u32 {
        self.weights.iter().flatten().sum()
    }
}

fn accumulate(
    weights: &mut [Vec<u32>],
    graph: &DependencyGraph,
    domain_of: impl Fn(usize) -> usize,
) {
    for (dependent, edge) in graph.edges() {
        let (i, j) = (domain_of(dependent), domain_of(edge.target));
        if i != j {
            weights[i][j] += 1;
        }
    }
}

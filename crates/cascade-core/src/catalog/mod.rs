//! The skill catalog: taxonomy plus the three dependency graphs.
//!
//! Loaded once at startup, validated, and read-only afterwards. All analysis
//! addresses domains, sub-areas, and skills by catalog position; the lookup
//! maps translate ids to positions.

pub mod dependencies;
pub mod document;
pub mod taxonomy;

use std::ops::Range;
use std::path::Path;

pub use dependencies::{DependencyEdge, DependencyGraph, DependencyKind};
pub use document::{CatalogDocument, EdgeDecl, SkillDependencyDecl};
pub use taxonomy::{Domain, Skill, SkillEntry, SkillGroup, SubArea};

use crate::constants::DEFAULT_FOUNDATION_DOMAIN_COUNT;
use crate::errors::CatalogError;
use crate::types::collections::{FxHashMap, FxHashSet};
use crate::types::{DomainId, SkillId, SubAreaId};

/// A sub-area flattened out of the tree, with its owning domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubAreaEntry {
    pub id: SubAreaId,
    pub name: String,
    /// Position of the owning domain.
    pub domain: usize,
    skills: Range<usize>,
}

/// Immutable, validated skill catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    domains: Vec<Domain>,
    sub_areas: Vec<SubAreaEntry>,
    skills: Vec<SkillEntry>,
    domain_skills: Vec<Range<usize>>,
    domain_positions: FxHashMap<DomainId, usize>,
    sub_area_positions: FxHashMap<SubAreaId, usize>,
    skill_positions: FxHashMap<SkillId, usize>,
    domain_graph: DependencyGraph,
    sub_area_graph: DependencyGraph,
    skill_graph: DependencyGraph,
    skill_tiers: Vec<Option<u32>>,
    foundation_domains: Vec<usize>,
}

impl Catalog {
    /// Parse and validate a JSON catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse {
                message: e.to_string(),
            })?;
        Self::from_document(document)
    }

    /// Read, parse, and validate a JSON catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    /// Validate a document and build the lookup structures.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let CatalogDocument {
            domains,
            domain_dependencies,
            sub_area_dependencies,
            skill_dependencies,
            foundation_domains,
        } = document;

        let mut sub_areas = Vec::new();
        let mut skills = Vec::new();
        let mut domain_skills = Vec::with_capacity(domains.len());
        let mut domain_positions = FxHashMap::default();
        let mut sub_area_positions = FxHashMap::default();
        let mut skill_positions = FxHashMap::default();
        let mut group_ids = FxHashSet::default();

        for (domain_pos, domain) in domains.iter().enumerate() {
            if domain_positions.insert(domain.id.clone(), domain_pos).is_some() {
                return Err(duplicate("domain", domain.id.as_str()));
            }
            let domain_start = skills.len();
            for sub_area in &domain.sub_areas {
                let sub_area_pos = sub_areas.len();
                if sub_area_positions
                    .insert(sub_area.id.clone(), sub_area_pos)
                    .is_some()
                {
                    return Err(duplicate("sub-area", sub_area.id.as_str()));
                }
                let sub_area_start = skills.len();
                for group in &sub_area.groups {
                    if !group_ids.insert(group.id.clone()) {
                        return Err(duplicate("skill group", group.id.as_str()));
                    }
                    for skill in &group.skills {
                        let position = skills.len();
                        if skill_positions.insert(skill.id.clone(), position).is_some() {
                            return Err(duplicate("skill", skill.id.as_str()));
                        }
                        skills.push(SkillEntry {
                            id: skill.id.clone(),
                            position,
                            domain: domain_pos,
                            sub_area: sub_area_pos,
                            group: group.id.clone(),
                        });
                    }
                }
                sub_areas.push(SubAreaEntry {
                    id: sub_area.id.clone(),
                    name: sub_area.name.clone(),
                    domain: domain_pos,
                    skills: sub_area_start..skills.len(),
                });
            }
            domain_skills.push(domain_start..skills.len());
        }

        let domain_labels: Vec<&str> = domains.iter().map(|d| d.id.as_str()).collect();
        let domain_graph = DependencyGraph::build(
            "domain",
            &domain_labels,
            resolve_edges("domain", &domain_positions, domains.len(), &domain_dependencies)?,
        )?;

        let sub_area_labels: Vec<&str> = sub_areas.iter().map(|s| s.id.as_str()).collect();
        let sub_area_graph = DependencyGraph::build(
            "sub-area",
            &sub_area_labels,
            resolve_edges(
                "sub-area",
                &sub_area_positions,
                sub_areas.len(),
                &sub_area_dependencies,
            )?,
        )?;

        let mut skill_tiers = vec![None; skills.len()];
        let mut skill_edge_decls = std::collections::BTreeMap::new();
        for (skill_id, decl) in &skill_dependencies {
            let pos = *skill_positions
                .get(skill_id.as_str())
                .ok_or_else(|| CatalogError::UnknownNode {
                    graph: "skill",
                    id: skill_id.clone(),
                })?;
            skill_tiers[pos] = decl.tier;
            skill_edge_decls.insert(skill_id.clone(), decl.prerequisites.clone());
        }
        let skill_labels: Vec<&str> = skills.iter().map(|s| s.id.as_str()).collect();
        let skill_graph = DependencyGraph::build(
            "skill",
            &skill_labels,
            resolve_edges("skill", &skill_positions, skills.len(), &skill_edge_decls)?,
        )?;

        let foundation_domains = if foundation_domains.is_empty() {
            (0..domains.len().min(DEFAULT_FOUNDATION_DOMAIN_COUNT)).collect()
        } else {
            resolve_foundation(&domain_positions, &foundation_domains)?
        };

        tracing::info!(
            event = "catalog_loaded",
            domains = domains.len(),
            sub_areas = sub_areas.len(),
            skills = skills.len(),
            domain_edges = domain_graph.edge_count(),
            sub_area_edges = sub_area_graph.edge_count(),
            skill_edges = skill_graph.edge_count(),
            "catalog loaded"
        );

        Ok(Self {
            domains,
            sub_areas,
            skills,
            domain_skills,
            domain_positions,
            sub_area_positions,
            skill_positions,
            domain_graph,
            sub_area_graph,
            skill_graph,
            skill_tiers,
            foundation_domains,
        })
    }

    /// Replace the foundation domains checked for regressions.
    pub fn with_foundation_domains<S: AsRef<str>>(
        mut self,
        ids: &[S],
    ) -> Result<Self, CatalogError> {
        self.foundation_domains = resolve_foundation(&self.domain_positions, ids)?;
        Ok(self)
    }

    // --- Domains ---

    /// Domains in catalog order.
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    pub fn domain(&self, id: &str) -> Option<&Domain> {
        self.domain_position(id).map(|pos| &self.domains[pos])
    }

    pub fn domain_position(&self, id: &str) -> Option<usize> {
        self.domain_positions.get(id).copied()
    }

    /// Leaf skills of a domain, in catalog order.
    pub fn skills_in_domain(&self, pos: usize) -> &[SkillEntry] {
        match self.domain_skills.get(pos) {
            Some(range) => &self.skills[range.clone()],
            None => &[],
        }
    }

    /// Foundation domain positions.
    pub fn foundation_domains(&self) -> &[usize] {
        &self.foundation_domains
    }

    pub fn domain_graph(&self) -> &DependencyGraph {
        &self.domain_graph
    }

    /// Domain positions with prerequisites before dependents.
    pub fn domain_order(&self) -> &[usize] {
        self.domain_graph.topological_order()
    }

    // --- Sub-areas ---

    /// Sub-areas in catalog order.
    pub fn sub_areas(&self) -> &[SubAreaEntry] {
        &self.sub_areas
    }

    pub fn sub_area(&self, id: &str) -> Option<&SubAreaEntry> {
        self.sub_area_position(id).map(|pos| &self.sub_areas[pos])
    }

    pub fn sub_area_position(&self, id: &str) -> Option<usize> {
        self.sub_area_positions.get(id).copied()
    }

    /// Leaf skills of a sub-area, in catalog order.
    pub fn skills_in_sub_area(&self, pos: usize) -> &[SkillEntry] {
        match self.sub_areas.get(pos) {
            Some(entry) => &self.skills[entry.skills.clone()],
            None => &[],
        }
    }

    pub fn sub_area_graph(&self) -> &DependencyGraph {
        &self.sub_area_graph
    }

    /// Sub-area positions with prerequisites before dependents.
    pub fn sub_area_order(&self) -> &[usize] {
        self.sub_area_graph.topological_order()
    }

    // --- Skills ---

    /// All leaf skills in catalog order.
    pub fn skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn skill_location(&self, id: &str) -> Option<&SkillEntry> {
        self.skill_positions.get(id).map(|&pos| &self.skills[pos])
    }

    /// Owning domain of a skill.
    pub fn domain_of_skill(&self, id: &str) -> Option<&Domain> {
        self.skill_location(id).map(|entry| &self.domains[entry.domain])
    }

    /// Declared complexity tier of a skill.
    pub fn skill_tier(&self, pos: usize) -> Option<u32> {
        self.skill_tiers.get(pos).copied().flatten()
    }

    pub fn skill_graph(&self) -> &DependencyGraph {
        &self.skill_graph
    }
}

fn duplicate(level: &'static str, id: &str) -> CatalogError {
    CatalogError::DuplicateId {
        level,
        id: id.to_string(),
    }
}

fn resolve_edges<K>(
    graph: &'static str,
    positions: &FxHashMap<K, usize>,
    node_count: usize,
    declared: &std::collections::BTreeMap<String, Vec<EdgeDecl>>,
) -> Result<Vec<Vec<DependencyEdge>>, CatalogError>
where
    K: std::hash::Hash + Eq + std::borrow::Borrow<str>,
{
    let mut prerequisites = vec![Vec::new(); node_count];
    for (from, edges) in declared {
        let dependent = *positions
            .get(from.as_str())
            .ok_or_else(|| CatalogError::UnknownNode {
                graph,
                id: from.clone(),
            })?;
        for edge in edges {
            let target = *positions
                .get(edge.id())
                .ok_or_else(|| CatalogError::UnknownReference {
                    graph,
                    from: from.clone(),
                    target: edge.id().to_string(),
                })?;
            prerequisites[dependent].push(DependencyEdge {
                target,
                kind: edge.kind(),
            });
        }
    }
    Ok(prerequisites)
}

fn resolve_foundation<S: AsRef<str>>(
    positions: &FxHashMap<DomainId, usize>,
    ids: &[S],
) -> Result<Vec<usize>, CatalogError> {
    ids.iter()
        .map(|id| {
            positions
                .get(id.as_ref())
                .copied()
                .ok_or_else(|| CatalogError::UnknownReference {
                    graph: "foundation",
                    from: "foundation_domains".to_string(),
                    target: id.as_ref().to_string(),
                })
        })
        .collect()
}

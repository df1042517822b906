//! Serialized catalog shape supplied by the catalog provider.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dependencies::DependencyKind;
use super::taxonomy::Domain;

/// The on-disk (JSON) catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Domains in catalog order.
    pub domains: Vec<Domain>,
    /// Domain id → prerequisite domains.
    #[serde(default)]
    pub domain_dependencies: BTreeMap<String, Vec<EdgeDecl>>,
    /// Sub-area id → prerequisite sub-areas.
    #[serde(default)]
    pub sub_area_dependencies: BTreeMap<String, Vec<EdgeDecl>>,
    /// Skill id → tier and prerequisite skills.
    #[serde(default)]
    pub skill_dependencies: BTreeMap<String, SkillDependencyDecl>,
    /// Domains checked for regressions.
    #[serde(default)]
    pub foundation_domains: Vec<String>,
}

/// A dependency edge: a bare id (implicitly `requires`) or a typed object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeDecl {
    Bare(String),
    Typed {
        id: String,
        #[serde(rename = "type", default)]
        kind: DependencyKind,
    },
}

impl EdgeDecl {
    pub fn id(&self) -> &str {
        match self {
            Self::Bare(id) => id,
            Self::Typed { id, .. } => id,
        }
    }

    pub fn kind(&self) -> DependencyKind {
        match self {
            Self::Bare(_) => DependencyKind::Requires,
            Self::Typed { kind, .. } => *kind,
        }
    }
}

/// Skill-level declaration: complexity tier plus prerequisites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDependencyDecl {
    #[serde(default)]
    pub tier: Option<u32>,
    #[serde(default)]
    pub prerequisites: Vec<EdgeDecl>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untyped_edges_default_to_requires() {
        let edges: Vec<EdgeDecl> =
            serde_json::from_str(r#"["d1", {"id": "d2", "type": "supports"}, {"id": "d3"}]"#)
                .unwrap();
        assert_eq!(edges[0].kind(), DependencyKind::Requires);
        assert_eq!(edges[1].kind(), DependencyKind::Supports);
        assert_eq!(edges[2].kind(), DependencyKind::Requires);
        assert_eq!(edges[2].id(), "d3");
    }
}

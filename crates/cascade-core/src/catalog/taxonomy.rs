//! The fixed skill taxonomy: Domain → SubArea → SkillGroup → Skill.

use serde::{Deserialize, Serialize};

use crate::types::{DomainId, SkillGroupId, SkillId, SubAreaId};

/// A leaf skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
}

/// A named group of related skills inside a sub-area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub id: SkillGroupId,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// A sub-area of a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubArea {
    pub id: SubAreaId,
    pub name: String,
    #[serde(default)]
    pub groups: Vec<SkillGroup>,
}

impl SubArea {
    /// Leaf skills in declaration order.
    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.groups.iter().flat_map(|g| g.skills.iter())
    }
}

/// A top-level developmental domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: DomainId,
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub sub_areas: Vec<SubArea>,
}

impl Domain {
    /// Leaf skills in declaration order.
    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.sub_areas.iter().flat_map(|sa| sa.skills())
    }
}

/// Where a leaf skill lives, by catalog position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub id: SkillId,
    /// Position of the skill in catalog order.
    pub position: usize,
    /// Position of the owning domain.
    pub domain: usize,
    /// Position of the owning sub-area (catalog-wide).
    pub sub_area: usize,
    pub group: SkillGroupId,
}

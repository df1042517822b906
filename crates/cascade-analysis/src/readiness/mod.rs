//! Readiness engine: how much of the prerequisite ground under a sub-area or
//! skill is already met.
//!
//! A prerequisite skill is met when it is assessed at level 2 or above.

use serde::Serialize;

use cascade_core::catalog::SkillEntry;
use cascade_core::constants::READINESS_MET_LEVEL;
use cascade_core::{AssessmentLevel, AssessmentSnapshot, Catalog, SkillId, SubAreaId};

use crate::events;
use crate::index::DependencyIndex;

/// A prerequisite skill that is not yet met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmetPrerequisite {
    pub skill_id: SkillId,
    pub tier: Option<u32>,
    /// Current level; `None` when never assessed.
    pub level: Option<AssessmentLevel>,
    pub sub_area_id: SubAreaId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAreaReadiness {
    pub sub_area_id: SubAreaId,
    /// Fraction of pooled prerequisite skills that are met, in `[0, 1]`.
    pub readiness: f64,
    pub met_skills: usize,
    pub total_skills: usize,
    pub prerequisite_sub_areas: Vec<SubAreaId>,
    /// Most foundational first: ascending tier, untiered last.
    pub unmet_prerequisites: Vec<UnmetPrerequisite>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillReadiness {
    pub skill_id: SkillId,
    pub readiness: f64,
    pub met_skills: usize,
    pub total_skills: usize,
    pub unmet_prerequisites: Vec<UnmetPrerequisite>,
    /// Skills that list this one as a prerequisite.
    pub unlocks: usize,
}

/// A skill whose prerequisites are all met but which is not met itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnableSkill {
    pub skill_id: SkillId,
    pub sub_area_id: SubAreaId,
    pub tier: Option<u32>,
    pub level: Option<AssessmentLevel>,
}

fn is_met(snapshot: &AssessmentSnapshot, skill: &SkillEntry) -> bool {
    snapshot
        .level(skill.id.as_str())
        .is_some_and(|l| l.value() >= READINESS_MET_LEVEL)
}

/// Pool `skills`, count the met ones, and list the rest by tier.
fn pool<'c>(
    catalog: &'c Catalog,
    skills: impl Iterator<Item = &'c SkillEntry>,
    snapshot: &AssessmentSnapshot,
) -> (usize, usize, Vec<UnmetPrerequisite>) {
    let mut met = 0;
    let mut total = 0;
    let mut unmet = Vec::new();
    for skill in skills {
        total += 1;
        if is_met(snapshot, skill) {
            met += 1;
        } else {
            unmet.push(UnmetPrerequisite {
                skill_id: skill.id.clone(),
                tier: catalog.skill_tier(skill.position),
                level: snapshot.level(skill.id.as_str()),
                sub_area_id: catalog.sub_areas()[skill.sub_area].id.clone(),
            });
        }
    }
    unmet.sort_by_key(|u| (u.tier.is_none(), u.tier));
    (met, total, unmet)
}

fn ratio(met: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        met as f64 / total as f64
    }
}

/// Readiness of one sub-area against every declared prerequisite sub-area.
///
/// The pool is the same edge set sub-area health gates on. No declared
/// prerequisites, or an unknown sub-area, gives readiness 1.
pub fn compute_sub_area_readiness(
    catalog: &Catalog,
    index: &DependencyIndex,
    sub_area_id: &str,
    snapshot: &AssessmentSnapshot,
) -> SubAreaReadiness {
    let Some(pos) = catalog.sub_area_position(sub_area_id) else {
        events::unknown_id("sub-area", sub_area_id);
        return SubAreaReadiness {
            sub_area_id: SubAreaId::new(sub_area_id),
            readiness: 1.0,
            met_skills: 0,
            total_skills: 0,
            prerequisite_sub_areas: Vec::new(),
            unmet_prerequisites: Vec::new(),
        };
    };

    let prerequisites = index.sub_area_prerequisites(pos);
    let skills = prerequisites
        .iter()
        .flat_map(|&p| catalog.skills_in_sub_area(p).iter());
    let (met, total, unmet) = pool(catalog, skills, snapshot);

    SubAreaReadiness {
        sub_area_id: catalog.sub_areas()[pos].id.clone(),
        readiness: ratio(met, total),
        met_skills: met,
        total_skills: total,
        prerequisite_sub_areas: prerequisites
            .iter()
            .map(|&p| catalog.sub_areas()[p].id.clone())
            .collect(),
        unmet_prerequisites: unmet,
    }
}

/// Readiness of every sub-area, in catalog order.
pub fn compute_all_sub_area_readiness(
    catalog: &Catalog,
    index: &DependencyIndex,
    snapshot: &AssessmentSnapshot,
) -> Vec<SubAreaReadiness> {
    catalog
        .sub_areas()
        .iter()
        .map(|s| compute_sub_area_readiness(catalog, index, s.id.as_str(), snapshot))
        .collect()
}

/// Readiness of one skill against its skill-level prerequisites.
pub fn compute_skill_readiness(
    catalog: &Catalog,
    index: &DependencyIndex,
    skill_id: &str,
    snapshot: &AssessmentSnapshot,
) -> SkillReadiness {
    let Some(entry) = catalog.skill_location(skill_id) else {
        events::unknown_id("skill", skill_id);
        return SkillReadiness {
            skill_id: SkillId::new(skill_id),
            readiness: 1.0,
            met_skills: 0,
            total_skills: 0,
            unmet_prerequisites: Vec::new(),
            unlocks: 0,
        };
    };

    let skills = catalog.skills();
    let prerequisites = catalog
        .skill_graph()
        .prerequisites(entry.position)
        .iter()
        .map(move |e| &skills[e.target]);
    let (met, total, unmet) = pool(catalog, prerequisites, snapshot);

    SkillReadiness {
        skill_id: entry.id.clone(),
        readiness: ratio(met, total),
        met_skills: met,
        total_skills: total,
        unmet_prerequisites: unmet,
        unlocks: index.skill_dependents(entry.position).len(),
    }
}

/// The learning frontier: unmet skills whose prerequisites are all met,
/// by ascending tier (untiered last), then catalog order.
pub fn ready_to_learn(catalog: &Catalog, snapshot: &AssessmentSnapshot) -> Vec<LearnableSkill> {
    let skills = catalog.skills();
    let graph = catalog.skill_graph();

    let mut frontier: Vec<LearnableSkill> = skills
        .iter()
        .filter(|s| !is_met(snapshot, s))
        .filter(|s| {
            graph
                .prerequisites(s.position)
                .iter()
                .all(|e| is_met(snapshot, &skills[e.target]))
        })
        .map(|s| LearnableSkill {
            skill_id: s.id.clone(),
            sub_area_id: catalog.sub_areas()[s.sub_area].id.clone(),
            tier: catalog.skill_tier(s.position),
            level: snapshot.level(s.id.as_str()),
        })
        .collect();

    frontier.sort_by_key(|s| (s.tier.is_none(), s.tier));
    frontier
}

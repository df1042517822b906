//! Test fixture loader for Cascade catalogs, snapshots, and histories.
//!
//! Provides the JSON sample catalog used across crates, a generator for
//! full-size synthetic catalogs, and helpers for building snapshots.

use std::path::PathBuf;

use cascade_core::catalog::{
    CatalogDocument, Domain, EdgeDecl, Skill, SkillDependencyDecl, SkillGroup, SubArea,
};
use cascade_core::{AssessmentLevel, AssessmentSnapshot, Catalog, DependencyKind, Snapshot};
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Relative path of the five-domain sample catalog.
pub const SAMPLE_CATALOG: &str = "catalogs/sample_catalog.json";

/// The five-domain sample catalog.
///
/// Domain graph: d2 requires d1; d3 requires d1 and is supported by d2;
/// d4 requires d2 and d3; d5 stands alone. Foundation domains: d1, d2.
pub fn sample_catalog() -> Catalog {
    let document: CatalogDocument = load_fixture(SAMPLE_CATALOG);
    Catalog::from_document(document).expect("sample catalog must validate")
}

/// The raw sample catalog document, for tests that mutate it.
pub fn sample_document() -> CatalogDocument {
    load_fixture(SAMPLE_CATALOG)
}

/// Rate every skill of a domain at one level.
pub fn rate_domain(
    catalog: &Catalog,
    mut snapshot: AssessmentSnapshot,
    domain_id: &str,
    level: u8,
) -> AssessmentSnapshot {
    let level = AssessmentLevel::new(level).expect("fixture level must be 0..=3");
    let pos = catalog
        .domain_position(domain_id)
        .unwrap_or_else(|| panic!("unknown fixture domain {domain_id}"));
    for skill in catalog.skills_in_domain(pos) {
        snapshot.insert(skill.id.clone(), level);
    }
    snapshot
}

/// Build a snapshot rating whole domains.
pub fn snapshot_with_domains(catalog: &Catalog, ratings: &[(&str, u8)]) -> AssessmentSnapshot {
    ratings
        .iter()
        .fold(AssessmentSnapshot::new(), |snapshot, (domain, level)| {
            rate_domain(catalog, snapshot, domain, *level)
        })
}

/// Build a snapshot from explicit `(skill_id, level)` pairs.
pub fn snapshot_from_pairs(pairs: &[(&str, u8)]) -> AssessmentSnapshot {
    pairs
        .iter()
        .fold(AssessmentSnapshot::new(), |snapshot, (id, level)| {
            snapshot.with_level(
                *id,
                AssessmentLevel::new(*level).expect("fixture level must be 0..=3"),
            )
        })
}

/// Wrap snapshots into a history spaced one week apart, oldest first.
pub fn history(snapshots: Vec<AssessmentSnapshot>) -> Vec<Snapshot> {
    let start: DateTime<Utc> = DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default();
    snapshots
        .into_iter()
        .enumerate()
        .map(|(i, assessments)| Snapshot::new(start + Duration::weeks(i as i64), assessments))
        .collect()
}

/// Generate a synthetic catalog document.
///
/// Domain `i` requires domain `i-1` and is supported by domain `i-2`.
/// Sub-area `j` of domain `i` requires sub-area `j` of domain `i-1`.
/// Skills are tiered by their index within the group, and each skill after
/// the first requires its predecessor.
pub fn generated_document(
    domains: usize,
    sub_areas_per_domain: usize,
    groups_per_sub_area: usize,
    skills_per_group: usize,
) -> CatalogDocument {
    let mut document = CatalogDocument::default();
    for d in 0..domains {
        let domain_id = format!("g{d}");
        let mut domain = Domain {
            id: domain_id.as_str().into(),
            number: d as u32 + 1,
            name: format!("Generated domain {d}"),
            sub_areas: Vec::new(),
        };
        for s in 0..sub_areas_per_domain {
            let sub_area_id = format!("{domain_id}s{s}");
            let mut sub_area = SubArea {
                id: sub_area_id.as_str().into(),
                name: format!("Sub-area {s}"),
                groups: Vec::new(),
            };
            for g in 0..groups_per_sub_area {
                let group_id = format!("{sub_area_id}g{g}");
                let mut group = SkillGroup {
                    id: group_id.as_str().into(),
                    name: format!("Group {g}"),
                    skills: Vec::new(),
                };
                for k in 0..skills_per_group {
                    let skill_id = format!("{domain_id}/{sub_area_id}/{group_id}/k{k}");
                    let prerequisites = if k > 0 {
                        vec![EdgeDecl::Bare(format!(
                            "{domain_id}/{sub_area_id}/{group_id}/k{}",
                            k - 1
                        ))]
                    } else {
                        Vec::new()
                    };
                    document.skill_dependencies.insert(
                        skill_id.clone(),
                        SkillDependencyDecl {
                            tier: Some(k as u32 / 2 + 1),
                            prerequisites,
                        },
                    );
                    group.skills.push(Skill {
                        id: skill_id.as_str().into(),
                        name: format!("Skill {k}"),
                    });
                }
                sub_area.groups.push(group);
            }
            if d > 0 {
                document
                    .sub_area_dependencies
                    .insert(sub_area_id.clone(), vec![EdgeDecl::Bare(format!("g{}s{s}", d - 1))]);
            }
            domain.sub_areas.push(sub_area);
        }
        let mut edges = Vec::new();
        if d > 0 {
            edges.push(EdgeDecl::Bare(format!("g{}", d - 1)));
        }
        if d > 1 {
            edges.push(EdgeDecl::Typed {
                id: format!("g{}", d - 2),
                kind: DependencyKind::Supports,
            });
        }
        if !edges.is_empty() {
            document.domain_dependencies.insert(domain_id, edges);
        }
        document.domains.push(domain);
    }
    document
}

/// A full-size catalog: 9 domains, 5 sub-areas each, 3 groups of 10 skills
/// (1350 leaf skills).
pub fn full_size_catalog() -> Catalog {
    Catalog::from_document(generated_document(9, 5, 3, 10))
        .expect("generated catalog must validate")
}

/// Deterministic pseudo-random snapshot over a catalog. Roughly one skill in
/// five is left unassessed.
pub fn patterned_snapshot(catalog: &Catalog, seed: u64) -> AssessmentSnapshot {
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    let mut snapshot = AssessmentSnapshot::new();
    for skill in catalog.skills() {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let roll = (state >> 33) % 5;
        if roll < 4 {
            snapshot.insert(skill.id.clone(), AssessmentLevel::clamped(roll as i64));
        }
    }
    snapshot
}

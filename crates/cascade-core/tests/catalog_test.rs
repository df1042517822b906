//! Catalog loading and validation tests.

use cascade_core::catalog::{CatalogDocument, DependencyKind, EdgeDecl};
use cascade_core::errors::CatalogError;
use cascade_core::Catalog;

const SAMPLE: &str = include_str!("../../test-fixtures/catalogs/sample_catalog.json");

fn sample_document() -> CatalogDocument {
    serde_json::from_str(SAMPLE).unwrap()
}

#[test]
fn sample_catalog_builds_lookups() {
    let catalog = Catalog::from_json_str(SAMPLE).unwrap();

    assert_eq!(catalog.domain_count(), 5);
    assert_eq!(catalog.sub_areas().len(), 9);
    assert_eq!(catalog.skill_count(), 20);

    let d1 = catalog.domain_position("d1").unwrap();
    assert_eq!(catalog.skills_in_domain(d1).len(), 5);
    assert_eq!(catalog.domain("d4").unwrap().name, "Play");
    assert!(catalog.domain("nope").is_none());

    let d3b = catalog.sub_area_position("d3b").unwrap();
    assert_eq!(catalog.sub_areas()[d3b].domain, catalog.domain_position("d3").unwrap());
    assert_eq!(catalog.skills_in_sub_area(d3b).len(), 2);

    let loc = catalog.skill_location("d2/d2b/d2b1/s2").unwrap();
    assert_eq!(loc.domain, catalog.domain_position("d2").unwrap());
    assert_eq!(loc.group.as_str(), "d2b1");
    assert_eq!(catalog.domain_of_skill("d2/d2b/d2b1/s2").unwrap().id.as_str(), "d2");
    assert_eq!(catalog.skill_tier(loc.position), Some(2));
}

#[test]
fn untyped_domain_edges_are_requires() {
    let catalog = Catalog::from_json_str(SAMPLE).unwrap();
    let d3 = catalog.domain_position("d3").unwrap();
    let edges = catalog.domain_graph().prerequisites(d3);
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].target, catalog.domain_position("d1").unwrap());
    assert_eq!(edges[0].kind, DependencyKind::Requires);
    assert_eq!(edges[1].kind, DependencyKind::Supports);
}

#[test]
fn domain_order_is_topological() {
    let catalog = Catalog::from_json_str(SAMPLE).unwrap();
    let order = catalog.domain_order();
    assert_eq!(order.len(), catalog.domain_count());
    let rank = |id: &str| {
        let pos = catalog.domain_position(id).unwrap();
        order.iter().position(|&p| p == pos).unwrap()
    };
    assert!(rank("d1") < rank("d2"));
    assert!(rank("d2") < rank("d3"));
    assert!(rank("d3") < rank("d4"));
}

#[test]
fn sub_area_order_puts_prerequisites_first() {
    let catalog = Catalog::from_json_str(SAMPLE).unwrap();
    let order = catalog.sub_area_order();
    assert_eq!(order.len(), catalog.sub_areas().len());
    let rank = |id: &str| {
        let pos = catalog.sub_area_position(id).unwrap();
        order.iter().position(|&p| p == pos).unwrap()
    };
    assert!(rank("d1a") < rank("d2a"));
    assert!(rank("d2a") < rank("d3a"));
    assert!(rank("d1b") < rank("d3b"));
    assert!(rank("d3b") < rank("d4a"));
    assert!(rank("d2b") < rank("d4a"));
}

#[test]
fn foundation_domains_come_from_document_or_default() {
    let catalog = Catalog::from_json_str(SAMPLE).unwrap();
    assert_eq!(catalog.foundation_domains(), &[0, 1]);

    let mut document = sample_document();
    document.foundation_domains.clear();
    let catalog = Catalog::from_document(document).unwrap();
    assert_eq!(catalog.foundation_domains(), &[0, 1]);

    let catalog = catalog.with_foundation_domains(&["d3"]).unwrap();
    assert_eq!(catalog.foundation_domains(), &[2]);
}

#[test]
fn duplicate_skill_ids_are_rejected() {
    let mut document = sample_document();
    let duplicate = document.domains[0].sub_areas[0].groups[0].skills[0].clone();
    document.domains[1].sub_areas[0].groups[0].skills.push(duplicate);
    match Catalog::from_document(document).unwrap_err() {
        CatalogError::DuplicateId { level, id } => {
            assert_eq!(level, "skill");
            assert_eq!(id, "d1/d1a/d1a1/s1");
        }
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn unknown_dependency_target_is_rejected() {
    let mut document = sample_document();
    document
        .domain_dependencies
        .insert("d5".to_string(), vec![EdgeDecl::Bare("d9".to_string())]);
    match Catalog::from_document(document).unwrap_err() {
        CatalogError::UnknownReference { graph, from, target } => {
            assert_eq!(graph, "domain");
            assert_eq!(from, "d5");
            assert_eq!(target, "d9");
        }
        other => panic!("expected UnknownReference, got {other:?}"),
    }
}

#[test]
fn dependencies_for_unknown_node_are_rejected() {
    let mut document = sample_document();
    document
        .sub_area_dependencies
        .insert("zz".to_string(), vec![EdgeDecl::Bare("d1a".to_string())]);
    assert!(matches!(
        Catalog::from_document(document).unwrap_err(),
        CatalogError::UnknownNode { graph: "sub-area", .. }
    ));
}

#[test]
fn domain_cycle_fails_fast() {
    let mut document = sample_document();
    document
        .domain_dependencies
        .insert("d1".to_string(), vec![EdgeDecl::Bare("d4".to_string())]);
    match Catalog::from_document(document).unwrap_err() {
        CatalogError::CycleDetected { graph, members } => {
            assert_eq!(graph, "domain");
            assert!(members.contains(&"d1".to_string()));
            assert!(members.contains(&"d4".to_string()));
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn skill_cycle_fails_fast() {
    let mut document = sample_document();
    document
        .skill_dependencies
        .get_mut("d1/d1a/d1a1/s1")
        .unwrap()
        .prerequisites
        .push(EdgeDecl::Bare("d1/d1a/d1a1/s3".to_string()));
    assert!(matches!(
        Catalog::from_document(document).unwrap_err(),
        CatalogError::CycleDetected { graph: "skill", .. }
    ));
}

#[test]
fn unknown_foundation_domain_is_rejected() {
    let mut document = sample_document();
    document.foundation_domains = vec!["d1".to_string(), "missing".to_string()];
    assert!(matches!(
        Catalog::from_document(document).unwrap_err(),
        CatalogError::UnknownReference { graph: "foundation", .. }
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Catalog::from_json_str("{ not json").unwrap_err(),
        CatalogError::Parse { .. }
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Catalog::from_path(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

use cascade_analysis::index::DependencyIndex;
use cascade_core::DependencyKind;
use test_fixtures::sample_catalog;

#[test]
fn domain_dependents_keep_edge_kinds() {
    let catalog = sample_catalog();
    let index = DependencyIndex::build(&catalog);

    let d1: Vec<(usize, DependencyKind)> = index
        .domain_dependents(0)
        .iter()
        .map(|e| (e.dependent, e.kind))
        .collect();
    assert_eq!(d1, vec![(1, DependencyKind::Requires), (2, DependencyKind::Requires)]);

    let d2: Vec<(usize, DependencyKind)> = index
        .domain_dependents(1)
        .iter()
        .map(|e| (e.dependent, e.kind))
        .collect();
    assert_eq!(d2, vec![(2, DependencyKind::Supports), (3, DependencyKind::Requires)]);

    assert!(index.domain_dependents(4).is_empty());
    assert!(index.domain_dependents(99).is_empty());
}

#[test]
fn transitive_dependents_and_skill_counts() {
    let catalog = sample_catalog();
    let index = DependencyIndex::build(&catalog);

    assert_eq!(index.transitive_dependents(0), &[1, 2, 3]);
    assert_eq!(index.transitive_dependents(2), &[3]);
    assert!(index.transitive_dependents(3).is_empty());
    assert_eq!(index.domain_skill_count(0), 5);
    assert_eq!(index.domain_skill_count(3), 3);
}

#[test]
fn sub_area_and_skill_reverse_lookups() {
    let catalog = sample_catalog();
    let index = DependencyIndex::build(&catalog);
    let d1b = catalog.sub_area_position("d1b").unwrap();
    let d3b = catalog.sub_area_position("d3b").unwrap();

    let dependents: Vec<&str> = index
        .sub_area_dependents(d1b)
        .iter()
        .map(|e| catalog.sub_areas()[e.dependent].id.as_str())
        .collect();
    assert_eq!(dependents, vec!["d3a", "d3b"]);
    assert_eq!(index.sub_area_prerequisites(d3b), &[0, 1]);

    let root = catalog.skill_location("d2/d2a/d2a1/s1").unwrap().position;
    let unlocked: Vec<&str> = index
        .skill_dependents(root)
        .iter()
        .map(|e| catalog.skills()[e.dependent].id.as_str())
        .collect();
    assert_eq!(unlocked, vec!["d2/d2a/d2a1/s2", "d3/d3a/d3a1/s1"]);
}

#[test]
fn tier_groups_cover_tiered_skills_only() {
    let catalog = sample_catalog();
    let index = DependencyIndex::build(&catalog);

    let d1 = index.domain_tiers(0).unwrap();
    assert_eq!(d1.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(d1[&1].len(), 2);
    assert!(index.domain_tiers(4).unwrap().is_empty());
}

#[test]
fn chord_matrix_counts_edges_across_levels() {
    let catalog = sample_catalog();
    let index = DependencyIndex::build(&catalog);
    let chord = index.chord_matrix();

    assert_eq!(chord.domains.len(), 5);
    assert_eq!(chord.weight(1, 0), 3);
    assert_eq!(chord.weight(2, 0), 4);
    assert_eq!(chord.weight(2, 1), 3);
    assert_eq!(chord.weight(3, 1), 2);
    assert_eq!(chord.weight(3, 2), 3);
    assert_eq!(chord.total(), 15);
    for i in 0..5 {
        assert_eq!(chord.weight(i, i), 0);
    }
    assert_eq!(chord.weight(0, 1), 0);
}

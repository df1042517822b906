//! Learning barrier detector tests.

use cascade_analysis::barriers::{
    detect_learning_barriers, detect_plateaus, detect_score_inversions, detect_uneven_profiles,
    Barrier, BarrierKind,
};
use cascade_analysis::index::DependencyIndex;
use cascade_core::{AssessmentSnapshot, Catalog, Snapshot, Thresholds};
use test_fixtures::{history, sample_catalog, snapshot_from_pairs, snapshot_with_domains};

fn barriers(catalog: &Catalog, snapshot: &AssessmentSnapshot, prior: &[Snapshot]) -> Vec<Barrier> {
    let index = DependencyIndex::build(catalog);
    detect_learning_barriers(catalog, &index, snapshot, prior, &Thresholds::default())
}

#[test]
fn empty_inputs_have_no_barriers() {
    let catalog = sample_catalog();
    assert!(barriers(&catalog, &AssessmentSnapshot::new(), &[]).is_empty());
}

#[test]
fn higher_tier_outscoring_lower_tier() {
    let catalog = sample_catalog();
    let index = DependencyIndex::build(&catalog);
    let snapshot = snapshot_from_pairs(&[
        ("d1/d1a/d1a1/s1", 0),
        ("d1/d1b/d1b1/s1", 0),
        ("d1/d1a/d1a1/s2", 3),
        ("d1/d1b/d1b1/s2", 3),
        ("d1/d1a/d1a1/s3", 3),
    ]);
    let found = detect_score_inversions(&catalog, &index, &snapshot, &Thresholds::default());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, BarrierKind::ScoreInversion);
    assert_eq!(found[0].severity, 3.0);
    assert_eq!(found[0].affected_domains[0].as_str(), "d1");
}

#[test]
fn tier_means_pool_every_assessed_member() {
    let catalog = sample_catalog();
    let index = DependencyIndex::build(&catalog);
    let thresholds = Thresholds::default();

    // Tier 1 mean 1.5, tier 2 mean 2.5.
    let snapshot = snapshot_from_pairs(&[
        ("d1/d1a/d1a1/s1", 1),
        ("d1/d1b/d1b1/s1", 2),
        ("d1/d1a/d1a1/s2", 3),
        ("d1/d1b/d1b1/s2", 2),
    ]);
    let found = detect_score_inversions(&catalog, &index, &snapshot, &thresholds);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, 1.0);
    assert!(found[0].description.contains("(2.5)"));

    // Tier 1 mean 2.0 against 2.5: a gap of exactly 0.5 stays quiet.
    let snapshot = snapshot_from_pairs(&[
        ("d1/d1a/d1a1/s1", 2),
        ("d1/d1b/d1b1/s1", 2),
        ("d1/d1a/d1a1/s2", 3),
        ("d1/d1b/d1b1/s2", 2),
    ]);
    assert!(detect_score_inversions(&catalog, &index, &snapshot, &thresholds).is_empty());
}

#[test]
fn score_inversion_skips_missing_tiers() {
    let catalog = sample_catalog();
    let index = DependencyIndex::build(&catalog);
    // No tier 2 skill of d3 is assessed, so tiers 1 and 3 are adjacent.
    let snapshot = snapshot_from_pairs(&[("d3/d3b/d3b1/s1", 1), ("d3/d3b/d3b1/s2", 3)]);
    let found = detect_score_inversions(&catalog, &index, &snapshot, &Thresholds::default());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].affected_domains[0].as_str(), "d3");
}

#[test]
fn untiered_domains_never_invert() {
    let catalog = sample_catalog();
    let index = DependencyIndex::build(&catalog);
    let snapshot = snapshot_from_pairs(&[("d5/d5a/d5a1/s1", 0), ("d5/d5b/d5b1/s2", 3)]);
    let barriers = detect_score_inversions(&catalog, &index, &snapshot, &Thresholds::default());
    assert!(barriers.is_empty());
}

#[test]
fn wide_prerequisite_gap() {
    let catalog = sample_catalog();
    let snapshot = snapshot_with_domains(&catalog, &[("d1", 1), ("d3", 3)]);
    let found = barriers(&catalog, &snapshot, &[]);

    let gaps: Vec<&Barrier> = found
        .iter()
        .filter(|b| b.kind == BarrierKind::PrerequisiteGap)
        .collect();
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].severity, 2.0);
    let affected: Vec<&str> = gaps[0].affected_domains.iter().map(|d| d.as_str()).collect();
    assert_eq!(affected, vec!["d3", "d1"]);

    let snapshot = snapshot_with_domains(&catalog, &[("d1", 2), ("d3", 2)]);
    assert!(barriers(&catalog, &snapshot, &[])
        .iter()
        .all(|b| b.kind != BarrierKind::PrerequisiteGap));
}

#[test]
fn spread_out_levels_are_uneven() {
    let catalog = sample_catalog();
    let snapshot = snapshot_from_pairs(&[
        ("d1/d1a/d1a1/s1", 1),
        ("d1/d1a/d1a1/s2", 3),
        ("d1/d1a/d1a1/s3", 1),
        ("d1/d1b/d1b1/s1", 3),
        ("d1/d1b/d1b1/s2", 1),
    ]);
    let found = detect_uneven_profiles(&catalog, &snapshot, &Thresholds::default());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, BarrierKind::UnevenProfile);
    assert!((found[0].severity - 0.96f64.sqrt()).abs() < 1e-9);
}

#[test]
fn zero_levels_do_not_count_toward_spread() {
    let catalog = sample_catalog();
    let snapshot = snapshot_from_pairs(&[
        ("d1/d1a/d1a1/s1", 0),
        ("d1/d1a/d1a1/s2", 0),
        ("d1/d1a/d1a1/s3", 3),
        ("d1/d1b/d1b1/s1", 3),
        ("d1/d1b/d1b1/s2", 1),
    ]);
    assert!(detect_uneven_profiles(&catalog, &snapshot, &Thresholds::default()).is_empty());
}

#[test]
fn flat_average_below_ceiling_is_a_plateau() {
    let catalog = sample_catalog();
    let flat = snapshot_with_domains(&catalog, &[("d1", 1)]);
    let prior = history(vec![flat.clone(), flat.clone(), flat.clone()]);
    let found = barriers(&catalog, &flat, &prior);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, BarrierKind::Plateau);
    assert_eq!(found[0].severity, 1.5);
}

#[test]
fn plateau_only_looks_at_the_recent_window() {
    let catalog = sample_catalog();
    let early = snapshot_with_domains(&catalog, &[("d1", 3)]);
    let flat = snapshot_with_domains(&catalog, &[("d1", 1)]);
    let prior = history(vec![early.clone(), early, flat.clone(), flat.clone(), flat.clone()]);
    let found = detect_plateaus(&catalog, &flat, &prior, &Thresholds::default());
    assert_eq!(found.len(), 1);
}

#[test]
fn plateau_requires_history_progress_and_room_to_grow() {
    let catalog = sample_catalog();
    let thresholds = Thresholds::default();
    let flat = snapshot_with_domains(&catalog, &[("d1", 1)]);
    assert!(detect_plateaus(&catalog, &flat, &[], &thresholds).is_empty());

    let moving = snapshot_with_domains(&catalog, &[("d1", 2)]);
    let prior = history(vec![flat.clone()]);
    assert!(detect_plateaus(&catalog, &moving, &prior, &thresholds).is_empty());

    let mastered = snapshot_with_domains(&catalog, &[("d1", 3)]);
    let prior = history(vec![mastered.clone()]);
    assert!(detect_plateaus(&catalog, &mastered, &prior, &thresholds).is_empty());

    let prior = history(vec![AssessmentSnapshot::new(), flat.clone()]);
    let window = Thresholds {
        plateau_window: 2,
        ..Thresholds::default()
    };
    assert!(detect_plateaus(&catalog, &flat, &prior, &window).is_empty());
}

#[test]
fn merged_barriers_are_sorted_by_severity() {
    let catalog = sample_catalog();
    let flat = snapshot_with_domains(&catalog, &[("d1", 1), ("d3", 3)]);
    let prior = history(vec![flat.clone()]);
    let found = barriers(&catalog, &flat, &prior);

    assert!(found.len() >= 2);
    assert!(found.windows(2).all(|w| w[0].severity >= w[1].severity));
    assert_eq!(serde_json::to_value(&found[0]).unwrap()["type"], "prerequisite-gap");
}

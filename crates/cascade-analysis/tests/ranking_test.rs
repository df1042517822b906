use cascade_analysis::health::compute_domain_health;
use cascade_analysis::index::DependencyIndex;
use cascade_analysis::ranking::{compute_impact_ranking, ImpactRanking};
use cascade_core::{AssessmentSnapshot, Catalog, Thresholds};
use test_fixtures::{sample_catalog, snapshot_with_domains};

fn rank(catalog: &Catalog, snapshot: &AssessmentSnapshot) -> Vec<ImpactRanking> {
    let thresholds = Thresholds::default();
    let index = DependencyIndex::build(catalog);
    let health = compute_domain_health(catalog, snapshot, &thresholds);
    compute_impact_ranking(catalog, &index, &health)
}

#[test]
fn foundational_domains_rank_first_when_unassessed() {
    let catalog = sample_catalog();
    let ranking = rank(&catalog, &AssessmentSnapshot::new());

    let order: Vec<&str> = ranking.iter().map(|r| r.domain_id.as_str()).collect();
    assert_eq!(order, vec!["d1", "d2", "d3", "d4", "d5"]);

    let skills: Vec<usize> = ranking.iter().map(|r| r.downstream_skills).collect();
    assert_eq!(skills, vec![11, 7, 3, 0, 0]);

    let d1_downstream: Vec<&str> =
        ranking[0].downstream_domains.iter().map(|d| d.as_str()).collect();
    assert_eq!(d1_downstream, vec!["d2", "d3", "d4"]);
    assert_eq!(ranking[0].leverage_score, 11.0);
}

#[test]
fn strong_domains_drop_and_ties_keep_catalog_order() {
    let catalog = sample_catalog();
    let snapshot = snapshot_with_domains(&catalog, &[("d1", 3)]);
    let ranking = rank(&catalog, &snapshot);

    let order: Vec<&str> = ranking.iter().map(|r| r.domain_id.as_str()).collect();
    assert_eq!(order, vec!["d2", "d3", "d1", "d4", "d5"]);
    assert_eq!(ranking[2].leverage_score, 0.0);
    assert_eq!(ranking[2].health_pct, 1.0);
}

#[test]
fn ranking_covers_every_domain_in_non_increasing_order() {
    let catalog = sample_catalog();
    let snapshot = snapshot_with_domains(&catalog, &[("d2", 2), ("d3", 1)]);
    let ranking = rank(&catalog, &snapshot);

    assert_eq!(ranking.len(), catalog.domain_count());
    assert!(ranking
        .windows(2)
        .all(|w| w[0].leverage_score >= w[1].leverage_score));
}

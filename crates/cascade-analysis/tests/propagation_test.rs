use cascade_analysis::health::compute_domain_health;
use cascade_analysis::index::DependencyIndex;
use cascade_analysis::propagation::propagate_cascade;
use cascade_core::{AssessmentSnapshot, Catalog, Thresholds};
use test_fixtures::{sample_catalog, snapshot_with_domains};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn propagate(
    catalog: &Catalog,
    snapshot: &AssessmentSnapshot,
    source: &str,
) -> Vec<(String, u32, f64, Vec<String>)> {
    let thresholds = Thresholds::default();
    let index = DependencyIndex::build(catalog);
    let health = compute_domain_health(catalog, snapshot, &thresholds);
    propagate_cascade(catalog, &index, &health, source, &thresholds)
        .into_iter()
        .map(|i| {
            (
                i.domain_id.to_string(),
                i.tier,
                i.impact_strength,
                i.path_from_source.iter().map(|d| d.to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn decays_per_tier_from_unassessed_source() {
    let catalog = sample_catalog();
    let impacts = propagate(&catalog, &AssessmentSnapshot::new(), "d1");

    let ids: Vec<&str> = impacts.iter().map(|i| i.0.as_str()).collect();
    assert_eq!(ids, vec!["d1", "d2", "d3", "d4"]);

    assert_eq!(impacts[0].1, 0);
    assert!(approx(impacts[0].2, 1.0));
    assert_eq!(impacts[1].1, 1);
    assert!(approx(impacts[1].2, 0.85));
    assert_eq!(impacts[2].1, 1);
    assert!(approx(impacts[2].2, 0.85));
    assert_eq!(impacts[3].1, 2);
    assert!(approx(impacts[3].2, 0.85 * 0.85));
    assert_eq!(impacts[3].3, vec!["d1", "d2", "d4"]);
}

#[test]
fn supports_edges_halve_the_impact() {
    let catalog = sample_catalog();
    let impacts = propagate(&catalog, &AssessmentSnapshot::new(), "d2");

    let d3 = impacts.iter().find(|i| i.0 == "d3").unwrap();
    assert!(approx(d3.2, 0.425));
    let d4 = impacts.iter().find(|i| i.0 == "d4").unwrap();
    assert!(approx(d4.2, 0.85));
    assert!(impacts.iter().all(|i| i.0 != "d1"));
}

#[test]
fn healthy_source_propagates_nothing() {
    let catalog = sample_catalog();
    let snapshot = snapshot_with_domains(&catalog, &[("d1", 3)]);
    let impacts = propagate(&catalog, &snapshot, "d1");
    assert_eq!(impacts.len(), 4);
    assert!(impacts.iter().all(|i| i.2 == 0.0));
}

#[test]
fn partial_health_scales_base_impact() {
    let catalog = sample_catalog();
    let snapshot = snapshot_with_domains(&catalog, &[("d1", 1)]);
    let impacts = propagate(&catalog, &snapshot, "d1");
    assert!(approx(impacts[0].2, 2.0 / 3.0));
    assert!(approx(impacts[1].2, 2.0 / 3.0 * 0.85));
}

#[test]
fn isolated_and_unknown_sources() {
    let catalog = sample_catalog();
    let impacts = propagate(&catalog, &AssessmentSnapshot::new(), "d5");
    assert_eq!(impacts.len(), 1);
    assert_eq!(impacts[0].3, vec!["d5"]);

    assert!(propagate(&catalog, &AssessmentSnapshot::new(), "d99").is_empty());
}

//! Health scoring and detector benchmarks over a full-size catalog.
//!
//! Run with: cargo bench -p cascade-analysis --bench health_bench

use criterion::{criterion_group, criterion_main, Criterion};

use cascade_analysis::barriers::detect_learning_barriers;
use cascade_analysis::health::compute_domain_health;
use cascade_analysis::index::DependencyIndex;
use cascade_analysis::ranking::compute_impact_ranking;
use cascade_analysis::risks::detect_cascade_risks;
use cascade_core::Thresholds;
use test_fixtures::{full_size_catalog, history, patterned_snapshot};

fn bench_health(c: &mut Criterion) {
    let catalog = full_size_catalog();
    let snapshot = patterned_snapshot(&catalog, 7);
    let thresholds = Thresholds::default();

    c.bench_function("domain_health_1350_skills", |b| {
        b.iter(|| compute_domain_health(&catalog, &snapshot, &thresholds))
    });

    c.bench_function("dependency_index_build", |b| {
        b.iter(|| DependencyIndex::build(&catalog))
    });
}

fn bench_detectors(c: &mut Criterion) {
    let catalog = full_size_catalog();
    let index = DependencyIndex::build(&catalog);
    let thresholds = Thresholds::default();
    let snapshot = patterned_snapshot(&catalog, 11);
    let prior = history((0..3).map(|seed| patterned_snapshot(&catalog, seed)).collect());

    c.bench_function("impact_ranking", |b| {
        b.iter(|| {
            let health = compute_domain_health(&catalog, &snapshot, &thresholds);
            compute_impact_ranking(&catalog, &index, &health)
        })
    });

    c.bench_function("cascade_risks_with_history", |b| {
        b.iter(|| detect_cascade_risks(&catalog, &index, &snapshot, &prior, &thresholds))
    });

    c.bench_function("learning_barriers_with_history", |b| {
        b.iter(|| detect_learning_barriers(&catalog, &index, &snapshot, &prior, &thresholds))
    });
}

criterion_group!(benches, bench_health, bench_detectors);
criterion_main!(benches);

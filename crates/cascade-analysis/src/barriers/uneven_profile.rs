//! Uneven profile: wide spread of non-zero levels within a domain.

use statrs::statistics::Statistics;

use cascade_core::{AssessmentSnapshot, Catalog, Thresholds};

use super::types::{Barrier, BarrierKind};

pub fn detect_uneven_profiles(
    catalog: &Catalog,
    snapshot: &AssessmentSnapshot,
    thresholds: &Thresholds,
) -> Vec<Barrier> {
    let mut barriers = Vec::new();
    for (pos, domain) in catalog.domains().iter().enumerate() {
        let levels: Vec<f64> = catalog
            .skills_in_domain(pos)
            .iter()
            .filter_map(|s| snapshot.level(s.id.as_str()))
            .map(|l| l.as_f64())
            .filter(|&v| v > 0.0)
            .collect();
        if levels.len() < thresholds.uneven_min_count {
            continue;
        }

        let std_dev = levels.iter().population_std_dev();
        if std_dev.is_finite() && std_dev > thresholds.uneven_std_dev_threshold {
            barriers.push(Barrier {
                kind: BarrierKind::UnevenProfile,
                severity: std_dev,
                affected_domains: vec![domain.id.clone()],
                description: format!(
                    "{}: levels vary widely (std dev {:.2} across {} skills)",
                    domain.name,
                    std_dev,
                    levels.len()
                ),
            });
        }
    }
    barriers
}

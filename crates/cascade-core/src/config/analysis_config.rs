//! Analysis configuration: overrides for the tuned engine constants.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Optional overrides. Every `None` falls back to the compiled constant.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Health adjustment per point of a `supports` prerequisite. Default: 0.05.
    pub supports_weight: Option<f64>,
    /// Per-tier decay of propagated impact. Default: 0.85.
    pub cascade_decay: Option<f64>,
    /// Impact multiplier across `supports` edges. Default: 0.5.
    pub supports_propagation_weight: Option<f64>,
    /// Inversion lead threshold. Default: 0.3.
    pub inversion_threshold: Option<f64>,
    /// Regression drop threshold. Default: 0.2.
    pub regression_threshold: Option<f64>,
    /// Bottleneck average ceiling. Default: 2.0.
    pub bottleneck_avg: Option<f64>,
    /// Direct dependents needed for a bottleneck. Default: 2.
    pub bottleneck_min_dependents: Option<usize>,
    /// Tier score-inversion threshold. Default: 0.5.
    pub score_inversion_threshold: Option<f64>,
    /// Prerequisite-gap threshold. Default: 0.8.
    pub prerequisite_gap_threshold: Option<f64>,
    /// Minimum non-zero ratings for uneven-profile checks. Default: 4.
    pub uneven_min_count: Option<usize>,
    /// Uneven-profile standard deviation threshold. Default: 0.9.
    pub uneven_std_dev_threshold: Option<f64>,
    /// Prior snapshots in the plateau window. Default: 3.
    pub plateau_window: Option<usize>,
    /// Plateau flatness range. Default: 0.15.
    pub plateau_range: Option<f64>,
    /// Plateau ceiling average. Default: 2.5.
    pub plateau_ceiling: Option<f64>,
}

impl AnalysisConfig {
    /// Resolve every override against the compiled defaults.
    pub fn thresholds(&self) -> Thresholds {
        let d = Thresholds::default();
        Thresholds {
            supports_weight: self.supports_weight.unwrap_or(d.supports_weight),
            cascade_decay: self.cascade_decay.unwrap_or(d.cascade_decay),
            supports_propagation_weight: self
                .supports_propagation_weight
                .unwrap_or(d.supports_propagation_weight),
            inversion_threshold: self.inversion_threshold.unwrap_or(d.inversion_threshold),
            regression_threshold: self.regression_threshold.unwrap_or(d.regression_threshold),
            bottleneck_avg: self.bottleneck_avg.unwrap_or(d.bottleneck_avg),
            bottleneck_min_dependents: self
                .bottleneck_min_dependents
                .unwrap_or(d.bottleneck_min_dependents),
            score_inversion_threshold: self
                .score_inversion_threshold
                .unwrap_or(d.score_inversion_threshold),
            prerequisite_gap_threshold: self
                .prerequisite_gap_threshold
                .unwrap_or(d.prerequisite_gap_threshold),
            uneven_min_count: self.uneven_min_count.unwrap_or(d.uneven_min_count),
            uneven_std_dev_threshold: self
                .uneven_std_dev_threshold
                .unwrap_or(d.uneven_std_dev_threshold),
            plateau_window: self.plateau_window.unwrap_or(d.plateau_window),
            plateau_range: self.plateau_range.unwrap_or(d.plateau_range),
            plateau_ceiling: self.plateau_ceiling.unwrap_or(d.plateau_ceiling),
        }
    }
}

/// Resolved numeric parameters handed to the analysis functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub supports_weight: f64,
    pub cascade_decay: f64,
    pub supports_propagation_weight: f64,
    pub inversion_threshold: f64,
    pub regression_threshold: f64,
    pub bottleneck_avg: f64,
    pub bottleneck_min_dependents: usize,
    pub score_inversion_threshold: f64,
    pub prerequisite_gap_threshold: f64,
    pub uneven_min_count: usize,
    pub uneven_std_dev_threshold: f64,
    pub plateau_window: usize,
    pub plateau_range: f64,
    pub plateau_ceiling: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            supports_weight: constants::SUPPORTS_WEIGHT,
            cascade_decay: constants::CASCADE_DECAY,
            supports_propagation_weight: constants::SUPPORTS_PROPAGATION_WEIGHT,
            inversion_threshold: constants::INVERSION_THRESHOLD,
            regression_threshold: constants::REGRESSION_THRESHOLD,
            bottleneck_avg: constants::BOTTLENECK_AVG,
            bottleneck_min_dependents: constants::BOTTLENECK_MIN_DEPENDENTS,
            score_inversion_threshold: constants::SCORE_INVERSION_THRESHOLD,
            prerequisite_gap_threshold: constants::PREREQUISITE_GAP_THRESHOLD,
            uneven_min_count: constants::UNEVEN_MIN_COUNT,
            uneven_std_dev_threshold: constants::UNEVEN_STD_DEV_THRESHOLD,
            plateau_window: constants::PLATEAU_WINDOW,
            plateau_range: constants::PLATEAU_RANGE,
            plateau_ceiling: constants::PLATEAU_CEILING,
        }
    }
}

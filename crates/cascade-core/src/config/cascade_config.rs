//! Top-level Cascade configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, CatalogConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CASCADE_*`)
/// 2. Project config (`cascade.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CascadeConfig {
    pub catalog: CatalogConfig,
    pub analysis: AnalysisConfig,
}

type F64Setter = fn(&mut AnalysisConfig, f64);
type UsizeSetter = fn(&mut AnalysisConfig, usize);

/// `CASCADE_ANALYSIS_*` variables carrying float overrides.
const F64_ENV_OVERRIDES: &[(&str, F64Setter)] = &[
    ("CASCADE_ANALYSIS_SUPPORTS_WEIGHT", |c, v| c.supports_weight = Some(v)),
    ("CASCADE_ANALYSIS_CASCADE_DECAY", |c, v| c.cascade_decay = Some(v)),
    ("CASCADE_ANALYSIS_SUPPORTS_PROPAGATION_WEIGHT", |c, v| {
        c.supports_propagation_weight = Some(v)
    }),
    ("CASCADE_ANALYSIS_INVERSION_THRESHOLD", |c, v| c.inversion_threshold = Some(v)),
    ("CASCADE_ANALYSIS_REGRESSION_THRESHOLD", |c, v| c.regression_threshold = Some(v)),
    ("CASCADE_ANALYSIS_BOTTLENECK_AVG", |c, v| c.bottleneck_avg = Some(v)),
    ("CASCADE_ANALYSIS_SCORE_INVERSION_THRESHOLD", |c, v| {
        c.score_inversion_threshold = Some(v)
    }),
    ("CASCADE_ANALYSIS_PREREQUISITE_GAP_THRESHOLD", |c, v| {
        c.prerequisite_gap_threshold = Some(v)
    }),
    ("CASCADE_ANALYSIS_UNEVEN_STD_DEV_THRESHOLD", |c, v| {
        c.uneven_std_dev_threshold = Some(v)
    }),
    ("CASCADE_ANALYSIS_PLATEAU_RANGE", |c, v| c.plateau_range = Some(v)),
    ("CASCADE_ANALYSIS_PLATEAU_CEILING", |c, v| c.plateau_ceiling = Some(v)),
];

/// `CASCADE_ANALYSIS_*` variables carrying count overrides.
const USIZE_ENV_OVERRIDES: &[(&str, UsizeSetter)] = &[
    ("CASCADE_ANALYSIS_BOTTLENECK_MIN_DEPENDENTS", |c, v| {
        c.bottleneck_min_dependents = Some(v)
    }),
    ("CASCADE_ANALYSIS_UNEVEN_MIN_COUNT", |c, v| c.uneven_min_count = Some(v)),
    ("CASCADE_ANALYSIS_PLATEAU_WINDOW", |c, v| c.plateau_window = Some(v)),
];

impl CascadeConfig {
    /// Load configuration for a project root.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            let content = std::fs::read_to_string(&project_config_path).map_err(|_| {
                ConfigError::FileNotFound {
                    path: project_config_path.display().to_string(),
                }
            })?;
            config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        tracing::debug!(
            root = %root.display(),
            catalog = ?config.catalog.path,
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Absolute catalog path for a project root.
    pub fn catalog_path(&self, root: &Path) -> Result<PathBuf, ConfigError> {
        let path = self
            .catalog
            .path
            .as_deref()
            .ok_or(ConfigError::MissingCatalogPath)?;
        let path = Path::new(path);
        Ok(if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        })
    }

    /// Validate the resolved numeric parameters.
    pub fn validate(config: &CascadeConfig) -> Result<(), ConfigError> {
        let t = config.analysis.thresholds();

        for (field, value) in [
            ("analysis.supports_weight", t.supports_weight),
            ("analysis.inversion_threshold", t.inversion_threshold),
            ("analysis.regression_threshold", t.regression_threshold),
            ("analysis.bottleneck_avg", t.bottleneck_avg),
            ("analysis.score_inversion_threshold", t.score_inversion_threshold),
            ("analysis.prerequisite_gap_threshold", t.prerequisite_gap_threshold),
            ("analysis.uneven_std_dev_threshold", t.uneven_std_dev_threshold),
            ("analysis.plateau_range", t.plateau_range),
            ("analysis.plateau_ceiling", t.plateau_ceiling),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite, non-negative number"));
            }
        }

        for (field, value) in [
            ("analysis.cascade_decay", t.cascade_decay),
            ("analysis.supports_propagation_weight", t.supports_propagation_weight),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(invalid(field, "must be in (0.0, 1.0]"));
            }
        }

        if t.plateau_window == 0 {
            return Err(invalid("analysis.plateau_window", "must be at least 1"));
        }
        if t.uneven_min_count < 2 {
            return Err(invalid("analysis.uneven_min_count", "must be at least 2"));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `CASCADE_CATALOG_PATH`, `CASCADE_ANALYSIS_INVERSION_THRESHOLD`, etc.
    fn apply_env_overrides(config: &mut CascadeConfig) {
        if let Ok(val) = std::env::var("CASCADE_CATALOG_PATH") {
            config.catalog.path = Some(val);
        }
        if let Ok(val) = std::env::var("CASCADE_FOUNDATION_DOMAINS") {
            config.catalog.foundation_domains = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        for (key, set) in F64_ENV_OVERRIDES {
            if let Ok(val) = std::env::var(key) {
                match val.parse::<f64>() {
                    Ok(v) => set(&mut config.analysis, v),
                    Err(_) => {
                        tracing::warn!(key = %key, value = %val, "ignoring unparsable override")
                    }
                }
            }
        }
        for (key, set) in USIZE_ENV_OVERRIDES {
            if let Ok(val) = std::env::var(key) {
                match val.parse::<usize>() {
                    Ok(v) => set(&mut config.analysis, v),
                    Err(_) => {
                        tracing::warn!(key = %key, value = %val, "ignoring unparsable override")
                    }
                }
            }
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

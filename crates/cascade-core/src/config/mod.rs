//! Configuration system for Cascade.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod analysis_config;
pub mod cascade_config;
pub mod catalog_config;

pub use analysis_config::{AnalysisConfig, Thresholds};
pub use cascade_config::CascadeConfig;
pub use catalog_config::CatalogConfig;

//! # cascade-core
//!
//! Foundation crate for the Cascade skill analytics engine.
//! Defines identifiers, the skill taxonomy and its dependency declarations,
//! assessment snapshots, configuration, errors, constants, and tracing setup.
//! The analysis crate depends on this.

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use assessment::{is_assessed, AssessmentLevel, AssessmentSnapshot, Snapshot};
pub use catalog::{Catalog, DependencyKind};
pub use config::{AnalysisConfig, CascadeConfig, Thresholds};
pub use errors::{CascadeError, CatalogError, ConfigError, SnapshotError};
pub use types::{DomainId, SkillGroupId, SkillId, SubAreaId};

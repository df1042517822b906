//! Catalog source configuration.

use serde::{Deserialize, Serialize};

/// Where the catalog comes from and which domains anchor regression checks.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the JSON catalog document, relative to the project root.
    pub path: Option<String>,
    /// Foundation domains checked for regressions. Overrides the catalog's own list.
    #[serde(default)]
    pub foundation_domains: Vec<String>,
}

//! Catalog loading and validation errors.
//!
//! A malformed catalog is a startup-time configuration error; the engine
//! refuses to build rather than recover at analysis time.

use super::error_code::{self, CascadeErrorCode};

/// Errors raised while loading or validating the skill catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {message}")]
    Io { path: String, message: String },

    #[error("Catalog parse error: {message}")]
    Parse { message: String },

    #[error("Duplicate {level} id: {id}")]
    DuplicateId { level: &'static str, id: String },

    #[error("{graph} dependencies declared for unknown id {id}")]
    UnknownNode { graph: &'static str, id: String },

    #[error("{graph} dependency of {from} references unknown id {target}")]
    UnknownReference {
        graph: &'static str,
        from: String,
        target: String,
    },

    #[error("Cycle detected in {graph} dependency graph: {}", members.join(" -> "))]
    CycleDetected {
        graph: &'static str,
        members: Vec<String>,
    },
}

impl CascadeErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CycleDetected { .. } => error_code::CATALOG_CYCLE,
            _ => error_code::CATALOG_ERROR,
        }
    }
}

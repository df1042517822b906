//! Error handling for Cascade.
//! One error enum per subsystem, `thiserror` only.
//!
//! Analysis operations are total and never fail; only loading a catalog,
//! loading configuration, and decoding snapshots return errors.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod snapshot_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::CascadeErrorCode;
pub use snapshot_error::SnapshotError;

/// Top-level error aggregating the subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CascadeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

impl CascadeErrorCode for CascadeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Snapshot(e) => e.error_code(),
        }
    }
}

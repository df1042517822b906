//! CascadeErrorCode trait for structured error reporting to consumers.

/// Every error enum implements this to provide a stable error code string
/// that UI and report collaborators can match on.
pub trait CascadeErrorCode {
    /// Returns the error code string (e.g., "CATALOG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const CATALOG_CYCLE: &str = "CATALOG_CYCLE";
pub const SNAPSHOT_ERROR: &str = "SNAPSHOT_ERROR";

//! Shared constants for the Cascade engine.
//!
//! The numeric values are empirically tuned. They are the compiled defaults
//! behind `AnalysisConfig::thresholds()` and must not drift.

/// Cascade version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Assessment scale ----

/// Highest assessment level ("solid").
pub const MAX_LEVEL: u8 = 3;

/// Raw value that decodes to "not assessed" in stored snapshots.
pub const NOT_ASSESSED: i64 = -1;

/// Prefix marking snapshot metadata keys that never enter scoring.
pub const METADATA_PREFIX: &str = "_";

// ---- Health scoring ----

/// Average a `requires` prerequisite must reach to count as met.
pub const REQUIRED_MET_AVG: f64 = 2.0;

/// Baseline subtracted from a `supports` prerequisite's average.
pub const SUPPORTS_BASELINE_AVG: f64 = 2.0;

/// Per-point health adjustment contributed by a `supports` prerequisite.
pub const SUPPORTS_WEIGHT: f64 = 0.05;

/// Below this average a domain with unmet requirements is blocked.
pub const BLOCKED_AVG: f64 = 2.0;

/// Below this average a domain needs work.
pub const NEEDS_WORK_AVG: f64 = 1.5;

/// Below this average a domain is developing; at or above it is mastered.
pub const DEVELOPING_AVG: f64 = 2.5;

// ---- Cascade propagation ----

/// Per-tier decay applied to propagated impact.
pub const CASCADE_DECAY: f64 = 0.85;

/// Impact multiplier when the connecting edge is `supports`.
pub const SUPPORTS_PROPAGATION_WEIGHT: f64 = 0.5;

/// Impact multiplier when the connecting edge is `requires`.
pub const REQUIRES_PROPAGATION_WEIGHT: f64 = 1.0;

// ---- Risk detection ----

/// Minimum lead of a dependent over its prerequisite to flag an inversion.
pub const INVERSION_THRESHOLD: f64 = 0.3;

/// Minimum drop in a foundation domain's average to flag a regression.
pub const REGRESSION_THRESHOLD: f64 = 0.2;

/// Averages below this make a well-connected domain a bottleneck.
pub const BOTTLENECK_AVG: f64 = 2.0;

/// Direct dependents needed before a weak domain counts as a bottleneck.
pub const BOTTLENECK_MIN_DEPENDENTS: usize = 2;

// ---- Barrier detection ----

/// Minimum lead of a higher tier over the adjacent lower tier.
pub const SCORE_INVERSION_THRESHOLD: f64 = 0.5;

/// Minimum lead of a dependent over its prerequisite to flag a gap.
pub const PREREQUISITE_GAP_THRESHOLD: f64 = 0.8;

/// Minimum non-zero ratings before profile spread is considered.
pub const UNEVEN_MIN_COUNT: usize = 4;

/// Population standard deviation above which a profile is uneven.
pub const UNEVEN_STD_DEV_THRESHOLD: f64 = 0.9;

/// Number of prior snapshots inspected for a plateau.
pub const PLATEAU_WINDOW: usize = 3;

/// Maximum spread of averages that still counts as flat.
pub const PLATEAU_RANGE: f64 = 0.15;

/// Plateaus are only reported while the earliest average is below this.
pub const PLATEAU_CEILING: f64 = 2.5;

// ---- Readiness and paths ----

/// Level a prerequisite skill must reach to count as met.
pub const READINESS_MET_LEVEL: u8 = 2;

/// Average at which a path step is met.
pub const PATH_MET_AVG: f64 = 2.0;

/// Average at which a path step is close.
pub const PATH_CLOSE_AVG: f64 = 1.5;

/// Number of foundation domains used when the catalog declares none.
pub const DEFAULT_FOUNDATION_DOMAIN_COUNT: usize = 2;

/// Project config file name.
pub const CONFIG_FILE_NAME: &str = "cascade.toml";

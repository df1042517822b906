//! Structured tracing events for the analysis engine.
//!
//! Every event carries an `event = "..."` field so log pipelines can filter
//! on it without parsing messages.

/// Span and event names as constants for programmatic use.
pub mod names {
    pub const INDEX_BUILT: &str = "index_built";
    pub const HEALTH_COMPUTED: &str = "health_computed";
    pub const CASCADE_PROPAGATED: &str = "cascade_propagated";
    pub const RISKS_DETECTED: &str = "risks_detected";
    pub const BARRIERS_DETECTED: &str = "barriers_detected";
    pub const UNKNOWN_ID: &str = "unknown_id";
    pub const OVERRIDE_IGNORED: &str = "override_ignored";
}

pub fn index_built(domains: usize, sub_areas: usize, skills: usize, chord_edges: u32) {
    tracing::debug!(
        event = names::INDEX_BUILT,
        domains,
        sub_areas,
        skills,
        chord_edges,
        "dependency index built"
    );
}

pub fn health_computed(scope: &'static str, nodes: usize, assessed_nodes: usize) {
    tracing::trace!(
        event = names::HEALTH_COMPUTED,
        scope,
        nodes,
        assessed_nodes,
        "health computed"
    );
}

pub fn cascade_propagated(source: &str, reached: usize, max_tier: u32) {
    tracing::debug!(
        event = names::CASCADE_PROPAGATED,
        source,
        reached,
        max_tier,
        "cascade propagated"
    );
}

pub fn risks_detected(inversions: usize, regressions: usize, bottlenecks: usize) {
    tracing::debug!(
        event = names::RISKS_DETECTED,
        inversions,
        regressions,
        bottlenecks,
        "cascade risks detected"
    );
}

pub fn barriers_detected(total: usize, history_points: usize) {
    tracing::debug!(
        event = names::BARRIERS_DETECTED,
        total,
        history_points,
        "learning barriers detected"
    );
}

/// An id passed by a caller does not exist in the catalog.
pub fn unknown_id(kind: &'static str, id: &str) {
    tracing::debug!(event = names::UNKNOWN_ID, kind, id, "unknown id, using neutral default");
}

/// A what-if override was dropped.
pub fn override_ignored(domain: &str, reason: &'static str) {
    tracing::warn!(event = names::OVERRIDE_IGNORED, domain, reason, "what-if override ignored");
}

//! Counterfactual snapshots and display interpolation.

pub mod interpolate;
pub mod what_if;

pub use interpolate::interpolate_assessments;
pub use what_if::{compare_what_if, simulate_cascade, DomainDelta, WhatIfComparison};

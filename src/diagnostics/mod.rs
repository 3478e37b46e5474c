//! Diagnostics data model returned by the estimator and printed by the demos.
//!
//! `EstimateReport` is the entry point: it bundles the outcome of a single
//! estimation with per-stage counters and wall-clock timings. Everything here
//! serializes to camelCase JSON.

pub mod report;
pub mod timing;

pub use report::{EstimateOutcome, EstimateReport, NoEstimateReason};
pub use timing::{StageTiming, TimingBreakdown};

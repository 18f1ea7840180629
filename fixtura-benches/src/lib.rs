//! Shared helpers for the fixtura Criterion benchmarks.

pub mod params;
pub mod workload;

//! Occupancy analysis logic and orchestration.
//!
//! This module is the hub of the core: per-region statistics, the two
//! classification strategies, and the `analyze` entry point that ties them
//! together.

/// Batch analysis orchestration
pub mod analyze;

/// Classification strategies and the `Classifier` seam
pub mod classify;

/// Per-region image statistics
pub mod stats;

pub use analyze::analyze;

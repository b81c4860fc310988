//! Occupancy classification strategies.
//!
//! Two non-interchangeable strategies share the [`Classifier`] seam: the
//! weighted heuristic produces a ternary FREE / OCCUPIED / UNCLEAR decision
//! with scores, the pixel-count rule is strictly binary. Callers select one
//! via [`Strategy`]; the two semantics are deliberately never merged.

use serde::{Deserialize, Serialize};

use super::stats::RegionStatistics;
use crate::config::{HeuristicConfig, PixelCountConfig, SCORE_SPAN};

/// Occupancy status of a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotStatus {
    Free,
    Occupied,
    Unclear,
}

/// Decision for one slot, with the free/occupied scores that produced it.
///
/// Under the weighted strategy both scores are meaningful values in [0, 1]
/// (weighted sums of normalized terms). The pixel-count strategy is binary
/// and reports degenerate 1.0/0.0 scores for the winning side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub status: SlotStatus,
    pub free_score: f64,
    pub occ_score: f64,
}

impl Classification {
    /// Confidence of the decision: the winning score clamped to [0, 1], or
    /// the larger of the two when the status is Unclear.
    pub fn confidence(&self) -> f64 {
        let score = match self.status {
            SlotStatus::Free => self.free_score,
            SlotStatus::Occupied => self.occ_score,
            SlotStatus::Unclear => self.free_score.max(self.occ_score),
        };
        score.clamp(0.0, 1.0)
    }
}

/// Strategy selector for `analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Ternary weighted-score heuristic over std/brightness/edge density
    Weighted,
    /// Binary foreground-pixel count against a fixed threshold
    PixelCount,
}

/// Common classification capability shared by both strategies.
///
/// Classification is a pure function of the statistics and the configured
/// thresholds; implementations hold no mutable state.
pub trait Classifier {
    fn classify(&self, stats: &RegionStatistics) -> Classification;
}

/// Weighted-score heuristic classifier.
///
/// The free score rewards low texture, high brightness, and low edge
/// density; the occupied score rewards the opposite. FREE is checked first
/// by contract: with a misconfigured setup both scores can clear their
/// thresholds at once, and the priority order is part of the decision, not
/// incidental.
pub struct WeightedClassifier {
    config: HeuristicConfig,
}

impl WeightedClassifier {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    fn scores(&self, stats: &RegionStatistics) -> (f64, f64) {
        let c = &self.config;

        let free_score = c.std_weight
            * ((c.empty_std_max - stats.std_dev) / c.empty_std_max).max(0.0)
            + c.brightness_weight
                * ((stats.mean_brightness - c.empty_brightness_min) / SCORE_SPAN).max(0.0)
            + c.edge_weight * (1.0 - stats.edge_density);

        let occ_score = c.std_weight * ((stats.std_dev - c.occ_std_min) / SCORE_SPAN).max(0.0)
            + c.brightness_weight
                * ((c.occ_brightness_max - stats.mean_brightness) / c.occ_brightness_max).max(0.0)
            + c.edge_weight * stats.edge_density;

        (free_score, occ_score)
    }
}

impl Classifier for WeightedClassifier {
    fn classify(&self, stats: &RegionStatistics) -> Classification {
        let (free_score, occ_score) = self.scores(stats);

        let status = if free_score > self.config.free_threshold {
            SlotStatus::Free
        } else if occ_score > self.config.occ_threshold {
            SlotStatus::Occupied
        } else {
            SlotStatus::Unclear
        };

        Classification {
            status,
            free_score,
            occ_score,
        }
    }
}

/// Binary pixel-count classifier.
///
/// FREE iff the foreground count is strictly below the threshold; a count
/// exactly at the threshold is OCCUPIED. There is no UNCLEAR state in this
/// strategy.
pub struct PixelCountClassifier {
    config: PixelCountConfig,
}

impl PixelCountClassifier {
    pub fn new(config: PixelCountConfig) -> Self {
        Self { config }
    }
}

impl Classifier for PixelCountClassifier {
    fn classify(&self, stats: &RegionStatistics) -> Classification {
        if stats.foreground_pixels < self.config.count_threshold {
            Classification {
                status: SlotStatus::Free,
                free_score: 1.0,
                occ_score: 0.0,
            }
        } else {
            Classification {
                status: SlotStatus::Occupied,
                free_score: 0.0,
                occ_score: 1.0,
            }
        }
    }
}

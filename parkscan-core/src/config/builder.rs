//! Builder pattern for CoreConfig.
//!
//! Provides a fluent API for assembling a [`CoreConfig`] from individual
//! threshold overrides, validating the result at construction time so that
//! out-of-range values are rejected before any analysis runs.

use super::{CoreConfig, DetectionConfig, HeuristicConfig, PixelCountConfig};
use crate::error::CoreResult;

/// Builder for creating validated [`CoreConfig`] instances.
///
/// # Examples
///
/// ```rust
/// use parkscan_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .empty_std_max(20.0)
///     .occ_std_min(35.0)
///     .empty_brightness_min(200.0)
///     .occ_brightness_max(140.0)
///     .free_threshold(0.65)
///     .occ_threshold(0.60)
///     .count_threshold(900)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    heuristic: HeuristicConfig,
    pixel_count: PixelCountConfig,
    detection: DetectionConfig,
}

impl CoreConfigBuilder {
    /// Creates a builder pre-populated with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole heuristic section.
    pub fn heuristic(mut self, heuristic: HeuristicConfig) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Replaces the whole pixel-count section.
    pub fn pixel_count(mut self, pixel_count: PixelCountConfig) -> Self {
        self.pixel_count = pixel_count;
        self
    }

    /// Replaces the whole detection section.
    pub fn detection(mut self, detection: DetectionConfig) -> Self {
        self.detection = detection;
        self
    }

    pub fn empty_std_max(mut self, value: f64) -> Self {
        self.heuristic.empty_std_max = value;
        self
    }

    pub fn occ_std_min(mut self, value: f64) -> Self {
        self.heuristic.occ_std_min = value;
        self
    }

    pub fn empty_brightness_min(mut self, value: f64) -> Self {
        self.heuristic.empty_brightness_min = value;
        self
    }

    pub fn occ_brightness_max(mut self, value: f64) -> Self {
        self.heuristic.occ_brightness_max = value;
        self
    }

    pub fn free_threshold(mut self, value: f64) -> Self {
        self.heuristic.free_threshold = value;
        self
    }

    pub fn occ_threshold(mut self, value: f64) -> Self {
        self.heuristic.occ_threshold = value;
        self
    }

    pub fn count_threshold(mut self, value: u32) -> Self {
        self.pixel_count.count_threshold = value;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// Returns `CoreError::InvalidConfig` when any threshold lies outside
    /// its documented range.
    pub fn build(self) -> CoreResult<CoreConfig> {
        let config = CoreConfig {
            heuristic: self.heuristic,
            pixel_count: self.pixel_count,
            detection: self.detection,
        };
        config.validate()?;
        Ok(config)
    }
}

//! Configuration structures and constants for the parkscan-core library.
//!
//! This module provides the configuration system for occupancy analysis,
//! including the weighted-heuristic thresholds, the pixel-count thresholds,
//! and the slot auto-detector parameters. Every threshold has a documented
//! default and valid range; `CoreConfig::validate` rejects out-of-range
//! values before any analysis runs.

mod builder;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub use builder::CoreConfigBuilder;

// Default constants

/// Default maximum grayscale standard deviation for an empty slot.
/// Uniform asphalt has low texture; above this the free score decays.
/// Range: 5-60.
pub const DEFAULT_EMPTY_STD_MAX: f64 = 20.0;

/// Default minimum standard deviation that starts counting toward occupancy.
/// Range: 15-100.
pub const DEFAULT_OCC_STD_MIN: f64 = 35.0;

/// Default minimum mean brightness for an empty slot.
/// Empty, well-lit pavement reads bright. Range: 150-255.
pub const DEFAULT_EMPTY_BRIGHTNESS_MIN: f64 = 200.0;

/// Default maximum mean brightness for an occupied slot.
/// Vehicles and shadows pull the mean down. Range: 80-200.
pub const DEFAULT_OCC_BRIGHTNESS_MAX: f64 = 140.0;

/// Default free-score decision threshold. Range: (0, 1].
pub const DEFAULT_FREE_THRESHOLD: f64 = 0.65;

/// Default occupied-score decision threshold. Range: (0, 1].
pub const DEFAULT_OCC_THRESHOLD: f64 = 0.60;

/// Default weight of the standard-deviation term in both scores.
pub const DEFAULT_STD_WEIGHT: f64 = 0.5;

/// Default weight of the brightness term in both scores.
pub const DEFAULT_BRIGHTNESS_WEIGHT: f64 = 0.3;

/// Default weight of the edge-density term in both scores.
pub const DEFAULT_EDGE_WEIGHT: f64 = 0.2;

/// Fixed span (in intensity units) used to normalize the free-score
/// brightness term and the occupied-score standard-deviation term.
pub const SCORE_SPAN: f64 = 60.0;

/// Default foreground-pixel count at or above which a slot is occupied.
/// Must be at least 1; counts below it are free (strict `<`).
pub const DEFAULT_COUNT_THRESHOLD: u32 = 900;

/// Default adaptive-threshold block size in pixels. Must be odd and >= 3.
pub const DEFAULT_BLOCK_SIZE: u32 = 25;

/// Default offset subtracted from the local brightness baseline.
/// Range: 0-255.
pub const DEFAULT_THRESHOLD_OFFSET: f64 = 16.0;

/// Default Gaussian blur sigma applied before thresholding and edge
/// detection.
pub const DEFAULT_BLUR_SIGMA: f32 = 1.0;

/// Default Canny hysteresis thresholds for the slot auto-detector.
pub const DEFAULT_CANNY_LOW: f32 = 50.0;
pub const DEFAULT_CANNY_HIGH: f32 = 150.0;

/// Default dilation radius (L-infinity norm; radius 2 matches two passes of
/// a 3x3 structuring element).
pub const DEFAULT_DILATE_RADIUS: u8 = 2;

/// Default candidate-slot size filter, inclusive on both ends.
pub const DEFAULT_MIN_SLOT_WIDTH: u32 = 50;
pub const DEFAULT_MAX_SLOT_WIDTH: u32 = 180;
pub const DEFAULT_MIN_SLOT_HEIGHT: u32 = 80;
pub const DEFAULT_MAX_SLOT_HEIGHT: u32 = 250;

/// Thresholds for the weighted-heuristic classifier.
///
/// The free score rewards low texture, high brightness, and low edge
/// density; the occupied score rewards the opposite. Weights apply to the
/// same three terms on both sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Maximum standard deviation for a fully-empty-looking slot (5-60)
    pub empty_std_max: f64,

    /// Standard deviation at which occupancy starts scoring (15-100)
    pub occ_std_min: f64,

    /// Minimum mean brightness for an empty-looking slot (150-255)
    pub empty_brightness_min: f64,

    /// Maximum mean brightness for an occupied-looking slot (80-200)
    pub occ_brightness_max: f64,

    /// Free decision threshold; FREE when free_score exceeds it ((0, 1])
    pub free_threshold: f64,

    /// Occupied decision threshold, checked after FREE ((0, 1])
    pub occ_threshold: f64,

    /// Weight of the standard-deviation term (0-1)
    pub std_weight: f64,

    /// Weight of the brightness term (0-1)
    pub brightness_weight: f64,

    /// Weight of the edge-density term (0-1)
    pub edge_weight: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            empty_std_max: DEFAULT_EMPTY_STD_MAX,
            occ_std_min: DEFAULT_OCC_STD_MIN,
            empty_brightness_min: DEFAULT_EMPTY_BRIGHTNESS_MIN,
            occ_brightness_max: DEFAULT_OCC_BRIGHTNESS_MAX,
            free_threshold: DEFAULT_FREE_THRESHOLD,
            occ_threshold: DEFAULT_OCC_THRESHOLD,
            std_weight: DEFAULT_STD_WEIGHT,
            brightness_weight: DEFAULT_BRIGHTNESS_WEIGHT,
            edge_weight: DEFAULT_EDGE_WEIGHT,
        }
    }
}

impl HeuristicConfig {
    pub fn validate(&self) -> CoreResult<()> {
        check_range("empty_std_max", self.empty_std_max, 5.0, 60.0)?;
        check_range("occ_std_min", self.occ_std_min, 15.0, 100.0)?;
        check_range("empty_brightness_min", self.empty_brightness_min, 150.0, 255.0)?;
        check_range("occ_brightness_max", self.occ_brightness_max, 80.0, 200.0)?;
        check_unit_threshold("free_threshold", self.free_threshold)?;
        check_unit_threshold("occ_threshold", self.occ_threshold)?;
        check_range("std_weight", self.std_weight, 0.0, 1.0)?;
        check_range("brightness_weight", self.brightness_weight, 0.0, 1.0)?;
        check_range("edge_weight", self.edge_weight, 0.0, 1.0)?;
        Ok(())
    }
}

/// Thresholds for the binary pixel-count classifier and the adaptive
/// threshold map it reads from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelCountConfig {
    /// Foreground-pixel count at or above which the slot is occupied (>= 1)
    pub count_threshold: u32,

    /// Adaptive-threshold block size in pixels (odd, >= 3)
    pub block_size: u32,

    /// Offset subtracted from the local brightness baseline (0-255)
    pub threshold_offset: f64,

    /// Gaussian blur sigma applied before thresholding (> 0)
    pub blur_sigma: f32,
}

impl Default for PixelCountConfig {
    fn default() -> Self {
        Self {
            count_threshold: DEFAULT_COUNT_THRESHOLD,
            block_size: DEFAULT_BLOCK_SIZE,
            threshold_offset: DEFAULT_THRESHOLD_OFFSET,
            blur_sigma: DEFAULT_BLUR_SIGMA,
        }
    }
}

impl PixelCountConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.count_threshold == 0 {
            return Err(CoreError::InvalidConfig(
                "count_threshold must be at least 1".to_string(),
            ));
        }
        if self.block_size < 3 || self.block_size % 2 == 0 {
            return Err(CoreError::InvalidConfig(format!(
                "block_size must be odd and >= 3, got {}",
                self.block_size
            )));
        }
        check_range("threshold_offset", self.threshold_offset, 0.0, 255.0)?;
        if !(self.blur_sigma > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "blur_sigma must be positive, got {}",
                self.blur_sigma
            )));
        }
        Ok(())
    }
}

/// Parameters for the contour-based slot auto-detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Gaussian blur sigma before edge detection (> 0)
    pub blur_sigma: f32,

    /// Canny hysteresis thresholds (0 < low < high)
    pub canny_low: f32,
    pub canny_high: f32,

    /// Dilation radius in pixels (L-infinity norm)
    pub dilate_radius: u8,

    /// Accepted candidate width, inclusive on both ends
    pub min_slot_width: u32,
    pub max_slot_width: u32,

    /// Accepted candidate height, inclusive on both ends
    pub min_slot_height: u32,
    pub max_slot_height: u32,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            blur_sigma: DEFAULT_BLUR_SIGMA,
            canny_low: DEFAULT_CANNY_LOW,
            canny_high: DEFAULT_CANNY_HIGH,
            dilate_radius: DEFAULT_DILATE_RADIUS,
            min_slot_width: DEFAULT_MIN_SLOT_WIDTH,
            max_slot_width: DEFAULT_MAX_SLOT_WIDTH,
            min_slot_height: DEFAULT_MIN_SLOT_HEIGHT,
            max_slot_height: DEFAULT_MAX_SLOT_HEIGHT,
        }
    }
}

impl DetectionConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.blur_sigma > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "blur_sigma must be positive, got {}",
                self.blur_sigma
            )));
        }
        if !(self.canny_low > 0.0 && self.canny_low < self.canny_high) {
            return Err(CoreError::InvalidConfig(format!(
                "canny thresholds must satisfy 0 < low < high, got {}/{}",
                self.canny_low, self.canny_high
            )));
        }
        if self.min_slot_width == 0 || self.min_slot_width > self.max_slot_width {
            return Err(CoreError::InvalidConfig(format!(
                "slot width filter must satisfy 1 <= min <= max, got {}..{}",
                self.min_slot_width, self.max_slot_width
            )));
        }
        if self.min_slot_height == 0 || self.min_slot_height > self.max_slot_height {
            return Err(CoreError::InvalidConfig(format!(
                "slot height filter must satisfy 1 <= min <= max, got {}..{}",
                self.min_slot_height, self.max_slot_height
            )));
        }
        Ok(())
    }
}

/// Main configuration structure for the parkscan-core library.
///
/// Holds the three threshold sections used by analysis and detection. It is
/// typically created by the consumer of the library (e.g. parkscan-cli) via
/// [`CoreConfigBuilder`] and passed to `analyze` / `detect_slots`.
///
/// All fields have sensible defaults tuned for daylight lot footage.
///
/// # Examples
///
/// ```rust
/// use parkscan_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .empty_std_max(25.0)
///     .occ_std_min(40.0)
///     .count_threshold(1200)
///     .build()
///     .unwrap();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Weighted-heuristic classifier thresholds
    pub heuristic: HeuristicConfig,

    /// Pixel-count classifier and adaptive-threshold parameters
    pub pixel_count: PixelCountConfig,

    /// Slot auto-detector parameters
    pub detection: DetectionConfig,
}

impl CoreConfig {
    /// Validates every threshold against its documented range.
    ///
    /// Called by `CoreConfigBuilder::build` and again at the top of
    /// `analyze`, so a hand-constructed config cannot slip bad values past
    /// construction time.
    pub fn validate(&self) -> CoreResult<()> {
        self.heuristic.validate()?;
        self.pixel_count.validate()?;
        self.detection.validate()?;
        Ok(())
    }
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> CoreResult<()> {
    if value.is_nan() || value < min || value > max {
        return Err(CoreError::InvalidConfig(format!(
            "{name} must be within {min}..={max}, got {value}"
        )));
    }
    Ok(())
}

fn check_unit_threshold(name: &str, value: f64) -> CoreResult<()> {
    if value.is_nan() || value <= 0.0 || value > 1.0 {
        return Err(CoreError::InvalidConfig(format!(
            "{name} must be within (0, 1], got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CoreConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_heuristic_thresholds() {
        let mut config = CoreConfig::default();
        config.heuristic.empty_std_max = 500.0;
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig(_))
        ));

        let mut config = CoreConfig::default();
        config.heuristic.free_threshold = 0.0;
        assert!(config.validate().is_err());

        let mut config = CoreConfig::default();
        config.heuristic.edge_weight = -0.2;
        assert!(config.validate().is_err());

        let mut config = CoreConfig::default();
        config.heuristic.occ_brightness_max = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_pixel_count_parameters() {
        let mut config = CoreConfig::default();
        config.pixel_count.count_threshold = 0;
        assert!(config.validate().is_err());

        let mut config = CoreConfig::default();
        config.pixel_count.block_size = 24; // even
        assert!(config.validate().is_err());

        let mut config = CoreConfig::default();
        config.pixel_count.blur_sigma = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_detection_filter() {
        let mut config = CoreConfig::default();
        config.detection.min_slot_width = 200;
        config.detection.max_slot_width = 100;
        assert!(config.validate().is_err());

        let mut config = CoreConfig::default();
        config.detection.canny_low = 150.0;
        config.detection.canny_high = 50.0;
        assert!(config.validate().is_err());
    }
}

//! Per-region image statistics.
//!
//! Two measurement paths feed the classifiers: raw grayscale moments plus a
//! central-difference edge density for the weighted heuristic, and a
//! foreground-pixel count taken from a frame-level adaptive threshold map
//! for the binary pixel-count rule. The threshold map is built once per
//! `analyze` call and shared by every slot in the batch.

use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;
use serde::{Deserialize, Serialize};

use crate::config::PixelCountConfig;
use crate::region::Slot;

/// Statistics derived from one slot's grayscale crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionStatistics {
    /// Population standard deviation of pixel intensities
    pub std_dev: f64,

    /// Mean pixel intensity (0-255)
    pub mean_brightness: f64,

    /// Normalized mean gradient magnitude, in [0, 1]
    pub edge_density: f64,

    /// Thresholded foreground pixels inside the crop
    pub foreground_pixels: u32,
}

/// Builds the frame-level adaptive threshold map.
///
/// The frame is Gaussian-blurred, then each pixel is compared against a
/// local brightness baseline (a Gaussian-weighted neighborhood mean) minus
/// a fixed offset. Output is inverted binary: 255 where the pixel is darker
/// than its surroundings (foreground), 0 elsewhere. This makes the
/// foreground count robust to uneven lighting across the lot.
pub(crate) fn threshold_map(gray: &GrayImage, config: &PixelCountConfig) -> GrayImage {
    let blurred = gaussian_blur_f32(gray, config.blur_sigma);
    let baseline = gaussian_blur_f32(&blurred, block_sigma(config.block_size));

    let (width, height) = gray.dimensions();
    GrayImage::from_fn(width, height, |x, y| {
        let value = blurred.get_pixel(x, y)[0] as f64;
        let local = baseline.get_pixel(x, y)[0] as f64;
        if value <= local - config.threshold_offset {
            image::Luma([255u8])
        } else {
            image::Luma([0u8])
        }
    })
}

/// Gaussian sigma equivalent to averaging over the given block size.
fn block_sigma(block_size: u32) -> f32 {
    0.3 * ((block_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Counts foreground pixels of the threshold map inside the slot.
///
/// The slot must already be validated against the image bounds.
pub(crate) fn foreground_count(thresh: &GrayImage, slot: &Slot) -> u32 {
    let mut count = 0;
    for y in slot.y..slot.y + slot.height {
        for x in slot.x..slot.x + slot.width {
            if thresh.get_pixel(x, y)[0] > 0 {
                count += 1;
            }
        }
    }
    count
}

/// Computes grayscale statistics over the slot's crop.
///
/// Standard deviation and mean use the population formulas. Edge density is
/// the mean Euclidean magnitude of the central-difference gradient (one-sided
/// at crop borders), normalized by the maximum intensity so it lands in
/// [0, 1]. The slot must already be validated against the image bounds.
pub(crate) fn region_statistics(
    gray: &GrayImage,
    slot: &Slot,
    foreground_pixels: u32,
) -> RegionStatistics {
    let w = slot.width as usize;
    let h = slot.height as usize;

    let mut crop = Vec::with_capacity(w * h);
    for y in slot.y..slot.y + slot.height {
        for x in slot.x..slot.x + slot.width {
            crop.push(gray.get_pixel(x, y)[0] as f64);
        }
    }

    let n = crop.len() as f64;
    let mean = crop.iter().sum::<f64>() / n;
    let variance = crop.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let mut magnitude_sum = 0.0;
    for row in 0..h {
        for col in 0..w {
            let gx = axis_gradient(&crop, row * w, 1, w, col);
            let gy = axis_gradient(&crop, col, w, h, row);
            magnitude_sum += (gx * gx + gy * gy).sqrt();
        }
    }
    let edge_density = magnitude_sum / n / 255.0;

    RegionStatistics {
        std_dev,
        mean_brightness: mean,
        edge_density,
        foreground_pixels,
    }
}

/// Central-difference gradient along one axis at index `i` of a line of
/// `len` samples starting at `base` with the given stride. One-sided at the
/// line's ends; zero for single-sample lines.
fn axis_gradient(data: &[f64], base: usize, stride: usize, len: usize, i: usize) -> f64 {
    if len < 2 {
        return 0.0;
    }
    let at = |j: usize| data[base + j * stride];
    if i == 0 {
        at(1) - at(0)
    } else if i == len - 1 {
        at(len - 1) - at(len - 2)
    } else {
        (at(i + 1) - at(i - 1)) / 2.0
    }
}

//! Slot geometry and slot-list loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, RegionError};

/// A rectangular region of interest representing one physical parking space.
///
/// Stored as top-left corner plus extent. Slots are plain data: nothing is
/// checked at construction time, so that degenerate input from collaborators
/// surfaces as a per-slot [`RegionError`] during analysis instead of a panic
/// at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Slot {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a slot from corner coordinates.
    ///
    /// Degenerate corners (x2 <= x1 or y2 <= y1) produce a zero-extent slot,
    /// which analysis reports as an invalid region.
    pub fn from_corners(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2.saturating_sub(x1),
            height: y2.saturating_sub(y1),
        }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Checks that the slot has positive area and lies entirely within an
    /// image of the given dimensions. A slot equal to the full image bounds
    /// is valid.
    pub fn validate_within(
        &self,
        image_width: u32,
        image_height: u32,
    ) -> Result<(), RegionError> {
        if self.width == 0 || self.height == 0 {
            return Err(RegionError::EmptyArea {
                width: self.width,
                height: self.height,
            });
        }

        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;
        if right > image_width as u64 || bottom > image_height as u64 {
            return Err(RegionError::OutOfBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                image_width,
                image_height,
            });
        }

        Ok(())
    }
}

/// Loads a slot list from a JSON file.
///
/// The file is an array of `{"x": .., "y": .., "width": .., "height": ..}`
/// objects. No geometric validation happens here; out-of-bounds slots are
/// reported per entry by `analyze`.
pub fn load_slots(path: &Path) -> CoreResult<Vec<Slot>> {
    let data = fs::read_to_string(path)?;
    let slots = serde_json::from_str(&data)?;
    Ok(slots)
}

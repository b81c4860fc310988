use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-slot region validation failures.
///
/// Kept separate from [`CoreError`] (and kept `Clone`) so a failing slot can
/// be recorded inside its report entry without aborting the rest of the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionError {
    #[error("slot has empty area: {width}x{height}")]
    EmptyArea { width: u32, height: u32 },

    #[error(
        "slot ({x}, {y}) {width}x{height} exceeds image bounds {image_width}x{image_height}"
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
}

/// Custom error types for parkscan
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid region: {0}")]
    Region(#[from] RegionError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid slot file: {0}")]
    SlotFile(#[from] serde_json::Error),
}

/// Result type for parkscan operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

//! Core library for heuristic parking-slot occupancy analysis.
//!
//! This crate scores rectangular image regions ("slots") by pixel
//! statistics and classifies each as free, occupied, or unclear. Two
//! strategies are provided: a weighted heuristic over standard deviation,
//! brightness, and edge density, and a binary foreground-pixel count over
//! an adaptive threshold map. A contour-based auto-detector can propose
//! candidate slots when none are configured.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use parkscan_core::{analyze, CoreConfigBuilder, Slot, Strategy};
//!
//! let image = image::open("lot.jpg").unwrap();
//! let slots = vec![Slot::new(40, 40, 120, 180), Slot::from_corners(200, 40, 320, 220)];
//!
//! let config = CoreConfigBuilder::new()
//!     .empty_std_max(20.0)
//!     .free_threshold(0.65)
//!     .build()
//!     .unwrap();
//!
//! let report = analyze(&image, &slots, &config, Strategy::Weighted).unwrap();
//! println!("{} free of {}", report.free, report.total);
//! ```

pub mod config;
pub mod detection;
pub mod error;
pub mod overlay;
pub mod processing;
pub mod region;
pub mod report;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder, DetectionConfig, HeuristicConfig, PixelCountConfig};
pub use detection::detect_slots;
pub use error::{CoreError, CoreResult, RegionError};
pub use overlay::{annotations, draw_annotations, SlotAnnotation};
pub use processing::analyze;
pub use processing::classify::{
    Classification, Classifier, PixelCountClassifier, SlotStatus, Strategy, WeightedClassifier,
};
pub use processing::stats::RegionStatistics;
pub use region::{load_slots, Slot};
pub use report::{Report, SlotEntry, SlotOutcome};

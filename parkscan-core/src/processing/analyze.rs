//! Batch occupancy analysis.
//!
//! `analyze` is the core entry point: one image and one slot list in, one
//! report out. It is a pure function of its inputs; nothing is cached
//! between calls and each call is independent, so callers are free to
//! parallelize across frames or slot batches themselves.

use image::DynamicImage;

use super::classify::{Classifier, PixelCountClassifier, Strategy, WeightedClassifier};
use super::stats;
use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::region::Slot;
use crate::report::{Report, SlotEntry, SlotOutcome};

/// Analyzes every slot of the image and returns one report entry per slot,
/// in input order.
///
/// The grayscale conversion and the adaptive threshold map are computed once
/// per call and shared across slots. A slot that fails region validation
/// becomes an `Invalid` entry; it never aborts the rest of the batch. An
/// out-of-range configuration is rejected up front with
/// `CoreError::InvalidConfig`.
pub fn analyze(
    image: &DynamicImage,
    slots: &[Slot],
    config: &CoreConfig,
    strategy: Strategy,
) -> CoreResult<Report> {
    config.validate()?;

    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();
    log::debug!(
        "analyzing {} slot(s) over a {}x{} frame with {:?} strategy",
        slots.len(),
        width,
        height,
        strategy
    );

    let thresh = stats::threshold_map(&gray, &config.pixel_count);

    let classifier: Box<dyn Classifier> = match strategy {
        Strategy::Weighted => Box::new(WeightedClassifier::new(config.heuristic.clone())),
        Strategy::PixelCount => Box::new(PixelCountClassifier::new(config.pixel_count.clone())),
    };

    let mut entries = Vec::with_capacity(slots.len());
    for slot in slots {
        let outcome = match slot.validate_within(width, height) {
            Ok(()) => {
                let foreground = stats::foreground_count(&thresh, slot);
                let stats = stats::region_statistics(&gray, slot, foreground);
                let classification = classifier.classify(&stats);
                log::trace!(
                    "slot ({}, {}) {}x{}: std {:.2}, brightness {:.2}, edges {:.4}, fg {}: {:?}",
                    slot.x,
                    slot.y,
                    slot.width,
                    slot.height,
                    stats.std_dev,
                    stats.mean_brightness,
                    stats.edge_density,
                    stats.foreground_pixels,
                    classification.status
                );
                SlotOutcome::Classified {
                    stats,
                    classification,
                }
            }
            Err(error) => {
                log::debug!(
                    "skipping slot ({}, {}) {}x{}: {}",
                    slot.x,
                    slot.y,
                    slot.width,
                    slot.height,
                    error
                );
                SlotOutcome::Invalid { error }
            }
        };
        entries.push(SlotEntry {
            slot: *slot,
            outcome,
        });
    }

    Ok(Report::from_entries(entries))
}

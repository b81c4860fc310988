//! Display-only overlay projection of a report.
//!
//! Annotations are derived data for UIs: a rectangle, an RGB color, and a
//! text label per entry. They are a projection of the [`Report`], not part
//! of the authoritative model.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};

use crate::processing::classify::SlotStatus;
use crate::region::Slot;
use crate::report::{Report, SlotOutcome};

pub const FREE_COLOR: [u8; 3] = [0, 255, 0];
pub const OCCUPIED_COLOR: [u8; 3] = [255, 0, 0];
pub const UNCLEAR_COLOR: [u8; 3] = [150, 150, 150];

/// One display annotation: rectangle, RGB color, and label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAnnotation {
    pub slot: Slot,
    pub color: [u8; 3],
    pub label: String,
}

/// Projects a report into display annotations, one per entry, in order.
///
/// Invalid slots are annotated in the unclear color with an `INVALID` label
/// so UIs can still point at them.
pub fn annotations(report: &Report) -> Vec<SlotAnnotation> {
    report
        .entries
        .iter()
        .map(|entry| {
            let (color, label) = match &entry.outcome {
                SlotOutcome::Classified { classification, .. } => match classification.status {
                    SlotStatus::Free => (FREE_COLOR, "FREE"),
                    SlotStatus::Occupied => (OCCUPIED_COLOR, "OCCUPIED"),
                    SlotStatus::Unclear => (UNCLEAR_COLOR, "UNCLEAR"),
                },
                SlotOutcome::Invalid { .. } => (UNCLEAR_COLOR, "INVALID"),
            };
            SlotAnnotation {
                slot: entry.slot,
                color,
                label: label.to_string(),
            }
        })
        .collect()
}

/// Draws hollow rectangles for each annotation onto an RGB image, in place.
///
/// Zero-extent rectangles are skipped; labels are left to the caller's UI
/// toolkit.
pub fn draw_annotations(image: &mut RgbImage, annotations: &[SlotAnnotation]) {
    for annotation in annotations {
        let slot = &annotation.slot;
        if slot.width == 0 || slot.height == 0 {
            continue;
        }
        let rect = Rect::at(slot.x as i32, slot.y as i32).of_size(slot.width, slot.height);
        draw_hollow_rect_mut(image, rect, Rgb(annotation.color));
    }
}

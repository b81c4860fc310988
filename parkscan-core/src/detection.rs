//! Contour-based slot auto-detection.
//!
//! Auxiliary helper that proposes candidate slot rectangles from lot
//! markings: grayscale, Gaussian blur, Canny edges, dilation, external
//! contours, then a bounding-box size filter. Candidates are unranked and
//! unordered and may overlap; callers must tolerate overlaps, since no
//! deduplication or merging is performed.

use image::DynamicImage;
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::morphology::dilate;

use crate::config::DetectionConfig;
use crate::region::Slot;

/// Detects candidate parking-slot rectangles in the image.
pub fn detect_slots(image: &DynamicImage, config: &DetectionConfig) -> Vec<Slot> {
    let gray = image.to_luma8();
    let blurred = gaussian_blur_f32(&gray, config.blur_sigma);
    let edges = canny(&blurred, config.canny_low, config.canny_high);
    let dilated = dilate(&edges, Norm::LInf, config.dilate_radius);

    let contours = find_contours::<i32>(&dilated);
    let mut slots = Vec::new();
    for contour in &contours {
        // External contours only: outermost object outlines.
        if contour.border_type != BorderType::Outer || contour.parent.is_some() {
            continue;
        }
        let Some(slot) = bounding_box(contour) else {
            continue;
        };
        if passes_size_filter(&slot, config) {
            slots.push(slot);
        }
    }

    log::debug!(
        "slot detection: {} contour(s), {} candidate(s) after size filter",
        contours.len(),
        slots.len()
    );
    slots
}

/// Axis-aligned bounding box of a contour's points.
fn bounding_box(contour: &Contour<i32>) -> Option<Slot> {
    let first = contour.points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &contour.points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(Slot::new(
        min_x as u32,
        min_y as u32,
        (max_x - min_x + 1) as u32,
        (max_y - min_y + 1) as u32,
    ))
}

/// Inclusive width/height filter for plausible parking-slot dimensions.
fn passes_size_filter(slot: &Slot, config: &DetectionConfig) -> bool {
    (config.min_slot_width..=config.max_slot_width).contains(&slot.width)
        && (config.min_slot_height..=config.max_slot_height).contains(&slot.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageproc::point::Point;

    #[test]
    fn size_filter_bounds_are_inclusive() {
        let config = DetectionConfig::default();
        let accepts = |w, h| passes_size_filter(&Slot::new(0, 0, w, h), &config);

        assert!(accepts(50, 80));
        assert!(accepts(180, 250));
        assert!(accepts(100, 150));

        assert!(!accepts(49, 80));
        assert!(!accepts(50, 79));
        assert!(!accepts(50, 251));
        assert!(!accepts(181, 100));
    }

    #[test]
    fn bounding_box_of_points() {
        let contour = Contour {
            points: vec![
                Point::new(10, 20),
                Point::new(30, 25),
                Point::new(15, 60),
            ],
            border_type: BorderType::Outer,
            parent: None,
        };
        let slot = bounding_box(&contour).unwrap();
        assert_eq!(slot, Slot::new(10, 20, 21, 41));

        let empty: Contour<i32> = Contour {
            points: vec![],
            border_type: BorderType::Outer,
            parent: None,
        };
        assert!(bounding_box(&empty).is_none());
    }

    #[test]
    fn detects_a_bright_rectangle_on_dark_ground() {
        // One white 100x150 block on black: its outline survives blur,
        // Canny, and dilation, and the resulting bounding box must land
        // near the drawn rectangle (dilation widens it by a few pixels).
        let mut gray = image::GrayImage::new(300, 400);
        for y in 70..220 {
            for x in 60..160 {
                gray.put_pixel(x, y, image::Luma([255]));
            }
        }
        let image = DynamicImage::ImageLuma8(gray);
        let slots = detect_slots(&image, &DetectionConfig::default());

        assert!(!slots.is_empty());
        let slot = slots
            .iter()
            .max_by_key(|s| s.area())
            .expect("at least one candidate");
        assert!((90..=115).contains(&slot.width), "width {}", slot.width);
        assert!((140..=165).contains(&slot.height), "height {}", slot.height);
        assert!(slot.x >= 50 && slot.x <= 62, "x {}", slot.x);
        assert!(slot.y >= 60 && slot.y <= 72, "y {}", slot.y);
    }

    #[test]
    fn blank_image_yields_no_candidates() {
        let image = DynamicImage::ImageLuma8(image::GrayImage::new(200, 200));
        assert!(detect_slots(&image, &DetectionConfig::default()).is_empty());
    }
}

use image::{DynamicImage, GrayImage, Luma};
use parkscan_core::{
    analyze, CoreConfig, CoreError, RegionError, Slot, SlotOutcome, SlotStatus, Strategy,
};

fn uniform_frame(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

/// A bright frame with a dense speckle of small dark squares inside the
/// given rectangle, enough to push the foreground count well past the
/// default 900-pixel threshold.
fn speckled_frame(width: u32, height: u32, region: Slot) -> DynamicImage {
    let mut gray = GrayImage::from_pixel(width, height, Luma([220]));
    let mut y = region.y + 4;
    while y + 8 < region.y + region.height {
        let mut x = region.x + 4;
        while x + 8 < region.x + region.width {
            for dy in 0..8 {
                for dx in 0..8 {
                    gray.put_pixel(x + dx, y + dy, Luma([10]));
                }
            }
            x += 16;
        }
        y += 16;
    }
    DynamicImage::ImageLuma8(gray)
}

#[test]
fn one_entry_per_slot_in_input_order() {
    let image = uniform_frame(320, 240, 230);
    let slots = vec![
        Slot::new(0, 0, 100, 100),
        Slot::new(100, 0, 100, 100),
        Slot::new(0, 100, 320, 140),
    ];
    let report = analyze(&image, &slots, &CoreConfig::default(), Strategy::Weighted).unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.entries.len(), 3);
    for (entry, slot) in report.entries.iter().zip(&slots) {
        assert_eq!(&entry.slot, slot);
    }
}

#[test]
fn analyze_is_idempotent() {
    let image = speckled_frame(300, 300, Slot::new(40, 40, 200, 200));
    let slots = vec![Slot::new(40, 40, 200, 200), Slot::new(250, 250, 40, 40)];
    let config = CoreConfig::default();

    let first = analyze(&image, &slots, &config, Strategy::Weighted).unwrap();
    let second = analyze(&image, &slots, &config, Strategy::Weighted).unwrap();
    assert_eq!(first, second);

    let first = analyze(&image, &slots, &config, Strategy::PixelCount).unwrap();
    let second = analyze(&image, &slots, &config, Strategy::PixelCount).unwrap();
    assert_eq!(first, second);
}

#[test]
fn full_image_slot_is_valid() {
    let image = uniform_frame(160, 120, 255);
    let slots = vec![Slot::new(0, 0, 160, 120)];
    let report = analyze(&image, &slots, &CoreConfig::default(), Strategy::Weighted).unwrap();
    assert!(matches!(
        report.entries[0].outcome,
        SlotOutcome::Classified { .. }
    ));
}

#[test]
fn degenerate_and_out_of_bounds_slots_fail_without_aborting_the_batch() {
    let image = uniform_frame(200, 200, 255);
    let slots = vec![
        Slot::from_corners(50, 50, 50, 120), // x2 <= x1
        Slot::new(0, 0, 100, 100),
        Slot::new(150, 150, 100, 100), // exceeds bounds
    ];
    let report = analyze(&image, &slots, &CoreConfig::default(), Strategy::Weighted).unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.invalid, 2);
    assert!(matches!(
        report.entries[0].outcome,
        SlotOutcome::Invalid {
            error: RegionError::EmptyArea { .. }
        }
    ));
    assert!(matches!(
        report.entries[1].outcome,
        SlotOutcome::Classified { .. }
    ));
    assert!(matches!(
        report.entries[2].outcome,
        SlotOutcome::Invalid {
            error: RegionError::OutOfBounds { .. }
        }
    ));
}

#[test]
fn uniform_white_slot_is_free_under_weighted_defaults() {
    let image = uniform_frame(200, 200, 255);
    // Size does not matter for a uniform region.
    for slot in [Slot::new(0, 0, 200, 200), Slot::new(90, 90, 3, 3)] {
        let report =
            analyze(&image, &[slot], &CoreConfig::default(), Strategy::Weighted).unwrap();
        assert_eq!(report.entries[0].outcome.status(), Some(SlotStatus::Free));
        assert_eq!(report.free, 1);
    }
}

#[test]
fn pixel_count_strategy_is_binary() {
    let busy = Slot::new(20, 20, 200, 200);
    let image = speckled_frame(300, 300, busy);
    let slots = vec![busy, Slot::new(240, 240, 50, 50)];
    let report = analyze(&image, &slots, &CoreConfig::default(), Strategy::PixelCount).unwrap();

    assert_eq!(report.entries[0].outcome.status(), Some(SlotStatus::Occupied));
    assert_eq!(report.entries[1].outcome.status(), Some(SlotStatus::Free));
    assert_eq!(report.unclear, 0);
}

#[test]
fn strategies_agree_on_a_clean_bright_lot() {
    // Bright and uniform: free under both, but via different evidence.
    let image = uniform_frame(250, 250, 240);
    let slots = vec![Slot::new(10, 10, 120, 180)];
    let config = CoreConfig::default();

    let weighted = analyze(&image, &slots, &config, Strategy::Weighted).unwrap();
    let counted = analyze(&image, &slots, &config, Strategy::PixelCount).unwrap();
    assert_eq!(weighted.entries[0].outcome.status(), Some(SlotStatus::Free));
    assert_eq!(counted.entries[0].outcome.status(), Some(SlotStatus::Free));
}

#[test]
fn invalid_configuration_is_rejected_before_analysis() {
    let image = uniform_frame(100, 100, 255);
    let mut config = CoreConfig::default();
    config.heuristic.empty_std_max = 500.0;

    let result = analyze(
        &image,
        &[Slot::new(0, 0, 50, 50)],
        &config,
        Strategy::Weighted,
    );
    assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
}

#[test]
fn report_round_trips_through_json() {
    let image = uniform_frame(120, 120, 255);
    let slots = vec![Slot::new(0, 0, 60, 60), Slot::new(60, 60, 100, 100)];
    let report = analyze(&image, &slots, &CoreConfig::default(), Strategy::Weighted).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let parsed: parkscan_core::Report = serde_json::from_str(&json).unwrap();
    assert_eq!(report, parsed);
}

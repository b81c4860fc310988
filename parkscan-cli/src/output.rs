//! Terminal rendering of reports and candidate lists.

use owo_colors::OwoColorize;
use parkscan_core::{Report, Slot, SlotOutcome, SlotStatus};

/// Rectangle color for auto-detected candidates in annotated output.
pub const CANDIDATE_COLOR: [u8; 3] = [255, 255, 0];

/// Prints one line per slot plus a summary of the aggregate counts.
pub fn print_report(report: &Report) {
    for (index, entry) in report.entries.iter().enumerate() {
        let prefix = format!("{:>3}  {:<24}", index + 1, format_slot(&entry.slot));
        match &entry.outcome {
            SlotOutcome::Classified {
                stats,
                classification,
            } => {
                let status = match classification.status {
                    SlotStatus::Free => "FREE".green().to_string(),
                    SlotStatus::Occupied => "OCCUPIED".red().to_string(),
                    SlotStatus::Unclear => "UNCLEAR".dimmed().to_string(),
                };
                println!(
                    "{prefix} {status:<10} std {:>6.2}  bright {:>6.2}  edges {:>6.4}  fg {:>5}  free {:.2}  occ {:.2}",
                    stats.std_dev,
                    stats.mean_brightness,
                    stats.edge_density,
                    stats.foreground_pixels,
                    classification.free_score,
                    classification.occ_score,
                );
            }
            SlotOutcome::Invalid { error } => {
                println!("{prefix} {} {}", "INVALID".yellow(), error);
            }
        }
    }

    println!();
    println!(
        "Total: {}   Free: {}   Occupied: {}   Unclear: {}   Invalid: {}",
        report.total,
        report.free.green(),
        report.occupied.red(),
        report.unclear,
        report.invalid,
    );
}

/// Prints the auto-detector's candidate rectangles.
pub fn print_slots(slots: &[Slot]) {
    if slots.is_empty() {
        println!("No candidate slots detected.");
        return;
    }
    for (index, slot) in slots.iter().enumerate() {
        println!("{:>3}  {}", index + 1, format_slot(slot));
    }
    println!();
    println!("{} candidate slot(s). Candidates may overlap.", slots.len());
}

fn format_slot(slot: &Slot) -> String {
    format!("({}, {}) {}x{}", slot.x, slot.y, slot.width, slot.height)
}

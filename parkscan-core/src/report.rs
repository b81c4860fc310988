//! Analysis report structures.

use serde::{Deserialize, Serialize};

use crate::error::RegionError;
use crate::processing::classify::{Classification, SlotStatus};
use crate::processing::stats::RegionStatistics;
use crate::region::Slot;

/// Outcome of analyzing one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotOutcome {
    /// Statistics were extracted and a decision was made
    Classified {
        stats: RegionStatistics,
        classification: Classification,
    },
    /// The slot failed region validation; the rest of the batch continues
    Invalid { error: RegionError },
}

impl SlotOutcome {
    /// The decided status, or `None` for invalid slots.
    pub fn status(&self) -> Option<SlotStatus> {
        match self {
            SlotOutcome::Classified { classification, .. } => Some(classification.status),
            SlotOutcome::Invalid { .. } => None,
        }
    }
}

/// One report entry per input slot, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotEntry {
    pub slot: Slot,
    pub outcome: SlotOutcome,
}

/// Result of one `analyze` call: the ordered per-slot entries plus
/// aggregate counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub entries: Vec<SlotEntry>,
    pub total: usize,
    pub free: usize,
    pub occupied: usize,
    pub unclear: usize,
    pub invalid: usize,
}

impl Report {
    /// Builds a report from per-slot entries, computing the aggregates.
    pub fn from_entries(entries: Vec<SlotEntry>) -> Self {
        let mut free = 0;
        let mut occupied = 0;
        let mut unclear = 0;
        let mut invalid = 0;

        for entry in &entries {
            match entry.outcome.status() {
                Some(SlotStatus::Free) => free += 1,
                Some(SlotStatus::Occupied) => occupied += 1,
                Some(SlotStatus::Unclear) => unclear += 1,
                None => invalid += 1,
            }
        }

        Self {
            total: entries.len(),
            entries,
            free,
            occupied,
            unclear,
            invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(status: SlotStatus) -> SlotEntry {
        SlotEntry {
            slot: Slot::new(0, 0, 10, 10),
            outcome: SlotOutcome::Classified {
                stats: RegionStatistics {
                    std_dev: 0.0,
                    mean_brightness: 0.0,
                    edge_density: 0.0,
                    foreground_pixels: 0,
                },
                classification: Classification {
                    status,
                    free_score: 0.0,
                    occ_score: 0.0,
                },
            },
        }
    }

    #[test]
    fn aggregates_count_each_status() {
        let entries = vec![
            classified(SlotStatus::Free),
            classified(SlotStatus::Free),
            classified(SlotStatus::Occupied),
            classified(SlotStatus::Unclear),
            SlotEntry {
                slot: Slot::new(0, 0, 0, 10),
                outcome: SlotOutcome::Invalid {
                    error: RegionError::EmptyArea {
                        width: 0,
                        height: 10,
                    },
                },
            },
        ];
        let report = Report::from_entries(entries);
        assert_eq!(report.total, 5);
        assert_eq!(report.free, 2);
        assert_eq!(report.occupied, 1);
        assert_eq!(report.unclear, 1);
        assert_eq!(report.invalid, 1);
    }
}

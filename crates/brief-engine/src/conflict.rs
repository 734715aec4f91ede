//! Detect overlapping events within a merged event list.
//!
//! Performs pairwise comparison over every unordered pair of events.
//! Adjacent events (where one ends exactly when the next starts) are NOT
//! conflicts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// A detected conflict between two events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub event_a: Event,
    pub event_b: Event,
    /// Reported conflict time; by convention the first event's start.
    pub start: DateTime<Utc>,
    pub overlap_minutes: i64,
}

/// Find all pairwise conflicts (overlapping time ranges) in an event list.
///
/// Two events overlap when `a.start < b.end && b.start < a.end`. The
/// predicate is symmetric, so each unordered pair is reported exactly once,
/// in input order: pair `(i, j)` with `i < j` is keyed by `i`, then `j`.
/// Downstream consumers count and display conflicts in this order.
///
/// All-day events and events whose `end` precedes their `start` never
/// conflict. The scan is quadratic; daily and weekly event counts are tens,
/// not thousands.
pub fn find_conflicts(events: &[Event]) -> Vec<Conflict> {
    let candidates: Vec<&Event> = events.iter().filter(|e| e.has_interval()).collect();

    let mut conflicts = Vec::new();
    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            // Two intervals overlap iff a.start < b.end AND b.start < a.end.
            // This excludes the adjacent case where a.end == b.start.
            if a.start < b.end && b.start < a.end {
                let overlap_start = a.start.max(b.start);
                let overlap_end = a.end.min(b.end);

                conflicts.push(Conflict {
                    event_a: (*a).clone(),
                    event_b: (*b).clone(),
                    start: a.start,
                    overlap_minutes: (overlap_end - overlap_start).num_minutes(),
                });
            }
        }
    }

    conflicts
}

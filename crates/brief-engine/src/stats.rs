//! Aggregate meeting-load statistics.

use crate::event::Event;

/// Total meeting hours across all non-all-day events.
///
/// Overlapping events each contribute their full duration, so the figure is
/// a load indicator, not a measure of distinct busy time. Events whose end
/// precedes their start contribute zero.
pub fn aggregate_meeting_hours(events: &[Event]) -> f64 {
    events
        .iter()
        .filter(|e| !e.is_all_day)
        .map(|e| (e.end - e.start).num_seconds().max(0) as f64 / 3600.0)
        .sum()
}

/// Number of non-all-day events.
pub fn meeting_count(events: &[Event]) -> usize {
    events.iter().filter(|e| !e.is_all_day).count()
}

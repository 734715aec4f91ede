//! Merge clustered working-hours events into busy periods.
//!
//! A busy period is an envelope of two or more events separated by gaps of
//! at most 30 minutes. An isolated meeting is not a busy period and never
//! appears in the output.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::event::{Event, WorkingHours};

/// Maximum gap, in minutes, that still merges two events into one period.
const MERGE_GAP_MINUTES: i64 = 30;

/// A merged envelope of two or more clustered events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Titles of the merged events, in merge order.
    pub events: Vec<String>,
}

/// Identify stretches of back-to-back meetings within the working-hours
/// window.
///
/// Candidates are non-all-day events whose start hour falls within `hours`
/// in `tz`. They are folded in chronological start order (ties keep input
/// order): a period absorbs the next event while the gap from the period's
/// end to the event's start is at most 30 minutes. Overlap counts as a
/// zero-or-negative gap and always absorbs, extending the period's end to
/// `max(end, event.end)`. Periods with fewer than two events are dropped,
/// including a trailing one.
pub fn identify_busy_periods(events: &[Event], hours: WorkingHours, tz: Tz) -> Vec<BusyPeriod> {
    let mut candidates: Vec<&Event> = events
        .iter()
        .filter(|e| !e.is_all_day && hours.contains_hour(e.local_start_hour(tz)))
        .collect();
    // Stable sort: events sharing a start keep their input order.
    candidates.sort_by_key(|e| e.start);

    let mut periods = Vec::new();
    let mut current: Option<BusyPeriod> = None;

    for event in candidates {
        current = Some(match current.take() {
            Some(mut period)
                if event.start - period.end <= Duration::minutes(MERGE_GAP_MINUTES) =>
            {
                period.end = period.end.max(event.end);
                period.events.push(event.title.clone());
                period
            }
            closed => {
                if let Some(period) = closed {
                    if period.events.len() >= 2 {
                        periods.push(period);
                    }
                }
                BusyPeriod {
                    start: event.start,
                    end: event.end,
                    events: vec![event.title.clone()],
                }
            }
        });
    }

    // Trailing open period, same two-event bar.
    if let Some(period) = current {
        if period.events.len() >= 2 {
            periods.push(period);
        }
    }

    periods
}

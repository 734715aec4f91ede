//! Compute free time slots within a day's working-hours window.
//!
//! Walks the day's events in start order, keeping a cursor at the end of the
//! covered time; every uncovered stretch of at least 30 minutes becomes a
//! free slot.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{Event, WorkingHours};

/// Minimum length, in minutes, for a gap to count as a free slot.
const MIN_SLOT_MINUTES: i64 = 30;

/// A free time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Whole minutes, truncated.
    pub duration_minutes: i64,
}

/// Compute the free slots of at least 30 minutes on `date` within `hours`.
///
/// The window runs from `start_hour:00` to `end_hour:00` on `date` in `tz`.
/// Only non-all-day events *starting* inside the window participate; the
/// caller may pass a wider multi-day list unfiltered. A day with no
/// qualifying events yields a single slot spanning the whole window.
///
/// # Errors
/// Returns `BriefError::NonexistentLocalTime` when a window boundary falls
/// in a DST gap on `date` in `tz`.
pub fn day_availability(
    events: &[Event],
    date: NaiveDate,
    hours: WorkingHours,
    tz: Tz,
) -> Result<Vec<FreeSlot>> {
    let (day_start, day_end) = hours.bounds_on(date, tz)?;

    let mut day_events: Vec<&Event> = events
        .iter()
        .filter(|e| !e.is_all_day && e.start >= day_start && e.start < day_end)
        .collect();
    day_events.sort_by_key(|e| e.start);

    let mut slots = Vec::new();
    let mut cursor = day_start;

    for event in day_events {
        if event.start - cursor >= Duration::minutes(MIN_SLOT_MINUTES) {
            slots.push(slot(cursor, event.start));
        }
        cursor = cursor.max(event.end);
    }

    // Trailing slot between the last covered instant and the window end.
    if day_end - cursor >= Duration::minutes(MIN_SLOT_MINUTES) {
        slots.push(slot(cursor, day_end));
    }

    Ok(slots)
}

fn slot(start: DateTime<Utc>, end: DateTime<Utc>) -> FreeSlot {
    FreeSlot {
        start,
        end,
        duration_minutes: (end - start).num_minutes(),
    }
}

/// Find the first free slot of at least `min_duration_minutes` on `date`.
///
/// Delegates to [`day_availability`] and returns the first slot meeting the
/// minimum duration requirement.
pub fn first_free_slot(
    events: &[Event],
    date: NaiveDate,
    hours: WorkingHours,
    tz: Tz,
    min_duration_minutes: i64,
) -> Result<Option<FreeSlot>> {
    Ok(day_availability(events, date, hours, tz)?
        .into_iter()
        .find(|slot| slot.duration_minutes >= min_duration_minutes))
}

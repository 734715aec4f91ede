//! Event and working-hours input types.
//!
//! Events arrive already merged from however many calendar sources the caller
//! fetched; the analyzer only depends on receiving one chronologically
//! sortable list. The reference timezone for hour-of-day and day-boundary
//! math is always injected by the caller, never read from process state.

use chrono::{DateTime, Datelike, LocalResult, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{BriefError, Result};

/// A single calendar event, normalized from whatever source produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque identifier, unique within `source`.
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    /// May precede `start` in malformed upstream data; such events are
    /// tolerated and excluded from overlap and duration math.
    pub end: DateTime<Utc>,
    /// All-day events carry no usable clock-time interval and are skipped by
    /// every interval computation.
    #[serde(default)]
    pub is_all_day: bool,
    /// Which calendar the event came from; display-only.
    #[serde(default)]
    pub source: String,
}

impl Event {
    /// Whether the event carries a usable clock-time interval.
    pub(crate) fn has_interval(&self) -> bool {
        !self.is_all_day && self.start <= self.end
    }

    /// The event's start hour of day in the reference timezone.
    pub(crate) fn local_start_hour(&self, tz: Tz) -> u32 {
        self.start.with_timezone(&tz).hour()
    }
}

/// A `[start_hour, end_hour)` wall-clock window bounding busy-period and
/// free-slot computation.
///
/// The two consumers historically evolved different defaults (9-17 for busy
/// periods, 9-18 for availability); both are kept independently configurable
/// rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    start_hour: u32,
    end_hour: u32,
}

impl WorkingHours {
    /// Build a validated window.
    ///
    /// # Errors
    /// Returns `BriefError::InvalidWorkingHours` unless
    /// `start_hour < end_hour` and both are valid hours of day.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        if start_hour >= end_hour || end_hour > 23 {
            return Err(BriefError::InvalidWorkingHours {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// The window busy-period detection ships with (9:00-17:00).
    pub fn busy_default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
        }
    }

    /// The window availability computation ships with (9:00-18:00).
    pub fn availability_default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 18,
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Whether `hour` falls within the window.
    pub(crate) fn contains_hour(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }

    /// Resolve the window to concrete instants on `date` in `tz`.
    pub(crate) fn bounds_on(&self, date: NaiveDate, tz: Tz) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let start = local_instant(date, self.start_hour, tz)?;
        let end = local_instant(date, self.end_hour, tz)?;
        Ok((start, end))
    }
}

/// Resolve `date` at `hour:00` in `tz` to a UTC instant.
///
/// An ambiguous local time (DST fall-back) resolves to the earlier of the two
/// instants; a nonexistent one (DST spring-forward gap) is a configuration
/// error.
fn local_instant(date: NaiveDate, hour: u32, tz: Tz) -> Result<DateTime<Utc>> {
    match tz.with_ymd_and_hms(date.year(), date.month(), date.day(), hour, 0, 0) {
        LocalResult::Single(instant) => Ok(instant.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(BriefError::NonexistentLocalTime(format!(
            "{date} {hour:02}:00 in {tz}"
        ))),
    }
}

/// Parse an IANA timezone name (e.g., "America/New_York").
///
/// # Errors
/// Returns `BriefError::InvalidTimezone` when the name is not a valid IANA
/// identifier.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| BriefError::InvalidTimezone(name.to_string()))
}

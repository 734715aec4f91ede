//! Assemble per-day and per-week brief data for the rendering layer.
//!
//! A brief is a pure snapshot: conflicts, busy periods, free slots, and
//! meeting load for the events it was given, plus an optional task summary.
//! Rendering the snapshot into a document (markdown, HTML, a model call) is
//! the caller's concern.

use chrono::{Days, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::availability::{day_availability, FreeSlot};
use crate::busy::{identify_busy_periods, BusyPeriod};
use crate::conflict::{find_conflicts, Conflict};
use crate::error::Result;
use crate::event::{Event, WorkingHours};
use crate::stats::{aggregate_meeting_hours, meeting_count};
use crate::tasks::{Task, TaskSummary};

/// Working-hours windows for the two interval computations.
///
/// The defaults differ (9-17 for busy periods, 9-18 for availability); the
/// asymmetry is inherited from the upstream product and kept configurable
/// rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BriefConfig {
    pub busy_hours: WorkingHours,
    pub availability_hours: WorkingHours,
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            busy_hours: WorkingHours::busy_default(),
            availability_hours: WorkingHours::availability_default(),
        }
    }
}

/// One day's analyzed schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBrief {
    pub date: NaiveDate,
    pub meeting_count: usize,
    pub total_meeting_hours: f64,
    pub conflicts: Vec<Conflict>,
    pub busy_periods: Vec<BusyPeriod>,
    pub free_slots: Vec<FreeSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<TaskSummary>,
}

/// Analyze one day.
///
/// Only events starting on `date` in `tz` are considered; the caller may
/// pass a wider fetch window unfiltered.
pub fn daily_brief(
    events: &[Event],
    tasks: Option<&[Task]>,
    date: NaiveDate,
    config: BriefConfig,
    tz: Tz,
) -> Result<DailyBrief> {
    let day_events: Vec<Event> = events
        .iter()
        .filter(|e| e.start.with_timezone(&tz).date_naive() == date)
        .cloned()
        .collect();

    Ok(DailyBrief {
        date,
        meeting_count: meeting_count(&day_events),
        total_meeting_hours: aggregate_meeting_hours(&day_events),
        conflicts: find_conflicts(&day_events),
        busy_periods: identify_busy_periods(&day_events, config.busy_hours, tz),
        free_slots: day_availability(&day_events, date, config.availability_hours, tz)?,
        tasks: tasks.map(|t| TaskSummary::from_tasks(t, date)),
    })
}

/// Seven consecutive analyzed days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBrief {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<DailyBrief>,
    pub total_meeting_hours: f64,
    /// First day with the highest meeting load; `None` for a meeting-free
    /// week.
    pub busiest_day: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<TaskSummary>,
}

/// Analyze the seven days starting at `start_date`.
///
/// The task summary is computed once against `start_date` and attached at
/// the week level only.
pub fn weekly_brief(
    events: &[Event],
    tasks: Option<&[Task]>,
    start_date: NaiveDate,
    config: BriefConfig,
    tz: Tz,
) -> Result<WeeklyBrief> {
    let mut days = Vec::with_capacity(7);
    for offset in 0..7 {
        let date = start_date + Days::new(offset);
        days.push(daily_brief(events, None, date, config, tz)?);
    }

    let total_meeting_hours = days.iter().map(|d| d.total_meeting_hours).sum();

    let mut busiest_day = None;
    let mut busiest_hours = 0.0;
    for day in &days {
        if day.total_meeting_hours > busiest_hours {
            busiest_hours = day.total_meeting_hours;
            busiest_day = Some(day.date);
        }
    }

    Ok(WeeklyBrief {
        start_date,
        end_date: start_date + Days::new(6),
        days,
        total_meeting_hours,
        busiest_day,
        tasks: tasks.map(|t| TaskSummary::from_tasks(t, start_date)),
    })
}

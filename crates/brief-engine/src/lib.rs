//! # brief-engine
//!
//! Interval analysis over aggregated calendar events.
//!
//! The engine consumes an in-memory list of normalized [`Event`] records,
//! merged from however many calendar sources the caller fetched, and
//! computes the schedule facts a daily or weekly brief is built from.
//!
//! ## Modules
//!
//! - [`conflict`] — pairwise overlap detection between events
//! - [`busy`] — merging clustered meetings into busy periods
//! - [`availability`] — free slots within a day's working hours
//! - [`stats`] — aggregate meeting-hours load
//! - [`tasks`] — open-task grouping by due date and priority
//! - [`brief`] — assembly of daily/weekly brief snapshots
//! - [`error`] — error types
//!
//! Everything is pure computation: no I/O, no process-global state, no
//! caching between calls. The reference timezone for day-boundary and
//! hour-of-day math is always passed in explicitly.
//!
//! ## Quick start
//!
//! ```rust
//! use brief_engine::{find_conflicts, Event};
//!
//! let events = vec![
//!     Event {
//!         id: "1".into(),
//!         title: "Standup".into(),
//!         start: "2026-03-02T09:00:00Z".parse().unwrap(),
//!         end: "2026-03-02T09:30:00Z".parse().unwrap(),
//!         is_all_day: false,
//!         source: "work".into(),
//!     },
//!     Event {
//!         id: "2".into(),
//!         title: "1:1".into(),
//!         start: "2026-03-02T09:15:00Z".parse().unwrap(),
//!         end: "2026-03-02T09:45:00Z".parse().unwrap(),
//!         is_all_day: false,
//!         source: "personal".into(),
//!     },
//! ];
//!
//! let conflicts = find_conflicts(&events);
//! assert_eq!(conflicts.len(), 1);
//! assert_eq!(conflicts[0].overlap_minutes, 15);
//! ```

pub mod availability;
pub mod brief;
pub mod busy;
pub mod conflict;
pub mod error;
pub mod event;
pub mod stats;
pub mod tasks;

pub use availability::{day_availability, first_free_slot, FreeSlot};
pub use brief::{daily_brief, weekly_brief, BriefConfig, DailyBrief, WeeklyBrief};
pub use busy::{identify_busy_periods, BusyPeriod};
pub use conflict::{find_conflicts, Conflict};
pub use error::BriefError;
pub use event::{parse_timezone, Event, WorkingHours};
pub use stats::{aggregate_meeting_hours, meeting_count};
pub use tasks::{group_by_due, priority_counts, Priority, Task, TaskGroups, TaskSummary};

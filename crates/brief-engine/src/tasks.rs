//! Minimal task records from the to-do service, grouped for display.
//!
//! Deliberately narrow: due date and priority are the only attributes the
//! brief sorts or groups on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task priority, most urgent first. Mirrors the upstream 1-4 numeric scale
/// where 4 is the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Normal,
}

impl Priority {
    /// Map the upstream numeric level (4 = most urgent) to a priority.
    /// Out-of-range levels fall back to `Normal`.
    pub fn from_level(level: u8) -> Self {
        match level {
            4 => Priority::Urgent,
            3 => Priority::High,
            2 => Priority::Medium,
            _ => Priority::Normal,
        }
    }
}

/// A to-do item, already fetched and normalized by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,
    pub due: Option<NaiveDate>,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

/// Open tasks bucketed by due date relative to a reference day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskGroups {
    pub overdue: Vec<Task>,
    pub due_today: Vec<Task>,
    pub upcoming: Vec<Task>,
    pub undated: Vec<Task>,
}

/// Bucket open tasks by due date; completed tasks are dropped.
///
/// Every bucket is sorted by due date, then priority (most urgent first),
/// then input order.
pub fn group_by_due(tasks: &[Task], today: NaiveDate) -> TaskGroups {
    let mut groups = TaskGroups::default();

    for task in tasks.iter().filter(|t| !t.completed) {
        match task.due {
            Some(due) if due < today => groups.overdue.push(task.clone()),
            Some(due) if due == today => groups.due_today.push(task.clone()),
            Some(_) => groups.upcoming.push(task.clone()),
            None => groups.undated.push(task.clone()),
        }
    }

    for bucket in [
        &mut groups.overdue,
        &mut groups.due_today,
        &mut groups.upcoming,
        &mut groups.undated,
    ] {
        // Stable sort: equal (due, priority) keys keep input order.
        bucket.sort_by_key(|t| (t.due, t.priority));
    }

    groups
}

/// Open-task counts per priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    pub urgent: usize,
    pub high: usize,
    pub medium: usize,
    pub normal: usize,
}

/// Count open tasks per priority level; completed tasks are dropped.
pub fn priority_counts(tasks: &[Task]) -> PriorityCounts {
    let mut counts = PriorityCounts::default();

    for task in tasks.iter().filter(|t| !t.completed) {
        match task.priority {
            Priority::Urgent => counts.urgent += 1,
            Priority::High => counts.high += 1,
            Priority::Medium => counts.medium += 1,
            Priority::Normal => counts.normal += 1,
        }
    }

    counts
}

/// Display-ready task summary attached to a brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub open: usize,
    pub overdue: usize,
    pub due_today: usize,
    pub counts: PriorityCounts,
}

impl TaskSummary {
    pub fn from_tasks(tasks: &[Task], today: NaiveDate) -> Self {
        let groups = group_by_due(tasks, today);
        Self {
            open: tasks.iter().filter(|t| !t.completed).count(),
            overdue: groups.overdue.len(),
            due_today: groups.due_today.len(),
            counts: priority_counts(tasks),
        }
    }
}

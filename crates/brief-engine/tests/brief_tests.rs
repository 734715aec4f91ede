//! Tests for daily and weekly brief assembly.

use brief_engine::{daily_brief, weekly_brief, BriefConfig, Event, Priority, Task};
use chrono::NaiveDate;
use chrono_tz::Tz;

fn event_at(id: &str, start: &str, end: &str) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {id}"),
        start: start.parse().unwrap(),
        end: end.parse().unwrap(),
        is_all_day: false,
        source: "work".to_string(),
    }
}

fn date(raw: &str) -> NaiveDate {
    raw.parse().unwrap()
}

#[test]
fn daily_brief_composes_all_sections() {
    let events = vec![
        event_at("a", "2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z"),
        event_at("b", "2026-03-02T09:45:00Z", "2026-03-02T10:30:00Z"),
        event_at("c", "2026-03-02T10:00:00Z", "2026-03-02T11:00:00Z"),
        event_at("d", "2026-03-02T14:00:00Z", "2026-03-02T15:00:00Z"),
    ];
    let tasks = vec![Task {
        id: "t1".to_string(),
        content: "Prepare report".to_string(),
        due: Some(date("2026-03-02")),
        priority: Priority::Urgent,
        completed: false,
    }];

    let brief = daily_brief(
        &events,
        Some(&tasks),
        date("2026-03-02"),
        BriefConfig::default(),
        Tz::UTC,
    )
    .unwrap();

    assert_eq!(brief.meeting_count, 4);
    assert_eq!(brief.total_meeting_hours, 3.25);
    // b and c overlap 10:00-10:30
    assert_eq!(brief.conflicts.len(), 1);
    assert_eq!(brief.conflicts[0].overlap_minutes, 30);
    // a, b, c chain into one period; d stands alone and is dropped
    assert_eq!(brief.busy_periods.len(), 1);
    assert_eq!(brief.busy_periods[0].events.len(), 3);
    // Free 11:00-14:00 and 15:00-18:00
    assert_eq!(brief.free_slots.len(), 2);
    assert_eq!(brief.free_slots[0].duration_minutes, 180);
    assert_eq!(brief.free_slots[1].duration_minutes, 180);

    let tasks = brief.tasks.expect("task summary requested");
    assert_eq!(tasks.open, 1);
    assert_eq!(tasks.due_today, 1);
    assert_eq!(tasks.counts.urgent, 1);
}

#[test]
fn daily_brief_ignores_other_days() {
    let events = vec![
        event_at("today", "2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z"),
        event_at("tomorrow", "2026-03-03T09:00:00Z", "2026-03-03T10:00:00Z"),
    ];

    let brief = daily_brief(&events, None, date("2026-03-02"), BriefConfig::default(), Tz::UTC)
        .unwrap();

    assert_eq!(brief.meeting_count, 1);
    assert_eq!(brief.total_meeting_hours, 1.0);
}

#[test]
fn daily_brief_day_membership_follows_reference_timezone() {
    // 2026-03-03T02:00Z is still the evening of March 2 in New York
    let tz: Tz = "America/New_York".parse().unwrap();
    let events = vec![event_at(
        "late",
        "2026-03-03T02:00:00Z",
        "2026-03-03T03:00:00Z",
    )];

    let brief = daily_brief(&events, None, date("2026-03-02"), BriefConfig::default(), tz)
        .unwrap();

    assert_eq!(brief.meeting_count, 1);
}

#[test]
fn all_day_event_affects_nothing() {
    let mut offsite = event_at("offsite", "2026-03-02T00:00:00Z", "2026-03-03T00:00:00Z");
    offsite.is_all_day = true;

    let brief = daily_brief(
        &[offsite],
        None,
        date("2026-03-02"),
        BriefConfig::default(),
        Tz::UTC,
    )
    .unwrap();

    assert_eq!(brief.meeting_count, 0);
    assert_eq!(brief.total_meeting_hours, 0.0);
    assert!(brief.conflicts.is_empty());
    assert!(brief.busy_periods.is_empty());
    assert_eq!(brief.free_slots.len(), 1);
    assert_eq!(brief.free_slots[0].duration_minutes, 540);
}

#[test]
fn weekly_brief_covers_seven_consecutive_days() {
    let events = vec![
        event_at("mon", "2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z"),
        event_at("wed", "2026-03-04T09:00:00Z", "2026-03-04T12:00:00Z"),
    ];

    let brief = weekly_brief(&events, None, date("2026-03-02"), BriefConfig::default(), Tz::UTC)
        .unwrap();

    assert_eq!(brief.days.len(), 7);
    assert_eq!(brief.start_date, date("2026-03-02"));
    assert_eq!(brief.end_date, date("2026-03-08"));
    for (offset, day) in brief.days.iter().enumerate() {
        assert_eq!(day.date, date("2026-03-02") + chrono::Days::new(offset as u64));
    }
    assert_eq!(brief.total_meeting_hours, 4.0);
    assert_eq!(brief.busiest_day, Some(date("2026-03-04")));
}

#[test]
fn meeting_free_week_has_no_busiest_day() {
    let brief = weekly_brief(&[], None, date("2026-03-02"), BriefConfig::default(), Tz::UTC)
        .unwrap();

    assert!(brief.busiest_day.is_none());
    assert_eq!(brief.total_meeting_hours, 0.0);
}

#[test]
fn busiest_day_ties_resolve_to_first() {
    let events = vec![
        event_at("mon", "2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z"),
        event_at("tue", "2026-03-03T09:00:00Z", "2026-03-03T10:00:00Z"),
    ];

    let brief = weekly_brief(&events, None, date("2026-03-02"), BriefConfig::default(), Tz::UTC)
        .unwrap();

    assert_eq!(brief.busiest_day, Some(date("2026-03-02")));
}

#[test]
fn daily_brief_serializes_and_round_trips() {
    let events = vec![event_at("a", "2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z")];

    let brief = daily_brief(&events, None, date("2026-03-02"), BriefConfig::default(), Tz::UTC)
        .unwrap();

    let json = serde_json::to_string(&brief).unwrap();
    assert!(json.contains("\"date\":\"2026-03-02\""));
    // No tasks were supplied, so the field is omitted entirely
    assert!(!json.contains("\"tasks\""));

    let back: brief_engine::DailyBrief = serde_json::from_str(&json).unwrap();
    assert_eq!(back, brief);
}

//! `daybrief` CLI — analyze aggregated calendar events into a daily or
//! weekly schedule brief.
//!
//! ## Usage
//!
//! ```sh
//! # Daily brief for today from a merged events file
//! daybrief --events events.json --timezone America/New_York
//!
//! # Weekly brief starting Monday, with tasks, as plain text
//! daybrief --events events.json --tasks tasks.json \
//!     --mode weekly --date 2026-03-02 --format text
//!
//! # Events on stdin, JSON brief to a file
//! cat events.json | daybrief --date 2026-03-02 -o brief.json
//! ```
//!
//! Input files hold JSON arrays of normalized event and task records.
//! Fetching and authenticating against the calendar and to-do services
//! happen upstream of this tool, as does rendering the brief into a
//! document.

use anyhow::{Context, Result};
use brief_engine::{
    daily_brief, parse_timezone, weekly_brief, BriefConfig, DailyBrief, Event, Task, WeeklyBrief,
    WorkingHours,
};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Parser, ValueEnum};
use std::fmt::Write as _;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "daybrief",
    version,
    about = "Daily and weekly schedule briefs from aggregated calendar data"
)]
struct Cli {
    /// Events JSON file (reads from stdin if omitted)
    #[arg(long)]
    events: Option<String>,

    /// Tasks JSON file (omit to skip the task summary)
    #[arg(long)]
    tasks: Option<String>,

    /// Aggregation mode
    #[arg(long, value_enum, default_value_t = Mode::Daily)]
    mode: Mode,

    /// Reference date, YYYY-MM-DD (defaults to today in --timezone)
    #[arg(long)]
    date: Option<String>,

    /// IANA timezone for day boundaries and working hours
    #[arg(long, default_value = "America/New_York")]
    timezone: String,

    /// Busy-period working hours, as START-END (24h)
    #[arg(long, default_value = "9-17")]
    busy_hours: String,

    /// Availability working hours, as START-END (24h)
    #[arg(long, default_value = "9-18")]
    free_hours: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Daily,
    Weekly,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tz = parse_timezone(&cli.timezone)?;
    let config = BriefConfig {
        busy_hours: parse_hours(&cli.busy_hours)?,
        availability_hours: parse_hours(&cli.free_hours)?,
    };

    let date = match &cli.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date: '{raw}' (expected YYYY-MM-DD)"))?,
        None => Utc::now().with_timezone(&tz).date_naive(),
    };

    let events: Vec<Event> = serde_json::from_str(&read_input(cli.events.as_deref())?)
        .context("Failed to parse events JSON")?;

    let tasks: Option<Vec<Task>> = match &cli.tasks {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {path}"))?;
            Some(serde_json::from_str(&raw).context("Failed to parse tasks JSON")?)
        }
        None => None,
    };

    let rendered = match cli.mode {
        Mode::Daily => {
            let brief = daily_brief(&events, tasks.as_deref(), date, config, tz)?;
            match cli.format {
                Format::Json => serde_json::to_string_pretty(&brief)?,
                Format::Text => render_daily_text(&brief, tz),
            }
        }
        Mode::Weekly => {
            let brief = weekly_brief(&events, tasks.as_deref(), date, config, tz)?;
            match cli.format {
                Format::Json => serde_json::to_string_pretty(&brief)?,
                Format::Text => render_weekly_text(&brief, tz),
            }
        }
    };

    write_output(cli.output.as_deref(), &rendered)
}

/// Parse a "START-END" hour range like "9-17".
fn parse_hours(raw: &str) -> Result<WorkingHours> {
    let (start, end) = raw
        .split_once('-')
        .with_context(|| format!("Invalid hours: '{raw}' (expected START-END, e.g. 9-17)"))?;
    let start: u32 = start
        .trim()
        .parse()
        .with_context(|| format!("Invalid start hour: '{start}'"))?;
    let end: u32 = end
        .trim()
        .parse()
        .with_context(|| format!("Invalid end hour: '{end}'"))?;
    Ok(WorkingHours::new(start, end)?)
}

fn render_daily_text(brief: &DailyBrief, tz: Tz) -> String {
    let clock = |instant: &chrono::DateTime<Utc>| instant.with_timezone(&tz).format("%H:%M");
    let mut out = String::new();

    let _ = writeln!(out, "Daily brief for {}", brief.date);
    let _ = writeln!(
        out,
        "Meetings: {} ({:.1}h total)",
        brief.meeting_count, brief.total_meeting_hours
    );

    if !brief.conflicts.is_empty() {
        let _ = writeln!(out, "Conflicts:");
        for conflict in &brief.conflicts {
            let _ = writeln!(
                out,
                "  {} <> {} at {}",
                conflict.event_a.title,
                conflict.event_b.title,
                clock(&conflict.start)
            );
        }
    }

    if !brief.busy_periods.is_empty() {
        let _ = writeln!(out, "Busy periods:");
        for period in &brief.busy_periods {
            let _ = writeln!(
                out,
                "  {} to {}: {}",
                clock(&period.start),
                clock(&period.end),
                period.events.join(", ")
            );
        }
    }

    let _ = writeln!(out, "Free slots:");
    if brief.free_slots.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for slot in &brief.free_slots {
        let _ = writeln!(
            out,
            "  {} to {} ({} min)",
            clock(&slot.start),
            clock(&slot.end),
            slot.duration_minutes
        );
    }

    if let Some(tasks) = &brief.tasks {
        let _ = writeln!(
            out,
            "Tasks: {} open, {} overdue, {} due today ({} urgent)",
            tasks.open, tasks.overdue, tasks.due_today, tasks.counts.urgent
        );
    }

    // Wall-clock times above are in the reference timezone; say so.
    let _ = writeln!(out, "All times in {tz}");
    out
}

fn render_weekly_text(brief: &WeeklyBrief, tz: Tz) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Weekly brief for {} to {}",
        brief.start_date, brief.end_date
    );
    let _ = writeln!(out, "Total meeting hours: {:.1}", brief.total_meeting_hours);
    match brief.busiest_day {
        Some(day) => {
            let _ = writeln!(out, "Busiest day: {day}");
        }
        None => {
            let _ = writeln!(out, "Busiest day: none (meeting-free week)");
        }
    }

    for day in &brief.days {
        let _ = writeln!(
            out,
            "  {}: {} meetings, {:.1}h, {} conflicts, {} free slots",
            day.date,
            day.meeting_count,
            day.total_meeting_hours,
            day.conflicts.len(),
            day.free_slots.len()
        );
    }

    if let Some(tasks) = &brief.tasks {
        let _ = writeln!(
            out,
            "Tasks: {} open, {} overdue, {} due today ({} urgent)",
            tasks.open, tasks.overdue, tasks.due_today, tasks.counts.urgent
        );
    }

    let _ = writeln!(out, "All times in {tz}");
    out
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

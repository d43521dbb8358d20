use std::{collections::BTreeMap, env, path::PathBuf};

use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

use calendar_utils::{
    calendar::{CalendarView, Event, expand_occurrences},
    holidays::{HolidayMap, fetch_holidays},
    search::EventSearch,
    storage::{config::Config, events::EventsFile},
    utils::{
        date::{format_date, format_month, format_week, get_week_dates, get_weeks_at_month},
        filter::{search_events, view_date_range},
        notification::{create_notification_message, get_upcoming_events},
        overlap::find_overlapping_events,
        time_validation::get_time_error_message,
    },
};

pub const USAGE: &str = "Usage: calendar-utils [--events FILE] [--date YYYY-MM-DD] [--view week|month] \
[--search TERM] [--now YYYY-MM-DDTHH:MM] [--check HH:MM HH:MM]";

const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Help,
    Agenda(AgendaOptions),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgendaOptions {
    pub events_file: Option<PathBuf>,
    pub date: NaiveDate,
    pub view: Option<CalendarView>,
    pub search: String,
    pub now: NaiveDateTime,
    pub check: Option<(String, String)>,
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    let now = Local::now().naive_local();
    parse_args(env::args().skip(1), now)
}

pub fn parse_args(args: impl IntoIterator<Item = String>, now: NaiveDateTime) -> Result<CliMode, String> {
    let mut options = AgendaOptions {
        events_file: None,
        date: now.date(),
        view: None,
        search: String::new(),
        now,
        check: None,
    };
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {}", flag));

        match arg.as_str() {
            "--events" => options.events_file = Some(PathBuf::from(value("--events")?)),
            "--date" => {
                let raw = value("--date")?;
                options.date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD.", raw))?;
            }
            "--view" => options.view = Some(value("--view")?.parse()?),
            "--search" => options.search = value("--search")?,
            "--now" => {
                let raw = value("--now")?;
                options.now = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M")
                    .map_err(|_| format!("Invalid time '{}'. Use YYYY-MM-DDTHH:MM.", raw))?;
            }
            "--check" => {
                let start = value("--check")?;
                let end = value("--check")?;
                options.check = Some((start, end));
            }
            "--help" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(CliMode::Agenda(options))
}

pub fn run_agenda(options: &AgendaOptions, config: &Config) -> anyhow::Result<()> {
    let events = match options.events_file.as_ref().or(config.calendar.events_file.as_ref()) {
        Some(path) => {
            EventsFile::load(path)
                .with_context(|| format!("loading events from {}", path.display()))?
                .events
        }
        None => {
            tracing::warn!("No events file configured; showing an empty calendar");
            Vec::new()
        }
    };

    let view = options.view.unwrap_or(config.calendar.default_view);
    let mut search = EventSearch::new(&events, options.date, view);
    search.set_search_term(options.search.as_str());

    let mut output = render_agenda(&events, &search, options.now);

    if let Some((start, end)) = &options.check {
        let mut candidate = Event::new("새 일정", options.date, start.as_str(), end.as_str());
        candidate.notification_time = config.notifications.default_lead_minutes;
        output.push_str("\n\n");
        output.push_str(&render_check(&candidate, &events));
    }

    println!("{output}");
    Ok(())
}

pub fn render_agenda(events: &[Event], search: &EventSearch<'_>, now: NaiveDateTime) -> String {
    let date = search.current_date();
    let view = search.view();
    let holidays = fetch_holidays(date);
    let mut lines = Vec::new();

    match view {
        CalendarView::Week => {
            lines.push(format_week(date));
            lines.push(String::new());
            lines.push(render_week_header(date));
        }
        CalendarView::Month => {
            lines.push(format_month(date));
            lines.push(String::new());
            lines.extend(render_month_grid(date, &holidays));
        }
    }
    lines.push(String::new());

    if !search.search_term().is_empty() {
        lines.push(format!("검색어: {}", search.search_term()));
    }

    let filtered = search.filtered_events();
    if filtered.is_empty() {
        lines.push("일정이 없습니다.".to_string());
    } else {
        for event in filtered {
            lines.push(format!("- {}", build_event_line(event)));
        }
    }

    let (start, end) = view_date_range(date, view);
    for event in search_events(events, search.search_term()) {
        if !event.is_recurring() {
            continue;
        }
        let repeats: Vec<String> = expand_occurrences(event, start, end)
            .into_iter()
            .filter(|day| event.parsed_date() != Some(*day))
            .map(|day| format_date(day, None))
            .collect();
        if !repeats.is_empty() {
            lines.push(format!("  반복 {}: {}", event.title, repeats.join(", ")));
        }
    }

    if !holidays.is_empty() {
        lines.push(String::new());
        lines.push("공휴일".to_string());
        for (day, name) in &holidays {
            lines.push(format!("- {} {}", day, name));
        }
    }

    let due = get_upcoming_events(events, now, &[]);
    if !due.is_empty() {
        lines.push(String::new());
        lines.push("알림".to_string());
        for event in due {
            lines.push(format!("- {}", create_notification_message(event)));
        }
    }

    lines.join("\n")
}

pub fn render_check(candidate: &Event, events: &[Event]) -> String {
    let mut lines = vec![format!(
        "확인: {} {}-{}",
        candidate.date, candidate.start_time, candidate.end_time
    )];

    let errors = get_time_error_message(&candidate.start_time, &candidate.end_time);
    if errors.has_error() {
        lines.extend(errors.start_time_error.map(String::from));
        lines.extend(errors.end_time_error.map(String::from));
        return lines.join("\n");
    }

    let overlapping = find_overlapping_events(candidate, events);
    if overlapping.is_empty() {
        lines.push("겹치는 일정이 없습니다.".to_string());
    } else {
        lines.push("다음 일정과 겹칩니다:".to_string());
        for event in overlapping {
            lines.push(format!("- {}", build_event_line(event)));
        }
    }

    lines.join("\n")
}

fn build_event_line(event: &Event) -> String {
    let mut line = format!("{} {}-{} {}", event.date, event.start_time, event.end_time, event.title);
    if !event.location.is_empty() {
        line.push_str(&format!(" @ {}", event.location));
    }
    line
}

fn render_week_header(date: NaiveDate) -> String {
    get_week_dates(date)
        .iter()
        .zip(WEEKDAY_LABELS)
        .map(|(day, label)| format!("{} {}", label, day.day()))
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_month_grid(date: NaiveDate, holidays: &HolidayMap) -> Vec<String> {
    let holiday_days: BTreeMap<u32, &str> = holidays
        .iter()
        .filter_map(|(day, name)| {
            NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .ok()
                .map(|d| (d.day(), *name))
        })
        .collect();

    let mut rows = vec![WEEKDAY_LABELS.map(|label| format!(" {label} ")).join("")];
    for week in get_weeks_at_month(date) {
        let row = week
            .iter()
            .map(|slot| match slot {
                Some(day) if holiday_days.contains_key(day) => format!("{:>3}*", day),
                Some(day) => format!("{:>3} ", day),
                None => "    ".to_string(),
            })
            .collect::<String>();
        rows.push(row.trim_end().to_string());
    }
    rows
}

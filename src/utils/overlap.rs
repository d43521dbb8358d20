use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::calendar::event::{DATE_FORMAT, TIME_FORMAT};
use crate::calendar::{DateRange, Event};

/// Combines `YYYY-MM-DD` and `HH:MM` into a timestamp, `None` if either is malformed.
pub fn parse_date_time(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).ok()?;
    let time = NaiveTime::parse_from_str(time_str, TIME_FORMAT).ok()?;
    Some(date.and_time(time))
}

pub fn convert_event_to_date_range(event: &Event) -> DateRange {
    DateRange {
        start: parse_date_time(&event.date, &event.start_time),
        end: parse_date_time(&event.date, &event.end_time),
    }
}

pub fn is_overlapping(a: &Event, b: &Event) -> bool {
    let first = convert_event_to_date_range(a);
    let second = convert_event_to_date_range(b);

    match (first.start, first.end, second.start, second.end) {
        (Some(start1), Some(end1), Some(start2), Some(end2)) => start1 < end2 && start2 < end1,
        _ => false,
    }
}

/// Events from `events` that clash with `candidate`, in list order.
/// Entries sharing the candidate's id are the candidate itself and are skipped.
pub fn find_overlapping_events<'a>(candidate: &Event, events: &'a [Event]) -> Vec<&'a Event> {
    let overlapping: Vec<&Event> = events
        .iter()
        .filter(|event| event.id != candidate.id && is_overlapping(event, candidate))
        .collect();

    if !overlapping.is_empty() {
        tracing::debug!("{} event(s) overlap '{}'", overlapping.len(), candidate.title);
    }

    overlapping
}

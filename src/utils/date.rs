use std::fmt::Display;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::Event;

pub const DEFAULT_FILL_WIDTH: usize = 2;

/// One row of a month grid, Sunday first. `None` marks days outside the month.
pub type Week = [Option<u32>; 7];
pub type WeeksGrid = Vec<Week>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    fn offset_of(self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day count of a 1-indexed month. Months outside 1..=12 roll over into
/// neighbouring years, so month 13 is January of the following year.
pub fn get_days_in_month(year: i32, month: i32) -> u32 {
    let index = i64::from(year) * 12 + i64::from(month) - 1;
    let (year, month) = (index.div_euclid(12), index.rem_euclid(12) + 1);

    // Leap years repeat every 400 years.
    match month {
        2 if is_leap_year(year.rem_euclid(400) as i32) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn get_week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    get_week_dates_from(date, WeekStart::Sunday)
}

/// At the limits of `NaiveDate` the days that cannot be represented are
/// clamped to `NaiveDate::MIN` or `NaiveDate::MAX`.
pub fn get_week_dates_from(date: NaiveDate, week_start: WeekStart) -> [NaiveDate; 7] {
    let offset = u64::from(week_start.offset_of(date));
    let first = date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN);

    std::array::from_fn(|i| first.checked_add_days(Days::new(i as u64)).unwrap_or(NaiveDate::MAX))
}

pub fn get_weeks_at_month(date: NaiveDate) -> WeeksGrid {
    let days_in_month = get_days_in_month(date.year(), date.month() as i32);
    let first_weekday = date
        .with_day(1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0);

    let mut weeks = Vec::new();
    let mut week: Week = [None; 7];

    for day in 1..=days_in_month {
        let slot = ((first_weekday + day - 1) % 7) as usize;
        week[slot] = Some(day);

        if slot == 6 || day == days_in_month {
            weeks.push(week);
            week = [None; 7];
        }
    }

    weeks
}

pub fn get_events_for_day(events: &[Event], day: u32) -> Vec<&Event> {
    if day == 0 || day > 31 {
        return Vec::new();
    }

    events
        .iter()
        .filter(|event| event.parsed_date().is_some_and(|d| d.day() == day))
        .collect()
}

/// Label such as `2024년 10월 3주`.
///
/// A week belongs to the month holding its Thursday, so the last days of
/// December can be labelled as the first week of January.
pub fn format_week(date: NaiveDate) -> String {
    let offset = i64::from(date.weekday().num_days_from_sunday());
    let Some(thursday) = date.checked_add_signed(chrono::Duration::days(4 - offset)) else {
        return format_month(date) + " 1주";
    };

    let first_weekday = thursday
        .with_day(1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0);
    let first_thursday = 1 + (4 + 7 - first_weekday) % 7;
    let week_number = thursday.day().saturating_sub(first_thursday) / 7 + 1;

    format!("{}년 {}월 {}주", thursday.year(), thursday.month(), week_number)
}

pub fn format_month(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// Inclusive on both ends. An inverted range contains nothing.
pub fn is_date_in_range<T: PartialOrd>(date: T, start: T, end: T) -> bool {
    start <= end && date >= start && date <= end
}

/// Left-pads the rendered number with zeros up to `size` characters.
/// A leading minus sign stays in front of the padding.
pub fn fill_zero<T: Display>(value: T, size: usize) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() >= size {
        return rendered;
    }

    match rendered.strip_prefix('-') {
        Some(digits) => format!("-{:0>width$}", digits, width = size - 1),
        None => format!("{:0>width$}", rendered, width = size),
    }
}

pub fn format_date(date: NaiveDate, day: Option<u32>) -> String {
    format!(
        "{}-{}-{}",
        date.year(),
        fill_zero(date.month(), DEFAULT_FILL_WIDTH),
        fill_zero(day.unwrap_or_else(|| date.day()), DEFAULT_FILL_WIDTH)
    )
}

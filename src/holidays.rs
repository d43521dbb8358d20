use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::utils::date::{DEFAULT_FILL_WIDTH, fill_zero};

/// Public holidays of Korea for 2024, keyed by ISO date.
pub const HOLIDAYS: &[(&str, &str)] = &[
    ("2024-01-01", "신정"),
    ("2024-02-09", "설날"),
    ("2024-02-10", "설날"),
    ("2024-02-11", "설날"),
    ("2024-03-01", "삼일절"),
    ("2024-05-05", "어린이날"),
    ("2024-06-06", "현충일"),
    ("2024-08-15", "광복절"),
    ("2024-09-16", "추석"),
    ("2024-09-17", "추석"),
    ("2024-09-18", "추석"),
    ("2024-10-03", "개천절"),
    ("2024-10-09", "한글날"),
    ("2024-12-25", "크리스마스"),
];

pub type HolidayMap = BTreeMap<&'static str, &'static str>;

/// Holidays falling in the month of `date`.
pub fn fetch_holidays(date: NaiveDate) -> HolidayMap {
    let prefix = format!("{}-{}-", date.year(), fill_zero(date.month(), DEFAULT_FILL_WIDTH));

    HOLIDAYS
        .iter()
        .filter(|(day, _)| day.starts_with(&prefix))
        .map(|&(day, name)| (day, name))
        .collect()
}

pub fn holiday_on(date: NaiveDate) -> Option<&'static str> {
    let key = date.format("%Y-%m-%d").to_string();
    HOLIDAYS.iter().find(|(day, _)| *day == key).map(|&(_, name)| name)
}

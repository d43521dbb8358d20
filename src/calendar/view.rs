use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Week,
    #[default]
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl CalendarView {
    /// Moves `date` one view step. Month steps land on the first of the month.
    pub fn navigate(self, date: NaiveDate, direction: Direction) -> NaiveDate {
        match (self, direction) {
            (CalendarView::Week, Direction::Prev) => {
                date.checked_sub_days(Days::new(7)).unwrap_or(date)
            }
            (CalendarView::Week, Direction::Next) => {
                date.checked_add_days(Days::new(7)).unwrap_or(date)
            }
            (CalendarView::Month, direction) => {
                let offset = match direction {
                    Direction::Prev => -1,
                    Direction::Next => 1,
                };
                let index = date.year() * 12 + date.month0() as i32 + offset;
                NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
                    .unwrap_or(date)
            }
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarView::Week => write!(f, "week"),
            CalendarView::Month => write!(f, "month"),
        }
    }
}

impl FromStr for CalendarView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" => Ok(CalendarView::Week),
            "month" => Ok(CalendarView::Month),
            other => Err(format!("Unknown view '{}'. Use week or month.", other)),
        }
    }
}

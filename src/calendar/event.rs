use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
    pub category: EventCategory,
    pub repeat: RepeatInfo,
    pub notification_time: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    #[serde(alias = "업무")]
    Work,
    #[serde(alias = "개인")]
    Personal,
    #[serde(alias = "가족")]
    Family,
    Health,
    Social,
    #[serde(alias = "기타")]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub kind: RepeatType,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Start and end of an event. `None` marks a value that could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn is_valid(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

impl RepeatInfo {
    pub fn none() -> Self {
        Self {
            kind: RepeatType::None,
            interval: 0,
            end_date: None,
        }
    }
}

impl Default for RepeatInfo {
    fn default() -> Self {
        Self::none()
    }
}

impl Event {
    /// One-off event with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            date: date.format(DATE_FORMAT).to_string(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            description: String::new(),
            location: String::new(),
            category: EventCategory::Other,
            repeat: RepeatInfo::none(),
            notification_time: 10,
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    pub fn is_recurring(&self) -> bool {
        self.repeat.kind != RepeatType::None
    }
}

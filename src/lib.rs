pub mod calendar;
pub mod holidays;
pub mod search;
pub mod storage;
pub mod utils;

pub use calendar::{CalendarView, DateRange, Event, EventCategory, RepeatInfo, RepeatType};
pub use holidays::fetch_holidays;
pub use search::EventSearch;

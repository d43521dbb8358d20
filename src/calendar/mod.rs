pub mod event;
pub mod repeat;
pub mod view;

pub use event::{DateRange, Event, EventCategory, RepeatInfo, RepeatType};
pub use repeat::expand_occurrences;
pub use view::{CalendarView, Direction};

use chrono::NaiveDate;

use crate::calendar::{CalendarView, Event};
use crate::utils::filter::get_filtered_events;

/// Search state over a borrowed event list.
///
/// Every setter recomputes the filtered list before returning, so
/// `filtered_events` always reflects the latest term, date and view.
#[derive(Debug, Clone)]
pub struct EventSearch<'a> {
    events: &'a [Event],
    current_date: NaiveDate,
    view: CalendarView,
    search_term: String,
    filtered: Vec<&'a Event>,
}

impl<'a> EventSearch<'a> {
    pub fn new(events: &'a [Event], current_date: NaiveDate, view: CalendarView) -> Self {
        let mut search = Self {
            events,
            current_date,
            view,
            search_term: String::new(),
            filtered: Vec::new(),
        };
        search.recompute();
        search
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn filtered_events(&self) -> &[&'a Event] {
        &self.filtered
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute();
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
        self.recompute();
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
        self.recompute();
    }

    pub fn set_events(&mut self, events: &'a [Event]) {
        self.events = events;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = get_filtered_events(self.events, &self.search_term, self.current_date, self.view);
    }
}

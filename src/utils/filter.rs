use chrono::{Datelike, NaiveDate};

use crate::calendar::{CalendarView, Event};
use crate::utils::date::{get_days_in_month, get_week_dates, is_date_in_range};

fn contains_term(target: &str, term: &str) -> bool {
    target.to_lowercase().contains(&term.to_lowercase())
}

/// Case-insensitive match against title, description and location.
pub fn search_events<'a>(events: &'a [Event], term: &str) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| {
            [&event.title, &event.description, &event.location]
                .iter()
                .any(|field| contains_term(field, term))
        })
        .collect()
}

pub fn filter_events_by_date_range<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a Event> {
    events
        .into_iter()
        .filter(|event| {
            event
                .parsed_date()
                .is_some_and(|date| is_date_in_range(date, start, end))
        })
        .collect()
}

/// First and last day visible in `view` around `current_date`.
pub fn view_date_range(current_date: NaiveDate, view: CalendarView) -> (NaiveDate, NaiveDate) {
    match view {
        CalendarView::Week => {
            let week = get_week_dates(current_date);
            (week[0], week[6])
        }
        CalendarView::Month => {
            let days = get_days_in_month(current_date.year(), current_date.month() as i32);
            let start = current_date.with_day(1).unwrap_or(current_date);
            let end = current_date.with_day(days).unwrap_or(current_date);
            (start, end)
        }
    }
}

pub fn get_filtered_events<'a>(
    events: &'a [Event],
    search_term: &str,
    current_date: NaiveDate,
    view: CalendarView,
) -> Vec<&'a Event> {
    let searched = search_events(events, search_term);
    let (start, end) = view_date_range(current_date, view);
    let filtered = filter_events_by_date_range(searched, start, end);

    tracing::debug!(
        "filtered {} of {} events for {} view {}..={} (term: '{}')",
        filtered.len(),
        events.len(),
        view,
        start,
        end,
        search_term
    );

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EventCategory, RepeatInfo};
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_event(id: &str, title: &str, on: &str, description: &str, location: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            date: on.to_string(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            description: description.to_string(),
            location: location.to_string(),
            category: EventCategory::Work,
            repeat: RepeatInfo::none(),
            notification_time: 30,
        }
    }

    fn july_events() -> Vec<Event> {
        vec![
            create_event("1", "event 이벤트 1", "2024-07-01", "첫 번째 이벤트", "회의실"),
            create_event("2", "이벤트 2", "2024-07-03", "두 번째 이벤트", "회의실"),
            create_event("3", "이벤트 3", "2024-07-15", "세 번째 이벤트", "카페"),
        ]
    }

    #[test]
    fn search_term_narrows_week_results() {
        let events = july_events();

        let result = get_filtered_events(&events, "이벤트 2", date(2024, 7, 1), CalendarView::Week);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn week_view_keeps_only_that_week() {
        let events = july_events();

        let result = get_filtered_events(&events, "", date(2024, 7, 1), CalendarView::Week);

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn month_view_keeps_whole_month() {
        let events = july_events();

        let result = get_filtered_events(&events, "", date(2024, 7, 1), CalendarView::Month);

        assert_eq!(result.len(), 3);
    }

    #[test]
    fn search_and_week_view_apply_together() {
        let events = july_events();

        let result = get_filtered_events(&events, "이벤트", date(2024, 7, 1), CalendarView::Week);

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn search_is_case_insensitive() {
        let events = july_events();

        let result = get_filtered_events(&events, "EvEnT", date(2024, 7, 1), CalendarView::Month);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn month_boundary_excludes_neighbouring_month() {
        let events = july_events();

        let result = get_filtered_events(&events, "", date(2024, 6, 30), CalendarView::Month);

        assert!(result.is_empty());
    }

    #[test]
    fn view_ranges_cover_week_and_month() {
        assert_eq!(
            view_date_range(date(2024, 7, 1), CalendarView::Week),
            (date(2024, 6, 30), date(2024, 7, 6))
        );
        assert_eq!(
            view_date_range(date(2024, 2, 14), CalendarView::Month),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
    }

    #[test]
    fn empty_event_list_gives_empty_result() {
        let result = get_filtered_events(&[], "", date(2024, 7, 1), CalendarView::Month);

        assert!(result.is_empty());
    }

    #[test]
    fn search_matches_description_and_location() {
        let events = july_events();

        assert_eq!(search_events(&events, "세 번째")[0].id, "3");
        assert_eq!(search_events(&events, "카페")[0].id, "3");
        assert_eq!(search_events(&events, "회의실").len(), 2);
    }

    #[test]
    fn unparseable_dates_are_outside_every_range() {
        let events = vec![create_event("1", "깨진 일정", "2024-0701", "", "")];

        let result = filter_events_by_date_range(&events, date(2024, 1, 1), date(2024, 12, 31));

        assert!(result.is_empty());
    }

    proptest! {
        #[test]
        fn month_view_returns_exactly_that_month(days in proptest::collection::vec(0i64..730, 0..20), pick in 0i64..730) {
            let base = date(2024, 1, 1);
            let events: Vec<Event> = days
                .iter()
                .enumerate()
                .map(|(i, offset)| {
                    let on = base + chrono::Duration::days(*offset);
                    create_event(&i.to_string(), "일정", &on.format("%Y-%m-%d").to_string(), "", "")
                })
                .collect();
            let current = base + chrono::Duration::days(pick);

            let result = get_filtered_events(&events, "", current, CalendarView::Month);
            let expected: Vec<&Event> = events
                .iter()
                .filter(|e| {
                    let d = e.parsed_date().unwrap();
                    d.year() == current.year() && d.month() == current.month()
                })
                .collect();

            prop_assert_eq!(result, expected);
        }
    }
}

use chrono::{Datelike, Days, NaiveDate};

use super::event::{DATE_FORMAT, Event, RepeatType};

/// Dates within `[range_start, range_end]` on which `event` occurs.
///
/// Monthly and yearly repeats keep the original day of month and skip
/// periods where it does not exist (the 31st, Feb 29th).
pub fn expand_occurrences(event: &Event, range_start: NaiveDate, range_end: NaiveDate) -> Vec<NaiveDate> {
    let Some(base) = event.parsed_date() else {
        return Vec::new();
    };

    let mut until = range_end;
    if event.is_recurring()
        && let Some(end) = event
            .repeat
            .end_date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
    {
        until = until.min(end);
    }

    if range_start > until {
        return Vec::new();
    }

    let interval = event.repeat.interval.max(1);

    match event.repeat.kind {
        RepeatType::None => {
            if base >= range_start && base <= until {
                vec![base]
            } else {
                Vec::new()
            }
        }
        RepeatType::Daily => step_days(base, u64::from(interval), range_start, until),
        RepeatType::Weekly => step_days(base, u64::from(interval) * 7, range_start, until),
        RepeatType::Monthly => step_months(base, i64::from(interval), range_start, until),
        RepeatType::Yearly => step_months(base, i64::from(interval) * 12, range_start, until),
    }
}

fn step_days(base: NaiveDate, step: u64, range_start: NaiveDate, until: NaiveDate) -> Vec<NaiveDate> {
    let mut current = base;
    if range_start > base {
        let gap = (range_start - base).num_days() as u64;
        let skip = gap.div_ceil(step) * step;
        match base.checked_add_days(Days::new(skip)) {
            Some(first) => current = first,
            None => return Vec::new(),
        }
    }

    let mut dates = Vec::new();
    while current <= until {
        dates.push(current);
        match current.checked_add_days(Days::new(step)) {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

fn step_months(base: NaiveDate, step: i64, range_start: NaiveDate, until: NaiveDate) -> Vec<NaiveDate> {
    let base_index = i64::from(base.year()) * 12 + i64::from(base.month0());
    let mut dates = Vec::new();

    for n in 0_i64.. {
        let Some(index) = n.checked_mul(step).and_then(|offset| base_index.checked_add(offset)) else {
            break;
        };
        let Ok(year) = i32::try_from(index.div_euclid(12)) else { break };
        let month = index.rem_euclid(12) as u32 + 1;
        let Some(month_start) = NaiveDate::from_ymd_opt(year, month, 1) else { break };
        if month_start > until {
            break;
        }
        if let Some(candidate) = NaiveDate::from_ymd_opt(year, month, base.day())
            && candidate >= range_start
            && candidate <= until
        {
            dates.push(candidate);
        }
    }

    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::event::RepeatInfo;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn repeating_event(on: NaiveDate, kind: RepeatType, interval: u32, end_date: Option<&str>) -> Event {
        let mut event = Event::new("반복 일정", on, "10:00", "11:00");
        event.repeat = RepeatInfo {
            kind,
            interval,
            end_date: end_date.map(String::from),
        };
        event
    }

    #[test]
    fn one_off_event_occurs_once_when_in_range() {
        let event = repeating_event(date(2024, 11, 10), RepeatType::None, 0, None);

        assert_eq!(
            expand_occurrences(&event, date(2024, 11, 1), date(2024, 11, 30)),
            vec![date(2024, 11, 10)]
        );
        assert!(expand_occurrences(&event, date(2024, 12, 1), date(2024, 12, 31)).is_empty());
    }

    #[test]
    fn daily_repeat_starts_at_range_start() {
        let event = repeating_event(date(2024, 11, 1), RepeatType::Daily, 2, None);

        assert_eq!(
            expand_occurrences(&event, date(2024, 11, 4), date(2024, 11, 10)),
            vec![date(2024, 11, 5), date(2024, 11, 7), date(2024, 11, 9)]
        );
    }

    #[test]
    fn weekly_repeat_stops_at_end_date() {
        let event = repeating_event(date(2024, 11, 6), RepeatType::Weekly, 1, Some("2024-11-20"));

        assert_eq!(
            expand_occurrences(&event, date(2024, 11, 1), date(2024, 12, 31)),
            vec![date(2024, 11, 6), date(2024, 11, 13), date(2024, 11, 20)]
        );
    }

    #[test]
    fn monthly_repeat_skips_months_without_the_day() {
        let event = repeating_event(date(2024, 1, 31), RepeatType::Monthly, 1, None);

        assert_eq!(
            expand_occurrences(&event, date(2024, 1, 1), date(2024, 5, 31)),
            vec![date(2024, 1, 31), date(2024, 3, 31), date(2024, 5, 31)]
        );
    }

    #[test]
    fn yearly_leap_day_repeat_only_in_leap_years() {
        let event = repeating_event(date(2020, 2, 29), RepeatType::Yearly, 1, None);

        assert_eq!(
            expand_occurrences(&event, date(2020, 1, 1), date(2028, 12, 31)),
            vec![date(2020, 2, 29), date(2024, 2, 29), date(2028, 2, 29)]
        );
    }

    #[test]
    fn zero_interval_is_treated_as_one() {
        let event = repeating_event(date(2024, 11, 1), RepeatType::Daily, 0, None);

        assert_eq!(expand_occurrences(&event, date(2024, 11, 1), date(2024, 11, 3)).len(), 3);
    }

    #[test]
    fn nothing_occurs_before_the_first_date() {
        let event = repeating_event(date(2024, 11, 15), RepeatType::Weekly, 1, None);

        assert!(expand_occurrences(&event, date(2024, 11, 1), date(2024, 11, 14)).is_empty());
    }

    #[test]
    fn unparseable_date_yields_nothing() {
        let mut event = repeating_event(date(2024, 11, 15), RepeatType::Daily, 1, None);
        event.date = "2024-1115".to_string();

        assert!(expand_occurrences(&event, date(2024, 11, 1), date(2024, 11, 30)).is_empty());
    }

    #[test]
    fn huge_yearly_interval_stays_in_range() {
        let event = repeating_event(date(2024, 3, 15), RepeatType::Yearly, 400_000_000, None);

        assert_eq!(
            expand_occurrences(&event, date(2024, 1, 1), date(2025, 12, 31)),
            vec![date(2024, 3, 15)]
        );
    }

    #[test]
    fn huge_monthly_interval_stays_in_range() {
        let event = repeating_event(date(2024, 3, 15), RepeatType::Monthly, 2_147_483_000, None);

        assert_eq!(
            expand_occurrences(&event, date(2024, 1, 1), date(2025, 12, 31)),
            vec![date(2024, 3, 15)]
        );
    }

    #[test]
    fn max_interval_never_panics() {
        for kind in [RepeatType::Daily, RepeatType::Weekly, RepeatType::Monthly, RepeatType::Yearly] {
            let event = repeating_event(date(2024, 3, 15), kind, u32::MAX, None);

            assert_eq!(
                expand_occurrences(&event, date(2024, 1, 1), NaiveDate::MAX),
                vec![date(2024, 3, 15)]
            );
        }
    }
}

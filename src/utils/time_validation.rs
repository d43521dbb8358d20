use chrono::NaiveTime;

use crate::calendar::event::TIME_FORMAT;

pub const START_TIME_ERROR: &str = "시작 시간은 종료 시간보다 빨라야 합니다.";
pub const END_TIME_ERROR: &str = "종료 시간은 시작 시간보다 늦어야 합니다.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeErrorRecord {
    pub start_time_error: Option<&'static str>,
    pub end_time_error: Option<&'static str>,
}

impl TimeErrorRecord {
    pub fn has_error(&self) -> bool {
        self.start_time_error.is_some() || self.end_time_error.is_some()
    }
}

/// Flags a start that is not strictly before the end. Incomplete input is not an error.
pub fn get_time_error_message(start: &str, end: &str) -> TimeErrorRecord {
    if start.is_empty() || end.is_empty() {
        return TimeErrorRecord::default();
    }

    let inverted = match (
        NaiveTime::parse_from_str(start, TIME_FORMAT),
        NaiveTime::parse_from_str(end, TIME_FORMAT),
    ) {
        (Ok(start), Ok(end)) => start >= end,
        _ => start >= end,
    };

    if inverted {
        TimeErrorRecord {
            start_time_error: Some(START_TIME_ERROR),
            end_time_error: Some(END_TIME_ERROR),
        }
    } else {
        TimeErrorRecord::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_record() -> TimeErrorRecord {
        TimeErrorRecord {
            start_time_error: Some(START_TIME_ERROR),
            end_time_error: Some(END_TIME_ERROR),
        }
    }

    #[test]
    fn start_after_end_is_an_error() {
        assert_eq!(get_time_error_message("12:00", "11:00"), error_record());
    }

    #[test]
    fn equal_times_are_an_error() {
        let result = get_time_error_message("12:00", "12:00");

        assert_eq!(result, error_record());
        assert!(result.has_error());
    }

    #[test]
    fn start_before_end_is_fine() {
        let result = get_time_error_message("12:00", "15:00");

        assert_eq!(result, TimeErrorRecord::default());
        assert!(!result.has_error());
    }

    #[test]
    fn empty_inputs_are_not_errors() {
        assert_eq!(get_time_error_message("", "15:00"), TimeErrorRecord::default());
        assert_eq!(get_time_error_message("12:00", ""), TimeErrorRecord::default());
        assert_eq!(get_time_error_message("", ""), TimeErrorRecord::default());
    }

    #[test]
    fn compares_clock_values_not_text() {
        assert!(!get_time_error_message("9:30", "10:00").has_error());
    }
}

//! Date interval and year-less month/day handling.
//!
//! The ranking service works on a single fixed season, so queries carry only
//! `MM-DD`. The picker still hands us full calendar dates; they are taken as
//! local wall-clock dates and never normalized across time zones.

use crate::error::{ControllerError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Date format used by `<input type="date">` values: "YYYY-MM-DD"
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Short display format, e.g. "Jan 15"
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d";

/// Maximum day per month, February allowing the leap day.
const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// An inclusive, ordered pair of calendar dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Build an interval from two dates in either order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            DateInterval { start: a, end: b }
        } else {
            DateInterval { start: b, end: a }
        }
    }

    /// A single picked day.
    pub fn single(day: NaiveDate) -> Self {
        DateInterval {
            start: day,
            end: day,
        }
    }

    /// Interval from whatever the picker reported on close.
    ///
    /// No dates means nothing was picked. One date collapses to a single day;
    /// with two or more, the first and last bound the range.
    pub fn from_selection(selected: &[NaiveDate]) -> Option<Self> {
        match selected {
            [] => None,
            [only] => Some(DateInterval::single(*only)),
            [first, .., last] => Some(DateInterval::new(*first, *last)),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// True when the range wraps the new year (e.g. Dec 28 to Jan 3).
    pub fn crosses_year_boundary(&self) -> bool {
        self.start.year() != self.end.year()
    }

    /// Number of days covered, both ends included.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// "Jan 15" for a single day, "Jan 15 - Jan 20" otherwise.
    pub fn display_text(&self) -> String {
        if self.is_single_day() {
            format_display_date(&self.start)
        } else {
            format!(
                "{} - {}",
                format_display_date(&self.start),
                format_display_date(&self.end)
            )
        }
    }
}

/// A year-less calendar day, serialized as zero-padded "MM-DD".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Validated constructor; February accepts the 29th.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let max_day = DAYS_IN_MONTH[(month - 1) as usize];
        if day < 1 || day > max_day {
            return None;
        }
        Some(MonthDay { month, day })
    }

    /// Drop the year from a calendar date.
    pub fn from_date(date: &NaiveDate) -> Self {
        MonthDay {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Parse the strict "MM-DD" form accepted by the search endpoint.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || {
            ControllerError::Validation(format!(
                "'{}' must be in MM-DD format (e.g., 02-08)",
                s
            ))
        };
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b'-' {
            return Err(invalid());
        }
        let month = s[0..2].parse::<u32>().map_err(|_| invalid())?;
        let day = s[3..5].parse::<u32>().map_err(|_| invalid())?;
        MonthDay::new(month, day).ok_or_else(invalid)
    }

}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Format a date as "Jan 15".
pub fn format_display_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parse the value of an `<input type="date">`; empty or malformed input is `None`.
pub fn parse_input_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), INPUT_DATE_FORMAT).ok()
}

/// Format a date for an `<input type="date">` value.
pub fn format_input_date(date: &NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_interval_orders_its_ends() {
        let interval = DateInterval::new(ymd(2025, 1, 20), ymd(2025, 1, 15));
        assert_eq!(interval.start(), ymd(2025, 1, 15));
        assert_eq!(interval.end(), ymd(2025, 1, 20));
        assert_eq!(interval.day_count(), 6);
    }

    #[test]
    fn test_from_selection() {
        assert_eq!(DateInterval::from_selection(&[]), None);

        let single = DateInterval::from_selection(&[ymd(2025, 2, 8)]).unwrap();
        assert!(single.is_single_day());
        assert_eq!(single.day_count(), 1);

        let range = DateInterval::from_selection(&[ymd(2025, 2, 8), ymd(2025, 2, 14)]).unwrap();
        assert_eq!(range.start(), ymd(2025, 2, 8));
        assert_eq!(range.end(), ymd(2025, 2, 14));
    }

    #[test]
    fn test_display_text() {
        assert_eq!(DateInterval::single(ymd(2025, 1, 15)).display_text(), "Jan 15");
        assert_eq!(
            DateInterval::new(ymd(2025, 1, 15), ymd(2025, 1, 20)).display_text(),
            "Jan 15 - Jan 20"
        );
    }

    #[test]
    fn test_crosses_year_boundary() {
        assert!(DateInterval::new(ymd(2024, 12, 28), ymd(2025, 1, 3)).crosses_year_boundary());
        assert!(!DateInterval::new(ymd(2025, 1, 1), ymd(2025, 1, 3)).crosses_year_boundary());
    }

    #[test]
    fn test_month_day_is_zero_padded_and_year_less() {
        assert_eq!(MonthDay::from_date(&ymd(2025, 2, 8)).to_string(), "02-08");
        assert_eq!(MonthDay::from_date(&ymd(1999, 2, 8)).to_string(), "02-08");
        assert_eq!(MonthDay::from_date(&ymd(2025, 12, 31)).to_string(), "12-31");
    }

    #[test]
    fn test_month_day_parse() {
        assert_eq!(MonthDay::parse("02-08").unwrap(), MonthDay::new(2, 8).unwrap());
        assert!(MonthDay::parse("02-29").is_ok());
        assert!(MonthDay::parse("02-30").is_err());
        assert!(MonthDay::parse("04-31").is_err());
        assert!(MonthDay::parse("13-01").is_err());
        assert!(MonthDay::parse("00-10").is_err());
        assert!(MonthDay::parse("2-8").is_err());
        assert!(MonthDay::parse("02/08").is_err());
        assert!(MonthDay::parse("ab-cd").is_err());
    }

    #[test]
    fn test_input_dates() {
        assert_eq!(parse_input_date("2025-01-15"), Some(ymd(2025, 1, 15)));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(format_input_date(&ymd(2025, 1, 5)), "2025-01-05");
    }
}

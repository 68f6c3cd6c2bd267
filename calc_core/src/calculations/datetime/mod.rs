//! # Date & Time Calculators
//!
//! Calendar arithmetic on [`chrono::NaiveDate`]. Dates travel as ISO-8601
//! strings (`"2024-03-15"`). Calculators that depend on "today" take an
//! optional reference date and expose a `calculate_on` variant for tests.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::errors::{CalcError, CalcResult};

pub mod add_days;
pub mod age;
pub mod date_difference;

pub use add_days::{AddDaysInput, AddDaysResult};
pub use age::{AgeInput, AgeResult};
pub use date_difference::{DateDifferenceInput, DateDifferenceResult};

/// Largest shift accepted by the date calculators (about 270 years)
pub const MAX_DAY_SHIFT: i64 = 100_000;

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `date + days`, failing instead of overflowing the calendar
pub fn shift_days(field: &str, date: NaiveDate, days: i64) -> CalcResult<NaiveDate> {
    if days.abs() > MAX_DAY_SHIFT {
        return Err(CalcError::out_of_range(
            field,
            days as f64,
            -(MAX_DAY_SHIFT as f64),
            MAX_DAY_SHIFT as f64,
        ));
    }
    date.checked_add_signed(Duration::days(days)).ok_or_else(|| {
        CalcError::invalid_input(field, date.to_string(), "Resulting date is out of range")
    })
}

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Weekdays in `[start, end)`; `start` must not be after `end`.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let total = (end - start).num_days();
    let full_weeks = total / 7;
    let mut count = full_weeks * 5;
    let mut day = start + Duration::days(full_weeks * 7);
    while day < end {
        if is_business_day(day) {
            count += 1;
        }
        day += Duration::days(1);
    }
    count
}

/// English weekday name, e.g. `"Monday"`
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_business_days_between() {
        // Mon 2024-03-04 .. Mon 2024-03-11
        assert_eq!(business_days_between(d(2024, 3, 4), d(2024, 3, 11)), 5);
        // Sat .. Mon
        assert_eq!(business_days_between(d(2024, 3, 9), d(2024, 3, 11)), 0);
        assert_eq!(business_days_between(d(2024, 3, 4), d(2024, 3, 4)), 0);
        // 31 days of March 2024 starting Friday the 1st
        assert_eq!(business_days_between(d(2024, 3, 1), d(2024, 4, 1)), 21);
    }

    #[test]
    fn test_shift_days_limits() {
        assert_eq!(shift_days("days", d(2024, 2, 28), 2).unwrap(), d(2024, 3, 1));
        assert!(shift_days("days", d(2024, 1, 1), MAX_DAY_SHIFT + 1).is_err());
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(d(2024, 3, 15)), "Friday");
    }
}

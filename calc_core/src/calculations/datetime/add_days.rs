//! # Add or Subtract Days
//!
//! Shift a date by a signed number of calendar days, or of business days
//! (weekends skipped).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{is_business_day, shift_days, weekday_name, MAX_DAY_SHIFT};
use crate::errors::CalcResult;
use crate::validation::{require_range, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AddDaysInput {
    pub date: NaiveDate,
    /// Negative values go back in time
    pub days: i64,
    #[serde(default)]
    pub business_days: bool,
}

impl Validate for AddDaysInput {
    fn validate(&self) -> CalcResult<()> {
        let limit = MAX_DAY_SHIFT as f64;
        require_range("days", self.days as f64, -limit, limit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddDaysResult {
    pub result_date: NaiveDate,
    pub weekday: String,
    /// Calendar days between input and result (signed)
    pub calendar_days: i64,
    pub formula: String,
}

pub fn calculate(input: &AddDaysInput) -> CalcResult<AddDaysResult> {
    input.validate()?;

    let result_date = if input.business_days {
        let step = if input.days < 0 { -1 } else { 1 };
        let mut date = input.date;
        let mut remaining = input.days.abs();
        while remaining > 0 {
            date = shift_days("date", date, step)?;
            if is_business_day(date) {
                remaining -= 1;
            }
        }
        date
    } else {
        shift_days("days", input.date, input.days)?
    };

    Ok(AddDaysResult {
        result_date,
        weekday: weekday_name(result_date),
        calendar_days: (result_date - input.date).num_days(),
        formula: if input.business_days {
            "result = date ± N business days (Mon–Fri)".to_string()
        } else {
            "result = date ± N days".to_string()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_calendar_days() {
        let input = AddDaysInput { date: d(2024, 2, 20), days: 10, business_days: false };
        let result = calculate(&input).unwrap();
        assert_eq!(result.result_date, d(2024, 3, 1));
        assert_eq!(result.weekday, "Friday");

        let back = AddDaysInput { date: d(2024, 3, 1), days: -10, business_days: false };
        assert_eq!(calculate(&back).unwrap().result_date, d(2024, 2, 20));
    }

    #[test]
    fn test_business_days() {
        // Friday + 1 business day = Monday
        let input = AddDaysInput { date: d(2024, 3, 1), days: 1, business_days: true };
        let result = calculate(&input).unwrap();
        assert_eq!(result.result_date, d(2024, 3, 4));
        assert_eq!(result.calendar_days, 3);

        let back = AddDaysInput { date: d(2024, 3, 4), days: -1, business_days: true };
        assert_eq!(calculate(&back).unwrap().result_date, d(2024, 3, 1));
    }
}

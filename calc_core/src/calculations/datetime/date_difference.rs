//! # Date Difference
//!
//! Distance between two dates in days, weeks, calendar months and business
//! days (Monday–Friday). The order of the two dates does not matter.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::age::whole_months;
use super::business_days_between;
use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateDifferenceInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Count the end date as a full day
    #[serde(default)]
    pub include_end_date: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateDifferenceResult {
    pub days: i64,
    pub weeks: i64,
    pub remaining_days: i64,
    pub months: u32,
    pub months_remaining_days: i64,
    pub years: u32,
    pub business_days: i64,
    /// True when `end_date` was before `start_date`
    pub swapped: bool,
    pub formula: String,
}

pub fn calculate(input: &DateDifferenceInput) -> CalcResult<DateDifferenceResult> {
    let swapped = input.end_date < input.start_date;
    let (start, end) = if swapped {
        (input.end_date, input.start_date)
    } else {
        (input.start_date, input.end_date)
    };
    let extra = i64::from(input.include_end_date);

    let days = (end - start).num_days() + extra;
    let months = whole_months(start, end);
    let anchor = start
        .checked_add_months(Months::new(months))
        .ok_or_else(|| CalcError::internal("month arithmetic overflowed"))?;

    let mut business_days = business_days_between(start, end);
    if input.include_end_date && super::is_business_day(end) {
        business_days += 1;
    }

    Ok(DateDifferenceResult {
        days,
        weeks: days / 7,
        remaining_days: days % 7,
        months,
        months_remaining_days: (end - anchor).num_days() + extra,
        years: months / 12,
        business_days,
        swapped,
        formula: "days = end date − start date".to_string(),
    })
}

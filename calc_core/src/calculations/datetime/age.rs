//! # Age Calculator
//!
//! Exact age in years, months and days plus totals and the countdown to the
//! next birthday. A 29 February birthday is celebrated on 28 February in
//! common years.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{today, weekday_name};
use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeInput {
    pub birth_date: NaiveDate,
    /// Defaults to today
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeResult {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_months: u32,
    pub total_weeks: i64,
    pub total_days: i64,
    pub next_birthday: NaiveDate,
    pub days_to_next_birthday: i64,
    pub born_on: String,
    pub reference_date: NaiveDate,
    pub formula: String,
}

/// Birthday of `birth` in `year`, moving 29 Feb to 28 Feb when needed.
fn birthday_in(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    birth
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birth.month(), 28))
}

/// Whole calendar months from `start` to `end` (`start <= end`).
pub(crate) fn whole_months(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

pub fn calculate(input: &AgeInput) -> CalcResult<AgeResult> {
    calculate_on(input, today())
}

pub fn calculate_on(input: &AgeInput, today: NaiveDate) -> CalcResult<AgeResult> {
    let birth = input.birth_date;
    let reference = input.reference_date.unwrap_or(today);
    if birth > reference {
        return Err(CalcError::invalid_input(
            "birth_date",
            birth.to_string(),
            "Birth date is after the reference date",
        ));
    }

    let total_months = whole_months(birth, reference);
    let anchor = birth
        .checked_add_months(Months::new(total_months))
        .ok_or_else(|| CalcError::internal("month arithmetic overflowed"))?;
    let days = (reference - anchor).num_days().max(0) as u32;
    let total_days = (reference - birth).num_days();

    let out_of_range =
        || CalcError::invalid_input("birth_date", birth.to_string(), "Date is out of range");
    let mut next = birthday_in(birth, reference.year()).ok_or_else(out_of_range)?;
    if next < reference {
        next = birthday_in(birth, reference.year() + 1).ok_or_else(out_of_range)?;
    }

    Ok(AgeResult {
        years: total_months / 12,
        months: total_months % 12,
        days,
        total_months,
        total_weeks: total_days / 7,
        total_days,
        next_birthday: next,
        days_to_next_birthday: (next - reference).num_days(),
        born_on: weekday_name(birth),
        reference_date: reference,
        formula: "age = reference date − birth date".to_string(),
    })
}

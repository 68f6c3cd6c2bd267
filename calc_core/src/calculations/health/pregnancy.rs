//! # Pregnancy Due Date
//!
//! Naegele's rule: due date = first day of the last menstrual period (LMP)
//! + 280 days, shifted by `cycle length − 28`. From a known conception date
//! the due date is conception + 266 days. Gestational age is counted from
//! the (cycle-adjusted) LMP and never goes below zero; the entered date
//! itself must not be after the reference date.
//!
//! ```rust
//! use calc_core::calculations::health::pregnancy::{calculate_on, PregnancyInput, PregnancyMethod};
//! use chrono::NaiveDate;
//!
//! let lmp = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let input = PregnancyInput {
//!     method: PregnancyMethod::Lmp,
//!     date: lmp,
//!     cycle_length: 28,
//!     reference_date: None,
//! };
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let result = calculate_on(&input, today).unwrap();
//! assert_eq!(result.due_date, NaiveDate::from_ymd_opt(2024, 10, 7).unwrap());
//! assert_eq!(result.trimester, 1);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::default_cycle_length;
use crate::calculations::datetime::{shift_days, today};
use crate::errors::{CalcError, CalcResult};
use crate::validation::{require_range, round_to, Validate};

pub const PREGNANCY_DAYS: i64 = 280;
pub const CONCEPTION_TO_DUE_DAYS: i64 = 266;
/// Past 42 weeks the LMP is treated as a data entry mistake
pub const MAX_GESTATION_DAYS: i64 = 294;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PregnancyMethod {
    /// `date` is the first day of the last menstrual period
    #[default]
    Lmp,
    /// `date` is the conception date
    Conception,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PregnancyInput {
    #[serde(default)]
    pub method: PregnancyMethod,
    pub date: NaiveDate,
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u32,
    /// Date gestational age is measured at; today when absent
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl Validate for PregnancyInput {
    fn validate(&self) -> CalcResult<()> {
        if self.method == PregnancyMethod::Lmp {
            require_range("cycle_length", self.cycle_length as f64, 21.0, 45.0)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyResult {
    pub due_date: NaiveDate,
    pub conception_date: NaiveDate,
    /// Cycle-adjusted LMP that gestational age counts from
    pub lmp_date: NaiveDate,
    pub reference_date: NaiveDate,
    pub gestational_weeks: i64,
    pub gestational_days: i64,
    pub total_days: i64,
    /// 1, 2 or 3
    pub trimester: u8,
    /// Negative once the due date has passed
    pub days_until_due: i64,
    pub progress_percent: f64,
    pub formula: String,
}

pub fn calculate(input: &PregnancyInput) -> CalcResult<PregnancyResult> {
    calculate_on(input, today())
}

/// Same as [`calculate`] with an explicit "today".
pub fn calculate_on(input: &PregnancyInput, today: NaiveDate) -> CalcResult<PregnancyResult> {
    input.validate()?;

    let (lmp, due, conception, formula) = match input.method {
        PregnancyMethod::Lmp => {
            let shift = input.cycle_length as i64 - 28;
            let lmp = shift_days("date", input.date, shift)?;
            (
                lmp,
                shift_days("date", lmp, PREGNANCY_DAYS)?,
                shift_days("date", lmp, 14)?,
                "due date = LMP + 280 days + (cycle − 28)",
            )
        }
        PregnancyMethod::Conception => (
            shift_days("date", input.date, -14)?,
            shift_days("date", input.date, CONCEPTION_TO_DUE_DAYS)?,
            input.date,
            "due date = conception + 266 days",
        ),
    };

    let reference = input.reference_date.unwrap_or(today);
    if input.date > reference {
        return Err(CalcError::invalid_input(
            "date",
            input.date.to_string(),
            "Date is after the reference date",
        ));
    }
    // A long cycle can push the adjusted LMP past a recent reference date
    let total_days = (reference - lmp).num_days().max(0);
    if total_days > MAX_GESTATION_DAYS {
        return Err(CalcError::invalid_input(
            "date",
            input.date.to_string(),
            "Date is more than 42 weeks before the reference date",
        ));
    }

    let trimester = match total_days {
        d if d < 13 * 7 => 1,
        d if d < 27 * 7 => 2,
        _ => 3,
    };

    Ok(PregnancyResult {
        due_date: due,
        conception_date: conception,
        lmp_date: lmp,
        reference_date: reference,
        gestational_weeks: total_days / 7,
        gestational_days: total_days % 7,
        total_days,
        trimester,
        days_until_due: (due - reference).num_days(),
        progress_percent: round_to(
            (total_days as f64 / PREGNANCY_DAYS as f64 * 100.0).min(100.0),
            1,
        ),
        formula: formula.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn lmp(date: NaiveDate, cycle_length: u32) -> PregnancyInput {
        PregnancyInput {
            method: PregnancyMethod::Lmp,
            date,
            cycle_length,
            reference_date: Some(d(2024, 3, 1)),
        }
    }

    #[test]
    fn test_naegele() {
        let result = calculate_on(&lmp(d(2024, 1, 1), 28), d(2030, 1, 1)).unwrap();
        assert_eq!(result.due_date, d(2024, 10, 7));
        assert_eq!(result.conception_date, d(2024, 1, 15));
        assert_eq!(result.total_days, 60);
        assert_eq!(result.gestational_weeks, 8);
        assert_eq!(result.gestational_days, 4);
        assert_eq!(result.trimester, 1);
        assert_eq!(result.days_until_due, 220);
    }

    #[test]
    fn test_cycle_adjustment() {
        let result = calculate_on(&lmp(d(2024, 1, 1), 30), d(2030, 1, 1)).unwrap();
        assert_eq!(result.due_date, d(2024, 10, 9));
    }

    #[test]
    fn test_conception_method() {
        let input = PregnancyInput {
            method: PregnancyMethod::Conception,
            date: d(2024, 1, 15),
            cycle_length: 28,
            reference_date: None,
        };
        let result = calculate_on(&input, d(2024, 6, 1)).unwrap();
        assert_eq!(result.due_date, d(2024, 10, 7));
        assert_eq!(result.reference_date, d(2024, 6, 1));
        assert_eq!(result.trimester, 2);
    }

    #[test]
    fn test_long_cycle_recent_lmp() {
        let input = PregnancyInput {
            method: PregnancyMethod::Lmp,
            date: d(2024, 3, 1),
            cycle_length: 40,
            reference_date: Some(d(2024, 3, 6)),
        };
        let result = calculate_on(&input, d(2030, 1, 1)).unwrap();
        assert_eq!(result.lmp_date, d(2024, 3, 13));
        assert_eq!(result.total_days, 0);
        assert_eq!(result.gestational_weeks, 0);
        assert_eq!(result.trimester, 1);
        assert_eq!(result.due_date, d(2024, 12, 18));
    }

    #[test]
    fn test_invalid_dates() {
        let future = calculate_on(&lmp(d(2024, 5, 1), 28), d(2024, 3, 1));
        assert!(future.is_err());
        let too_old = calculate_on(&lmp(d(2023, 1, 1), 28), d(2024, 3, 1));
        assert!(too_old.is_err());
        let bad_cycle = calculate_on(&lmp(d(2024, 1, 1), 50), d(2024, 3, 1));
        assert_eq!(bad_cycle.unwrap_err().error_code(), "OUT_OF_RANGE");
    }
}

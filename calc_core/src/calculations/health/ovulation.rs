//! # Ovulation and Fertile Window
//!
//! Ovulation is estimated at `LMP + cycle − 14`; the fertile window runs
//! from five days before to one day after ovulation. Several consecutive
//! cycles can be projected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::default_cycle_length;
use crate::calculations::datetime::shift_days;
use crate::errors::CalcResult;
use crate::validation::{require_range, Validate};

/// Days from ovulation to the next period (luteal phase)
pub const LUTEAL_PHASE_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OvulationInput {
    pub lmp: NaiveDate,
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u32,
    /// Number of cycles to project
    #[serde(default = "default_cycles")]
    pub cycles: u32,
}

fn default_cycles() -> u32 {
    3
}

impl Validate for OvulationInput {
    fn validate(&self) -> CalcResult<()> {
        require_range("cycle_length", self.cycle_length as f64, 21.0, 45.0)?;
        require_range("cycles", self.cycles as f64, 1.0, 12.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclePrediction {
    pub period_start: NaiveDate,
    pub ovulation_date: NaiveDate,
    pub fertile_window_start: NaiveDate,
    pub fertile_window_end: NaiveDate,
    pub next_period: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvulationResult {
    pub ovulation_date: NaiveDate,
    pub fertile_window_start: NaiveDate,
    pub fertile_window_end: NaiveDate,
    pub next_period: NaiveDate,
    pub cycles: Vec<CyclePrediction>,
    pub formula: String,
}

fn predict(period_start: NaiveDate, cycle: i64) -> CalcResult<CyclePrediction> {
    let ovulation = shift_days("lmp", period_start, cycle - LUTEAL_PHASE_DAYS)?;
    Ok(CyclePrediction {
        period_start,
        ovulation_date: ovulation,
        fertile_window_start: shift_days("lmp", ovulation, -5)?,
        fertile_window_end: shift_days("lmp", ovulation, 1)?,
        next_period: shift_days("lmp", period_start, cycle)?,
    })
}

pub fn calculate(input: &OvulationInput) -> CalcResult<OvulationResult> {
    input.validate()?;
    let cycle = input.cycle_length as i64;

    let mut cycles = Vec::with_capacity(input.cycles as usize);
    let mut start = input.lmp;
    for _ in 0..input.cycles {
        let prediction = predict(start, cycle)?;
        start = prediction.next_period;
        cycles.push(prediction);
    }
    let first = predict(input.lmp, cycle)?;

    Ok(OvulationResult {
        ovulation_date: first.ovulation_date,
        fertile_window_start: first.fertile_window_start,
        fertile_window_end: first.fertile_window_end,
        next_period: first.next_period,
        cycles,
        formula: "ovulation = LMP + cycle − 14; fertile window = ovulation − 5 … ovulation + 1"
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_standard_cycle() {
        let input = OvulationInput { lmp: d(2024, 1, 1), cycle_length: 28, cycles: 3 };
        let result = calculate(&input).unwrap();
        assert_eq!(result.ovulation_date, d(2024, 1, 15));
        assert_eq!(result.fertile_window_start, d(2024, 1, 10));
        assert_eq!(result.fertile_window_end, d(2024, 1, 16));
        assert_eq!(result.next_period, d(2024, 1, 29));
        assert_eq!(result.cycles.len(), 3);
        assert_eq!(result.cycles[1].period_start, d(2024, 1, 29));
        assert_eq!(result.cycles[2].ovulation_date, d(2024, 3, 11));
    }

    #[test]
    fn test_long_cycle() {
        let input = OvulationInput { lmp: d(2024, 1, 1), cycle_length: 35, cycles: 1 };
        assert_eq!(calculate(&input).unwrap().ovulation_date, d(2024, 1, 22));
    }

    #[test]
    fn test_cycle_range() {
        let input = OvulationInput { lmp: d(2024, 1, 1), cycle_length: 20, cycles: 1 };
        assert!(calculate(&input).is_err());
    }
}

//! # Percentage Calculator
//!
//! The five everyday percentage questions:
//!
//! | operation | question | formula |
//! |-----------|----------|---------|
//! | `of_number` | What is P% of N? | N × P / 100 |
//! | `what_percent` | X is what % of Y? | X / Y × 100 |
//! | `change` | % change from A to B | (B − A) / A × 100 |
//! | `add` | N + P% | N × (1 + P / 100) |
//! | `subtract` | N − P% | N × (1 − P / 100) |
//!
//! Negative operands are rejected.
//!
//! ```rust
//! use calc_core::calculations::math::percent::percent_of_number;
//!
//! assert_eq!(percent_of_number(100.0, 25.0).unwrap().result, 25.0);
//! assert!(percent_of_number(-100.0, 25.0).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::validation::{require_non_negative, require_non_zero, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum PercentInput {
    OfNumber { number: f64, percent: f64 },
    WhatPercent { part: f64, whole: f64 },
    Change { from: f64, to: f64 },
    Add { number: f64, percent: f64 },
    Subtract { number: f64, percent: f64 },
}

impl Validate for PercentInput {
    fn validate(&self) -> CalcResult<()> {
        match *self {
            PercentInput::OfNumber { number, percent }
            | PercentInput::Add { number, percent }
            | PercentInput::Subtract { number, percent } => {
                require_non_negative("number", number)?;
                require_non_negative("percent", percent)
            }
            PercentInput::WhatPercent { part, whole } => {
                require_non_negative("part", part)?;
                require_non_negative("whole", whole)?;
                require_non_zero("whole", whole)
            }
            PercentInput::Change { from, to } => {
                require_non_negative("from", from)?;
                require_non_negative("to", to)?;
                require_non_zero("from", from)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentResult {
    /// Rounded to 4 decimals
    pub result: f64,
    pub formula: String,
}

pub fn calculate(input: &PercentInput) -> CalcResult<PercentResult> {
    input.validate()?;

    let (result, formula) = match *input {
        PercentInput::OfNumber { number, percent } => (number * percent / 100.0, "N × P / 100"),
        PercentInput::WhatPercent { part, whole } => (part / whole * 100.0, "X / Y × 100"),
        PercentInput::Change { from, to } => ((to - from) / from * 100.0, "(B − A) / A × 100"),
        PercentInput::Add { number, percent } => (number * (1.0 + percent / 100.0), "N × (1 + P / 100)"),
        PercentInput::Subtract { number, percent } => {
            (number * (1.0 - percent / 100.0), "N × (1 − P / 100)")
        }
    };

    Ok(PercentResult {
        result: round_to(result, 4),
        formula: formula.to_string(),
    })
}

/// What is `percent`% of `number`?
pub fn percent_of_number(number: f64, percent: f64) -> CalcResult<PercentResult> {
    calculate(&PercentInput::OfNumber { number, percent })
}

/// `part` is what percent of `whole`?
pub fn what_percent(part: f64, whole: f64) -> CalcResult<PercentResult> {
    calculate(&PercentInput::WhatPercent { part, whole })
}

/// Percent change from `from` to `to`
pub fn percent_change(from: f64, to: f64) -> CalcResult<PercentResult> {
    calculate(&PercentInput::Change { from, to })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_number() {
        assert_eq!(percent_of_number(100.0, 25.0).unwrap().result, 25.0);
        assert_eq!(percent_of_number(80.0, 12.5).unwrap().result, 10.0);
    }

    #[test]
    fn test_negative_operands_rejected() {
        assert!(percent_of_number(-1.0, 25.0).is_err());
        assert!(percent_of_number(100.0, -25.0).is_err());
        assert!(what_percent(-5.0, 10.0).is_err());
    }

    #[test]
    fn test_what_percent() {
        assert_eq!(what_percent(1.0, 3.0).unwrap().result, 33.3333);
        let err = what_percent(1.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_change() {
        assert_eq!(percent_change(50.0, 75.0).unwrap().result, 50.0);
        assert_eq!(percent_change(200.0, 150.0).unwrap().result, -25.0);
        assert!(percent_change(0.0, 10.0).is_err());
    }

    #[test]
    fn test_add_subtract() {
        let add = calculate(&PercentInput::Add { number: 200.0, percent: 15.0 }).unwrap();
        assert_eq!(add.result, 230.0);
        let sub = calculate(&PercentInput::Subtract { number: 200.0, percent: 15.0 }).unwrap();
        assert_eq!(sub.result, 170.0);
    }
}

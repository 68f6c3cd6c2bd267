//! # Fraction Calculator
//!
//! Arithmetic on two fractions with the result reduced to lowest terms.

use serde::{Deserialize, Serialize};

use crate::calculations::math::gcd_lcm::gcd;
use crate::errors::{CalcError, CalcResult};
use crate::validation::{round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Fraction { numerator, denominator }
    }

    /// Reduce by gcd and keep the sign on the numerator
    pub fn reduced(self) -> Self {
        let g = gcd(self.numerator, self.denominator).max(1);
        let sign = if self.denominator < 0 { -1 } else { 1 };
        Fraction {
            numerator: sign * self.numerator / g,
            denominator: sign * self.denominator / g,
        }
    }

    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractionOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionInput {
    pub first: Fraction,
    pub second: Fraction,
    pub op: FractionOp,
}

/// Bound keeps every intermediate product inside i64
const MAX_TERM: i64 = 1_000_000_000;

impl Validate for FractionInput {
    fn validate(&self) -> CalcResult<()> {
        for (field, f) in [("first", self.first), ("second", self.second)] {
            if f.denominator == 0 {
                return Err(CalcError::division_by_zero(format!("{}.denominator", field)));
            }
            for term in [f.numerator, f.denominator] {
                if term.abs() > MAX_TERM {
                    return Err(CalcError::out_of_range(field, term as f64, -(MAX_TERM as f64), MAX_TERM as f64));
                }
            }
        }
        if self.op == FractionOp::Divide && self.second.numerator == 0 {
            return Err(CalcError::division_by_zero("second.numerator"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionResult {
    pub result: Fraction,
    /// Whole part of the mixed number (truncated toward zero)
    pub whole: i64,
    pub decimal: f64,
    pub formula: String,
}

pub fn calculate(input: &FractionInput) -> CalcResult<FractionResult> {
    input.validate()?;

    let (a, b) = (input.first, input.second);
    let (raw, formula) = match input.op {
        FractionOp::Add => (
            Fraction::new(a.numerator * b.denominator + b.numerator * a.denominator, a.denominator * b.denominator),
            "a/b + c/d = (ad + cb) / bd",
        ),
        FractionOp::Subtract => (
            Fraction::new(a.numerator * b.denominator - b.numerator * a.denominator, a.denominator * b.denominator),
            "a/b − c/d = (ad − cb) / bd",
        ),
        FractionOp::Multiply => (
            Fraction::new(a.numerator * b.numerator, a.denominator * b.denominator),
            "a/b × c/d = ac / bd",
        ),
        FractionOp::Divide => (
            Fraction::new(a.numerator * b.denominator, a.denominator * b.numerator),
            "a/b ÷ c/d = ad / bc",
        ),
    };

    let result = raw.reduced();
    Ok(FractionResult {
        result,
        whole: result.numerator / result.denominator,
        decimal: round_to(result.to_f64(), 6),
        formula: formula.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(a: (i64, i64), b: (i64, i64), op: FractionOp) -> CalcResult<FractionResult> {
        calculate(&FractionInput {
            first: Fraction::new(a.0, a.1),
            second: Fraction::new(b.0, b.1),
            op,
        })
    }

    #[test]
    fn test_add_reduces() {
        let result = run((1, 2), (1, 3), FractionOp::Add).unwrap();
        assert_eq!(result.result, Fraction::new(5, 6));
        let result = run((1, 4), (1, 4), FractionOp::Add).unwrap();
        assert_eq!(result.result, Fraction::new(1, 2));
    }

    #[test]
    fn test_subtract_negative() {
        let result = run((1, 3), (1, 2), FractionOp::Subtract).unwrap();
        assert_eq!(result.result, Fraction::new(-1, 6));
    }

    #[test]
    fn test_divide_and_mixed_number() {
        let result = run((3, 4), (1, -2), FractionOp::Divide).unwrap();
        assert_eq!(result.result, Fraction::new(-3, 2));
        assert_eq!(result.whole, -1);
        assert_eq!(result.decimal, -1.5);
    }

    #[test]
    fn test_zero_denominators() {
        assert_eq!(run((1, 0), (1, 2), FractionOp::Add).unwrap_err().error_code(), "DIVISION_BY_ZERO");
        assert_eq!(run((1, 2), (0, 5), FractionOp::Divide).unwrap_err().error_code(), "DIVISION_BY_ZERO");
    }
}

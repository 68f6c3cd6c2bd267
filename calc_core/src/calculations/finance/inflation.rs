//! # Inflation
//!
//! Future cost `A(1 + r)^t` and today's purchasing power of the same sum
//! `A / (1 + r)^t`. Negative rates (deflation) are accepted.

use serde::{Deserialize, Serialize};

use super::money;
use crate::errors::CalcResult;
use crate::validation::{require_non_negative, require_range, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationInput {
    pub amount: f64,
    /// Annual inflation in percent
    pub annual_rate: f64,
    pub years: f64,
}

impl Validate for InflationInput {
    fn validate(&self) -> CalcResult<()> {
        require_non_negative("amount", self.amount)?;
        require_range("annual_rate", self.annual_rate, -50.0, 100.0)?;
        require_range("years", self.years, 0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationResult {
    pub future_cost: f64,
    pub purchasing_power: f64,
    pub cumulative_inflation_percent: f64,
    pub formula: String,
}

pub fn calculate(input: &InflationInput) -> CalcResult<InflationResult> {
    input.validate()?;
    let growth = (1.0 + input.annual_rate / 100.0).powf(input.years);
    Ok(InflationResult {
        future_cost: money(input.amount * growth),
        purchasing_power: money(input.amount / growth),
        cumulative_inflation_percent: round_to((growth - 1.0) * 100.0, 2),
        formula: "future = A × (1 + r)^t; power = A / (1 + r)^t".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflation() {
        let result = calculate(&InflationInput { amount: 100.0, annual_rate: 10.0, years: 2.0 }).unwrap();
        assert_eq!(result.future_cost, 121.0);
        assert_eq!(result.purchasing_power, 82.64);
        assert_eq!(result.cumulative_inflation_percent, 21.0);
    }

    #[test]
    fn test_zero_years() {
        let result = calculate(&InflationInput { amount: 100.0, annual_rate: 10.0, years: 0.0 }).unwrap();
        assert_eq!(result.future_cost, 100.0);
    }
}

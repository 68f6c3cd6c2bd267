//! # Compound Interest
//!
//! `FV = P(1 + r/n)^(n·t)` plus monthly contributions made at the end of
//! each month. Contributions compound at the monthly rate equivalent to the
//! chosen compounding frequency.

use serde::{Deserialize, Serialize};

use super::money;
use crate::errors::{CalcError, CalcResult};
use crate::validation::{require_non_negative, require_range, round_to, Validate};

pub const COMPOUNDING_FREQUENCIES: [u32; 5] = [1, 2, 4, 12, 365];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: f64,
    /// Annual rate in percent
    pub annual_rate: f64,
    pub years: f64,
    #[serde(default = "default_frequency")]
    pub compounds_per_year: u32,
    #[serde(default)]
    pub monthly_contribution: f64,
}

fn default_frequency() -> u32 {
    12
}

impl Validate for CompoundInterestInput {
    fn validate(&self) -> CalcResult<()> {
        require_non_negative("principal", self.principal)?;
        require_range("annual_rate", self.annual_rate, 0.0, 100.0)?;
        require_range("years", self.years, 1.0 / 12.0, 100.0)?;
        require_non_negative("monthly_contribution", self.monthly_contribution)?;
        if !COMPOUNDING_FREQUENCIES.contains(&self.compounds_per_year) {
            return Err(CalcError::unknown_value(
                "compounds_per_year",
                self.compounds_per_year.to_string(),
                &["1", "2", "4", "12", "365"],
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: u32,
    pub balance: f64,
    pub contributions: f64,
    pub interest: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub future_value: f64,
    /// Principal plus all contributions
    pub total_contributions: f64,
    pub total_interest: f64,
    /// Effective annual rate in percent
    pub effective_annual_rate: f64,
    pub yearly: Vec<YearRow>,
    pub formula: String,
}

pub fn calculate(input: &CompoundInterestInput) -> CalcResult<CompoundInterestResult> {
    input.validate()?;

    let n = input.compounds_per_year as f64;
    let r = input.annual_rate / 100.0;
    let monthly_growth = (1.0 + r / n).powf(n / 12.0);
    let months = (input.years * 12.0).round() as u32;

    let mut balance = input.principal;
    let mut contributed = input.principal;
    let mut yearly = Vec::new();
    for month in 1..=months {
        balance = balance * monthly_growth + input.monthly_contribution;
        contributed += input.monthly_contribution;
        if month % 12 == 0 || month == months {
            yearly.push(YearRow {
                year: month.div_ceil(12),
                balance: money(balance),
                contributions: money(contributed),
                interest: money(balance - contributed),
            });
        }
    }

    Ok(CompoundInterestResult {
        future_value: money(balance),
        total_contributions: money(contributed),
        total_interest: money(balance - contributed),
        effective_annual_rate: round_to(((1.0 + r / n).powf(n) - 1.0) * 100.0, 4),
        yearly,
        formula: "FV = P(1 + r/n)^(n·t) + PMT × ((1 + i)^m − 1) / i".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_compounding() {
        let input = CompoundInterestInput {
            principal: 1000.0,
            annual_rate: 5.0,
            years: 10.0,
            compounds_per_year: 1,
            monthly_contribution: 0.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.future_value, 1628.89);
        assert_eq!(result.total_interest, 628.89);
        assert_eq!(result.yearly.len(), 10);
        assert_eq!(result.effective_annual_rate, 5.0);
    }

    #[test]
    fn test_monthly_contributions() {
        // 100/month at 0 % for 2 years
        let input = CompoundInterestInput {
            principal: 0.0,
            annual_rate: 0.0,
            years: 2.0,
            compounds_per_year: 12,
            monthly_contribution: 100.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.future_value, 2400.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_effective_rate_monthly() {
        let input = CompoundInterestInput {
            principal: 1000.0,
            annual_rate: 12.0,
            years: 1.0,
            compounds_per_year: 12,
            monthly_contribution: 0.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.effective_annual_rate, 12.6825);
        assert_eq!(result.future_value, 1126.83);
    }

    #[test]
    fn test_unsupported_frequency() {
        let input = CompoundInterestInput {
            principal: 1000.0,
            annual_rate: 5.0,
            years: 1.0,
            compounds_per_year: 7,
            monthly_contribution: 0.0,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "UNKNOWN_VALUE");
    }
}

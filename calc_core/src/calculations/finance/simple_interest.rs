//! # Simple Interest
//!
//! `I = P × r × t`

use serde::{Deserialize, Serialize};

use super::money;
use crate::errors::CalcResult;
use crate::validation::{require_positive, require_range, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    pub principal: f64,
    pub annual_rate: f64,
    pub years: f64,
}

impl Validate for SimpleInterestInput {
    fn validate(&self) -> CalcResult<()> {
        require_positive("principal", self.principal)?;
        require_range("annual_rate", self.annual_rate, 0.0, 100.0)?;
        require_positive("years", self.years)?;
        require_range("years", self.years, 0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub interest: f64,
    pub total: f64,
    pub formula: String,
}

pub fn calculate(input: &SimpleInterestInput) -> CalcResult<SimpleInterestResult> {
    input.validate()?;
    let interest = input.principal * input.annual_rate / 100.0 * input.years;
    Ok(SimpleInterestResult {
        interest: money(interest),
        total: money(input.principal + interest),
        formula: "I = P × r × t".to_string(),
    })
}

//! # Discount

use serde::{Deserialize, Serialize};

use super::money;
use crate::errors::CalcResult;
use crate::validation::{require_non_negative, require_range, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountInput {
    pub price: f64,
    /// Discount in percent
    pub percent: f64,
}

impl Validate for DiscountInput {
    fn validate(&self) -> CalcResult<()> {
        require_non_negative("price", self.price)?;
        require_range("percent", self.percent, 0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountResult {
    pub savings: f64,
    pub final_price: f64,
    pub formula: String,
}

pub fn calculate(input: &DiscountInput) -> CalcResult<DiscountResult> {
    input.validate()?;
    let savings = input.price * input.percent / 100.0;
    Ok(DiscountResult {
        savings: money(savings),
        final_price: money(input.price - savings),
        formula: "final = price × (1 − discount / 100)".to_string(),
    })
}

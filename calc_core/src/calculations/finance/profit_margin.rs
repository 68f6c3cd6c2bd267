//! # Profit Margin and Markup
//!
//! Margin is profit relative to revenue, markup is profit relative to cost.

use serde::{Deserialize, Serialize};

use super::money;
use crate::errors::CalcResult;
use crate::validation::{require_non_negative, require_positive, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitMarginInput {
    pub cost: f64,
    pub revenue: f64,
}

impl Validate for ProfitMarginInput {
    fn validate(&self) -> CalcResult<()> {
        require_non_negative("cost", self.cost)?;
        require_positive("revenue", self.revenue)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitMarginResult {
    pub profit: f64,
    pub margin_percent: f64,
    /// Undefined for zero cost
    pub markup_percent: Option<f64>,
    pub formula: String,
}

pub fn calculate(input: &ProfitMarginInput) -> CalcResult<ProfitMarginResult> {
    input.validate()?;
    let profit = input.revenue - input.cost;
    Ok(ProfitMarginResult {
        profit: money(profit),
        margin_percent: round_to(profit / input.revenue * 100.0, 2),
        markup_percent: (input.cost > 0.0).then(|| round_to(profit / input.cost * 100.0, 2)),
        formula: "margin = (revenue − cost) / revenue; markup = (revenue − cost) / cost".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_and_markup() {
        let result = calculate(&ProfitMarginInput { cost: 60.0, revenue: 100.0 }).unwrap();
        assert_eq!(result.profit, 40.0);
        assert_eq!(result.margin_percent, 40.0);
        assert_eq!(result.markup_percent, Some(66.67));
    }

    #[test]
    fn test_zero_cost() {
        let result = calculate(&ProfitMarginInput { cost: 0.0, revenue: 10.0 }).unwrap();
        assert_eq!(result.markup_percent, None);
        assert_eq!(result.margin_percent, 100.0);
    }
}

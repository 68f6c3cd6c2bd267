//! # Return on Investment
//!
//! `ROI = (final − cost) / cost`; with a holding period the annualised
//! return is `(final / cost)^(1/years) − 1`.

use serde::{Deserialize, Serialize};

use super::money;
use crate::errors::CalcResult;
use crate::validation::{require_non_negative, require_positive, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    pub cost: f64,
    pub final_value: f64,
    #[serde(default)]
    pub years: Option<f64>,
}

impl Validate for RoiInput {
    fn validate(&self) -> CalcResult<()> {
        require_positive("cost", self.cost)?;
        require_non_negative("final_value", self.final_value)?;
        if let Some(years) = self.years {
            require_positive("years", years)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub net_profit: f64,
    pub roi_percent: f64,
    pub annualized_roi_percent: Option<f64>,
    pub formula: String,
}

pub fn calculate(input: &RoiInput) -> CalcResult<RoiResult> {
    input.validate()?;
    let profit = input.final_value - input.cost;
    let annualized = input
        .years
        .map(|years| round_to(((input.final_value / input.cost).powf(1.0 / years) - 1.0) * 100.0, 2));
    Ok(RoiResult {
        net_profit: money(profit),
        roi_percent: round_to(profit / input.cost * 100.0, 2),
        annualized_roi_percent: annualized,
        formula: "ROI = (final value − cost) / cost × 100".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi() {
        let result = calculate(&RoiInput { cost: 1000.0, final_value: 1500.0, years: None }).unwrap();
        assert_eq!(result.net_profit, 500.0);
        assert_eq!(result.roi_percent, 50.0);
        assert_eq!(result.annualized_roi_percent, None);
    }

    #[test]
    fn test_annualized() {
        let result = calculate(&RoiInput { cost: 1000.0, final_value: 1210.0, years: Some(2.0) }).unwrap();
        assert_eq!(result.annualized_roi_percent, Some(10.0));
    }

    #[test]
    fn test_loss() {
        let result = calculate(&RoiInput { cost: 1000.0, final_value: 800.0, years: None }).unwrap();
        assert_eq!(result.roi_percent, -20.0);
    }
}

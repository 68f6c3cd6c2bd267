//! # Electricity Cost
//!
//! Energy use of a device running a fixed number of hours per day.

use serde::{Deserialize, Serialize};

use crate::calculations::finance::money;
use crate::errors::CalcResult;
use crate::validation::{require_non_negative, require_positive, require_range, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectricityCostInput {
    pub power_watts: f64,
    pub hours_per_day: f64,
    #[serde(default = "default_days")]
    pub days: f64,
    pub price_per_kwh: f64,
}

fn default_days() -> f64 {
    30.0
}

impl Validate for ElectricityCostInput {
    fn validate(&self) -> CalcResult<()> {
        require_positive("power_watts", self.power_watts)?;
        require_range("hours_per_day", self.hours_per_day, 0.0, 24.0)?;
        require_positive("days", self.days)?;
        require_non_negative("price_per_kwh", self.price_per_kwh)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityCostResult {
    pub kwh_per_day: f64,
    pub total_kwh: f64,
    pub cost_per_day: f64,
    pub total_cost: f64,
    pub cost_per_year: f64,
    pub formula: String,
}

pub fn calculate(input: &ElectricityCostInput) -> CalcResult<ElectricityCostResult> {
    input.validate()?;
    let kwh_per_day = input.power_watts * input.hours_per_day / 1000.0;
    let cost_per_day = kwh_per_day * input.price_per_kwh;
    Ok(ElectricityCostResult {
        kwh_per_day: round_to(kwh_per_day, 3),
        total_kwh: round_to(kwh_per_day * input.days, 3),
        cost_per_day: money(cost_per_day),
        total_cost: money(cost_per_day * input.days),
        cost_per_year: money(cost_per_day * 365.0),
        formula: "cost = W × h / 1000 × price × days".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost() {
        let input = ElectricityCostInput { power_watts: 2000.0, hours_per_day: 3.0, days: 30.0, price_per_kwh: 0.25 };
        let result = calculate(&input).unwrap();
        assert_eq!(result.kwh_per_day, 6.0);
        assert_eq!(result.total_kwh, 180.0);
        assert_eq!(result.cost_per_day, 1.5);
        assert_eq!(result.total_cost, 45.0);
        assert_eq!(result.cost_per_year, 547.5);
    }

    #[test]
    fn test_hours_range() {
        let input = ElectricityCostInput { power_watts: 100.0, hours_per_day: 25.0, days: 1.0, price_per_kwh: 0.2 };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "OUT_OF_RANGE");
    }
}

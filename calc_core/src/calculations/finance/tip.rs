//! # Tip Splitter

use serde::{Deserialize, Serialize};

use super::money;
use crate::errors::CalcResult;
use crate::validation::{require_non_negative, require_range, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipInput {
    pub bill: f64,
    pub tip_percent: f64,
    #[serde(default = "default_people")]
    pub people: u32,
}

fn default_people() -> u32 {
    1
}

impl Validate for TipInput {
    fn validate(&self) -> CalcResult<()> {
        require_non_negative("bill", self.bill)?;
        require_range("tip_percent", self.tip_percent, 0.0, 100.0)?;
        require_range("people", self.people as f64, 1.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipResult {
    pub tip_amount: f64,
    pub total: f64,
    pub tip_per_person: f64,
    pub total_per_person: f64,
    pub formula: String,
}

pub fn calculate(input: &TipInput) -> CalcResult<TipResult> {
    input.validate()?;
    let tip = input.bill * input.tip_percent / 100.0;
    let total = input.bill + tip;
    let people = input.people as f64;
    Ok(TipResult {
        tip_amount: money(tip),
        total: money(total),
        tip_per_person: money(tip / people),
        total_per_person: money(total / people),
        formula: "tip = bill × percent / 100; per person = (bill + tip) / people".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let result = calculate(&TipInput { bill: 120.0, tip_percent: 15.0, people: 4 }).unwrap();
        assert_eq!(result.tip_amount, 18.0);
        assert_eq!(result.total, 138.0);
        assert_eq!(result.total_per_person, 34.5);
        assert_eq!(result.tip_per_person, 4.5);
    }

    #[test]
    fn test_people_range() {
        assert!(calculate(&TipInput { bill: 10.0, tip_percent: 10.0, people: 0 }).is_err());
    }
}

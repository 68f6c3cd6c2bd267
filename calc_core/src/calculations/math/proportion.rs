//! # Proportion (Rule of Three)
//!
//! Solve `a / b = c / x` for `x`.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::validation::{require_finite, require_non_zero, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProportionInput {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Validate for ProportionInput {
    fn validate(&self) -> CalcResult<()> {
        require_non_zero("a", self.a)?;
        require_non_zero("b", self.b)?;
        require_finite("c", self.c)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionResult {
    pub x: f64,
    pub formula: String,
}

pub fn calculate(input: &ProportionInput) -> CalcResult<ProportionResult> {
    input.validate()?;
    Ok(ProportionResult {
        x: round_to(input.b * input.c / input.a, 6),
        formula: "x = b × c / a".to_string(),
    })
}

//! # VAT / Sales Tax
//!
//! Add tax to a net amount, or extract it from a gross amount:
//! `net = gross / (1 + rate)`.

use serde::{Deserialize, Serialize};

use super::money;
use crate::errors::CalcResult;
use crate::validation::{require_non_negative, require_range, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatMode {
    /// `amount` is net; add tax
    #[default]
    Add,
    /// `amount` is gross; take tax out
    Extract,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VatInput {
    pub amount: f64,
    /// Tax rate in percent
    pub rate: f64,
    #[serde(default)]
    pub mode: VatMode,
}

impl Validate for VatInput {
    fn validate(&self) -> CalcResult<()> {
        require_non_negative("amount", self.amount)?;
        require_range("rate", self.rate, 0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatResult {
    pub net: f64,
    pub vat: f64,
    pub gross: f64,
    pub formula: String,
}

pub fn calculate(input: &VatInput) -> CalcResult<VatResult> {
    input.validate()?;
    let rate = input.rate / 100.0;
    let (net, gross, formula) = match input.mode {
        VatMode::Add => (input.amount, input.amount * (1.0 + rate), "gross = net × (1 + rate)"),
        VatMode::Extract => (input.amount / (1.0 + rate), input.amount, "net = gross / (1 + rate)"),
    };
    Ok(VatResult {
        net: money(net),
        vat: money(gross - net),
        gross: money(gross),
        formula: formula.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_extract() {
        let added = calculate(&VatInput { amount: 100.0, rate: 20.0, mode: VatMode::Add }).unwrap();
        assert_eq!(added.gross, 120.0);
        assert_eq!(added.vat, 20.0);

        let extracted = calculate(&VatInput { amount: 120.0, rate: 20.0, mode: VatMode::Extract }).unwrap();
        assert_eq!(extracted.net, 100.0);
        assert_eq!(extracted.vat, 20.0);
    }

    #[test]
    fn test_rate_range() {
        let err = calculate(&VatInput { amount: 100.0, rate: 120.0, mode: VatMode::Add }).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }
}

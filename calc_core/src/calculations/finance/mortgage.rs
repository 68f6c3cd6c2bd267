//! # Mortgage
//!
//! Price minus down payment, repaid as an annuity loan. Property tax and
//! insurance are added to the monthly total when given.

use serde::{Deserialize, Serialize};

use super::loan::{self, LoanInput, LoanType};
use super::money;
use crate::errors::{CalcError, CalcResult};
use crate::validation::{require_non_negative, require_positive, require_range, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    pub home_price: f64,
    pub down_payment: f64,
    /// Annual rate in percent
    pub annual_rate: f64,
    pub term_years: u32,
    #[serde(default)]
    pub property_tax_yearly: f64,
    #[serde(default)]
    pub insurance_yearly: f64,
}

impl Validate for MortgageInput {
    fn validate(&self) -> CalcResult<()> {
        require_positive("home_price", self.home_price)?;
        require_non_negative("down_payment", self.down_payment)?;
        if self.down_payment >= self.home_price {
            return Err(CalcError::invalid_input(
                "down_payment",
                self.down_payment.to_string(),
                "Down payment must be less than the home price",
            ));
        }
        require_range("annual_rate", self.annual_rate, 0.0, 100.0)?;
        require_range("term_years", self.term_years as f64, 1.0, 50.0)?;
        require_non_negative("property_tax_yearly", self.property_tax_yearly)?;
        require_non_negative("insurance_yearly", self.insurance_yearly)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    pub loan_amount: f64,
    pub down_payment_percent: f64,
    /// Principal and interest only
    pub monthly_payment: f64,
    pub monthly_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_total: f64,
    pub total_interest: f64,
    /// Down payment plus every loan payment
    pub total_cost: f64,
    pub formula: String,
}

pub fn calculate(input: &MortgageInput) -> CalcResult<MortgageResult> {
    input.validate()?;

    let loan_amount = input.home_price - input.down_payment;
    let loan = loan::calculate(&LoanInput {
        principal: loan_amount,
        annual_rate: input.annual_rate,
        term_months: input.term_years * 12,
        loan_type: LoanType::Annuity,
        include_schedule: false,
    })?;

    let monthly_tax = input.property_tax_yearly / 12.0;
    let monthly_insurance = input.insurance_yearly / 12.0;

    Ok(MortgageResult {
        loan_amount: money(loan_amount),
        down_payment_percent: round_to(input.down_payment / input.home_price * 100.0, 2),
        monthly_payment: loan.monthly_payment,
        monthly_tax: money(monthly_tax),
        monthly_insurance: money(monthly_insurance),
        monthly_total: money(loan.monthly_payment + monthly_tax + monthly_insurance),
        total_interest: loan.total_interest,
        total_cost: money(input.down_payment + loan.total_paid),
        formula: "M = L·r / (1 − (1 + r)^−n), L = price − down payment".to_string(),
    })
}

//! # Loan Payments
//!
//! Two repayment schemes:
//!
//! - **Annuity**: equal monthly payments, `A = P·r / (1 − (1 + r)^−n)` with
//!   `r` the monthly rate; a zero rate pays `P / n`.
//! - **Differentiated**: equal principal parts `P / n` plus interest on the
//!   outstanding balance, so payments decrease over time.
//!
//! ```rust
//! use calc_core::calculations::finance::loan::{calculate, LoanInput, LoanType};
//!
//! let input = LoanInput {
//!     principal: 100_000.0,
//!     annual_rate: 12.0,
//!     term_months: 12,
//!     loan_type: LoanType::Annuity,
//!     include_schedule: false,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.monthly_payment, 8884.88);
//! ```

use serde::{Deserialize, Serialize};

use super::money;
use crate::errors::CalcResult;
use crate::validation::{require_positive, require_range, Validate};

pub const MAX_TERM_MONTHS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    #[default]
    Annuity,
    Differentiated,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: f64,
    /// Annual interest rate in percent
    pub annual_rate: f64,
    pub term_months: u32,
    #[serde(default)]
    pub loan_type: LoanType,
    #[serde(default = "default_true")]
    pub include_schedule: bool,
}

fn default_true() -> bool {
    true
}

impl Validate for LoanInput {
    fn validate(&self) -> CalcResult<()> {
        require_positive("principal", self.principal)?;
        require_range("annual_rate", self.annual_rate, 0.0, 100.0)?;
        require_range("term_months", self.term_months as f64, 1.0, MAX_TERM_MONTHS as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Annuity payment, or the first (largest) differentiated payment
    pub monthly_payment: f64,
    pub first_payment: f64,
    pub last_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    /// Empty unless `include_schedule`
    pub schedule: Vec<ScheduleRow>,
    pub formula: String,
}

/// Level monthly payment for an annuity loan (unrounded).
pub fn annuity_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate == 0.0 {
        return principal / months as f64;
    }
    principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-(months as i32)))
}

pub fn calculate(input: &LoanInput) -> CalcResult<LoanResult> {
    input.validate()?;

    let r = input.annual_rate / 100.0 / 12.0;
    let n = input.term_months;
    let annuity = annuity_payment(input.principal, r, n);

    let mut balance = input.principal;
    let mut rows = Vec::with_capacity(n as usize);
    let mut total_paid = 0.0;
    for month in 1..=n {
        let interest = balance * r;
        let principal_part = match input.loan_type {
            LoanType::Annuity => annuity - interest,
            LoanType::Differentiated => input.principal / n as f64,
        };
        // last row absorbs floating point drift
        let principal_part = if month == n { balance } else { principal_part };
        let payment = principal_part + interest;
        balance = (balance - principal_part).max(0.0);
        total_paid += payment;
        rows.push(ScheduleRow {
            month,
            payment: money(payment),
            principal: money(principal_part),
            interest: money(interest),
            balance: money(balance),
        });
    }

    let first_payment = rows.first().map(|r| r.payment).unwrap_or_default();
    let last_payment = rows.last().map(|r| r.payment).unwrap_or_default();
    let formula = match (input.loan_type, r == 0.0) {
        (LoanType::Annuity, true) => "A = P / n",
        (LoanType::Annuity, false) => "A = P·r / (1 − (1 + r)^−n)",
        (LoanType::Differentiated, _) => "payment_k = P / n + r × balance_k",
    };

    Ok(LoanResult {
        monthly_payment: match input.loan_type {
            LoanType::Annuity => money(annuity),
            LoanType::Differentiated => first_payment,
        },
        first_payment,
        last_payment,
        total_paid: money(total_paid),
        total_interest: money(total_paid - input.principal),
        schedule: if input.include_schedule { rows } else { Vec::new() },
        formula: formula.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loan(rate: f64, loan_type: LoanType) -> LoanInput {
        LoanInput {
            principal: 100_000.0,
            annual_rate: rate,
            term_months: 12,
            loan_type,
            include_schedule: true,
        }
    }

    #[test]
    fn test_annuity() {
        let result = calculate(&loan(12.0, LoanType::Annuity)).unwrap();
        assert_eq!(result.monthly_payment, 8884.88);
        assert!((result.total_paid - 106_618.55).abs() < 0.05);
        assert_eq!(result.schedule.len(), 12);
        assert_eq!(result.schedule[11].balance, 0.0);
        assert_eq!(result.schedule[0].interest, 1000.0);
    }

    #[test]
    fn test_zero_rate() {
        let result = calculate(&loan(0.0, LoanType::Annuity)).unwrap();
        assert_eq!(result.monthly_payment, 8333.33);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_differentiated() {
        let result = calculate(&loan(12.0, LoanType::Differentiated)).unwrap();
        // 8333.33 principal + 1000 interest
        assert_eq!(result.first_payment, 9333.33);
        // 8333.33 + 83.33
        assert_eq!(result.last_payment, 8416.67);
        // interest = P·r·(n+1)/2
        assert!((result.total_interest - 6500.0).abs() < 0.01);
    }

    #[test]
    fn test_validation() {
        let mut input = loan(12.0, LoanType::Annuity);
        input.term_months = 0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "OUT_OF_RANGE");
        input.term_months = 12;
        input.principal = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }
}

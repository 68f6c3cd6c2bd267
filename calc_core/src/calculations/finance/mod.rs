//! # Finance Calculators
//!
//! Loans, savings growth, taxes and everyday money math. Rates are entered
//! as percentages (`12.0` means 12 %). Money is rounded to cents in results
//! while intermediate values stay unrounded.

pub mod compound_interest;
pub mod discount;
pub mod inflation;
pub mod loan;
pub mod mortgage;
pub mod profit_margin;
pub mod roi;
pub mod simple_interest;
pub mod tip;
pub mod vat;

pub use compound_interest::{CompoundInterestInput, CompoundInterestResult};
pub use discount::{DiscountInput, DiscountResult};
pub use inflation::{InflationInput, InflationResult};
pub use loan::{LoanInput, LoanResult, LoanType, ScheduleRow};
pub use mortgage::{MortgageInput, MortgageResult};
pub use profit_margin::{ProfitMarginInput, ProfitMarginResult};
pub use roi::{RoiInput, RoiResult};
pub use simple_interest::{SimpleInterestInput, SimpleInterestResult};
pub use tip::{TipInput, TipResult};
pub use vat::{VatInput, VatMode, VatResult};

use crate::validation::round_to;

/// Round a money amount to cents
pub fn money(value: f64) -> f64 {
    round_to(value, 2)
}

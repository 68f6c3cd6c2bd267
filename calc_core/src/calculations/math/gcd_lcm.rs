//! # GCD / LCM Calculator
//!
//! Greatest common divisor (Euclid) and least common multiple of a list of
//! non-zero integers.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcdLcmInput {
    pub numbers: Vec<i64>,
}

impl Validate for GcdLcmInput {
    fn validate(&self) -> CalcResult<()> {
        if self.numbers.len() < 2 || self.numbers.len() > 100 {
            return Err(CalcError::out_of_range("numbers", self.numbers.len() as f64, 2.0, 100.0));
        }
        if let Some(zero) = self.numbers.iter().find(|n| **n == 0 || **n == i64::MIN) {
            return Err(CalcError::invalid_input(
                "numbers",
                zero.to_string(),
                "Numbers must be non-zero integers",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcdLcmResult {
    pub gcd: i64,
    pub lcm: i64,
    pub formula: String,
}

/// Euclid's algorithm on absolute values
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

pub fn calculate(input: &GcdLcmInput) -> CalcResult<GcdLcmResult> {
    input.validate()?;

    let mut g = input.numbers[0].abs();
    let mut l = input.numbers[0].abs();
    for &n in &input.numbers[1..] {
        let n = n.abs();
        g = gcd(g, n);
        l = (l / gcd(l, n)).checked_mul(n).ok_or_else(|| {
            CalcError::invalid_input("numbers", n.to_string(), "Least common multiple is too large")
        })?;
    }

    Ok(GcdLcmResult {
        gcd: g,
        lcm: l,
        formula: "lcm(a, b) = |a × b| / gcd(a, b)".to_string(),
    })
}

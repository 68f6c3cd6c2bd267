//! # Powers and Roots

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{require_finite, require_non_zero, round_significant, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum PowerRootInput {
    /// base^exponent
    Power { base: f64, exponent: f64 },
    /// degree-th root of value
    Root { value: f64, degree: f64 },
}

impl Validate for PowerRootInput {
    fn validate(&self) -> CalcResult<()> {
        match *self {
            PowerRootInput::Power { base, exponent } => {
                require_finite("base", base)?;
                require_finite("exponent", exponent)?;
                if base == 0.0 && exponent < 0.0 {
                    return Err(CalcError::division_by_zero("base"));
                }
                if base < 0.0 && exponent.fract() != 0.0 {
                    return Err(CalcError::invalid_input(
                        "exponent",
                        exponent.to_string(),
                        "A negative base needs an integer exponent",
                    ));
                }
                Ok(())
            }
            PowerRootInput::Root { value, degree } => {
                require_finite("value", value)?;
                require_non_zero("degree", degree)?;
                if value < 0.0 && !is_odd_integer(degree) {
                    return Err(CalcError::invalid_input(
                        "value",
                        value.to_string(),
                        "Only odd integer roots of negative numbers are real",
                    ));
                }
                Ok(())
            }
        }
    }
}

fn is_odd_integer(x: f64) -> bool {
    x.fract() == 0.0 && (x.abs() % 2.0) == 1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRootResult {
    /// Rounded to 12 significant digits
    pub result: f64,
    pub formula: String,
}

pub fn calculate(input: &PowerRootInput) -> CalcResult<PowerRootResult> {
    input.validate()?;

    let (result, formula) = match *input {
        PowerRootInput::Power { base, exponent } => (base.powf(exponent), "x^n"),
        PowerRootInput::Root { value, degree } => {
            let magnitude = value.abs().powf(1.0 / degree);
            (if value < 0.0 { -magnitude } else { magnitude }, "ⁿ√x = x^(1/n)")
        }
    };

    if !result.is_finite() {
        return Err(CalcError::invalid_input("result", result.to_string(), "Result is too large"));
    }

    Ok(PowerRootResult {
        result: round_significant(result, 12),
        formula: formula.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power() {
        assert_eq!(calculate(&PowerRootInput::Power { base: 2.0, exponent: 10.0 }).unwrap().result, 1024.0);
        assert_eq!(calculate(&PowerRootInput::Power { base: -2.0, exponent: 3.0 }).unwrap().result, -8.0);
        assert_eq!(calculate(&PowerRootInput::Power { base: 4.0, exponent: -0.5 }).unwrap().result, 0.5);
    }

    #[test]
    fn test_roots() {
        assert_eq!(calculate(&PowerRootInput::Root { value: 27.0, degree: 3.0 }).unwrap().result, 3.0);
        assert_eq!(calculate(&PowerRootInput::Root { value: -32.0, degree: 5.0 }).unwrap().result, -2.0);
    }

    #[test]
    fn test_invalid() {
        assert!(calculate(&PowerRootInput::Root { value: -4.0, degree: 2.0 }).is_err());
        assert!(calculate(&PowerRootInput::Root { value: 4.0, degree: 0.0 }).is_err());
        assert!(calculate(&PowerRootInput::Power { base: 0.0, exponent: -1.0 }).is_err());
        assert!(calculate(&PowerRootInput::Power { base: 10.0, exponent: 400.0 }).is_err());
    }
}

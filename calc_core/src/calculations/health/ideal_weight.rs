//! # Ideal Body Weight
//!
//! Four classic formulas, each `base + k × (height in inches − 60)`:
//!
//! | Formula | Male | Female |
//! |---------|------|--------|
//! | Devine (1974) | 50 + 2.3x | 45.5 + 2.3x |
//! | Robinson (1983) | 52 + 1.9x | 49 + 1.7x |
//! | Miller (1983) | 56.2 + 1.41x | 53.1 + 1.36x |
//! | Hamwi (1964) | 48 + 2.7x | 45.5 + 2.2x |

use serde::{Deserialize, Serialize};

use super::Sex;
use crate::errors::CalcResult;
use crate::units::{Centimeters, Inches, UnitSystem};
use crate::validation::{require_range, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightInput {
    pub sex: Sex,
    pub height: f64,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl IdealWeightInput {
    fn height_cm(&self) -> Centimeters {
        self.unit_system.length_to_cm(self.height)
    }
}

impl Validate for IdealWeightInput {
    fn validate(&self) -> CalcResult<()> {
        require_range("height", self.height_cm().value(), 130.0, 250.0)
    }
}

/// All weights in kg, one decimal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightResult {
    pub devine: f64,
    pub robinson: f64,
    pub miller: f64,
    pub hamwi: f64,
    pub average: f64,
    pub formula: String,
}

pub fn calculate(input: &IdealWeightInput) -> CalcResult<IdealWeightResult> {
    input.validate()?;

    let inches: Inches = input.height_cm().into();
    let x = inches.value() - 60.0;

    let (devine, robinson, miller, hamwi) = match input.sex {
        Sex::Male => (50.0 + 2.3 * x, 52.0 + 1.9 * x, 56.2 + 1.41 * x, 48.0 + 2.7 * x),
        Sex::Female => (45.5 + 2.3 * x, 49.0 + 1.7 * x, 53.1 + 1.36 * x, 45.5 + 2.2 * x),
    };
    let average = (devine + robinson + miller + hamwi) / 4.0;

    Ok(IdealWeightResult {
        devine: round_to(devine, 1),
        robinson: round_to(robinson, 1),
        miller: round_to(miller, 1),
        hamwi: round_to(hamwi, 1),
        average: round_to(average, 1),
        formula: "IBW = base + k × (height in − 60)".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_feet_is_base() {
        let input = IdealWeightInput { sex: Sex::Male, height: 60.0, unit_system: UnitSystem::Imperial };
        let result = calculate(&input).unwrap();
        assert_eq!(result.devine, 50.0);
        assert_eq!(result.robinson, 52.0);
        assert_eq!(result.miller, 56.2);
        assert_eq!(result.hamwi, 48.0);
        assert!((result.average - 51.55).abs() < 0.06);
    }

    #[test]
    fn test_male_180cm() {
        let input = IdealWeightInput { sex: Sex::Male, height: 180.0, unit_system: UnitSystem::Metric };
        let result = calculate(&input).unwrap();
        assert_eq!(result.devine, 75.0);
        assert!(result.average > 70.0 && result.average < 78.0);
    }

    #[test]
    fn test_height_range() {
        let input = IdealWeightInput { sex: Sex::Female, height: 120.0, unit_system: UnitSystem::Metric };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "OUT_OF_RANGE");
    }
}

//! # Body Mass Index
//!
//! ```rust
//! use calc_core::calculations::health::bmi::{calculate, BmiCategory, BmiInput};
//! use calc_core::units::UnitSystem;
//!
//! let input = BmiInput { weight: 70.0, height: 175.0, unit_system: UnitSystem::Metric };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.bmi, 22.9);
//! assert_eq!(result.category, BmiCategory::Normal);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::units::{Meters, UnitSystem};
use crate::validation::{require_range, round_to, Validate};

pub const MIN_WEIGHT_KG: f64 = 1.0;
pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const MIN_HEIGHT_CM: f64 = 50.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Lower and upper BMI of the normal band
const HEALTHY_BMI: (f64, f64) = (18.5, 24.9);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    /// Body weight (kg or lb)
    pub weight: f64,
    /// Height (cm or in)
    pub height: f64,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl Validate for BmiInput {
    fn validate(&self) -> CalcResult<()> {
        let weight = self.unit_system.weight_to_kg(self.weight);
        let height = self.unit_system.length_to_cm(self.height);
        require_range("weight", weight.value(), MIN_WEIGHT_KG, MAX_WEIGHT_KG)?;
        require_range("height", height.value(), MIN_HEIGHT_CM, MAX_HEIGHT_CM)
    }
}

/// WHO adult BMI classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    /// Classify a BMI already rounded to one decimal
    pub fn from_bmi(bmi: f64) -> Self {
        match bmi {
            b if b < 18.5 => BmiCategory::Underweight,
            b if b < 25.0 => BmiCategory::Normal,
            b if b < 30.0 => BmiCategory::Overweight,
            b if b < 35.0 => BmiCategory::ObeseClass1,
            b if b < 40.0 => BmiCategory::ObeseClass2,
            _ => BmiCategory::ObeseClass3,
        }
    }

    /// Inclusive BMI band; the last class has no upper bound
    pub fn range(self) -> (f64, Option<f64>) {
        match self {
            BmiCategory::Underweight => (0.0, Some(18.4)),
            BmiCategory::Normal => (18.5, Some(24.9)),
            BmiCategory::Overweight => (25.0, Some(29.9)),
            BmiCategory::ObeseClass1 => (30.0, Some(34.9)),
            BmiCategory::ObeseClass2 => (35.0, Some(39.9)),
            BmiCategory::ObeseClass3 => (40.0, None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// kg/m², one decimal
    pub bmi: f64,
    pub category: BmiCategory,
    pub category_min: f64,
    pub category_max: Option<f64>,
    /// Weight range (kg) that gives a normal BMI at this height
    pub healthy_weight_min_kg: f64,
    pub healthy_weight_max_kg: f64,
    pub formula: String,
}

pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;

    let weight = input.unit_system.weight_to_kg(input.weight);
    let height: Meters = input.unit_system.length_to_cm(input.height).into();
    let height_sq = height.value() * height.value();

    let bmi = round_to(weight.value() / height_sq, 1);
    let category = BmiCategory::from_bmi(bmi);
    let (category_min, category_max) = category.range();

    Ok(BmiResult {
        bmi,
        category,
        category_min,
        category_max,
        healthy_weight_min_kg: round_to(HEALTHY_BMI.0 * height_sq, 1),
        healthy_weight_max_kg: round_to(HEALTHY_BMI.1 * height_sq, 1),
        formula: "BMI = weight (kg) / height (m)²".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(weight: f64, height: f64) -> BmiInput {
        BmiInput { weight, height, unit_system: UnitSystem::Metric }
    }

    #[test]
    fn test_normal_bmi() {
        let result = calculate(&metric(70.0, 175.0)).unwrap();
        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.category_min, 18.5);
        assert_eq!(result.category_max, Some(24.9));
        assert_eq!(result.healthy_weight_min_kg, 56.7);
        assert_eq!(result.healthy_weight_max_kg, 76.3);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(39.9), BmiCategory::ObeseClass2);
        assert_eq!(BmiCategory::from_bmi(40.0), BmiCategory::ObeseClass3);
    }

    #[test]
    fn test_imperial_matches_metric() {
        let imperial = BmiInput { weight: 154.0, height: 69.0, unit_system: UnitSystem::Imperial };
        let result = calculate(&imperial).unwrap();
        // 69.85 kg, 175.26 cm
        assert_eq!(result.bmi, 22.7);
    }

    #[test]
    fn test_out_of_range() {
        let err = calculate(&metric(0.5, 175.0)).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
        assert_eq!(err.field(), Some("weight"));

        let err = calculate(&metric(70.0, 310.0)).unwrap_err();
        assert_eq!(err.field(), Some("height"));
    }
}

//! # Basal Metabolic Rate
//!
//! Resting energy expenditure in kcal/day.
//!
//! | Formula | Male | Female |
//! |---------|------|--------|
//! | Mifflin–St Jeor | 10W + 6.25H − 5A + 5 | 10W + 6.25H − 5A − 161 |
//! | Harris–Benedict (revised) | 88.362 + 13.397W + 4.799H − 5.677A | 447.593 + 9.247W + 3.098H − 4.330A |
//!
//! W in kg, H in cm, A in years.

use serde::{Deserialize, Serialize};

use super::Sex;
use crate::errors::CalcResult;
use crate::units::UnitSystem;
use crate::validation::{require_range, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    #[default]
    MifflinStJeor,
    HarrisBenedict,
}

impl BmrFormula {
    pub fn formula_text(self, sex: Sex) -> &'static str {
        match (self, sex) {
            (BmrFormula::MifflinStJeor, Sex::Male) => "BMR = 10W + 6.25H − 5A + 5",
            (BmrFormula::MifflinStJeor, Sex::Female) => "BMR = 10W + 6.25H − 5A − 161",
            (BmrFormula::HarrisBenedict, Sex::Male) => {
                "BMR = 88.362 + 13.397W + 4.799H − 5.677A"
            }
            (BmrFormula::HarrisBenedict, Sex::Female) => {
                "BMR = 447.593 + 9.247W + 3.098H − 4.330A"
            }
        }
    }
}

/// Body measurements shared by the BMR and calorie calculators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrInput {
    pub sex: Sex,
    /// Age in years
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    #[serde(default)]
    pub unit_system: UnitSystem,
    #[serde(default)]
    pub formula: BmrFormula,
}

impl Validate for BmrInput {
    fn validate(&self) -> CalcResult<()> {
        require_range("age", self.age as f64, 15.0, 100.0)?;
        require_range("weight", self.weight_kg(), 20.0, 500.0)?;
        require_range("height", self.height_cm(), 100.0, 250.0)
    }
}

impl BmrInput {
    pub fn weight_kg(&self) -> f64 {
        self.unit_system.weight_to_kg(self.weight).value()
    }

    pub fn height_cm(&self) -> f64 {
        self.unit_system.length_to_cm(self.height).value()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrResult {
    /// kcal/day, whole number
    pub bmr: f64,
    pub formula_used: BmrFormula,
    pub formula: String,
}

/// Unrounded BMR in kcal/day.
pub fn basal_metabolic_rate(
    formula: BmrFormula,
    sex: Sex,
    age: f64,
    weight_kg: f64,
    height_cm: f64,
) -> f64 {
    match (formula, sex) {
        (BmrFormula::MifflinStJeor, Sex::Male) => {
            10.0 * weight_kg + 6.25 * height_cm - 5.0 * age + 5.0
        }
        (BmrFormula::MifflinStJeor, Sex::Female) => {
            10.0 * weight_kg + 6.25 * height_cm - 5.0 * age - 161.0
        }
        (BmrFormula::HarrisBenedict, Sex::Male) => {
            88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age
        }
        (BmrFormula::HarrisBenedict, Sex::Female) => {
            447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age
        }
    }
}

pub fn calculate(input: &BmrInput) -> CalcResult<BmrResult> {
    input.validate()?;
    let bmr = basal_metabolic_rate(
        input.formula,
        input.sex,
        input.age as f64,
        input.weight_kg(),
        input.height_cm(),
    );
    Ok(BmrResult {
        bmr: round_to(bmr, 0),
        formula_used: input.formula,
        formula: input.formula.formula_text(input.sex).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(sex: Sex, formula: BmrFormula) -> BmrInput {
        BmrInput {
            sex,
            age: 30,
            weight: 80.0,
            height: 180.0,
            unit_system: UnitSystem::Metric,
            formula,
        }
    }

    #[test]
    fn test_mifflin() {
        let male = calculate(&input(Sex::Male, BmrFormula::MifflinStJeor)).unwrap();
        assert_eq!(male.bmr, 1780.0);
        let female = calculate(&input(Sex::Female, BmrFormula::MifflinStJeor)).unwrap();
        assert_eq!(female.bmr, 1614.0);
    }

    #[test]
    fn test_harris_benedict() {
        // 88.362 + 1071.76 + 863.82 - 170.31 = 1853.632
        let male = calculate(&input(Sex::Male, BmrFormula::HarrisBenedict)).unwrap();
        assert_eq!(male.bmr, 1854.0);
    }

    #[test]
    fn test_age_range() {
        let mut young = input(Sex::Male, BmrFormula::MifflinStJeor);
        young.age = 12;
        assert_eq!(calculate(&young).unwrap_err().error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_formula_defaults_to_mifflin() {
        let json = r#"{"sex":"female","age":40,"weight":60,"height":165}"#;
        let parsed: BmrInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.formula, BmrFormula::MifflinStJeor);
        assert_eq!(parsed.unit_system, UnitSystem::Metric);
    }
}

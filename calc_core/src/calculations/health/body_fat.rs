//! # Body Fat (US Navy Method)
//!
//! Circumference-based estimate, lengths in cm:
//!
//! - Male: `495 / (1.0324 − 0.19077·log10(waist − neck) + 0.15456·log10(height)) − 450`
//! - Female: `495 / (1.29579 − 0.35004·log10(waist + hip − neck) + 0.22100·log10(height)) − 450`
//!
//! Categories follow the American Council on Exercise chart.

use serde::{Deserialize, Serialize};

use super::Sex;
use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;
use crate::validation::{require_range, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyFatInput {
    pub sex: Sex,
    pub height: f64,
    pub waist: f64,
    pub neck: f64,
    /// Required for women
    #[serde(default)]
    pub hip: Option<f64>,
    /// Optional body weight for fat/lean mass
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl BodyFatInput {
    fn cm(&self, value: f64) -> f64 {
        self.unit_system.length_to_cm(value).value()
    }
}

impl Validate for BodyFatInput {
    fn validate(&self) -> CalcResult<()> {
        require_range("height", self.cm(self.height), 100.0, 250.0)?;
        require_range("waist", self.cm(self.waist), 40.0, 200.0)?;
        require_range("neck", self.cm(self.neck), 20.0, 80.0)?;
        if self.waist <= self.neck {
            return Err(CalcError::invalid_input(
                "waist",
                self.waist.to_string(),
                "Waist must be larger than neck",
            ));
        }
        match (self.sex, self.hip) {
            (Sex::Female, None) => return Err(CalcError::missing_field("hip")),
            (_, Some(hip)) => require_range("hip", self.cm(hip), 50.0, 200.0)?,
            (Sex::Male, None) => {}
        }
        if let Some(weight) = self.weight {
            let kg = self.unit_system.weight_to_kg(weight).value();
            require_range("weight", kg, 20.0, 500.0)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    Essential,
    Athletes,
    Fitness,
    Average,
    Obese,
}

impl BodyFatCategory {
    pub fn classify(sex: Sex, percent: f64) -> Self {
        // lower bounds of athletes, fitness, average, obese
        let bounds = match sex {
            Sex::Male => [6.0, 14.0, 18.0, 25.0],
            Sex::Female => [14.0, 21.0, 25.0, 32.0],
        };
        match percent {
            p if p < bounds[0] => BodyFatCategory::Essential,
            p if p < bounds[1] => BodyFatCategory::Athletes,
            p if p < bounds[2] => BodyFatCategory::Fitness,
            p if p < bounds[3] => BodyFatCategory::Average,
            _ => BodyFatCategory::Obese,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyFatResult {
    pub body_fat_percent: f64,
    pub category: BodyFatCategory,
    pub fat_mass_kg: Option<f64>,
    pub lean_mass_kg: Option<f64>,
    pub formula: String,
}

pub fn calculate(input: &BodyFatInput) -> CalcResult<BodyFatResult> {
    input.validate()?;

    let height = input.cm(input.height);
    let waist = input.cm(input.waist);
    let neck = input.cm(input.neck);

    let (density, formula) = match input.sex {
        Sex::Male => (
            1.0324 - 0.19077 * (waist - neck).log10() + 0.15456 * height.log10(),
            "BF% = 495 / (1.0324 − 0.19077·log10(waist − neck) + 0.15456·log10(height)) − 450",
        ),
        Sex::Female => {
            let hip = input.cm(input.hip.unwrap_or_default());
            let girth = waist + hip - neck;
            if girth <= 0.0 {
                return Err(CalcError::invalid_input(
                    "hip",
                    hip.to_string(),
                    "Waist + hip must exceed neck",
                ));
            }
            (
                1.29579 - 0.35004 * girth.log10() + 0.22100 * height.log10(),
                "BF% = 495 / (1.29579 − 0.35004·log10(waist + hip − neck) + 0.22100·log10(height)) − 450",
            )
        }
    };

    let percent = 495.0 / density - 450.0;
    if !percent.is_finite() || percent <= 0.0 || percent >= 75.0 {
        return Err(CalcError::no_solution(
            "Measurements do not give a plausible body fat percentage",
        ));
    }
    let percent = round_to(percent, 1);

    let weight_kg = input
        .weight
        .map(|w| input.unit_system.weight_to_kg(w).value());

    Ok(BodyFatResult {
        body_fat_percent: percent,
        category: BodyFatCategory::classify(input.sex, percent),
        fat_mass_kg: weight_kg.map(|w| round_to(w * percent / 100.0, 1)),
        lean_mass_kg: weight_kg.map(|w| round_to(w * (1.0 - percent / 100.0), 1)),
        formula: formula.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male() -> BodyFatInput {
        BodyFatInput {
            sex: Sex::Male,
            height: 178.0,
            waist: 90.0,
            neck: 38.0,
            hip: None,
            weight: Some(80.0),
            unit_system: UnitSystem::Metric,
        }
    }

    #[test]
    fn test_male_navy() {
        let result = calculate(&male()).unwrap();
        assert!((result.body_fat_percent - 20.2).abs() < 0.3);
        assert_eq!(result.category, BodyFatCategory::Average);
        let fat = result.fat_mass_kg.unwrap();
        let lean = result.lean_mass_kg.unwrap();
        assert!((fat + lean - 80.0).abs() < 0.2);
    }

    #[test]
    fn test_female_requires_hip() {
        let input = BodyFatInput { sex: Sex::Female, ..male() };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_female_navy() {
        let input = BodyFatInput {
            sex: Sex::Female,
            height: 165.0,
            waist: 75.0,
            neck: 33.0,
            hip: Some(100.0),
            weight: None,
            unit_system: UnitSystem::Metric,
        };
        let result = calculate(&input).unwrap();
        assert!(result.body_fat_percent > 25.0 && result.body_fat_percent < 35.0);
        assert_eq!(result.fat_mass_kg, None);
    }

    #[test]
    fn test_waist_must_exceed_neck() {
        let input = BodyFatInput { waist: 40.0, neck: 45.0, ..male() };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_categories() {
        assert_eq!(BodyFatCategory::classify(Sex::Male, 4.0), BodyFatCategory::Essential);
        assert_eq!(BodyFatCategory::classify(Sex::Male, 10.0), BodyFatCategory::Athletes);
        assert_eq!(BodyFatCategory::classify(Sex::Female, 22.0), BodyFatCategory::Fitness);
        assert_eq!(BodyFatCategory::classify(Sex::Female, 35.0), BodyFatCategory::Obese);
    }
}

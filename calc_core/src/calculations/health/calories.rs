//! # Daily Calorie Needs (TDEE)
//!
//! `TDEE = BMR × activity factor`, then a ±500 kcal goal adjustment with a
//! safety floor (1200 kcal female, 1500 kcal male). Macros are split 30 %
//! protein, 30 % fat, 40 % carbohydrate by energy.

use serde::{Deserialize, Serialize};

use super::bmr::{basal_metabolic_rate, BmrFormula, BmrInput};
use super::Sex;
use crate::errors::CalcResult;
use crate::units::UnitSystem;
use crate::validation::{round_to, Validate};

/// kcal per gram
const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;
const KCAL_PER_G_CARBS: f64 = 4.0;

/// kcal/day deficit or surplus for lose/gain goals
pub const GOAL_ADJUSTMENT: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1–3 days/week
    Light,
    /// 3–5 days/week
    Moderate,
    /// 6–7 days/week
    Active,
    /// Physical job or twice-daily training
    VeryActive,
}

impl ActivityLevel {
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    Maintain,
    Lose,
    Gain,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaloriesInput {
    pub sex: Sex,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    #[serde(default)]
    pub unit_system: UnitSystem,
    pub activity: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub formula: BmrFormula,
}

impl CaloriesInput {
    fn body(&self) -> BmrInput {
        BmrInput {
            sex: self.sex,
            age: self.age,
            weight: self.weight,
            height: self.height,
            unit_system: self.unit_system,
            formula: self.formula,
        }
    }
}

impl Validate for CaloriesInput {
    fn validate(&self) -> CalcResult<()> {
        self.body().validate()
    }
}

/// Grams per day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl Macros {
    fn split(calories: f64) -> Self {
        Macros {
            protein_g: round_to(calories * 0.30 / KCAL_PER_G_PROTEIN, 0),
            fat_g: round_to(calories * 0.30 / KCAL_PER_G_FAT, 0),
            carbs_g: round_to(calories * 0.40 / KCAL_PER_G_CARBS, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaloriesResult {
    pub bmr: f64,
    pub tdee: f64,
    pub activity_factor: f64,
    pub goal: Goal,
    /// Daily target after the goal adjustment and floor
    pub target_calories: f64,
    /// True when the floor raised the target
    pub floor_applied: bool,
    pub macros: Macros,
    pub formula: String,
}

/// Lowest recommended daily intake without supervision
pub fn minimum_calories(sex: Sex) -> f64 {
    match sex {
        Sex::Female => 1200.0,
        Sex::Male => 1500.0,
    }
}

pub fn calculate(input: &CaloriesInput) -> CalcResult<CaloriesResult> {
    input.validate()?;
    let body = input.body();

    let bmr = basal_metabolic_rate(
        input.formula,
        input.sex,
        input.age as f64,
        body.weight_kg(),
        body.height_cm(),
    );
    let factor = input.activity.factor();
    let tdee = bmr * factor;

    let adjusted = match input.goal {
        Goal::Maintain => tdee,
        Goal::Lose => tdee - GOAL_ADJUSTMENT,
        Goal::Gain => tdee + GOAL_ADJUSTMENT,
    };
    let floor = minimum_calories(input.sex);
    let floor_applied = adjusted < floor;
    let target = round_to(adjusted.max(floor), 0);

    Ok(CaloriesResult {
        bmr: round_to(bmr, 0),
        tdee: round_to(tdee, 0),
        activity_factor: factor,
        goal: input.goal,
        target_calories: target,
        floor_applied,
        macros: Macros::split(target),
        formula: format!("TDEE = BMR × {}", factor),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male_moderate(goal: Goal) -> CaloriesInput {
        CaloriesInput {
            sex: Sex::Male,
            age: 30,
            weight: 80.0,
            height: 180.0,
            unit_system: UnitSystem::Metric,
            activity: ActivityLevel::Moderate,
            goal,
            formula: BmrFormula::MifflinStJeor,
        }
    }

    #[test]
    fn test_tdee() {
        let result = calculate(&male_moderate(Goal::Maintain)).unwrap();
        assert_eq!(result.bmr, 1780.0);
        assert_eq!(result.tdee, 2759.0);
        assert_eq!(result.target_calories, 2759.0);
        assert!(!result.floor_applied);
    }

    #[test]
    fn test_goal_adjustment() {
        assert_eq!(calculate(&male_moderate(Goal::Lose)).unwrap().target_calories, 2259.0);
        assert_eq!(calculate(&male_moderate(Goal::Gain)).unwrap().target_calories, 3259.0);
    }

    #[test]
    fn test_floor() {
        let input = CaloriesInput {
            sex: Sex::Female,
            age: 25,
            weight: 60.0,
            height: 160.0,
            unit_system: UnitSystem::Metric,
            activity: ActivityLevel::Sedentary,
            goal: Goal::Lose,
            formula: BmrFormula::MifflinStJeor,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.target_calories, 1200.0);
        assert!(result.floor_applied);
    }

    #[test]
    fn test_macros_add_up() {
        let result = calculate(&male_moderate(Goal::Maintain)).unwrap();
        let m = result.macros;
        let kcal = m.protein_g * 4.0 + m.fat_g * 9.0 + m.carbs_g * 4.0;
        assert!((kcal - result.target_calories).abs() < 10.0);
    }
}

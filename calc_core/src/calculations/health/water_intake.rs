//! # Daily Water Intake
//!
//! 30 ml per kg of body weight plus 350 ml for every 30 minutes of exercise.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::validation::{require_range, round_to, Validate};

pub const ML_PER_KG: f64 = 30.0;
pub const ML_PER_30_MIN_EXERCISE: f64 = 350.0;
pub const GLASS_ML: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterIntakeInput {
    /// Body weight in kg
    pub weight: f64,
    #[serde(default)]
    pub exercise_minutes: f64,
}

impl Validate for WaterIntakeInput {
    fn validate(&self) -> CalcResult<()> {
        require_range("weight", self.weight, 20.0, 300.0)?;
        require_range("exercise_minutes", self.exercise_minutes, 0.0, 600.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterIntakeResult {
    pub base_ml: f64,
    pub exercise_ml: f64,
    pub total_ml: f64,
    pub total_liters: f64,
    /// 250 ml glasses, rounded up
    pub glasses: u32,
    pub formula: String,
}

pub fn calculate(input: &WaterIntakeInput) -> CalcResult<WaterIntakeResult> {
    input.validate()?;

    let base = input.weight * ML_PER_KG;
    let exercise = input.exercise_minutes / 30.0 * ML_PER_30_MIN_EXERCISE;
    let total = round_to(base + exercise, 0);

    Ok(WaterIntakeResult {
        base_ml: round_to(base, 0),
        exercise_ml: round_to(exercise, 0),
        total_ml: total,
        total_liters: round_to(total / 1000.0, 2),
        glasses: (total / GLASS_ML).ceil() as u32,
        formula: "water = 30 ml × weight + 350 ml × (exercise min / 30)".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_exercise() {
        let result = calculate(&WaterIntakeInput { weight: 70.0, exercise_minutes: 30.0 }).unwrap();
        assert_eq!(result.base_ml, 2100.0);
        assert_eq!(result.exercise_ml, 350.0);
        assert_eq!(result.total_ml, 2450.0);
        assert_eq!(result.total_liters, 2.45);
        assert_eq!(result.glasses, 10);
    }

    #[test]
    fn test_exercise_defaults_to_zero() {
        let input: WaterIntakeInput = serde_json::from_str(r#"{"weight":50}"#).unwrap();
        assert_eq!(calculate(&input).unwrap().total_ml, 1500.0);
    }

    #[test]
    fn test_range() {
        assert!(calculate(&WaterIntakeInput { weight: 10.0, exercise_minutes: 0.0 }).is_err());
        assert!(calculate(&WaterIntakeInput { weight: 70.0, exercise_minutes: 700.0 }).is_err());
    }
}

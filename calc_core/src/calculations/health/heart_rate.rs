//! # Target Heart Rate Zones
//!
//! Maximum heart rate from `220 − age` or Tanaka (`208 − 0.7 × age`). With a
//! resting heart rate the zones use the Karvonen method
//! (`rest + (max − rest) × intensity`); otherwise a plain percentage of max.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{require_range, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxHeartRateFormula {
    /// 220 − age
    #[default]
    Classic,
    /// 208 − 0.7 × age
    Tanaka,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateInput {
    pub age: u32,
    #[serde(default)]
    pub resting_heart_rate: Option<f64>,
    #[serde(default)]
    pub formula: MaxHeartRateFormula,
}

impl Validate for HeartRateInput {
    fn validate(&self) -> CalcResult<()> {
        require_range("age", self.age as f64, 10.0, 100.0)?;
        if let Some(rest) = self.resting_heart_rate {
            require_range("resting_heart_rate", rest, 30.0, 120.0)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZone {
    /// 1 (lightest) to 5 (maximum)
    pub zone: u8,
    pub name: String,
    pub min_percent: u32,
    pub max_percent: u32,
    pub min_bpm: f64,
    pub max_bpm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateResult {
    pub max_heart_rate: f64,
    pub resting_heart_rate: Option<f64>,
    /// Heart rate reserve (max − rest), Karvonen only
    pub heart_rate_reserve: Option<f64>,
    pub karvonen: bool,
    pub zones: Vec<HeartRateZone>,
    pub formula: String,
}

const ZONES: [(&str, u32, u32); 5] = [
    ("recovery", 50, 60),
    ("fat_burn", 60, 70),
    ("aerobic", 70, 80),
    ("anaerobic", 80, 90),
    ("maximum", 90, 100),
];

pub fn max_heart_rate(formula: MaxHeartRateFormula, age: f64) -> f64 {
    match formula {
        MaxHeartRateFormula::Classic => 220.0 - age,
        MaxHeartRateFormula::Tanaka => 208.0 - 0.7 * age,
    }
}

pub fn calculate(input: &HeartRateInput) -> CalcResult<HeartRateResult> {
    input.validate()?;

    let max = round_to(max_heart_rate(input.formula, input.age as f64), 0);
    if let Some(rest) = input.resting_heart_rate {
        if rest >= max {
            return Err(CalcError::invalid_input(
                "resting_heart_rate",
                rest.to_string(),
                "Resting heart rate must be below maximum heart rate",
            ));
        }
    }

    let target = |percent: u32| -> f64 {
        let intensity = percent as f64 / 100.0;
        match input.resting_heart_rate {
            Some(rest) => round_to(rest + (max - rest) * intensity, 0),
            None => round_to(max * intensity, 0),
        }
    };

    let zones = ZONES
        .iter()
        .enumerate()
        .map(|(i, &(name, lo, hi))| HeartRateZone {
            zone: i as u8 + 1,
            name: name.to_string(),
            min_percent: lo,
            max_percent: hi,
            min_bpm: target(lo),
            max_bpm: target(hi),
        })
        .collect();

    let max_formula = match input.formula {
        MaxHeartRateFormula::Classic => "HRmax = 220 − age",
        MaxHeartRateFormula::Tanaka => "HRmax = 208 − 0.7 × age",
    };
    let formula = match input.resting_heart_rate {
        Some(_) => format!("{}; target = HRrest + (HRmax − HRrest) × intensity", max_formula),
        None => format!("{}; target = HRmax × intensity", max_formula),
    };

    Ok(HeartRateResult {
        max_heart_rate: max,
        resting_heart_rate: input.resting_heart_rate,
        heart_rate_reserve: input.resting_heart_rate.map(|rest| max - rest),
        karvonen: input.resting_heart_rate.is_some(),
        zones,
        formula,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_zones() {
        let input = HeartRateInput { age: 40, resting_heart_rate: None, formula: MaxHeartRateFormula::Classic };
        let result = calculate(&input).unwrap();
        assert_eq!(result.max_heart_rate, 180.0);
        assert_eq!(result.zones.len(), 5);
        assert_eq!(result.zones[0].min_bpm, 90.0);
        assert_eq!(result.zones[4].max_bpm, 180.0);
        assert!(!result.karvonen);
    }

    #[test]
    fn test_karvonen() {
        let input = HeartRateInput { age: 40, resting_heart_rate: Some(60.0), formula: MaxHeartRateFormula::Classic };
        let result = calculate(&input).unwrap();
        assert_eq!(result.heart_rate_reserve, Some(120.0));
        // 60 + 120 × 0.7
        assert_eq!(result.zones[2].min_bpm, 144.0);
        assert!(result.karvonen);
    }

    #[test]
    fn test_tanaka() {
        let input = HeartRateInput { age: 50, resting_heart_rate: None, formula: MaxHeartRateFormula::Tanaka };
        assert_eq!(calculate(&input).unwrap().max_heart_rate, 173.0);
    }

    #[test]
    fn test_invalid_resting() {
        let input = HeartRateInput { age: 40, resting_heart_rate: Some(150.0), formula: MaxHeartRateFormula::Classic };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "OUT_OF_RANGE");
    }
}

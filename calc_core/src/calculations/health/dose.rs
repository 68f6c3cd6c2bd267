//! # Weight-Based Dose
//!
//! `single dose = weight × mg/kg`, optionally capped at a maximum single dose
//! and converted to a liquid volume through the preparation's concentration.
//! Informational only.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::validation::{require_positive, require_range, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseInput {
    pub weight_kg: f64,
    pub dose_mg_per_kg: f64,
    #[serde(default)]
    pub concentration_mg_per_ml: Option<f64>,
    #[serde(default)]
    pub max_single_dose_mg: Option<f64>,
    #[serde(default = "default_doses_per_day")]
    pub doses_per_day: u32,
}

fn default_doses_per_day() -> u32 {
    1
}

impl Validate for DoseInput {
    fn validate(&self) -> CalcResult<()> {
        require_range("weight_kg", self.weight_kg, 0.5, 300.0)?;
        require_range("dose_mg_per_kg", self.dose_mg_per_kg, 0.001, 1000.0)?;
        if let Some(c) = self.concentration_mg_per_ml {
            require_positive("concentration_mg_per_ml", c)?;
        }
        if let Some(max) = self.max_single_dose_mg {
            require_positive("max_single_dose_mg", max)?;
        }
        require_range("doses_per_day", self.doses_per_day as f64, 1.0, 24.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseResult {
    pub single_dose_mg: f64,
    /// True when the maximum single dose limited the result
    pub capped: bool,
    pub volume_ml: Option<f64>,
    pub daily_dose_mg: f64,
    pub doses_per_day: u32,
    pub formula: String,
}

pub fn calculate(input: &DoseInput) -> CalcResult<DoseResult> {
    input.validate()?;

    let raw = input.weight_kg * input.dose_mg_per_kg;
    let (single, capped) = match input.max_single_dose_mg {
        Some(max) if raw > max => (max, true),
        _ => (raw, false),
    };

    Ok(DoseResult {
        single_dose_mg: round_to(single, 2),
        capped,
        volume_ml: input
            .concentration_mg_per_ml
            .map(|c| round_to(single / c, 2)),
        daily_dose_mg: round_to(single * input.doses_per_day as f64, 2),
        doses_per_day: input.doses_per_day,
        formula: "dose (mg) = weight (kg) × dose (mg/kg); volume (ml) = dose / concentration"
            .to_string(),
    })
}

//! # Health Calculators
//!
//! Body metrics, energy expenditure, hydration, dosing and cycle dates.
//! All body inputs accept a [`UnitSystem`](crate::units::UnitSystem) and are
//! normalised to kilograms and centimeters before validation.

use serde::{Deserialize, Serialize};

pub mod bmi;
pub mod bmr;
pub mod body_fat;
pub mod calories;
pub mod dose;
pub mod heart_rate;
pub mod ideal_weight;
pub mod ovulation;
pub mod pregnancy;
pub mod water_intake;

pub use bmi::{BmiCategory, BmiInput, BmiResult};
pub use bmr::{BmrFormula, BmrInput, BmrResult};
pub use body_fat::{BodyFatCategory, BodyFatInput, BodyFatResult};
pub use calories::{ActivityLevel, CaloriesInput, CaloriesResult, Goal, Macros};
pub use dose::{DoseInput, DoseResult};
pub use heart_rate::{HeartRateInput, HeartRateResult, HeartRateZone, MaxHeartRateFormula};
pub use ideal_weight::{IdealWeightInput, IdealWeightResult};
pub use ovulation::{CyclePrediction, OvulationInput, OvulationResult};
pub use pregnancy::{PregnancyInput, PregnancyMethod, PregnancyResult};
pub use water_intake::{WaterIntakeInput, WaterIntakeResult};

/// Biological sex, as used by the sex-specific formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// Default menstrual cycle length in days
pub const DEFAULT_CYCLE_DAYS: u32 = 28;

pub(crate) fn default_cycle_length() -> u32 {
    DEFAULT_CYCLE_DAYS
}

//! # Fuel Consumption
//!
//! Litres per 100 km from a trip, with km/L and US/UK miles per gallon.
//! `mpg (US) = 235.214583 / (L/100 km)`.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::validation::{require_non_negative, require_positive, round_to, Validate};

const MPG_US_FACTOR: f64 = 235.214_583;
const MPG_UK_FACTOR: f64 = 282.480_936;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelConsumptionInput {
    pub distance_km: f64,
    pub fuel_liters: f64,
    #[serde(default)]
    pub price_per_liter: Option<f64>,
}

impl Validate for FuelConsumptionInput {
    fn validate(&self) -> CalcResult<()> {
        require_positive("distance_km", self.distance_km)?;
        require_positive("fuel_liters", self.fuel_liters)?;
        if let Some(price) = self.price_per_liter {
            require_non_negative("price_per_liter", price)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelConsumptionResult {
    pub liters_per_100km: f64,
    pub km_per_liter: f64,
    pub mpg_us: f64,
    pub mpg_uk: f64,
    pub trip_cost: Option<f64>,
    pub cost_per_km: Option<f64>,
    pub formula: String,
}

pub fn calculate(input: &FuelConsumptionInput) -> CalcResult<FuelConsumptionResult> {
    input.validate()?;
    let per_100 = input.fuel_liters / input.distance_km * 100.0;
    Ok(FuelConsumptionResult {
        liters_per_100km: round_to(per_100, 2),
        km_per_liter: round_to(input.distance_km / input.fuel_liters, 2),
        mpg_us: round_to(MPG_US_FACTOR / per_100, 2),
        mpg_uk: round_to(MPG_UK_FACTOR / per_100, 2),
        trip_cost: input.price_per_liter.map(|p| round_to(p * input.fuel_liters, 2)),
        cost_per_km: input
            .price_per_liter
            .map(|p| round_to(p * input.fuel_liters / input.distance_km, 3)),
        formula: "L/100 km = fuel / distance × 100".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumption() {
        let input = FuelConsumptionInput { distance_km: 500.0, fuel_liters: 40.0, price_per_liter: Some(1.8) };
        let result = calculate(&input).unwrap();
        assert_eq!(result.liters_per_100km, 8.0);
        assert_eq!(result.km_per_liter, 12.5);
        assert_eq!(result.mpg_us, 29.4);
        assert_eq!(result.trip_cost, Some(72.0));
        assert_eq!(result.cost_per_km, Some(0.144));
    }

    #[test]
    fn test_zero_distance_rejected() {
        let input = FuelConsumptionInput { distance_km: 0.0, fuel_liters: 40.0, price_per_liter: None };
        assert!(calculate(&input).is_err());
    }
}

//! # Temperature Converter
//!
//! Temperature scales are affine, not proportional, so conversion goes
//! through Kelvin instead of a single factor. Negative values are allowed
//! as long as they are not below absolute zero.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{require_finite, round_significant};

use super::{ConversionInput, ConversionResult, Unit, SIGNIFICANT_DIGITS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit for TemperatureUnit {
    fn all() -> &'static [Self] {
        &[
            TemperatureUnit::Celsius,
            TemperatureUnit::Fahrenheit,
            TemperatureUnit::Kelvin,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }
}

impl TemperatureUnit {
    fn to_kelvin(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value + 273.15,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + 273.15,
            TemperatureUnit::Kelvin => value,
        }
    }

    fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => kelvin - 273.15,
            TemperatureUnit::Fahrenheit => (kelvin - 273.15) * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => kelvin,
        }
    }

    fn formula(self, to: TemperatureUnit) -> &'static str {
        use TemperatureUnit::*;
        match (self, to) {
            (Celsius, Fahrenheit) => "°F = °C × 9/5 + 32",
            (Fahrenheit, Celsius) => "°C = (°F − 32) × 5/9",
            (Celsius, Kelvin) => "K = °C + 273.15",
            (Kelvin, Celsius) => "°C = K − 273.15",
            (Fahrenheit, Kelvin) => "K = (°F − 32) × 5/9 + 273.15",
            (Kelvin, Fahrenheit) => "°F = (K − 273.15) × 9/5 + 32",
            _ => "x = x",
        }
    }
}

pub fn convert(input: &ConversionInput) -> CalcResult<ConversionResult> {
    require_finite("value", input.value)?;
    let from = TemperatureUnit::from_key("from_unit", &input.from_unit)?;
    let to = TemperatureUnit::from_key("to_unit", &input.to_unit)?;

    let kelvin = from.to_kelvin(input.value);
    // small tolerance so -273.15 °C itself is accepted
    if kelvin < -1e-9 {
        return Err(CalcError::invalid_input(
            "value",
            input.value.to_string(),
            "Temperature is below absolute zero",
        ));
    }

    Ok(ConversionResult {
        value: round_significant(to.from_kelvin(kelvin.max(0.0)), SIGNIFICANT_DIGITS),
        input_value: input.value,
        from_unit: from.key().to_string(),
        to_unit: to.key().to_string(),
        formula: from.formula(to).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(value: f64, from: &str, to: &str) -> f64 {
        convert(&ConversionInput::new(value, from, to)).unwrap().value
    }

    #[test]
    fn test_fixed_points() {
        assert_eq!(run(100.0, "celsius", "fahrenheit"), 212.0);
        assert_eq!(run(32.0, "fahrenheit", "celsius"), 0.0);
        assert_eq!(run(0.0, "celsius", "kelvin"), 273.15);
        assert_eq!(run(-40.0, "celsius", "fahrenheit"), -40.0);
    }

    #[test]
    fn test_absolute_zero() {
        assert_eq!(run(0.0, "kelvin", "celsius"), -273.15);
        let err = convert(&ConversionInput::new(-300.0, "celsius", "kelvin")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_formula() {
        let result = convert(&ConversionInput::new(20.0, "celsius", "fahrenheit")).unwrap();
        assert_eq!(result.formula, "°F = °C × 9/5 + 32");
        assert_eq!(result.value, 68.0);
    }
}

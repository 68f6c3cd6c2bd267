//! # Circle Calculator
//!
//! Given any one of radius, diameter, circumference or area, derive the
//! other three.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::validation::{require_positive, round_to, Validate};

/// The known circle measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "known", content = "value", rename_all = "snake_case")]
pub enum CircleInput {
    Radius(f64),
    Diameter(f64),
    Circumference(f64),
    Area(f64),
}

impl Validate for CircleInput {
    fn validate(&self) -> CalcResult<()> {
        match *self {
            CircleInput::Radius(v) => require_positive("radius", v),
            CircleInput::Diameter(v) => require_positive("diameter", v),
            CircleInput::Circumference(v) => require_positive("circumference", v),
            CircleInput::Area(v) => require_positive("area", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleResult {
    pub radius: f64,
    pub diameter: f64,
    pub circumference: f64,
    pub area: f64,
    pub formula: String,
}

pub fn calculate(input: &CircleInput) -> CalcResult<CircleResult> {
    input.validate()?;

    let radius = match *input {
        CircleInput::Radius(r) => r,
        CircleInput::Diameter(d) => d / 2.0,
        CircleInput::Circumference(c) => c / (2.0 * PI),
        CircleInput::Area(a) => (a / PI).sqrt(),
    };

    Ok(CircleResult {
        radius: round_to(radius, 4),
        diameter: round_to(2.0 * radius, 4),
        circumference: round_to(2.0 * PI * radius, 4),
        area: round_to(PI * radius * radius, 4),
        formula: "d = 2r, C = 2πr, A = πr²".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_radius() {
        let result = calculate(&CircleInput::Radius(1.0)).unwrap();
        assert_eq!(result.diameter, 2.0);
        assert_eq!(result.circumference, 6.2832);
        assert_eq!(result.area, 3.1416);
    }

    #[test]
    fn test_from_area() {
        let result = calculate(&CircleInput::Area(PI * 9.0)).unwrap();
        assert_eq!(result.radius, 3.0);
    }

    #[test]
    fn test_rejects_zero() {
        assert!(calculate(&CircleInput::Diameter(0.0)).is_err());
    }

    #[test]
    fn test_json_shape() {
        let input: CircleInput = serde_json::from_str(r#"{"known":"circumference","value":10}"#).unwrap();
        assert_eq!(input, CircleInput::Circumference(10.0));
    }
}

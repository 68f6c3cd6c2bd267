//! # Area Calculator
//!
//! Area (and, where it is determined by the inputs, perimeter) of common
//! plane figures.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::math::area::{calculate, AreaInput};
//!
//! let result = calculate(&AreaInput::Circle { radius: 5.0 }).unwrap();
//! assert_eq!(result.area, 78.54);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{require_positive, round_to, Validate};

/// Figure and its dimensions.
///
/// ## JSON Example
///
/// ```json
/// { "figure": "trapezoid", "base_a": 6.0, "base_b": 4.0, "height": 3.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "figure", rename_all = "snake_case")]
pub enum AreaInput {
    Circle { radius: f64 },
    Square { side: f64 },
    Rectangle { length: f64, width: f64 },
    Triangle { base: f64, height: f64 },
    Trapezoid { base_a: f64, base_b: f64, height: f64 },
    Parallelogram { base: f64, height: f64 },
    Rhombus { diagonal_1: f64, diagonal_2: f64 },
    Ellipse { semi_major: f64, semi_minor: f64 },
    /// Circular sector with central angle in degrees
    Sector { radius: f64, angle_deg: f64 },
}

impl AreaInput {
    /// Figure name as used in JSON
    pub fn figure_name(&self) -> &'static str {
        match self {
            AreaInput::Circle { .. } => "circle",
            AreaInput::Square { .. } => "square",
            AreaInput::Rectangle { .. } => "rectangle",
            AreaInput::Triangle { .. } => "triangle",
            AreaInput::Trapezoid { .. } => "trapezoid",
            AreaInput::Parallelogram { .. } => "parallelogram",
            AreaInput::Rhombus { .. } => "rhombus",
            AreaInput::Ellipse { .. } => "ellipse",
            AreaInput::Sector { .. } => "sector",
        }
    }

    fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            AreaInput::Circle { radius } => vec![("radius", radius)],
            AreaInput::Square { side } => vec![("side", side)],
            AreaInput::Rectangle { length, width } => vec![("length", length), ("width", width)],
            AreaInput::Triangle { base, height } | AreaInput::Parallelogram { base, height } => {
                vec![("base", base), ("height", height)]
            }
            AreaInput::Trapezoid { base_a, base_b, height } => {
                vec![("base_a", base_a), ("base_b", base_b), ("height", height)]
            }
            AreaInput::Rhombus { diagonal_1, diagonal_2 } => {
                vec![("diagonal_1", diagonal_1), ("diagonal_2", diagonal_2)]
            }
            AreaInput::Ellipse { semi_major, semi_minor } => {
                vec![("semi_major", semi_major), ("semi_minor", semi_minor)]
            }
            AreaInput::Sector { radius, angle_deg } => vec![("radius", radius), ("angle_deg", angle_deg)],
        }
    }
}

impl Validate for AreaInput {
    fn validate(&self) -> CalcResult<()> {
        for (field, value) in self.dimensions() {
            require_positive(field, value)?;
        }
        if let AreaInput::Sector { angle_deg, .. } = *self {
            if angle_deg > 360.0 {
                return Err(CalcError::out_of_range("angle_deg", angle_deg, 0.0, 360.0));
            }
        }
        Ok(())
    }
}

/// Area calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaResult {
    pub figure: String,
    /// Area in square input units, rounded to 2 decimals
    pub area: f64,
    /// Perimeter when the inputs determine it
    pub perimeter: Option<f64>,
    pub formula: String,
}

/// Calculate the area of a figure.
pub fn calculate(input: &AreaInput) -> CalcResult<AreaResult> {
    input.validate()?;

    let (area, perimeter, formula) = match *input {
        AreaInput::Circle { radius } => (PI * radius * radius, Some(2.0 * PI * radius), "A = π × r²"),
        AreaInput::Square { side } => (side * side, Some(4.0 * side), "A = a²"),
        AreaInput::Rectangle { length, width } => {
            (length * width, Some(2.0 * (length + width)), "A = l × w")
        }
        AreaInput::Triangle { base, height } => (0.5 * base * height, None, "A = ½ × b × h"),
        AreaInput::Trapezoid { base_a, base_b, height } => {
            ((base_a + base_b) / 2.0 * height, None, "A = (a + b) / 2 × h")
        }
        AreaInput::Parallelogram { base, height } => (base * height, None, "A = b × h"),
        AreaInput::Rhombus { diagonal_1, diagonal_2 } => {
            let side = ((diagonal_1 / 2.0).powi(2) + (diagonal_2 / 2.0).powi(2)).sqrt();
            (diagonal_1 * diagonal_2 / 2.0, Some(4.0 * side), "A = d₁ × d₂ / 2")
        }
        AreaInput::Ellipse { semi_major, semi_minor } => {
            // Ramanujan's first approximation
            let (a, b) = (semi_major, semi_minor);
            let perimeter = PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt());
            (PI * a * b, Some(perimeter), "A = π × a × b")
        }
        AreaInput::Sector { radius, angle_deg } => {
            let arc = radius * angle_deg.to_radians();
            (
                angle_deg / 360.0 * PI * radius * radius,
                Some(2.0 * radius + arc),
                "A = θ / 360 × π × r²",
            )
        }
    };

    Ok(AreaResult {
        figure: input.figure_name().to_string(),
        area: round_to(area, 2),
        perimeter: perimeter.map(|p| round_to(p, 2)),
        formula: formula.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area() {
        let result = calculate(&AreaInput::Circle { radius: 5.0 }).unwrap();
        assert!((result.area - 78.54).abs() < 0.01);
        assert_eq!(result.perimeter, Some(31.42));
        assert_eq!(result.formula, "A = π × r²");
    }

    #[test]
    fn test_rectangle_and_triangle() {
        let rect = calculate(&AreaInput::Rectangle { length: 4.0, width: 2.5 }).unwrap();
        assert_eq!(rect.area, 10.0);
        assert_eq!(rect.perimeter, Some(13.0));

        let tri = calculate(&AreaInput::Triangle { base: 6.0, height: 3.0 }).unwrap();
        assert_eq!(tri.area, 9.0);
        assert_eq!(tri.perimeter, None);
    }

    #[test]
    fn test_trapezoid_and_rhombus() {
        let trap = calculate(&AreaInput::Trapezoid { base_a: 6.0, base_b: 4.0, height: 3.0 }).unwrap();
        assert_eq!(trap.area, 15.0);

        let rhombus = calculate(&AreaInput::Rhombus { diagonal_1: 6.0, diagonal_2: 8.0 }).unwrap();
        assert_eq!(rhombus.area, 24.0);
        assert_eq!(rhombus.perimeter, Some(20.0));
    }

    #[test]
    fn test_sector_half_circle() {
        let sector = calculate(&AreaInput::Sector { radius: 2.0, angle_deg: 180.0 }).unwrap();
        assert!((sector.area - 6.28).abs() < 0.01);
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        assert!(calculate(&AreaInput::Circle { radius: 0.0 }).is_err());
        assert!(calculate(&AreaInput::Square { side: -1.0 }).is_err());
        assert!(calculate(&AreaInput::Triangle { base: 3.0, height: 0.0 }).is_err());
        assert!(calculate(&AreaInput::Parallelogram { base: -2.0, height: 1.0 }).is_err());
    }

    #[test]
    fn test_sector_angle_limit() {
        let err = calculate(&AreaInput::Sector { radius: 1.0, angle_deg: 400.0 }).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_json_shape() {
        let input: AreaInput = serde_json::from_str(r#"{"figure":"circle","radius":5}"#).unwrap();
        assert_eq!(input, AreaInput::Circle { radius: 5.0 });
    }
}

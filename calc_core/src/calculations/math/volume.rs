//! # Volume Calculator
//!
//! Volume and surface area of common solids.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::validation::{require_positive, round_to, Validate};

/// Solid and its dimensions, tagged by `"shape"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum VolumeInput {
    Cube { side: f64 },
    Cuboid { length: f64, width: f64, height: f64 },
    Sphere { radius: f64 },
    Hemisphere { radius: f64 },
    Cylinder { radius: f64, height: f64 },
    Cone { radius: f64, height: f64 },
    /// Pyramid with a rectangular base
    Pyramid { base_length: f64, base_width: f64, height: f64 },
}

impl VolumeInput {
    pub fn shape_name(&self) -> &'static str {
        match self {
            VolumeInput::Cube { .. } => "cube",
            VolumeInput::Cuboid { .. } => "cuboid",
            VolumeInput::Sphere { .. } => "sphere",
            VolumeInput::Hemisphere { .. } => "hemisphere",
            VolumeInput::Cylinder { .. } => "cylinder",
            VolumeInput::Cone { .. } => "cone",
            VolumeInput::Pyramid { .. } => "pyramid",
        }
    }
}

impl Validate for VolumeInput {
    fn validate(&self) -> CalcResult<()> {
        match *self {
            VolumeInput::Cube { side } => require_positive("side", side),
            VolumeInput::Cuboid { length, width, height } => {
                require_positive("length", length)?;
                require_positive("width", width)?;
                require_positive("height", height)
            }
            VolumeInput::Sphere { radius } | VolumeInput::Hemisphere { radius } => {
                require_positive("radius", radius)
            }
            VolumeInput::Cylinder { radius, height } | VolumeInput::Cone { radius, height } => {
                require_positive("radius", radius)?;
                require_positive("height", height)
            }
            VolumeInput::Pyramid { base_length, base_width, height } => {
                require_positive("base_length", base_length)?;
                require_positive("base_width", base_width)?;
                require_positive("height", height)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeResult {
    pub shape: String,
    pub volume: f64,
    pub surface_area: f64,
    pub formula: String,
}

/// Calculate volume and total surface area.
pub fn calculate(input: &VolumeInput) -> CalcResult<VolumeResult> {
    input.validate()?;

    let (volume, surface, formula) = match *input {
        VolumeInput::Cube { side } => (side.powi(3), 6.0 * side * side, "V = a³"),
        VolumeInput::Cuboid { length, width, height } => (
            length * width * height,
            2.0 * (length * width + length * height + width * height),
            "V = l × w × h",
        ),
        VolumeInput::Sphere { radius } => (
            4.0 / 3.0 * PI * radius.powi(3),
            4.0 * PI * radius * radius,
            "V = 4/3 × π × r³",
        ),
        VolumeInput::Hemisphere { radius } => (
            2.0 / 3.0 * PI * radius.powi(3),
            3.0 * PI * radius * radius,
            "V = 2/3 × π × r³",
        ),
        VolumeInput::Cylinder { radius, height } => (
            PI * radius * radius * height,
            2.0 * PI * radius * (radius + height),
            "V = π × r² × h",
        ),
        VolumeInput::Cone { radius, height } => {
            let slant = (radius * radius + height * height).sqrt();
            (
                PI * radius * radius * height / 3.0,
                PI * radius * (radius + slant),
                "V = 1/3 × π × r² × h",
            )
        }
        VolumeInput::Pyramid { base_length, base_width, height } => {
            let slant_l = (height * height + (base_width / 2.0).powi(2)).sqrt();
            let slant_w = (height * height + (base_length / 2.0).powi(2)).sqrt();
            (
                base_length * base_width * height / 3.0,
                base_length * base_width + base_length * slant_l + base_width * slant_w,
                "V = 1/3 × l × w × h",
            )
        }
    };

    Ok(VolumeResult {
        shape: input.shape_name().to_string(),
        volume: round_to(volume, 2),
        surface_area: round_to(surface, 2),
        formula: formula.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube() {
        let result = calculate(&VolumeInput::Cube { side: 3.0 }).unwrap();
        assert_eq!(result.volume, 27.0);
        assert_eq!(result.surface_area, 54.0);
    }

    #[test]
    fn test_sphere() {
        let result = calculate(&VolumeInput::Sphere { radius: 1.0 }).unwrap();
        assert!((result.volume - 4.19).abs() < 0.001);
        assert!((result.surface_area - 12.57).abs() < 0.001);
    }

    #[test]
    fn test_cylinder_and_cone() {
        let cyl = calculate(&VolumeInput::Cylinder { radius: 2.0, height: 5.0 }).unwrap();
        assert!((cyl.volume - 62.83).abs() < 0.001);
        let cone = calculate(&VolumeInput::Cone { radius: 3.0, height: 4.0 }).unwrap();
        assert!((cone.volume - 37.7).abs() < 0.001);
        // slant = 5, surface = π·3·(3+5) = 75.40
        assert!((cone.surface_area - 75.4).abs() < 0.001);
    }

    #[test]
    fn test_square_pyramid() {
        let result = calculate(&VolumeInput::Pyramid { base_length: 6.0, base_width: 6.0, height: 4.0 }).unwrap();
        assert_eq!(result.volume, 48.0);
        // slant height 5 on each face: 36 + 4 × ½ × 6 × 5 = 96
        assert_eq!(result.surface_area, 96.0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(calculate(&VolumeInput::Cuboid { length: 1.0, width: 0.0, height: 2.0 }).is_err());
        assert!(calculate(&VolumeInput::Cone { radius: -1.0, height: 2.0 }).is_err());
    }
}

//! # Unit Types
//!
//! Type-safe wrappers for the body-measurement units used by the health
//! calculators. They are plain `f64` newtypes, so JSON stays clean (just
//! numbers), and conversions are explicit `From` impls.
//!
//! Calculators work in metric internally (kg, cm). Imperial inputs are
//! converted at the edge through [`UnitSystem`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Centimeters, Inches, Kilograms, Pounds};
//!
//! let height: Centimeters = Inches(70.0).into();
//! assert!((height.0 - 177.8).abs() < 1e-9);
//!
//! let weight: Kilograms = Pounds(154.0).into();
//! assert!((weight.0 - 69.853).abs() < 0.001);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Kilograms per avoirdupois pound
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;

// ============================================================================
// Measurement System
// ============================================================================

/// Measurement system used for body inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    /// Convert a weight in this system to kilograms
    pub fn weight_to_kg(self, value: f64) -> Kilograms {
        match self {
            UnitSystem::Metric => Kilograms(value),
            UnitSystem::Imperial => Pounds(value).into(),
        }
    }

    /// Convert a length in this system to centimeters
    pub fn length_to_cm(self, value: f64) -> Centimeters {
        match self {
            UnitSystem::Metric => Centimeters(value),
            UnitSystem::Imperial => Inches(value).into(),
        }
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 * KG_PER_LB)
    }
}

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 / KG_PER_LB)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * CM_PER_IN)
    }
}

impl From<Centimeters> for Inches {
    fn from(cm: Centimeters) -> Self {
        Inches(cm.0 / CM_PER_IN)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Kilograms);
impl_arithmetic!(Pounds);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Inches);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_centimeters() {
        let cm: Centimeters = Inches(10.0).into();
        assert!((cm.0 - 25.4).abs() < 1e-12);
    }

    #[test]
    fn test_pounds_roundtrip() {
        let kg: Kilograms = Pounds(200.0).into();
        let lb: Pounds = kg.into();
        assert!((lb.0 - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_system_conversion() {
        assert_eq!(UnitSystem::Metric.weight_to_kg(70.0), Kilograms(70.0));
        let cm = UnitSystem::Imperial.length_to_cm(60.0);
        assert!((cm.0 - 152.4).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Centimeters(180.0);
        let b = Centimeters(20.0);
        assert_eq!((a - b).0, 160.0);
        assert_eq!((a / 2.0).0, 90.0);
        let m: Meters = a.into();
        assert_eq!(m.value(), 1.8);
    }

    #[test]
    fn test_serialization() {
        let kg = Kilograms(72.5);
        assert_eq!(serde_json::to_string(&kg).unwrap(), "72.5");
        let system: UnitSystem = serde_json::from_str("\"imperial\"").unwrap();
        assert_eq!(system, UnitSystem::Imperial);
    }
}

//! # Unit Converters
//!
//! All converters share one input shape:
//!
//! ```json
//! { "value": 1000, "from_unit": "liters", "to_unit": "m3" }
//! ```
//!
//! Unit names are parsed case-insensitively; an unknown name yields
//! `UNKNOWN_VALUE` listing the accepted keys. Linear quantities convert
//! through a base-unit factor; temperature converts through Kelvin.
//!
//! ```rust
//! use calc_core::calculations::converters::{volume, ConversionInput};
//!
//! let result = volume::convert(&ConversionInput::new(1000.0, "liters", "m3")).unwrap();
//! assert_eq!(result.value, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{require_finite, require_non_negative, round_significant};

/// Significant digits kept in converter output
pub const SIGNIFICANT_DIGITS: u32 = 10;

/// A named unit with a stable JSON key.
pub trait Unit: Sized + Copy + 'static {
    /// Every unit of this quantity
    fn all() -> &'static [Self];

    /// Key used in JSON and URLs (e.g. `"km"`, `"liters"`)
    fn key(self) -> &'static str;

    /// Parse a key case-insensitively
    fn from_key(field: &str, key: &str) -> CalcResult<Self> {
        let wanted = key.trim();
        Self::all()
            .iter()
            .copied()
            .find(|u| u.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let expected: Vec<&str> = Self::all().iter().map(|u| u.key()).collect();
                CalcError::unknown_value(field, key, &expected)
            })
    }
}

/// A unit related to its quantity's base unit by a constant factor.
pub trait LinearUnit: Unit {
    /// How many base units one of this unit is
    fn factor(self) -> f64;
}

/// Generates a unit enum plus its `Unit`/`LinearUnit` impls from
/// `Variant => ("key", factor)` rows.
macro_rules! linear_units {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($key:literal, $factor:expr)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $crate::calculations::converters::Unit for $name {
            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl $crate::calculations::converters::LinearUnit for $name {
            fn factor(self) -> f64 {
                match self {
                    $($name::$variant => $factor),+
                }
            }
        }
    };
}

pub mod area;
pub mod data_storage;
pub mod energy;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;

/// Input shared by every converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionInput {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionInput {
    pub fn new(value: f64, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        ConversionInput {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted value, rounded to 10 significant digits
    pub value: f64,
    pub input_value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub formula: String,
}

/// Convert between two units of a linear quantity.
pub fn convert_linear<U: LinearUnit>(input: &ConversionInput) -> CalcResult<ConversionResult> {
    require_non_negative("value", input.value)?;
    let from = U::from_key("from_unit", &input.from_unit)?;
    let to = U::from_key("to_unit", &input.to_unit)?;

    let ratio = from.factor() / to.factor();
    let value = input.value * ratio;
    require_finite("value", value)?;

    Ok(ConversionResult {
        value: round_significant(value, SIGNIFICANT_DIGITS),
        input_value: input.value,
        from_unit: from.key().to_string(),
        to_unit: to.key().to_string(),
        formula: format!(
            "{} = {} × {}",
            to.key(),
            from.key(),
            round_significant(ratio, SIGNIFICANT_DIGITS)
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::length::LengthUnit;

    #[test]
    fn test_unknown_unit_lists_keys() {
        let err = LengthUnit::from_key("to_unit", "furlong").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_VALUE");
        assert!(err.to_string().contains("km"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        assert_eq!(LengthUnit::from_key("from_unit", "KM").unwrap(), LengthUnit::Kilometer);
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = convert_linear::<LengthUnit>(&ConversionInput::new(-1.0, "m", "cm")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_formula_mentions_ratio() {
        let result = convert_linear::<LengthUnit>(&ConversionInput::new(2.0, "km", "m")).unwrap();
        assert_eq!(result.value, 2000.0);
        assert_eq!(result.formula, "m = km × 1000");
    }
}

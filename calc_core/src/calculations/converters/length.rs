//! # Length Converter
//!
//! Base unit: meter.

use crate::errors::CalcResult;

use super::{convert_linear, ConversionInput, ConversionResult};

linear_units! {
    /// Length units
    LengthUnit {
        Millimeter => ("mm", 0.001),
        Centimeter => ("cm", 0.01),
        Meter => ("m", 1.0),
        Kilometer => ("km", 1000.0),
        Inch => ("in", 0.0254),
        Foot => ("ft", 0.3048),
        Yard => ("yd", 0.9144),
        Mile => ("mi", 1609.344),
        NauticalMile => ("nmi", 1852.0),
    }
}

pub fn convert(input: &ConversionInput) -> CalcResult<ConversionResult> {
    convert_linear::<LengthUnit>(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mile_to_km() {
        let result = convert(&ConversionInput::new(1.0, "mi", "km")).unwrap();
        assert_eq!(result.value, 1.609344);
    }

    #[test]
    fn test_feet_to_inches() {
        let result = convert(&ConversionInput::new(3.0, "ft", "in")).unwrap();
        assert_eq!(result.value, 36.0);
    }

    #[test]
    fn test_round_trip() {
        let there = convert(&ConversionInput::new(123.456, "yd", "cm")).unwrap();
        let back = convert(&ConversionInput::new(there.value, "cm", "yd")).unwrap();
        assert!((back.value - 123.456).abs() < 1e-6);
    }
}

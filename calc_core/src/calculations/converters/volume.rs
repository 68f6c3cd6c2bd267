//! # Volume Converter
//!
//! Base unit: liter. US customary units use the US liquid definitions.

use crate::errors::CalcResult;

use super::{convert_linear, ConversionInput, ConversionResult};

linear_units! {
    /// Volume units
    VolumeUnit {
        Milliliter => ("milliliters", 0.001),
        Liter => ("liters", 1.0),
        CubicMeter => ("m3", 1000.0),
        CubicCentimeter => ("cm3", 0.001),
        GallonUs => ("gallons_us", 3.785_411_784),
        GallonUk => ("gallons_uk", 4.546_09),
        QuartUs => ("quarts_us", 0.946_352_946),
        PintUs => ("pints_us", 0.473_176_473),
        CupUs => ("cups_us", 0.236_588_236_5),
        FluidOunceUs => ("fluid_ounces_us", 0.029_573_529_562_5),
        CubicFoot => ("cubic_feet", 28.316_846_592),
        CubicInch => ("cubic_inches", 0.016_387_064),
    }
}

pub fn convert(input: &ConversionInput) -> CalcResult<ConversionResult> {
    convert_linear::<VolumeUnit>(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liters_to_cubic_meters() {
        let result = convert(&ConversionInput::new(1000.0, "liters", "m3")).unwrap();
        assert_eq!(result.value, 1.0);
    }

    #[test]
    fn test_gallon_to_liters() {
        let result = convert(&ConversionInput::new(1.0, "gallons_us", "liters")).unwrap();
        assert_eq!(result.value, 3.785411784);
    }

    #[test]
    fn test_round_trip() {
        for (a, b) in [("liters", "cups_us"), ("m3", "cubic_feet"), ("gallons_uk", "milliliters")] {
            let there = convert(&ConversionInput::new(7.25, a, b)).unwrap();
            let back = convert(&ConversionInput::new(there.value, b, a)).unwrap();
            assert!((back.value - 7.25).abs() < 1e-6, "{} -> {} -> {}", a, b, a);
        }
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert(&ConversionInput::new(1.0, "liters", "barrels")).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_VALUE");
    }
}

//! # Area Unit Converter
//!
//! Base unit: square meter.

use crate::errors::CalcResult;

use super::{convert_linear, ConversionInput, ConversionResult};

linear_units! {
    /// Area units
    AreaUnit {
        SquareMillimeter => ("mm2", 0.000_001),
        SquareCentimeter => ("cm2", 0.0001),
        SquareMeter => ("m2", 1.0),
        SquareKilometer => ("km2", 1_000_000.0),
        Are => ("ares", 100.0),
        Hectare => ("hectares", 10_000.0),
        Acre => ("acres", 4_046.856_422_4),
        SquareInch => ("sq_in", 0.000_645_16),
        SquareFoot => ("sq_ft", 0.092_903_04),
        SquareYard => ("sq_yd", 0.836_127_36),
        SquareMile => ("sq_mi", 2_589_988.110_336),
    }
}

pub fn convert(input: &ConversionInput) -> CalcResult<ConversionResult> {
    convert_linear::<AreaUnit>(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hectare_to_square_meters() {
        let result = convert(&ConversionInput::new(2.5, "hectares", "m2")).unwrap();
        assert_eq!(result.value, 25_000.0);
    }

    #[test]
    fn test_square_mile_to_acres() {
        let result = convert(&ConversionInput::new(1.0, "sq_mi", "acres")).unwrap();
        assert!((result.value - 640.0).abs() < 1e-6);
    }
}

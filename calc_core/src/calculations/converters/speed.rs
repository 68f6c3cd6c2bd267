//! # Speed Converter
//!
//! Base unit: meter per second.

use crate::errors::CalcResult;

use super::{convert_linear, ConversionInput, ConversionResult};

linear_units! {
    /// Speed units
    SpeedUnit {
        MeterPerSecond => ("m_s", 1.0),
        KilometerPerHour => ("km_h", 1.0 / 3.6),
        MilePerHour => ("mph", 0.447_04),
        Knot => ("knots", 1852.0 / 3600.0),
        FootPerSecond => ("ft_s", 0.3048),
    }
}

pub fn convert(input: &ConversionInput) -> CalcResult<ConversionResult> {
    convert_linear::<SpeedUnit>(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kmh_to_ms() {
        let result = convert(&ConversionInput::new(36.0, "km_h", "m_s")).unwrap();
        assert_eq!(result.value, 10.0);
    }

    #[test]
    fn test_mph_to_kmh() {
        let result = convert(&ConversionInput::new(60.0, "mph", "km_h")).unwrap();
        assert!((result.value - 96.56064).abs() < 1e-6);
    }
}

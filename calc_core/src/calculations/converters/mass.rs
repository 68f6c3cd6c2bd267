//! # Mass Converter
//!
//! Base unit: kilogram.

use crate::errors::CalcResult;

use super::{convert_linear, ConversionInput, ConversionResult};

linear_units! {
    /// Mass units
    MassUnit {
        Milligram => ("mg", 0.000_001),
        Gram => ("g", 0.001),
        Kilogram => ("kg", 1.0),
        Tonne => ("t", 1000.0),
        Ounce => ("oz", 0.028_349_523_125),
        Pound => ("lb", 0.453_592_37),
        Stone => ("st", 6.350_293_18),
        Carat => ("ct", 0.0002),
    }
}

pub fn convert(input: &ConversionInput) -> CalcResult<ConversionResult> {
    convert_linear::<MassUnit>(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kg_to_lb() {
        let result = convert(&ConversionInput::new(1.0, "kg", "lb")).unwrap();
        assert!((result.value - 2.204622622).abs() < 1e-9);
    }

    #[test]
    fn test_pound_is_sixteen_ounces() {
        let result = convert(&ConversionInput::new(1.0, "lb", "oz")).unwrap();
        assert_eq!(result.value, 16.0);
    }

    #[test]
    fn test_round_trip() {
        let there = convert(&ConversionInput::new(72.5, "kg", "st")).unwrap();
        let back = convert(&ConversionInput::new(there.value, "st", "kg")).unwrap();
        assert!((back.value - 72.5).abs() < 1e-6);
    }
}

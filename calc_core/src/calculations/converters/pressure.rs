//! # Pressure Converter
//!
//! Base unit: pascal.

use crate::errors::CalcResult;

use super::{convert_linear, ConversionInput, ConversionResult};

linear_units! {
    /// Pressure units
    PressureUnit {
        Pascal => ("pa", 1.0),
        Kilopascal => ("kpa", 1000.0),
        Megapascal => ("mpa", 1_000_000.0),
        Bar => ("bar", 100_000.0),
        Atmosphere => ("atm", 101_325.0),
        Psi => ("psi", 6_894.757_293_168),
        MillimeterMercury => ("mmhg", 133.322_387_415),
        Torr => ("torr", 101_325.0 / 760.0),
    }
}

pub fn convert(input: &ConversionInput) -> CalcResult<ConversionResult> {
    convert_linear::<PressureUnit>(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atm_to_kpa() {
        let result = convert(&ConversionInput::new(1.0, "atm", "kpa")).unwrap();
        assert_eq!(result.value, 101.325);
    }

    #[test]
    fn test_atm_is_760_torr() {
        let result = convert(&ConversionInput::new(1.0, "atm", "torr")).unwrap();
        assert_eq!(result.value, 760.0);
    }
}

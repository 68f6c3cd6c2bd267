//! # Energy Converter
//!
//! Base unit: joule. `cal`/`kcal` are thermochemical calories.

use crate::errors::CalcResult;

use super::{convert_linear, ConversionInput, ConversionResult};

linear_units! {
    /// Energy units
    EnergyUnit {
        Joule => ("j", 1.0),
        Kilojoule => ("kj", 1000.0),
        Calorie => ("cal", 4.184),
        Kilocalorie => ("kcal", 4184.0),
        WattHour => ("wh", 3600.0),
        KilowattHour => ("kwh", 3_600_000.0),
        Btu => ("btu", 1_055.055_852_62),
        Electronvolt => ("ev", 1.602_176_634e-19),
    }
}

pub fn convert(input: &ConversionInput) -> CalcResult<ConversionResult> {
    convert_linear::<EnergyUnit>(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kwh_to_kj() {
        let result = convert(&ConversionInput::new(1.0, "kwh", "kj")).unwrap();
        assert_eq!(result.value, 3600.0);
    }

    #[test]
    fn test_kcal_to_kj() {
        let result = convert(&ConversionInput::new(100.0, "kcal", "kj")).unwrap();
        assert_eq!(result.value, 418.4);
    }
}

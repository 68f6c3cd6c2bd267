//! # Data Storage Converter
//!
//! Base unit: byte. Decimal (KB, MB…) and binary (KiB, MiB…) prefixes are
//! distinct units.

use crate::errors::CalcResult;

use super::{convert_linear, ConversionInput, ConversionResult};

linear_units! {
    /// Data storage units
    DataUnit {
        Bit => ("bit", 0.125),
        Byte => ("B", 1.0),
        Kilobyte => ("KB", 1e3),
        Megabyte => ("MB", 1e6),
        Gigabyte => ("GB", 1e9),
        Terabyte => ("TB", 1e12),
        Kibibyte => ("KiB", 1024.0),
        Mebibyte => ("MiB", 1_048_576.0),
        Gibibyte => ("GiB", 1_073_741_824.0),
        Tebibyte => ("TiB", 1_099_511_627_776.0),
    }
}

pub fn convert(input: &ConversionInput) -> CalcResult<ConversionResult> {
    convert_linear::<DataUnit>(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gib_to_mib() {
        let result = convert(&ConversionInput::new(1.0, "GiB", "MiB")).unwrap();
        assert_eq!(result.value, 1024.0);
    }

    #[test]
    fn test_bytes_to_bits() {
        let result = convert(&ConversionInput::new(3.0, "B", "bit")).unwrap();
        assert_eq!(result.value, 24.0);
    }

    #[test]
    fn test_decimal_vs_binary() {
        let result = convert(&ConversionInput::new(1.0, "GB", "GiB")).unwrap();
        assert!((result.value - 0.9313225746).abs() < 1e-10);
    }
}

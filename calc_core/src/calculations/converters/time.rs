//! # Time Converter
//!
//! Base unit: second. A month is the mean Gregorian month (30.436875 days)
//! and a year the mean Gregorian year (365.2425 days).

use crate::errors::CalcResult;

use super::{convert_linear, ConversionInput, ConversionResult};

linear_units! {
    /// Time units
    TimeUnit {
        Millisecond => ("ms", 0.001),
        Second => ("s", 1.0),
        Minute => ("min", 60.0),
        Hour => ("h", 3600.0),
        Day => ("day", 86_400.0),
        Week => ("week", 604_800.0),
        Month => ("month", 2_629_746.0),
        Year => ("year", 31_556_952.0),
    }
}

pub fn convert(input: &ConversionInput) -> CalcResult<ConversionResult> {
    convert_linear::<TimeUnit>(input)
}

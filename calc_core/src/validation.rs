//! # Input Validation and Rounding
//!
//! Shared range/sign checks used by every calculator's `validate()` and the
//! rounding helpers applied to results.
//!
//! ```rust
//! use calc_core::validation::{require_positive, round_to};
//!
//! assert!(require_positive("radius", 2.0).is_ok());
//! assert!(require_positive("radius", 0.0).is_err());
//! assert_eq!(round_to(78.539816, 2), 78.54);
//! ```

use std::fmt;

use serde::ser::{self, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Implemented by every calculator input.
pub trait Validate {
    /// Check static range and sign rules for the input.
    fn validate(&self) -> CalcResult<()>;
}

/// Reject NaN and infinities
pub fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    Ok(())
}

/// Require a strictly positive, finite value
pub fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be greater than zero",
        ));
    }
    Ok(())
}

/// Require a finite value that is zero or greater
pub fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value cannot be negative",
        ));
    }
    Ok(())
}

/// Require `min <= value <= max`
pub fn require_range(field: &str, value: f64, min: f64, max: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < min || value > max {
        return Err(CalcError::out_of_range(field, value, min, max));
    }
    Ok(())
}

/// Require a non-zero, finite denominator
pub fn require_non_zero(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value == 0.0 {
        return Err(CalcError::division_by_zero(field));
    }
    Ok(())
}

/// Round to a fixed number of decimal places (half away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // normalise -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round to a number of significant digits.
///
/// Used by the unit converters, whose outputs span many orders of magnitude.
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = digits as i32 - 1 - magnitude;
    // 10^decimals overflows f64 past this point
    if decimals > 300 {
        return value;
    }
    if decimals >= 0 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-decimals);
        (value / factor).round() * factor
    }
}

// ============================================================================
// Result finiteness
// ============================================================================

/// Reject a result containing NaN or an infinity anywhere in its fields.
///
/// Inputs that pass validation can still overflow (a huge radius squared,
/// a sum of values near `f64::MAX`), and JSON would silently turn those
/// numbers into `null`. The error names the dotted path of the first
/// offending field.
pub fn ensure_finite<T: Serialize + ?Sized>(result: &T) -> CalcResult<()> {
    let mut check = FiniteCheck::default();
    match result.serialize(&mut check) {
        Ok(()) => Ok(()),
        Err(CheckError::NonFinite { field, value }) => Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Result is too large to represent",
        )),
        Err(CheckError::Custom(message)) => Err(CalcError::internal(message)),
    }
}

#[derive(Default)]
struct FiniteCheck {
    /// Dotted path of the field being visited
    path: String,
}

impl FiniteCheck {
    fn visit_field<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), CheckError> {
        let parent_len = self.path.len();
        if !self.path.is_empty() {
            self.path.push('.');
        }
        self.path.push_str(key);
        value.serialize(&mut *self)?;
        self.path.truncate(parent_len);
        Ok(())
    }
}

#[derive(Debug)]
enum CheckError {
    NonFinite { field: String, value: f64 },
    Custom(String),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::NonFinite { field, value } => write!(f, "{} is {}", field, value),
            CheckError::Custom(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for CheckError {}

impl ser::Error for CheckError {
    fn custom<M: fmt::Display>(msg: M) -> Self {
        CheckError::Custom(msg.to_string())
    }
}

impl<'a> ser::Serializer for &'a mut FiniteCheck {
    type Ok = ();
    type Error = CheckError;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_f64(self, v: f64) -> Result<(), CheckError> {
        if v.is_finite() {
            Ok(())
        } else {
            let field = if self.path.is_empty() { "result".to_string() } else { self.path.clone() };
            Err(CheckError::NonFinite { field, value: v })
        }
    }

    fn serialize_f32(self, v: f32) -> Result<(), CheckError> {
        self.serialize_f64(v as f64)
    }

    fn serialize_bool(self, _: bool) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_i8(self, _: i8) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_i16(self, _: i16) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_i32(self, _: i32) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_i64(self, _: i64) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_u8(self, _: u8) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_u16(self, _: u16) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_u32(self, _: u32) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_u64(self, _: u64) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_char(self, _: char) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_str(self, _: &str) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_bytes(self, _: &[u8]) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_none(self) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), CheckError> {
        value.serialize(self)
    }
    fn serialize_unit(self) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_unit_struct(self, _: &'static str) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _: &'static str, value: &T) -> Result<(), CheckError> {
        value.serialize(self)
    }
    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> Result<(), CheckError> {
        value.serialize(self)
    }
    fn serialize_seq(self, _: Option<usize>) -> Result<Self, CheckError> {
        Ok(self)
    }
    fn serialize_tuple(self, _: usize) -> Result<Self, CheckError> {
        Ok(self)
    }
    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Self, CheckError> {
        Ok(self)
    }
    fn serialize_tuple_variant(self, _: &'static str, _: u32, _: &'static str, _: usize) -> Result<Self, CheckError> {
        Ok(self)
    }
    fn serialize_map(self, _: Option<usize>) -> Result<Self, CheckError> {
        Ok(self)
    }
    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self, CheckError> {
        Ok(self)
    }
    fn serialize_struct_variant(self, _: &'static str, _: u32, _: &'static str, _: usize) -> Result<Self, CheckError> {
        Ok(self)
    }
}

impl<'a> ser::SerializeSeq for &'a mut FiniteCheck {
    type Ok = ();
    type Error = CheckError;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CheckError> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for &'a mut FiniteCheck {
    type Ok = ();
    type Error = CheckError;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CheckError> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleStruct for &'a mut FiniteCheck {
    type Ok = ();
    type Error = CheckError;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CheckError> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleVariant for &'a mut FiniteCheck {
    type Ok = ();
    type Error = CheckError;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CheckError> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl<'a> ser::SerializeMap for &'a mut FiniteCheck {
    type Ok = ();
    type Error = CheckError;
    fn serialize_key<T: Serialize + ?Sized>(&mut self, _: &T) -> Result<(), CheckError> {
        Ok(())
    }
    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CheckError> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl<'a> ser::SerializeStruct for &'a mut FiniteCheck {
    type Ok = ();
    type Error = CheckError;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<(), CheckError> {
        self.visit_field(key, value)
    }
    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl<'a> ser::SerializeStructVariant for &'a mut FiniteCheck {
    type Ok = ();
    type Error = CheckError;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<(), CheckError> {
        self.visit_field(key, value)
    }
    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert!(require_positive("side", 0.1).is_ok());
        assert!(require_positive("side", 0.0).is_err());
        assert!(require_positive("side", -3.0).is_err());
        assert!(require_positive("side", f64::NAN).is_err());
    }

    #[test]
    fn test_require_range() {
        assert!(require_range("age", 30.0, 10.0, 100.0).is_ok());
        let err = require_range("age", 5.0, 10.0, 100.0).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_require_non_zero() {
        let err = require_non_zero("whole", 0.0).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero("whole"));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(22.857142, 1), 22.9);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-0.0001, 2), 0.0);
    }

    #[test]
    fn test_round_significant() {
        assert_eq!(round_significant(0.1 + 0.2, 10), 0.3);
        assert_eq!(round_significant(1234567.891, 3), 1230000.0);
        assert_eq!(round_significant(0.0, 5), 0.0);
    }

    #[test]
    fn test_round_significant_tiny_values() {
        assert_eq!(round_significant(1e-303, 10), 1e-303);
        assert_eq!(round_significant(-2.5e-310, 10), -2.5e-310);
        assert!(round_significant(1.234e-290, 3).is_finite());
    }

    #[derive(serde::Serialize)]
    struct Roots {
        values: Vec<f64>,
    }

    #[derive(serde::Serialize)]
    struct Solution {
        count: usize,
        label: Option<String>,
        roots: Roots,
    }

    #[test]
    fn test_ensure_finite() {
        let ok = Solution { count: 2, label: None, roots: Roots { values: vec![1.0, 2.0] } };
        assert!(ensure_finite(&ok).is_ok());

        let bad = Solution { count: 2, label: None, roots: Roots { values: vec![1.0, f64::INFINITY] } };
        let err = ensure_finite(&bad).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("roots.values"));

        let err = ensure_finite(&f64::NAN).unwrap_err();
        assert_eq!(err.field(), Some("result"));
    }
}

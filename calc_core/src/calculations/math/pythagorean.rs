//! # Pythagorean Theorem
//!
//! Right triangle with legs `a`, `b` and hypotenuse `c`; any two known sides
//! give the third.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{require_positive, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PythagoreanInput {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
}

impl Validate for PythagoreanInput {
    fn validate(&self) -> CalcResult<()> {
        let known: Vec<(&str, f64)> = [("a", self.a), ("b", self.b), ("c", self.c)]
            .into_iter()
            .filter_map(|(field, v)| v.map(|v| (field, v)))
            .collect();
        if known.len() != 2 {
            return Err(CalcError::invalid_input(
                "sides",
                known.len().to_string(),
                "Exactly two sides must be given",
            ));
        }
        for (field, value) in known {
            require_positive(field, value)?;
        }
        if let (Some(c), Some(leg)) = (self.c, self.a.or(self.b)) {
            if c <= leg {
                return Err(CalcError::invalid_input(
                    "c",
                    c.to_string(),
                    "Hypotenuse must be longer than either leg",
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PythagoreanResult {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub area: f64,
    pub perimeter: f64,
    pub formula: String,
}

pub fn calculate(input: &PythagoreanInput) -> CalcResult<PythagoreanResult> {
    input.validate()?;

    let (a, b, c) = match (input.a, input.b, input.c) {
        (Some(a), Some(b), None) => (a, b, (a * a + b * b).sqrt()),
        (Some(a), None, Some(c)) => (a, (c * c - a * a).sqrt(), c),
        (None, Some(b), Some(c)) => ((c * c - b * b).sqrt(), b, c),
        _ => return Err(CalcError::internal("validated side combination not handled")),
    };

    Ok(PythagoreanResult {
        a: round_to(a, 4),
        b: round_to(b, 4),
        c: round_to(c, 4),
        area: round_to(a * b / 2.0, 4),
        perimeter: round_to(a + b + c, 4),
        formula: "a² + b² = c²".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypotenuse() {
        let r = calculate(&PythagoreanInput { a: Some(3.0), b: Some(4.0), c: None }).unwrap();
        assert_eq!(r.c, 5.0);
        assert_eq!(r.area, 6.0);
        assert_eq!(r.perimeter, 12.0);
    }

    #[test]
    fn test_leg() {
        let r = calculate(&PythagoreanInput { a: None, b: Some(12.0), c: Some(13.0) }).unwrap();
        assert_eq!(r.a, 5.0);
    }

    #[test]
    fn test_invalid_combinations() {
        assert!(calculate(&PythagoreanInput { a: Some(3.0), b: None, c: None }).is_err());
        assert!(calculate(&PythagoreanInput { a: Some(5.0), b: None, c: Some(4.0) }).is_err());
    }
}

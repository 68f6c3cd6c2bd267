//! # Equation Solver
//!
//! - Linear: `a·x + b = 0`
//! - Quadratic: `a·x² + b·x + c = 0` (real or complex-conjugate roots)
//! - System of two linear equations by Cramer's rule:
//!   `a1·x + b1·y = c1`, `a2·x + b2·y = c2`
//!
//! ```rust
//! use calc_core::calculations::math::equations::{solve, EquationInput, Roots};
//!
//! let result = solve(&EquationInput::Quadratic { a: 1.0, b: -3.0, c: 2.0 }).unwrap();
//! assert_eq!(result.roots, Roots::Real(vec![1.0, 2.0]));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{require_finite, round_to, Validate};

/// Coefficients smaller than this are treated as zero
const EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EquationInput {
    Linear { a: f64, b: f64 },
    Quadratic { a: f64, b: f64, c: f64 },
    System { a1: f64, b1: f64, c1: f64, a2: f64, b2: f64, c2: f64 },
}

impl Validate for EquationInput {
    fn validate(&self) -> CalcResult<()> {
        let coefficients: Vec<(&str, f64)> = match *self {
            EquationInput::Linear { a, b } => vec![("a", a), ("b", b)],
            EquationInput::Quadratic { a, b, c } => vec![("a", a), ("b", b), ("c", c)],
            EquationInput::System { a1, b1, c1, a2, b2, c2 } => vec![
                ("a1", a1),
                ("b1", b1),
                ("c1", c1),
                ("a2", a2),
                ("b2", b2),
                ("c2", c2),
            ],
        };
        for (field, value) in coefficients {
            require_finite(field, value)?;
        }
        Ok(())
    }
}

/// A complex number `re ± im·i`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum Roots {
    /// Real roots in ascending order (a double root appears once)
    Real(Vec<f64>),
    /// Conjugate pair `re ± im·i`
    Complex(Complex),
    /// Every x satisfies the equation (0 = 0)
    Infinite,
    /// Solution of a 2×2 system
    Point { x: f64, y: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationResult {
    pub roots: Roots,
    /// Discriminant for quadratics, determinant for systems
    pub discriminant: Option<f64>,
    pub formula: String,
}

pub fn solve(input: &EquationInput) -> CalcResult<EquationResult> {
    input.validate()?;

    match *input {
        EquationInput::Linear { a, b } => solve_linear(a, b),
        EquationInput::Quadratic { a, b, c } => {
            if a.abs() < EPSILON {
                return solve_linear(b, c);
            }
            let d = b * b - 4.0 * a * c;
            let roots = if d.abs() < EPSILON {
                Roots::Real(vec![round_to(-b / (2.0 * a), 6)])
            } else if d > 0.0 {
                let sqrt_d = d.sqrt();
                let x1 = (-b - sqrt_d) / (2.0 * a);
                let x2 = (-b + sqrt_d) / (2.0 * a);
                let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
                Roots::Real(vec![round_to(lo, 6), round_to(hi, 6)])
            } else {
                Roots::Complex(Complex {
                    re: round_to(-b / (2.0 * a), 6),
                    im: round_to((-d).sqrt() / (2.0 * a).abs(), 6),
                })
            };
            Ok(EquationResult {
                roots,
                discriminant: Some(round_to(d, 6)),
                formula: "x = (−b ± √(b² − 4ac)) / 2a".to_string(),
            })
        }
        EquationInput::System { a1, b1, c1, a2, b2, c2 } => {
            let det = a1 * b2 - a2 * b1;
            if det.abs() < EPSILON {
                return Err(CalcError::no_solution(
                    "Determinant is zero: the system has no unique solution",
                ));
            }
            let x = (c1 * b2 - c2 * b1) / det;
            let y = (a1 * c2 - a2 * c1) / det;
            Ok(EquationResult {
                roots: Roots::Point {
                    x: round_to(x, 6),
                    y: round_to(y, 6),
                },
                discriminant: Some(round_to(det, 6)),
                formula: "x = Dx / D, y = Dy / D".to_string(),
            })
        }
    }
}

fn solve_linear(a: f64, b: f64) -> CalcResult<EquationResult> {
    if a.abs() < EPSILON {
        if b.abs() < EPSILON {
            return Ok(EquationResult {
                roots: Roots::Infinite,
                discriminant: None,
                formula: "0 = 0".to_string(),
            });
        }
        return Err(CalcError::no_solution(format!("{} = 0 is never true", b)));
    }
    Ok(EquationResult {
        roots: Roots::Real(vec![round_to(-b / a, 6)]),
        discriminant: None,
        formula: "x = −b / a".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        let result = solve(&EquationInput::Linear { a: 2.0, b: -8.0 }).unwrap();
        assert_eq!(result.roots, Roots::Real(vec![4.0]));
    }

    #[test]
    fn test_linear_degenerate() {
        let all = solve(&EquationInput::Linear { a: 0.0, b: 0.0 }).unwrap();
        assert_eq!(all.roots, Roots::Infinite);
        let err = solve(&EquationInput::Linear { a: 0.0, b: 3.0 }).unwrap_err();
        assert_eq!(err.error_code(), "NO_SOLUTION");
    }

    #[test]
    fn test_quadratic_real_roots() {
        let result = solve(&EquationInput::Quadratic { a: 1.0, b: -3.0, c: 2.0 }).unwrap();
        assert_eq!(result.roots, Roots::Real(vec![1.0, 2.0]));
        assert_eq!(result.discriminant, Some(1.0));
    }

    #[test]
    fn test_quadratic_double_root() {
        let result = solve(&EquationInput::Quadratic { a: 1.0, b: 2.0, c: 1.0 }).unwrap();
        assert_eq!(result.roots, Roots::Real(vec![-1.0]));
    }

    #[test]
    fn test_quadratic_complex_roots() {
        let result = solve(&EquationInput::Quadratic { a: 1.0, b: 2.0, c: 5.0 }).unwrap();
        assert_eq!(result.roots, Roots::Complex(Complex { re: -1.0, im: 2.0 }));
        assert_eq!(result.discriminant, Some(-16.0));
    }

    #[test]
    fn test_quadratic_falls_back_to_linear() {
        let result = solve(&EquationInput::Quadratic { a: 0.0, b: 2.0, c: -4.0 }).unwrap();
        assert_eq!(result.roots, Roots::Real(vec![2.0]));
    }

    #[test]
    fn test_system() {
        // x + y = 3, x − y = 1 → (2, 1)
        let result = solve(&EquationInput::System { a1: 1.0, b1: 1.0, c1: 3.0, a2: 1.0, b2: -1.0, c2: 1.0 }).unwrap();
        assert_eq!(result.roots, Roots::Point { x: 2.0, y: 1.0 });
    }

    #[test]
    fn test_parallel_system() {
        let err = solve(&EquationInput::System { a1: 1.0, b1: 2.0, c1: 3.0, a2: 2.0, b2: 4.0, c2: 7.0 }).unwrap_err();
        assert_eq!(err.error_code(), "NO_SOLUTION");
    }
}

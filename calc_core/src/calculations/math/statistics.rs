//! # Descriptive Statistics
//!
//! Single-pass summary of a list of numbers: count, sum, extremes, mean,
//! median, modes, and population/sample variance.
//!
//! ```rust
//! use calc_core::calculations::math::statistics::calculate_statistics;
//!
//! let stats = calculate_statistics(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! assert_eq!(stats.variance, 2.0);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{require_finite, round_to, Validate};

/// Upper bound on the number of values accepted in one request
pub const MAX_VALUES: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsInput {
    pub values: Vec<f64>,
}

impl Validate for StatisticsInput {
    fn validate(&self) -> CalcResult<()> {
        if self.values.is_empty() {
            return Err(CalcError::missing_field("values"));
        }
        if self.values.len() > MAX_VALUES {
            return Err(CalcError::out_of_range(
                "values",
                self.values.len() as f64,
                1.0,
                MAX_VALUES as f64,
            ));
        }
        for value in &self.values {
            require_finite("values", *value)?;
        }
        Ok(())
    }
}

/// Statistics summary. Floating values are rounded to 4 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub mean: f64,
    pub median: f64,
    /// Most frequent values; empty when every value occurs once
    pub modes: Vec<f64>,
    /// Population variance (divide by n)
    pub variance: f64,
    /// Population standard deviation
    pub standard_deviation: f64,
    /// Sample variance (divide by n − 1), absent for a single value
    pub sample_variance: Option<f64>,
    pub sample_standard_deviation: Option<f64>,
    pub formula: String,
}

pub fn calculate(input: &StatisticsInput) -> CalcResult<StatisticsResult> {
    input.validate()?;

    let values = &input.values;
    let n = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / n as f64;

    let mut sorted = values.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let min = sorted[0];
    let max = sorted[n - 1];
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    };

    let squared_deviations: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    let variance = squared_deviations / n as f64;
    let sample_variance = (n > 1).then(|| squared_deviations / (n - 1) as f64);

    Ok(StatisticsResult {
        count: n,
        sum: round_to(sum, 4),
        min,
        max,
        range: round_to(max - min, 4),
        mean: round_to(mean, 4),
        median: round_to(median, 4),
        modes: modes(&sorted),
        variance: round_to(variance, 4),
        standard_deviation: round_to(variance.sqrt(), 4),
        sample_variance: sample_variance.map(|v| round_to(v, 4)),
        sample_standard_deviation: sample_variance.map(|v| round_to(v.sqrt(), 4)),
        formula: "x̄ = Σx / n, σ² = Σ(x − x̄)² / n".to_string(),
    })
}

/// Convenience wrapper over a plain slice
pub fn calculate_statistics(values: &[f64]) -> CalcResult<StatisticsResult> {
    calculate(&StatisticsInput {
        values: values.to_vec(),
    })
}

/// Values sharing the highest frequency (> 1), in ascending order.
fn modes(sorted: &[f64]) -> Vec<f64> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for value in sorted {
        *counts.entry(value.to_bits()).or_default() += 1;
    }
    let best = counts.values().copied().max().unwrap_or(0);
    if best < 2 {
        return Vec::new();
    }
    let mut modes: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|v| counts.get(&v.to_bits()) == Some(&best))
        .collect();
    modes.dedup();
    modes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_statistics() {
        let stats = calculate_statistics(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.count, 5);
        assert_eq!(stats.sum, 15.0);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.variance, 2.0);
        assert!((stats.standard_deviation - 2f64.sqrt()).abs() < 1e-4);
        assert_eq!(stats.sample_variance, Some(2.5));
        assert_eq!(stats.range, 4.0);
        assert!(stats.modes.is_empty());
    }

    #[test]
    fn test_even_count_median_and_modes() {
        let stats = calculate_statistics(&[4.0, 1.0, 2.0, 2.0, 4.0, 7.0]).unwrap();
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.modes, vec![2.0, 4.0]);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 7.0);
    }

    #[test]
    fn test_single_value() {
        let stats = calculate_statistics(&[42.0]).unwrap();
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.sample_variance, None);
    }

    #[test]
    fn test_empty_rejected() {
        let err = calculate_statistics(&[]).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(calculate_statistics(&[1.0, f64::INFINITY]).is_err());
    }
}
